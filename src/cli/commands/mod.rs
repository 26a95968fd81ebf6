mod browse;
mod init_config;
mod show;

pub use browse::{BrowseCommand, cmd_browse};
pub use init_config::cmd_init_config;
pub use show::cmd_show;
