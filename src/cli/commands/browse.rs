//! Interactive browse command handler

use std::io::Write;
use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::render::render_screen;
use crate::services::{Screen, SessionHandle};

const HELP: &str = "\
Commands:
  refresh            Generate a new catalog (aliases: enter, r)
  home               Back to the dashboard (aliases: back, h)
  book <id>          Open a book's detail page
  author [<id>]      Open an author profile; without an id, the author of the current book
  help               Show this help
  quit               Exit (alias: q)";

/// A line typed at the browse prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Refresh,
    Home,
    Book(String),
    Author(Option<String>),
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err("Empty command. Type `help` for a list of commands.".to_string());
        };
        let argument = parts.next().map(str::to_string);

        match command.to_ascii_lowercase().as_str() {
            "refresh" | "enter" | "r" => Ok(Self::Refresh),
            "home" | "back" | "h" => Ok(Self::Home),
            "book" | "b" => argument
                .map(Self::Book)
                .ok_or_else(|| "Usage: book <id>".to_string()),
            "author" | "a" => Ok(Self::Author(argument)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!(
                "Unknown command: {other}. Type `help` for a list of commands."
            )),
        }
    }
}

pub async fn cmd_browse(handle: &SessionHandle) -> anyhow::Result<()> {
    print_current(handle).await;
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            prompt()?;
            continue;
        }

        match line.parse::<BrowseCommand>() {
            Err(message) => println!("{message}"),
            Ok(BrowseCommand::Quit) => break,
            Ok(BrowseCommand::Help) => println!("{HELP}"),
            Ok(BrowseCommand::Refresh) => {
                if handle.is_loading().await {
                    println!("A refresh is already running.");
                } else {
                    println!("{}", render_screen(&Screen::Loading));
                    handle.refresh().await;
                    print_current(handle).await;
                }
            }
            Ok(BrowseCommand::Home) => {
                handle.go_home().await;
                print_current(handle).await;
            }
            Ok(BrowseCommand::Book(id)) => {
                handle.go_to_book(id).await;
                print_current(handle).await;
            }
            Ok(BrowseCommand::Author(Some(id))) => {
                handle.go_to_author(id).await;
                print_current(handle).await;
            }
            Ok(BrowseCommand::Author(None)) => {
                if handle.open_book_author().await.is_some() {
                    print_current(handle).await;
                } else {
                    println!("Open a book first, or use: author <id>");
                }
            }
        }

        prompt()?;
    }

    Ok(())
}

async fn print_current(handle: &SessionHandle) {
    let session = handle.read().await;
    println!("{}", render_screen(&session.screen()));
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
