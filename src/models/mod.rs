pub mod author;
pub mod book;
pub mod catalog;
pub mod comment;

#[cfg(test)]
pub(crate) mod fixtures;

pub use author::Author;
pub use book::{Book, Trailer};
pub use catalog::Catalog;
pub use comment::Comment;
