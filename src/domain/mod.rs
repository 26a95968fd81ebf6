//! Domain identifiers for catalog entities.
//!
//! Identifiers are opaque strings assigned by the generation service. The
//! newtypes below keep book, author and trailer ids from being mixed up at
//! call sites while staying plain strings on the wire.

pub mod events;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the raw identifier as assigned by the generation service.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a [`Book`](crate::models::Book), unique within a catalog.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookstream::domain::BookId;
    ///
    /// let id = BookId::new("b1");
    /// assert_eq!(id.as_str(), "b1");
    /// assert_eq!(id.to_string(), "b1");
    /// assert_eq!(id, "b1");
    /// ```
    BookId
);

string_id!(
    /// Identifier of an [`Author`](crate::models::Author), unique within a catalog.
    AuthorId
);

string_id!(
    /// Identifier of a [`Trailer`](crate::models::Trailer).
    ///
    /// Comments reference trailers through this id.
    TrailerId
);

/// Kind of entity a navigation target refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Book,
    Author,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("Book"),
            Self::Author => f.write_str("Author"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_conversions() {
        let id = BookId::new("b1");
        assert_eq!(id.as_str(), "b1");
        assert_eq!(id.to_string(), "b1");
        assert_eq!(BookId::from("b1"), id);
        assert_eq!(BookId::from(String::from("b1")), id);
    }

    #[test]
    fn ids_compare_against_plain_strings() {
        let id = AuthorId::new("a1");
        assert!(id == "a1");
        assert!(id != "a2");
    }

    #[test]
    fn empty_id_is_representable() {
        let id = TrailerId::default();
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn id_serialization_is_transparent() {
        let id = BookId::new("b42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"b42\"");
        let deserialized: BookId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn entity_kind_display() {
        assert_eq!(EntityKind::Book.to_string(), "Book");
        assert_eq!(EntityKind::Author.to_string(), "Author");
    }
}
