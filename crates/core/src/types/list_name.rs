//! List name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ListName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListNameError {
    /// The input is empty or whitespace.
    #[error("list name cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("list name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The normalized name of a named list.
///
/// List names double as URL keys, so every casing of a name must resolve to
/// the same list. Parsing trims the input, upper-cases the first character
/// and lower-cases the rest.
///
/// ## Examples
///
/// ```
/// use todolist_core::ListName;
///
/// assert_eq!(ListName::normalize("work").unwrap().as_str(), "Work");
/// assert_eq!(ListName::normalize("WORK").unwrap().as_str(), "Work");
/// assert_eq!(ListName::normalize("my LIST").unwrap().as_str(), "My list");
/// assert!(ListName::normalize("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct ListName(String);

impl ListName {
    /// Maximum length of a list name, in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Normalize raw input (a path segment or form field) into a `ListName`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn normalize(raw: &str) -> Result<Self, ListNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ListNameError::Empty);
        }

        // Only the first char of an upper-case expansion stays upper case
        // ("ß" gives "Ss", not "SS"), so normalizing twice is a no-op.
        let mut chars = trimmed.chars();
        let mut normalized = String::with_capacity(trimmed.len());
        if let Some(first) = chars.next() {
            let mut upper = first.to_uppercase();
            normalized.extend(upper.next());
            normalized.push_str(&upper.collect::<String>().to_lowercase());
        }
        normalized.push_str(&chars.as_str().to_lowercase());

        // Case mapping can add chars, so the limit applies to the result.
        if normalized.chars().count() > Self::MAX_LENGTH {
            return Err(ListNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ListName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ListName {
    type Err = ListNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl TryFrom<String> for ListName {
    type Error = ListNameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::normalize(&raw)
    }
}

impl From<ListName> for String {
    fn from(name: ListName) -> Self {
        name.0
    }
}

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
