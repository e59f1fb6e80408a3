//! Which list a form submission is aimed at.

use super::list_name::{ListName, ListNameError};

/// Display title of the root list.
///
/// Forms carry the title of the list they were rendered for; this exact value
/// selects the root list.
pub const ROOT_LIST_TITLE: &str = "Today's Tasks...";

/// The list an add or delete request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// The unnamed default list, stored as standalone items.
    Root,
    /// A named list document.
    Named(ListName),
}

impl ListTarget {
    /// Resolve a submitted list title.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is not the root title and does not
    /// normalize into a valid [`ListName`].
    pub fn from_title(title: &str) -> Result<Self, ListNameError> {
        if title == ROOT_LIST_TITLE {
            return Ok(Self::Root);
        }
        ListName::normalize(title).map(Self::Named)
    }
}
