//! Session-scoped read-later bookmarks.
//!
//! A [`BookmarkSet`] is an ordered list of post identifiers with unique
//! membership. It serialises as a plain JSON array of integers so the session
//! value stays stable across releases.

use serde::{Deserialize, Serialize};

use super::PostId;

/// Result of [`BookmarkSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Ordered, duplicate-free set of bookmarked post identifiers.
///
/// # Examples
/// ```
/// use blog::domain::{BookmarkSet, PostId, ToggleOutcome};
///
/// let mut bookmarks = BookmarkSet::default();
/// assert_eq!(bookmarks.toggle(PostId::new(4)), ToggleOutcome::Added);
/// assert!(bookmarks.contains(PostId::new(4)));
/// assert_eq!(bookmarks.toggle(PostId::new(4)), ToggleOutcome::Removed);
/// assert!(bookmarks.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PostId>", into = "Vec<PostId>")]
pub struct BookmarkSet(Vec<PostId>);

impl BookmarkSet {
    /// Build a set from stored identifiers; later duplicates are dropped.
    pub fn from_ids(ids: impl IntoIterator<Item = PostId>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(id) {
                set.0.push(id);
            }
        }
        set
    }

    /// Append `id` when absent, otherwise remove it.
    pub fn toggle(&mut self, id: PostId) -> ToggleOutcome {
        if let Some(position) = self.0.iter().position(|stored| *stored == id) {
            self.0.remove(position);
            ToggleOutcome::Removed
        } else {
            self.0.push(id);
            ToggleOutcome::Added
        }
    }

    #[must_use]
    pub fn contains(&self, id: PostId) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Identifiers in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[PostId] {
        &self.0
    }
}

impl From<Vec<PostId>> for BookmarkSet {
    fn from(value: Vec<PostId>) -> Self {
        Self::from_ids(value)
    }
}

impl From<BookmarkSet> for Vec<PostId> {
    fn from(value: BookmarkSet) -> Self {
        value.0
    }
}
