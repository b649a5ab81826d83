//! Non-error results of address book operations.

/// Result of adding a phone to a record or a record to the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The value was stored.
    Added,
    /// An equal value was already stored; nothing changed.
    AlreadyExists,
}

impl AddOutcome {
    /// Whether the add stored something.
    pub fn is_added(self) -> bool {
        self == Self::Added
    }
}

/// Result of editing a phone that exists on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The old phone was replaced in place.
    Updated,
    /// The new phone equals the old one or is already stored; nothing changed.
    Conflict,
}

impl EditOutcome {
    /// Whether the edit changed the record.
    pub fn is_updated(self) -> bool {
        self == Self::Updated
    }
}
