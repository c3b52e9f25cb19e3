//! Keyed actions offered to the user.
//!
//! Each menu is a fixed, ordered list of variants. The list order is the
//! render order, and each variant carries its own key and label.

/// An action selected by a single-character key.
pub trait KeyedAction: Copy + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    /// Match user input against the keys, ignoring case and surrounding
    /// whitespace.
    fn from_key(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        Self::ALL.iter().copied().find(|action| action.key() == key)
    }
}

/// Main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    View,
    Search,
    Quit,
}

impl KeyedAction for MenuAction {
    const ALL: &'static [Self] = &[Self::Add, Self::View, Self::Search, Self::Quit];

    fn key(self) -> &'static str {
        match self {
            Self::Add => "a",
            Self::View => "v",
            Self::Search => "s",
            Self::Quit => "q",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Add => "Add a logbook entry",
            Self::View => "View previous entries",
            Self::Search => "Search entries for a string",
            Self::Quit => "Quit",
        }
    }
}

/// Actions available while paging through entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Next,
    Delete,
    Quit,
}

impl KeyedAction for EntryAction {
    const ALL: &'static [Self] = &[Self::Next, Self::Delete, Self::Quit];

    fn key(self) -> &'static str {
        match self {
            Self::Next => "n",
            Self::Delete => "d",
            Self::Quit => "q",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Next => "next entry",
            Self::Delete => "delete entry",
            Self::Quit => "return to main menu",
        }
    }
}
