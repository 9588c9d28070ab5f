use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Section shown when the fragment is empty or names no registered section.
pub const DEFAULT_SECTION: &str = "dashboard";

/// The fixed route table, in navigation-bar order.
pub const KNOWN_SECTIONS: &[&str] = &[DEFAULT_SECTION, "assets-liabilities", "trends"];

/// Leading marker of a fragment (`#trends`).
pub const FRAGMENT_MARKER: char = '#';

/// Identifier of an application section (`dashboard`, `trends`, ...).
///
/// Any string can be requested; only registry keys resolve to themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn default_section() -> Self {
        Self::new(DEFAULT_SECTION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_SECTION
    }

    /// Fragment form used by navigation links and history (`#<id>`).
    pub fn fragment(&self) -> String {
        format!("{}{}", FRAGMENT_MARKER, self.0)
    }

    /// Parse a raw location fragment.
    ///
    /// Strips one leading `#`; an empty remainder yields the default section.
    /// No validation against the registry happens here.
    pub fn from_fragment(raw: &str) -> Self {
        let stripped = raw.strip_prefix(FRAGMENT_MARKER).unwrap_or(raw);
        if stripped.is_empty() {
            Self::default_section()
        } else {
            Self::new(stripped)
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Visibility marker carried by a section container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    Active,
    Hidden,
}

impl SectionState {
    pub fn is_active(self) -> bool {
        matches!(self, SectionState::Active)
    }
}

impl fmt::Display for SectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionState::Active => write!(f, "active"),
            SectionState::Hidden => write!(f, "hidden"),
        }
    }
}
