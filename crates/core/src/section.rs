//! Navigational section identifiers.
//!
//! The identifiers double as element ids in the markup and as URL fragment
//! targets, so parsing accepts both `projects` and `#projects`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the page's fixed navigational sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// Element id in the markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// In-page anchor, e.g. `#projects`.
    #[must_use]
    pub const fn fragment(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Experience => "#experience",
            Self::Projects => "#projects",
            Self::Contact => "#contact",
        }
    }

    /// Label shown in the navigation.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Parse an anchor or hash, returning `None` for anything unrecognized.
    #[must_use]
    pub fn from_fragment(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}
