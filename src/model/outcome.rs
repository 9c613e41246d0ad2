use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The outcome of a registration attempt.
///
/// Only [`RegisterResult::Valid`] changes the registrar's state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegisterResult {
    /// Accepted; the identifier is now registered.
    Valid,
    /// No candidate was supplied, or its identifier is out of range.
    Invalid,
    /// Age is not a plausible human age.
    InvalidAge,
    /// The candidate is deceased.
    Dead,
    /// The candidate is alive but not yet of voting age.
    Underage,
    /// The candidate is eligible, but their identifier is already registered.
    Duplicated,
}

impl RegisterResult {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl Display for RegisterResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Valid => "registered",
            Self::Invalid => "invalid record",
            Self::InvalidAge => "age out of range",
            Self::Dead => "deceased",
            Self::Underage => "underage",
            Self::Duplicated => "already registered",
        };
        write!(f, "{description}")
    }
}
