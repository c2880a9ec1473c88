//! Error types for the layout core

use thiserror::Error;

use crate::breakpoint::Tier;
use crate::style::ElementRole;

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving styles or composing the page
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Viewport width is negative or not a finite number
    #[error("Invalid viewport width: {0}")]
    InvalidWidth(f64),

    /// No style rule defined for a (role, tier) pair
    #[error("No style rule for {role:?} at {tier:?}")]
    MissingRule { role: ElementRole, tier: Tier },

    /// More than one style rule defined for the same (role, tier) pair
    #[error("Duplicate style rule for {role:?} at {tier:?}")]
    DuplicateRule { role: ElementRole, tier: Tier },

    /// A feature card's layout slot does not match the grid topology
    #[error("Invalid layout slot: {0}")]
    InvalidSlot(String),
}

impl Error {
    /// Whether this error is a static defect in the rule tables or content
    /// (as opposed to bad caller input). Configuration errors should be
    /// caught by tests before deployment, not at first render.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::InvalidWidth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_split() {
        assert!(!Error::InvalidWidth(-1.0).is_configuration());
        assert!(Error::InvalidSlot("x".to_string()).is_configuration());
        assert!(Error::MissingRule {
            role: ElementRole::Logo,
            tier: Tier::Narrow,
        }
        .is_configuration());
    }
}
