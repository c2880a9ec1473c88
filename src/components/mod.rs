//! Page components: NavBar, Hero, and the feature grid.
//!
//! Each component is a pure function of the tier, the style sheet, and its
//! content slice. Rendering has no side effects and no shared mutable
//! state, so a resize can simply re-render the whole tree.

pub mod grid;
pub mod hero;
pub mod navbar;

use serde::{Deserialize, Serialize};

pub use grid::{CardTree, GridTree, ImageBlock};
pub use hero::{HeroTree, MediaFit};
pub use navbar::{NavLinkItem, NavTree};

/// A piece of text with its resolved type scale and padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledBlock {
    pub text: String,
    pub font_rem: f64,
    pub pad_rem: f64,
}

impl StyledBlock {
    pub fn new(text: &str, rule: &crate::style::StyleRule) -> Self {
        Self {
            text: text.to_string(),
            font_rem: rule.font_rem,
            pad_rem: rule.pad_rem,
        }
    }
}
