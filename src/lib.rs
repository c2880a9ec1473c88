//! S1napse landing-page layout core
//!
//! A responsive layout composition model for the S1napse marketing page:
//! given a viewport width, it decides how the navigation bar, hero, and the
//! three-panel feature grid are sized, positioned, and reflowed.
//!
//! The model is deliberately explicit. Widths map to one of four tiers
//! through a contiguous breakpoint table, every (element role, tier) pair
//! has exactly one style rule (validated when the sheet is built, never
//! defaulted), and the feature grid switches topology at the wide tier
//! rather than merely resizing.
//!
//! Rendering is pure and re-entrant: the whole tree is recomputed from the
//! viewport width and the immutable page content, so hosts can re-render on
//! every resize and keep only the latest result. Asset delivery, routing,
//! and the login flow stay with the embedding host; assets are opaque path
//! strings here.
//!
//! # Example
//!
//! ```
//! use synapse_landing::{render_page, PageContent, Tier};
//!
//! # fn main() -> synapse_landing::Result<()> {
//! let content = PageContent::default();
//! let page = render_page(1440.0, &content)?;
//! assert_eq!(page.tier, Tier::Wide);
//! assert_eq!(page.grid.columns, 2);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod breakpoint;
pub mod components;
pub mod content;
pub mod error;
pub mod snapshot;
pub mod style;

pub use breakpoint::{tier_for, BreakpointTable, Tier};
pub use content::{FeatureCard, FloatSide, HeroCopy, LayoutSlot, NavLink, PageContent};
pub use error::{Error, Result};
pub use style::{ElementRole, StyleRule, StyleSheet};

use components::{grid, hero, navbar, GridTree, HeroTree, NavTree};

/// The fully rendered page: NavBar, Hero, and FeatureGrid in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub tier: Tier,
    pub nav: NavTree,
    pub hero: HeroTree,
    pub grid: GridTree,
}

/// Render the whole page for a viewport width.
///
/// Fails with an input error for a negative or non-finite width, and with
/// a configuration error for a defective rule table or card slot; neither
/// is recovered into a fallback render.
pub fn render_page(viewport_width: f64, content: &PageContent) -> Result<Page> {
    content.validate()?;
    let tier = breakpoint::tier_for(viewport_width)?;
    log::debug!("viewport {}px resolved to {:?}", viewport_width, tier);

    let sheet = StyleSheet::builtin()?;
    Ok(Page {
        tier,
        nav: navbar::render(tier, &sheet, content)?,
        hero: hero::render(tier, &sheet, &content.hero)?,
        grid: grid::render(tier, &sheet, &content.cards)?,
    })
}
