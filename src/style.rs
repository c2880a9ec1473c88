//! Element roles, style rules, and the per-tier style resolver.
//!
//! Each tier carries a complete, independently specified rule set: there is
//! no interpolation between tiers and no cascade. A missing or duplicated
//! (role, tier) pair is a configuration error raised when the sheet is
//! built, never a silent fallback at render time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::breakpoint::Tier;
use crate::error::{Error, Result};

/// Stable identifier for a visually distinct role on the page.
///
/// Roles are shared between components and the resolver; they do not encode
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRole {
    Logo,
    NavLinkList,
    CtaButton,
    Headline,
    Subtext,
    CardHeading,
    CardImage,
    CardBody,
}

impl ElementRole {
    /// Every role used by the page components. The resolver's
    /// exhaustiveness check runs over this list crossed with `Tier::ALL`.
    pub const ALL: [ElementRole; 8] = [
        ElementRole::Logo,
        ElementRole::NavLinkList,
        ElementRole::CtaButton,
        ElementRole::Headline,
        ElementRole::Subtext,
        ElementRole::CardHeading,
        ElementRole::CardImage,
        ElementRole::CardBody,
    ];
}

/// Concrete style attributes for one (role, tier) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    /// Type scale in rem (0.0 for non-text roles)
    pub font_rem: f64,
    /// Padding scale in rem
    pub pad_rem: f64,
    /// Whether the element renders at all at this tier
    pub visible: bool,
    /// Width/height hint used to reserve layout space for images
    pub aspect_hint: Option<f64>,
    /// Image column width in rem; None means fill the content box
    pub image_width_rem: Option<f64>,
}

impl StyleRule {
    /// Rule for a text role: type scale + padding, always visible.
    pub const fn text(font_rem: f64, pad_rem: f64) -> Self {
        Self {
            font_rem,
            pad_rem,
            visible: true,
            aspect_hint: None,
            image_width_rem: None,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            font_rem: 0.0,
            pad_rem: 0.0,
            visible: false,
            aspect_hint: None,
            image_width_rem: None,
        }
    }

    pub const fn image(image_width_rem: Option<f64>, aspect_hint: f64) -> Self {
        Self {
            font_rem: 0.0,
            pad_rem: 0.0,
            visible: true,
            aspect_hint: Some(aspect_hint),
            image_width_rem,
        }
    }
}

/// The style resolver: a validated mapping from (role, tier) to a rule.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    rules: HashMap<(ElementRole, Tier), StyleRule>,
}

impl StyleSheet {
    /// Build a sheet from explicit per-pair rules.
    ///
    /// Fails with `DuplicateRule` if the same (role, tier) pair appears
    /// twice, and with `MissingRule` if any pair of the full role x tier
    /// cross product is absent.
    pub fn new(rules: Vec<(ElementRole, Tier, StyleRule)>) -> Result<Self> {
        let mut map = HashMap::with_capacity(rules.len());
        for (role, tier, rule) in rules {
            if map.insert((role, tier), rule).is_some() {
                return Err(Error::DuplicateRule { role, tier });
            }
        }
        for role in ElementRole::ALL {
            for tier in Tier::ALL {
                if !map.contains_key(&(role, tier)) {
                    return Err(Error::MissingRule { role, tier });
                }
            }
        }
        Ok(Self { rules: map })
    }

    /// The sheet used by the landing page, covering all roles at all tiers.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_rules())
    }

    /// Look up the rule for a (role, tier) pair.
    pub fn resolve(&self, role: ElementRole, tier: Tier) -> Result<&StyleRule> {
        self.rules
            .get(&(role, tier))
            .ok_or(Error::MissingRule { role, tier })
    }
}

/// The landing page's rule table.
///
/// Type-scale values follow the page's design ladder: the headline steps
/// 3.0 / 4.5 / 6.0 / 8.0 rem through the tiers, nav links and buttons hold
/// at 1.25 rem, card headings at 1.875 rem. Card images fill the card on
/// narrow viewports and take a fixed column of 15 / 18 / 20 rem above that.
fn builtin_rules() -> Vec<(ElementRole, Tier, StyleRule)> {
    use ElementRole::*;
    use Tier::*;

    let mut rules = Vec::with_capacity(32);

    rules.push((Logo, Narrow, StyleRule::text(3.0, 1.0)));
    for tier in [Medium, Wide, UltraWide] {
        rules.push((Logo, tier, StyleRule::text(3.0, 2.0)));
    }

    // Link list is dropped entirely below the medium tier
    rules.push((NavLinkList, Narrow, StyleRule::hidden()));
    for tier in [Medium, Wide, UltraWide] {
        rules.push((NavLinkList, tier, StyleRule::text(1.25, 2.5)));
    }

    for tier in Tier::ALL {
        rules.push((CtaButton, tier, StyleRule::text(1.25, 1.5)));
    }

    rules.push((Headline, Narrow, StyleRule::text(3.0, 0.5)));
    rules.push((Headline, Medium, StyleRule::text(4.5, 0.5)));
    rules.push((Headline, Wide, StyleRule::text(6.0, 0.75)));
    rules.push((Headline, UltraWide, StyleRule::text(8.0, 0.75)));

    for tier in Tier::ALL {
        rules.push((Subtext, tier, StyleRule::text(1.125, 0.5)));
        rules.push((CardHeading, tier, StyleRule::text(1.875, 1.5)));
        rules.push((CardBody, tier, StyleRule::text(1.0, 1.5)));
    }

    rules.push((CardImage, Narrow, StyleRule::image(None, 1.4)));
    rules.push((CardImage, Medium, StyleRule::image(Some(15.0), 1.4)));
    rules.push((CardImage, Wide, StyleRule::image(Some(18.0), 1.4)));
    rules.push((CardImage, UltraWide, StyleRule::image(Some(20.0), 1.4)));

    rules
}
