//! Hero section: headline, subtext, CTA, and background media.

use serde::{Deserialize, Serialize};

use super::StyledBlock;
use crate::breakpoint::Tier;
use crate::content::HeroCopy;
use crate::error::Result;
use crate::style::{ElementRole, StyleSheet};

/// How the tier-independent background asset is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaFit {
    /// Natural size, pinned to the top edge
    Top,
    /// Scaled to cover the viewport
    Cover,
    /// Stretched to the full viewport width, height following
    FullWidth,
}

impl MediaFit {
    fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Narrow => MediaFit::Top,
            Tier::Medium => MediaFit::Cover,
            Tier::Wide | Tier::UltraWide => MediaFit::FullWidth,
        }
    }
}

/// Rendered hero section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroTree {
    pub headline: StyledBlock,
    /// Byte offset of the accented headline character, if any
    pub accent_index: Option<usize>,
    pub subtext: StyledBlock,
    pub cta: StyledBlock,
    pub media_path: String,
    pub background_path: String,
    pub background_fit: MediaFit,
}

/// Render the hero for a tier. The headline type scale grows with the
/// tier; the media references themselves never change.
pub fn render(tier: Tier, sheet: &StyleSheet, copy: &HeroCopy) -> Result<HeroTree> {
    let headline_rule = sheet.resolve(ElementRole::Headline, tier)?;
    let subtext_rule = sheet.resolve(ElementRole::Subtext, tier)?;
    let cta_rule = sheet.resolve(ElementRole::CtaButton, tier)?;

    Ok(HeroTree {
        headline: StyledBlock::new(&copy.headline, headline_rule),
        accent_index: copy.accent_index,
        subtext: StyledBlock::new(&copy.subtext, subtext_rule),
        cta: StyledBlock::new(&copy.cta_label, cta_rule),
        media_path: copy.media_path.clone(),
        background_path: copy.background_path.clone(),
        background_fit: MediaFit::for_tier(tier),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageContent;

    #[test]
    fn headline_scale_grows_with_tier() {
        let sheet = StyleSheet::builtin().unwrap();
        let copy = PageContent::default().hero;
        let mut last = 0.0;
        for tier in Tier::ALL {
            let hero = render(tier, &sheet, &copy).unwrap();
            assert!(hero.headline.font_rem >= last);
            last = hero.headline.font_rem;
        }
    }

    #[test]
    fn media_paths_are_tier_independent() {
        let sheet = StyleSheet::builtin().unwrap();
        let copy = PageContent::default().hero;
        let narrow = render(Tier::Narrow, &sheet, &copy).unwrap();
        let ultra = render(Tier::UltraWide, &sheet, &copy).unwrap();
        assert_eq!(narrow.media_path, ultra.media_path);
        assert_eq!(narrow.background_path, ultra.background_path);
        // Only presentation changes
        assert_ne!(narrow.background_fit, ultra.background_fit);
    }
}
