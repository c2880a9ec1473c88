//! Navigation bar: logo, link list, and the login call-to-action.

use serde::{Deserialize, Serialize};

use super::StyledBlock;
use crate::breakpoint::Tier;
use crate::content::PageContent;
use crate::error::Result;
use crate::style::{ElementRole, StyleSheet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLinkItem {
    pub label: String,
    pub href: String,
    pub font_rem: f64,
}

/// Rendered navigation bar.
///
/// `links` is `None` below the medium tier; the logo and CTA always render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavTree {
    pub logo: StyledBlock,
    pub links: Option<Vec<NavLinkItem>>,
    pub cta: StyledBlock,
}

/// Render the nav bar for a tier. Pure; propagates resolver errors.
pub fn render(tier: Tier, sheet: &StyleSheet, content: &PageContent) -> Result<NavTree> {
    let logo_rule = sheet.resolve(ElementRole::Logo, tier)?;
    let links_rule = sheet.resolve(ElementRole::NavLinkList, tier)?;
    let cta_rule = sheet.resolve(ElementRole::CtaButton, tier)?;

    // Link list visibility is a direct function of tier, carried by the
    // rule table rather than component-local state.
    let links = if links_rule.visible {
        Some(
            content
                .nav_links
                .iter()
                .map(|l| NavLinkItem {
                    label: l.label.clone(),
                    href: l.href.clone(),
                    font_rem: links_rule.font_rem,
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(NavTree {
        logo: StyledBlock::new(&content.logo_label, logo_rule),
        links,
        cta: StyledBlock::new(&content.login_label, cta_rule),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (StyleSheet, PageContent) {
        (StyleSheet::builtin().unwrap(), PageContent::default())
    }

    #[test]
    fn link_list_hidden_on_narrow() {
        let (sheet, content) = fixture();
        let nav = render(Tier::Narrow, &sheet, &content).unwrap();
        assert!(nav.links.is_none());
        assert_eq!(nav.cta.text, "Login");
    }

    #[test]
    fn link_list_present_from_medium_up() {
        let (sheet, content) = fixture();
        for tier in [Tier::Medium, Tier::Wide, Tier::UltraWide] {
            let nav = render(tier, &sheet, &content).unwrap();
            let links = nav.links.expect("links should render");
            assert_eq!(links.len(), 2);
            assert_eq!(links[0].label, "Leaderboards");
        }
    }
}
