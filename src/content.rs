//! Page content records.
//!
//! Content is a presentational snapshot: constructed once at page-assembly
//! time and immutable afterwards. Link targets and asset paths are opaque
//! strings; the core never inspects asset bytes or formats.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A navigation link: label plus opaque target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Hero copy and media references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    /// Byte offset of the single accented character in the headline, if any
    pub accent_index: Option<usize>,
    pub subtext: String,
    pub cta_label: String,
    /// Foreground media (video); same asset at every tier
    pub media_path: String,
    /// Page background; same asset at every tier
    pub background_path: String,
}

/// Which side of the card a floated image sits on. Fixed per card, never
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatSide {
    Left,
    Right,
}

/// An image belonging to a feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    pub path: String,
    pub alt: String,
    pub width_px: u32,
    pub height_px: u32,
    /// None renders the image as an in-flow block
    pub float: Option<FloatSide>,
}

/// Placement of a card within the feature grid's wide-tier topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSlot {
    pub column: u32,
    pub row: u32,
    pub row_span: u32,
    /// Whether the card's image may extend past the card's padding box.
    /// Only honored at tier >= medium; always resolved to false at narrow.
    pub float_overlap: bool,
}

impl LayoutSlot {
    pub const fn new(column: u32, row: u32, row_span: u32, float_overlap: bool) -> Self {
        Self {
            column,
            row,
            row_span,
            float_overlap,
        }
    }

    /// Slot used for every card in the stacked (single-column) regime.
    pub const fn stacked(row: u32) -> Self {
        Self::new(1, row, 1, false)
    }
}

/// One feature card: heading, ordered body paragraphs, optional bullet
/// list, optional image, and its wide-tier layout slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
    pub image: Option<CardImage>,
    pub slot: LayoutSlot,
}

/// Everything the host supplies to render the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub logo_label: String,
    pub nav_links: Vec<NavLink>,
    pub login_label: String,
    pub hero: HeroCopy,
    pub cards: [FeatureCard; 3],
}

impl PageContent {
    /// Check construction-time invariants that do not depend on the tier.
    ///
    /// Float-overlap is only legal on cards that actually carry a floated
    /// image; configuring it anywhere else is a static defect.
    pub fn validate(&self) -> Result<()> {
        for (i, card) in self.cards.iter().enumerate() {
            if card.slot.float_overlap {
                match &card.image {
                    None => {
                        return Err(Error::InvalidSlot(format!(
                            "card {} requests float-overlap but has no image",
                            i
                        )));
                    }
                    Some(img) if img.float.is_none() => {
                        return Err(Error::InvalidSlot(format!(
                            "card {} requests float-overlap on a non-floated image",
                            i
                        )));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

impl Default for PageContent {
    /// The canonical S1napse landing copy.
    fn default() -> Self {
        Self {
            logo_label: "S1".to_string(),
            nav_links: vec![
                NavLink::new("Leaderboards", "#"),
                NavLink::new("Documentation", "#"),
            ],
            login_label: "Login".to_string(),
            hero: HeroCopy {
                headline: "S1napse".to_string(),
                accent_index: Some(1),
                subtext: "Telemetry made simple, open, and smart.".to_string(),
                cta_label: "Download".to_string(),
                media_path: "/assets/header_vid.mp4".to_string(),
                background_path: "/assets/bg_gradient.png".to_string(),
            },
            cards: [
                FeatureCard {
                    heading: "Real-Time Telemetry, Simplified".to_string(),
                    paragraphs: vec![
                        "Watch your data come alive.".to_string(),
                        "Monitor speed, RPM, throttle, tire temps, and more through \
                         responsive, real-time dashboards."
                            .to_string(),
                        "No locked features, no paywalls.".to_string(),
                    ],
                    bullets: vec![],
                    image: Some(CardImage {
                        path: "/assets/realtime-graph.png".to_string(),
                        alt: "Real-time telemetry graph".to_string(),
                        width_px: 920,
                        height_px: 660,
                        float: Some(FloatSide::Right),
                    }),
                    slot: LayoutSlot::new(1, 1, 1, true),
                },
                FeatureCard {
                    heading: "Effortless Data Export".to_string(),
                    paragraphs: vec![
                        "Take full control of your telemetry data with effortless \
                         export options."
                            .to_string(),
                        "Export session files in CSV, JSON, or other popular formats \
                         to analyze, share, or integrate into your own tools."
                            .to_string(),
                    ],
                    bullets: vec![
                        "Visualize laps in your favorite spreadsheet or plotting software"
                            .to_string(),
                        "Feed data into simulation tools".to_string(),
                        "Share your performance with friends or coaches".to_string(),
                    ],
                    image: Some(CardImage {
                        path: "/assets/data-graph.png".to_string(),
                        alt: "Exported telemetry data visualization".to_string(),
                        width_px: 720,
                        height_px: 320,
                        float: None,
                    }),
                    slot: LayoutSlot::new(2, 1, 2, false),
                },
                FeatureCard {
                    heading: "Lap Comparison Made Easy".to_string(),
                    paragraphs: vec![
                        "Compare your laps to spot improvements and fine-tune your \
                         performance."
                            .to_string(),
                    ],
                    bullets: vec![],
                    image: Some(CardImage {
                        path: "/assets/lap-graph.png".to_string(),
                        alt: "Lap comparison chart".to_string(),
                        width_px: 720,
                        height_px: 260,
                        float: Some(FloatSide::Right),
                    }),
                    slot: LayoutSlot::new(1, 2, 1, false),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_validates() {
        PageContent::default().validate().unwrap();
    }

    #[test]
    fn overlap_without_image_is_rejected() {
        let mut content = PageContent::default();
        content.cards[2].image = None;
        content.cards[2].slot.float_overlap = true;
        let err = content.validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn overlap_on_inline_image_is_rejected() {
        let mut content = PageContent::default();
        // Card 1's image is an in-flow block, not a float
        content.cards[1].slot.float_overlap = true;
        assert!(content.validate().is_err());
    }

    #[test]
    fn content_round_trips_through_json() {
        let content = PageContent::default();
        let json = serde_json::to_string(&content).unwrap();
        let back: PageContent = serde_json::from_str(&json).unwrap();
        assert_eq!(content, back);
    }
}
