//! Feature grid: three cards whose layout topology changes at the wide
//! tier, with float/clear image behavior from the medium tier up.

use serde::{Deserialize, Serialize};

use super::StyledBlock;
use crate::breakpoint::Tier;
use crate::content::{FeatureCard, FloatSide, LayoutSlot};
use crate::error::{Error, Result};
use crate::style::{ElementRole, StyleSheet};

/// Expected wide-tier slots by card position: card 0 top-left, card 1
/// spanning both rows on the right, card 2 bottom-left.
const WIDE_TOPOLOGY: [(u32, u32, u32); 3] = [(1, 1, 1), (2, 1, 2), (1, 2, 1)];

/// A card image with its resolved float behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub src: String,
    pub alt: String,
    /// None renders in-flow; floats only activate at tier >= medium
    pub float: Option<FloatSide>,
    /// Whether the image may extend past the card's padding box
    pub overlap: bool,
    /// Reserved column width in rem; None fills the content box
    pub width_rem: Option<f64>,
    /// width/height ratio used to reserve vertical space
    pub aspect_hint: Option<f64>,
}

/// One rendered card with its resolved slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTree {
    pub heading: StyledBlock,
    pub slot: LayoutSlot,
    pub image: Option<ImageBlock>,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
    pub body_font_rem: f64,
    pub pad_rem: f64,
    /// Explicit clear boundary: content after the card's floated image
    /// starts below the image's vertical extent
    pub clear_after: bool,
}

/// Rendered feature grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridTree {
    pub columns: u32,
    pub cards: Vec<CardTree>,
}

/// Render the three feature cards for a tier.
///
/// Below the wide tier all cards stack in a single column in card order.
/// At wide and above the grid switches to the two-column topology and each
/// card's configured slot must match its position, otherwise the content
/// is misconfigured and the render aborts.
pub fn render(tier: Tier, sheet: &StyleSheet, cards: &[FeatureCard; 3]) -> Result<GridTree> {
    let heading_rule = sheet.resolve(ElementRole::CardHeading, tier)?;
    let image_rule = sheet.resolve(ElementRole::CardImage, tier)?;
    let body_rule = sheet.resolve(ElementRole::CardBody, tier)?;

    let stacked = tier < Tier::Wide;
    let floats_active = tier >= Tier::Medium;

    let mut rendered = Vec::with_capacity(cards.len());
    for (i, card) in cards.iter().enumerate() {
        let slot = if stacked {
            let mut slot = LayoutSlot::stacked(i as u32 + 1);
            slot.float_overlap = card.slot.float_overlap && floats_active;
            slot
        } else {
            let (column, row, row_span) = WIDE_TOPOLOGY[i];
            let configured = card.slot;
            if (configured.column, configured.row, configured.row_span) != (column, row, row_span)
            {
                return Err(Error::InvalidSlot(format!(
                    "card {} has slot col {} row {} span {}, expected col {} row {} span {}",
                    i,
                    configured.column,
                    configured.row,
                    configured.row_span,
                    column,
                    row,
                    row_span
                )));
            }
            LayoutSlot {
                column,
                row,
                row_span,
                float_overlap: configured.float_overlap,
            }
        };

        let image = card.image.as_ref().map(|img| {
            let float = if floats_active { img.float } else { None };
            ImageBlock {
                src: img.path.clone(),
                alt: img.alt.clone(),
                float,
                overlap: slot.float_overlap,
                // Floated images take the fixed column width from the rule
                // table; in-flow images fill the card
                width_rem: if float.is_some() {
                    image_rule.image_width_rem
                } else {
                    None
                },
                aspect_hint: image_rule.aspect_hint,
            }
        });

        let clear_after = image.as_ref().is_some_and(|img| img.float.is_some());

        rendered.push(CardTree {
            heading: StyledBlock::new(&card.heading, heading_rule),
            slot,
            image,
            paragraphs: card.paragraphs.clone(),
            bullets: card.bullets.clone(),
            body_font_rem: body_rule.font_rem,
            pad_rem: body_rule.pad_rem,
            clear_after,
        });
    }

    Ok(GridTree {
        columns: if stacked { 1 } else { 2 },
        cards: rendered,
    })
}
