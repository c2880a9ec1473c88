//! Deterministic text snapshots of rendered pages.
//!
//! Used by the CLI for quick inspection and by the golden tests, which
//! compare the sha256 digest of the snapshot text against a stored value.

use sha2::{Digest, Sha256};
use std::fmt::Write;

use crate::components::{CardTree, NavTree};
use crate::Page;

/// A textual snapshot of a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSnapshot {
    /// Headline of the page
    pub title: String,
    /// Line-oriented rendering of the whole tree
    pub text: String,
}

/// Render a page into a deterministic plain-text outline.
pub fn text_snapshot(page: &Page) -> TextSnapshot {
    let mut out = String::new();
    let _ = writeln!(out, "tier: {:?}", page.tier);
    write_nav(&mut out, &page.nav);

    let _ = writeln!(
        out,
        "hero: \"{}\" {}rem / \"{}\" / [{}] bg {} fit {:?}",
        page.hero.headline.text,
        page.hero.headline.font_rem,
        page.hero.subtext.text,
        page.hero.cta.text,
        page.hero.background_path,
        page.hero.background_fit,
    );
    let _ = writeln!(out, "hero media: {}", page.hero.media_path);

    let _ = writeln!(out, "grid: {} column(s)", page.grid.columns);
    for card in &page.grid.cards {
        write_card(&mut out, card);
    }

    TextSnapshot {
        title: page.hero.headline.text.clone(),
        text: out,
    }
}

/// Hex-encoded sha256 digest of the page's text snapshot.
pub fn digest(page: &Page) -> String {
    let snap = text_snapshot(page);
    let mut hasher = Sha256::new();
    hasher.update(snap.text.as_bytes());
    hex::encode(hasher.finalize())
}

fn write_nav(out: &mut String, nav: &NavTree) {
    let links = match &nav.links {
        Some(links) => links
            .iter()
            .map(|l| l.label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        None => "(hidden)".to_string(),
    };
    let _ = writeln!(
        out,
        "nav: logo \"{}\" {}rem | links {} | cta [{}]",
        nav.logo.text, nav.logo.font_rem, links, nav.cta.text
    );
}

fn write_card(out: &mut String, card: &CardTree) {
    let _ = writeln!(
        out,
        "card \"{}\" @ col {} row {} span {}",
        card.heading.text, card.slot.column, card.slot.row, card.slot.row_span
    );
    if let Some(img) = &card.image {
        let _ = writeln!(
            out,
            "  image {} float {:?} overlap {} width {:?}",
            img.src, img.float, img.overlap, img.width_rem
        );
    }
    for p in &card.paragraphs {
        let _ = writeln!(out, "  p: {}", p);
    }
    for b in &card.bullets {
        let _ = writeln!(out, "  * {}", b);
    }
    if card.clear_after {
        let _ = writeln!(out, "  clear");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageContent;
    use crate::render_page;

    #[test]
    fn snapshot_is_deterministic() {
        let content = PageContent::default();
        let a = render_page(1440.0, &content).unwrap();
        let b = render_page(1440.0, &content).unwrap();
        assert_eq!(text_snapshot(&a), text_snapshot(&b));
        assert_eq!(digest(&a), digest(&b));
    }

    #[test]
    fn snapshot_reflects_tier() {
        let content = PageContent::default();
        let narrow = render_page(500.0, &content).unwrap();
        let wide = render_page(1440.0, &content).unwrap();
        assert!(text_snapshot(&narrow).text.contains("links (hidden)"));
        assert!(text_snapshot(&wide).text.contains("span 2"));
        assert_ne!(digest(&narrow), digest(&wide));
    }
}
