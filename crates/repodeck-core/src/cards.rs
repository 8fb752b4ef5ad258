//! Insight-card construction.
//!
//! The backend returns insights as a single markdown document whose top-level
//! `## ` headings delimit cards. Headings usually carry an ordinal prefix the
//! model was prompted with ("## 1. Overview", "## SECTION 2: Tech Stack");
//! those are stripped for display. Cards are rebuilt wholesale on every new
//! response.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// One carousel card, in source order.
///
/// `index` is the card's logical index: its position in the original
/// sequence, stable across any later display rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightCard {
    pub index: usize,
    pub heading: String,
    /// Raw markdown body; rendered to HTML at display time.
    pub body: String,
}

/// Prefix forms stripped from headings before display. Extend this list to
/// tolerate a new backend numbering style.
static HEADING_PREFIXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?i)^section\s+\d+[.:]\s*", r"^\d+[.:]\s*"]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid heading prefix pattern"))
        .collect()
});

fn strip_heading_prefix(heading: &str) -> String {
    for pattern in HEADING_PREFIXES.iter() {
        if let Some(matched) = pattern.find(heading) {
            return heading[matched.end()..].trim().to_string();
        }
    }
    heading.trim().to_string()
}

/// Split insights text into cards on top-level `## ` headings.
///
/// Text before the first heading is ignored; a trailing heading with no
/// following block yields an empty body. Returns an empty vec when no
/// headings are present, in which case the carousel stays hidden.
pub fn split_insights(text: &str) -> Vec<InsightCard> {
    let mut cards: Vec<InsightCard> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("## ") {
            if let Some((heading, body)) = current.take() {
                cards.push(finish_card(cards.len(), heading, &body));
            }
            current = Some((strip_heading_prefix(rest.trim()), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some((heading, body)) = current.take() {
        cards.push(finish_card(cards.len(), heading, &body));
    }

    debug!(cards = cards.len(), "split insights text into cards");
    cards
}

fn finish_card(index: usize, heading: String, body_lines: &[&str]) -> InsightCard {
    InsightCard {
        index,
        heading,
        body: body_lines.join("\n").trim().to_string(),
    }
}
