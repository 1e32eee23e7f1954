// src/services/links.rs

//! PDF link extraction.
//!
//! Parses page HTML leniently and collects the absolute URLs of every
//! anchor that points at a PDF.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Collect candidate PDF links from page HTML.
///
/// Each href is resolved against the base URL; anchors whose href does
/// not resolve are skipped. A resolved URL qualifies when it contains
/// ".pdf" case-insensitively anywhere in its path or query. Duplicate
/// URLs collapse; iteration order carries no meaning.
pub fn extract_pdf_links(html: &str, base: &Url) -> BTreeSet<String> {
    let document = Html::parse_document(html);
    let mut links = BTreeSet::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        if let Some(href) = anchor.value().attr("href") {
            if let Ok(resolved) = base.join(href) {
                let resolved = resolved.to_string();
                if resolved.to_lowercase().contains(".pdf") {
                    links.insert(resolved);
                }
            }
        }
    }

    links
}
