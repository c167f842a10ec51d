#![forbid(unsafe_code)]

//! Entry labels derived from anchor text.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Maximum title length, in grapheme clusters, before truncation.
pub const DEFAULT_TITLE_MAX: usize = 80;

/// Title shown for an anchor without any text.
pub const EMPTY_TITLE: &str = "—";

const ELLIPSIS: char = '…';
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Strip zero-width spaces, collapse whitespace runs, and trim.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars().filter(|&c| c != ZERO_WIDTH_SPACE) {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out
}

/// A short single-line title for `text`.
///
/// Normalizes first; truncates to `max` grapheme clusters plus an ellipsis.
#[must_use]
pub fn title_from_text(text: &str, max: usize) -> String {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return EMPTY_TITLE.to_owned();
    }
    match normalized.grapheme_indices(true).nth(max) {
        Some((cut, _)) => {
            let mut title = normalized[..cut].to_owned();
            title.push(ELLIPSIS);
            title
        }
        None => normalized,
    }
}

/// One row of the navigation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Position in the anchor list.
    pub index: usize,
    /// Possibly truncated title.
    pub title: String,
    /// Full normalized text, shown in the hover tooltip.
    pub full_text: String,
}

impl NavEntry {
    /// Build an entry from raw anchor text.
    #[must_use]
    pub fn from_text(index: usize, raw: &str, title_max: usize) -> Self {
        Self {
            index,
            title: title_from_text(raw, title_max),
            full_text: normalize_text(raw),
        }
    }

    /// Whether the title drops part of the text.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        !self.full_text.is_empty() && self.title != self.full_text
    }

    /// Whether the title is wider than `columns` terminal-style cells.
    ///
    /// A rough stand-in for label overflow on hosts that cannot measure text.
    #[must_use]
    pub fn exceeds_columns(&self, columns: usize) -> bool {
        self.title.width() > columns
    }

    /// Whether hovering this entry warrants a full-text tooltip.
    #[must_use]
    pub fn wants_tooltip(&self, label_overflows: bool) -> bool {
        !self.full_text.is_empty() && (self.is_truncated() || label_overflows)
    }
}
