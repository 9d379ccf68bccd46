//! Free-text segmentation of admission-requirements text.
//!
//! Pasted requirements arrive in whatever shape the source page used:
//! bullet characters, one-requirement-per-line, leading-hyphen lists, or
//! plain prose. [`segment`] splits such text into ordered, trimmed items
//! using delimiter heuristics; [`Requirements`] wraps the result in the
//! rendering contract (a list is only a list when it has at least two
//! entries).

/// Splits free-form requirements text into ordered, trimmed segments.
///
/// Split points are:
/// - the bullet character `•`, anywhere;
/// - any newline;
/// - a hyphen at the start of a line (optionally preceded by leading
///   whitespace), i.e. a hyphen used as a bullet marker. A hyphen inside a
///   word never splits, so "four-year program" stays whole.
///
/// Every segment is trimmed of surrounding whitespace; segments that are
/// empty after trimming are dropped. Relative order is preserved. The
/// function is deterministic but not idempotent: re-segmenting text that
/// already contains embedded hyphens may split differently.
pub fn segment(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    for line in text.lines() {
        for (i, piece) in line.split('•').enumerate() {
            let mut piece = piece.trim();
            // Only the piece that begins the line can carry a bullet hyphen;
            // after a `•` a leading hyphen is part of the content.
            if i == 0 {
                if let Some(rest) = piece.strip_prefix('-') {
                    piece = rest.trim_start();
                }
            }
            if !piece.is_empty() {
                segments.push(piece.to_string());
            }
        }
    }
    segments
}

/// Admission-requirements text as the presentation layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirements {
    /// No text, or text that is blank after trimming.
    Unavailable,
    /// Segmentation produced fewer than two items: the text is rendered as
    /// a single paragraph (the trimmed original, never a one-item list).
    Paragraph(String),
    /// Two or more segments: rendered as a bullet list.
    Items(Vec<String>),
}

impl Requirements {
    /// Applies the segmentation contract to optional requirements text.
    pub fn parse(text: Option<&str>) -> Self {
        let trimmed = match text {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => return Requirements::Unavailable,
        };
        let segments = segment(Some(trimmed));
        if segments.len() >= 2 {
            Requirements::Items(segments)
        } else {
            Requirements::Paragraph(trimmed.to_string())
        }
    }
}
