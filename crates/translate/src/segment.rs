//! Sentence segmentation.
//!
//! Text is split after runs of sentence-ending punctuation (`.`, `!`, `?`).
//! The splitter is deliberately naive -- abbreviations like `U.S.` split
//! too -- because each piece is translated independently and short pieces
//! translate fine. What matters is the round-trip guarantee: every byte of
//! the input lands in exactly one [`Segment`], so concatenating the
//! segments' parts reproduces the input exactly.

use std::sync::LazyLock;

use regex::Regex;

/// One chunk of text: either up to and including a punctuation run, or the
/// trailing punctuation-free remainder.
static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]*[.!?]+|[^.!?]+").expect("valid regex"));

/// A sentence-sized unit plus the whitespace around it.
///
/// `leading + text + trailing`, concatenated across all segments in order,
/// is byte-identical to the input. Only `text` is sent for translation;
/// the whitespace frame is spliced back around whatever comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Whitespace preceding the sentence (usually the gap after the
    /// previous sentence's punctuation).
    pub leading: String,
    /// The translatable core, trimmed. May be empty for whitespace-only
    /// input.
    pub text: String,
    /// Whitespace following the sentence.
    pub trailing: String,
}

/// Split `input` into sentence segments.
pub fn split_sentences(input: &str) -> Vec<Segment> {
    SENTENCE_RE
        .find_iter(input)
        .map(|m| split_whitespace_frame(m.as_str()))
        .collect()
}

/// Separate a raw match into leading whitespace, trimmed core, and
/// trailing whitespace.
fn split_whitespace_frame(raw: &str) -> Segment {
    if raw.trim().is_empty() {
        return Segment {
            leading: raw.to_owned(),
            text: String::new(),
            trailing: String::new(),
        };
    }

    let start = raw.len() - raw.trim_start().len();
    let end = raw.trim_end().len();

    Segment {
        leading: raw[..start].to_owned(),
        text: raw[start..end].to_owned(),
        trailing: raw[end..].to_owned(),
    }
}
