//! Content translation pipeline.
//!
//! Editors author rental content (terms, location descriptions, email
//! templates) in one language; this crate produces the other language
//! versions. The pipeline is deliberately simple:
//!
//! 1. split the text into sentence-sized [`segment::Segment`]s,
//! 2. send each segment to the translation endpoint, one call at a time
//!    with a fixed 100 ms delay between calls,
//! 3. splice the translations back into the original whitespace frame --
//!    or, for HTML, back into the original text nodes so the markup
//!    structure is untouched.
//!
//! A failed segment keeps its original text, so translation degrades to
//! the input instead of failing the request.

pub mod client;
pub mod html;
pub mod segment;
pub mod translator;

pub use client::{TranslateClient, TranslateError};
pub use translator::Translator;
