//! Paced, fault-tolerant translation orchestration.

use std::time::Duration;

use serde_json::Value;

use crate::client::{TranslateClient, TranslateError};
use crate::html::{collect_text_nodes, replace_text_nodes};
use crate::segment::split_sentences;

/// Fixed delay between successive translation calls. The endpoint
/// rate-limits aggressively; one call per 100 ms stays under it.
const INTER_CALL_DELAY: Duration = Duration::from_millis(100);

/// Translates text and HTML fragments sentence-by-sentence.
///
/// Calls go out sequentially with [`INTER_CALL_DELAY`] between them -- a
/// single pacing stream for the whole job, whether the sentences come from
/// one string or from many HTML text nodes. A sentence whose call fails
/// keeps its original text, so the result is always usable.
pub struct Translator {
    client: TranslateClient,
}

impl Translator {
    pub fn new(client: TranslateClient) -> Self {
        Self { client }
    }

    /// Translate plain text, preserving the original whitespace layout.
    pub async fn translate_text(&self, text: &str, source: &str, target: &str) -> String {
        let mut pacer = Pacer::new();
        self.translate_segments(text, source, target, &mut pacer).await
    }

    /// Translate an HTML fragment, changing only its text nodes.
    pub async fn translate_html(&self, html: &str, source: &str, target: &str) -> String {
        let texts = collect_text_nodes(html);
        if texts.is_empty() {
            return html.to_owned();
        }

        let mut pacer = Pacer::new();
        let mut translated = Vec::with_capacity(texts.len());
        for text in &texts {
            translated.push(self.translate_segments(text, source, target, &mut pacer).await);
        }

        replace_text_nodes(html, &translated)
    }

    /// List the languages the endpoint supports.
    pub async fn languages(&self) -> Result<Value, TranslateError> {
        self.client.languages().await
    }

    /// Translate every sentence of `text`, splicing results back into the
    /// original whitespace frame.
    async fn translate_segments(
        &self,
        text: &str,
        source: &str,
        target: &str,
        pacer: &mut Pacer,
    ) -> String {
        let segments = split_sentences(text);
        let mut out = String::with_capacity(text.len());

        for segment in &segments {
            out.push_str(&segment.leading);
            if !segment.text.is_empty() {
                let translated = self
                    .translate_sentence(&segment.text, source, target, pacer)
                    .await;
                out.push_str(&translated);
            }
            out.push_str(&segment.trailing);
        }

        out
    }

    /// Translate one sentence, falling back to the original on failure.
    async fn translate_sentence(
        &self,
        sentence: &str,
        source: &str,
        target: &str,
        pacer: &mut Pacer,
    ) -> String {
        pacer.pace().await;

        match self.client.translate(sentence, source, target).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(error = %e, "Sentence translation failed, keeping original");
                sentence.to_owned()
            }
        }
    }
}

/// Spaces successive calls [`INTER_CALL_DELAY`] apart. The first call goes
/// out immediately.
struct Pacer {
    first: bool,
}

impl Pacer {
    fn new() -> Self {
        Self { first: true }
    }

    async fn pace(&mut self) {
        if self.first {
            self.first = false;
        } else {
            tokio::time::sleep(INTER_CALL_DELAY).await;
        }
    }
}
