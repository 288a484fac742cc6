//! HTML text-node extraction and rewrite.
//!
//! Rich-text content arrives as an HTML fragment. Translation must change
//! only what the user reads: the element tree, attributes, and nesting all
//! survive untouched, and text inside `<script>`/`<style>` is never sent
//! for translation.
//!
//! The two halves are split so the async pipeline never holds a parsed
//! tree across an await point: [`collect_text_nodes`] pulls the
//! translatable strings out, the caller translates them, and
//! [`replace_text_nodes`] re-parses the same fragment and writes the
//! translations into the corresponding nodes. Both walks visit nodes in
//! identical order, so pairing by index is exact.

use scraper::{Html, Node};

/// Collect the translatable text nodes of an HTML fragment, in walk order.
///
/// Whitespace-only nodes (indentation between tags) and text inside
/// `<script>`/`<style>` are skipped.
pub fn collect_text_nodes(html: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);

    document
        .tree
        .nodes()
        .filter(|node| is_translatable(node.value(), node.parent().map(|p| p.value())))
        .filter_map(|node| node.value().as_text().map(|t| t.to_string()))
        .collect()
}

/// Write `replacements` back into the fragment's translatable text nodes.
///
/// The n-th replacement lands in the n-th translatable node of a fresh
/// parse of `html` -- the same walk [`collect_text_nodes`] performed.
/// Extra replacements are ignored; missing ones leave the original text.
pub fn replace_text_nodes(html: &str, replacements: &[String]) -> String {
    let mut document = Html::parse_fragment(html);

    let ids: Vec<_> = document
        .tree
        .nodes()
        .filter(|node| is_translatable(node.value(), node.parent().map(|p| p.value())))
        .map(|node| node.id())
        .collect();

    for (id, replacement) in ids.into_iter().zip(replacements) {
        if let Some(mut node) = document.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                text.text = replacement.as_str().into();
            }
        }
    }

    document.root_element().inner_html()
}

/// Whether a node is a non-empty text node outside script/style.
fn is_translatable(value: &Node, parent: Option<&Node>) -> bool {
    let Some(text) = value.as_text() else {
        return false;
    };
    if text.trim().is_empty() {
        return false;
    }

    let skipped_parent = parent
        .and_then(|p| p.as_element().map(|e| e.name().to_ascii_lowercase()))
        .is_some_and(|name| name == "script" || name == "style");

    !skipped_parent
}
