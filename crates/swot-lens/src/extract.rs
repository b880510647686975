//! Visible-text extraction from HTML.

use scraper::Html;

/// Elements whose text content is never shown to a reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line of text when rendered.
const BLOCK_ELEMENTS: &[&str] = &[
    "html", "head", "title", "body", "address", "article", "aside", "blockquote", "dd",
    "details", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "li", "main", "nav", "ol", "option", "p", "pre",
    "section", "summary", "table", "td", "th", "tr", "ul",
];

/// Extract the visible text of an HTML document in document order.
///
/// Text nodes are concatenated as written, so inline markup inside a word
/// (`in<em>nov</em>ative`) does not split it. A space separates text from
/// different block elements. Whitespace runs collapse to a single space.
/// Script, style, noscript and template content is skipped. Malformed markup
/// is parsed best-effort; empty input yields an empty string.
pub fn visible_text(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }

    let document = Html::parse_document(markup);
    let mut raw = String::new();
    let mut last_block = None;

    for node in document.tree.root().descendants() {
        if node.value().as_element().is_some_and(|el| el.name() == "br") {
            raw.push(' ');
            continue;
        }
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let block = node
            .ancestors()
            .find(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|el| BLOCK_ELEMENTS.contains(&el.name()))
            })
            .map(|a| a.id());
        if block != last_block {
            raw.push(' ');
            last_block = block;
        }

        raw.push_str(text);
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
