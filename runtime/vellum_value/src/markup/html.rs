//! HTML output format.

use std::sync::{Arc, LazyLock};

use super::MarkupFormat;

/// HTML escaping: `&`, `<`, `>`, `"`, and `'` become character references.
pub struct HtmlFormat;

static SHARED: LazyLock<Arc<dyn MarkupFormat>> = LazyLock::new(|| Arc::new(HtmlFormat));

impl HtmlFormat {
    /// The process-wide HTML format instance.
    ///
    /// Format identity is pointer identity, so all HTML markup values must
    /// be tagged with this one instance for the same-format fast path to
    /// apply.
    pub fn shared() -> Arc<dyn MarkupFormat> {
        Arc::clone(&SHARED)
    }
}

impl MarkupFormat for HtmlFormat {
    fn name(&self) -> &str {
        "HTML"
    }

    fn escape_plain_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }
}
