//! XML output format.

use std::sync::{Arc, LazyLock};

use super::MarkupFormat;

/// XML escaping: the five predefined entities.
pub struct XmlFormat;

static SHARED: LazyLock<Arc<dyn MarkupFormat>> = LazyLock::new(|| Arc::new(XmlFormat));

impl XmlFormat {
    /// The process-wide XML format instance.
    pub fn shared() -> Arc<dyn MarkupFormat> {
        Arc::clone(&SHARED)
    }
}

impl MarkupFormat for XmlFormat {
    fn name(&self) -> &str {
        "XML"
    }

    fn escape_plain_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&apos;"),
                _ => out.push(c),
            }
        }
        out
    }
}
