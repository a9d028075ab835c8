/// Return the first `Some` of an ordered list of optional sources.
///
/// Keeps the fallback chains (`published_at` then `created_at`, API name
/// then synthesized name) in one place instead of scattering
/// null-coalescing through the normalizer.
pub fn first_present<T>(candidates: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    candidates.into_iter().flatten().next()
}

/// Text processing utilities for item summaries
pub mod text {
    /// Extract clean text content from HTML: drop tags, collapse whitespace.
    pub fn strip_html(html: &str) -> String {
        html.chars()
            .fold((String::new(), false), |(mut text, in_tag), c| match c {
                '<' => (text, true),
                '>' => {
                    // Tag boundaries act as word separators so "<p>a</p><p>b</p>"
                    // does not collapse into "ab".
                    text.push(' ');
                    (text, false)
                }
                _ if !in_tag => {
                    text.push(c);
                    (text, in_tag)
                }
                _ => (text, in_tag),
            })
            .0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decode the standard entities the markdown renderer emits, so a
    /// stripped summary reads as plain text instead of showing `&amp;`.
    /// `&amp;` goes last; decoding it first would let `&amp;lt;` collapse
    /// twice.
    pub fn decode_entities(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    /// Truncate text to at most `max_chars` characters, appending an
    /// ellipsis when anything was cut. Operates on characters, not bytes,
    /// so multi-byte content never splits mid-codepoint.
    pub fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated.trim_end())
    }
}

/// XML escaping helpers for the feed serializer
pub mod xml {
    /// Escape text for use in XML element content or attribute values.
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Wrap text in a CDATA section. An embedded `]]>` would terminate the
    /// section early, so it is split across two adjacent sections.
    pub fn cdata(text: &str) -> String {
        format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
    }
}
