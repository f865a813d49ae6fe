//! SOAP response reading
//!
//! A scanning reader over the response body. It resolves the first (or
//! every) occurrence of a named element and hands back its inner XML; text
//! accessors additionally unescape entities. Nested elements with the same
//! name as their parent are not supported — the vendor schema never nests a
//! tag inside itself.

/// Parsed view over a SOAP response body.
#[derive(Debug)]
pub struct SoapDocument {
    body: String,
}

impl SoapDocument {
    pub fn parse(body: String) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The `faultstring` of a `soap:Fault`, if the response carries one.
    pub fn fault(&self) -> Option<String> {
        tag_text(&self.body, "faultstring")
    }

    /// Unescaped, trimmed text of the first `tag` element.
    pub fn text_of(&self, tag: &str) -> Option<String> {
        tag_text(&self.body, tag)
    }

    /// First `tag` element parsed as an integer.
    pub fn int_of(&self, tag: &str) -> Option<i64> {
        tag_int(&self.body, tag)
    }

    /// Inner XML of every `tag` occurrence, in document order.
    pub fn all<'a>(&'a self, tag: &str) -> Vec<&'a str> {
        tag_contents(&self.body, tag)
    }
}

/// Inner XML of the first `tag` element inside `scope`.
pub fn tag_content<'a>(scope: &'a str, tag: &str) -> Option<&'a str> {
    find_element(scope, tag, 0).map(|(start, end, _)| &scope[start..end])
}

/// Inner XML of every `tag` element inside `scope`, in order.
pub fn tag_contents<'a>(scope: &'a str, tag: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some((start, end, after)) = find_element(scope, tag, from) {
        found.push(&scope[start..end]);
        from = after;
    }
    found
}

/// Unescaped, trimmed text of the first `tag` element inside `scope`.
pub fn tag_text(scope: &str, tag: &str) -> Option<String> {
    tag_content(scope, tag).map(|raw| unescape(raw.trim()))
}

/// First `tag` element inside `scope` parsed as an integer.
pub fn tag_int(scope: &str, tag: &str) -> Option<i64> {
    tag_text(scope, tag).and_then(|text| text.parse().ok())
}

/// Locate the next `tag` element at or after byte offset `from`.
///
/// Returns `(content_start, content_end, after_close)`. Handles attributes
/// and self-closing forms; skips tags that merely share a name prefix.
fn find_element(scope: &str, tag: &str, from: usize) -> Option<(usize, usize, usize)> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut search_from = from;

    while search_from < scope.len() {
        let rel = scope[search_from..].find(&open)?;
        let start = search_from + rel;
        let after_name = start + open.len();

        match scope.as_bytes().get(after_name) {
            Some(b'>') => {
                let content_start = after_name + 1;
                let rel_close = scope[content_start..].find(&close)?;
                let content_end = content_start + rel_close;
                return Some((content_start, content_end, content_end + close.len()));
            }
            Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') | Some(b'/') => {
                let gt = after_name + scope[after_name..].find('>')?;
                if scope.as_bytes()[gt - 1] == b'/' {
                    // self-closing: empty content
                    return Some((gt + 1, gt + 1, gt + 1));
                }
                let content_start = gt + 1;
                let rel_close = scope[content_start..].find(&close)?;
                let content_end = content_start + rel_close;
                return Some((content_start, content_end, content_end + close.len()));
            }
            // `<tag` is a prefix of a longer element name; keep scanning
            _ => search_from = after_name,
        }
    }
    None
}

/// Decode the XML entities produced by [`super::envelope::escape`].
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let (replacement, consumed) = if tail.starts_with("&amp;") {
            ('&', 5)
        } else if tail.starts_with("&lt;") {
            ('<', 4)
        } else if tail.starts_with("&gt;") {
            ('>', 4)
        } else if tail.starts_with("&quot;") {
            ('"', 6)
        } else if tail.starts_with("&apos;") {
            ('\'', 6)
        } else {
            ('&', 1)
        };
        out.push(replacement);
        rest = &tail[consumed..];
    }
    out.push_str(rest);
    out
}
