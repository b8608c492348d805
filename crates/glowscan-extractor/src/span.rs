//! Locate the content of `<script type="text/json" id="...">` regions
//!
//! Trace exports are not always well formed: regions may be left unclosed, so a
//! region runs until the next `<script`, the closing `</body>`, or the end of
//! the document, whichever comes first.

use regex::Regex;
use std::sync::LazyLock;

/// Start of whatever follows a JSON region
static REGION_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<script|</body>").expect("valid regex"));

/// Closing tag left inside a properly terminated region
static CLOSING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</script\s*>").expect("valid regex"));

/// Outcome of looking up one marker in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSpan<'a> {
    /// Trimmed, non-empty region content
    Content(&'a str),
    /// Opening tag present but nothing inside it
    Empty,
    /// No opening tag for this marker
    Missing,
}

/// Finds the region for a single marker identifier
#[derive(Debug, Clone)]
pub struct ScriptLocator {
    script_id: String,
    opening: Regex,
}

impl ScriptLocator {
    /// Compile the opening-tag pattern for `script_id`
    pub fn new(script_id: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r#"(?i)<script\s+type="text/json"\s+id="{}"[^>]*>"#,
            regex::escape(script_id)
        );
        Ok(Self {
            script_id: script_id.to_string(),
            opening: Regex::new(&pattern)?,
        })
    }

    /// Marker identifier this locator searches for
    pub fn script_id(&self) -> &str {
        &self.script_id
    }

    /// Find the region content in `html`
    pub fn locate<'a>(&self, html: &'a str) -> ScriptSpan<'a> {
        let Some(opening) = self.opening.find(html) else {
            return ScriptSpan::Missing;
        };

        let rest = &html[opening.end()..];
        let end = REGION_END.find(rest).map_or(rest.len(), |m| m.start());
        let mut content = rest[..end].trim();

        if let Some(close) = CLOSING_TAG.find(content) {
            content = content[..close.start()].trim();
        }

        if content.is_empty() {
            ScriptSpan::Empty
        } else {
            ScriptSpan::Content(content)
        }
    }
}
