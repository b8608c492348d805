//! Console formatting for the CLI.

use colored::*;

/// Width of the separator rule between run phases.
const RULE_WIDTH: usize = 50;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Separator rule.
    pub fn rule(&self) -> String {
        "-".repeat(RULE_WIDTH)
    }

    /// Announce the input being processed.
    pub fn processing(&self, input: &str) -> String {
        self.info(&format!("Processing: {}", input))
    }

    /// Summarize how many regions were extracted.
    pub fn extraction_summary(&self, extracted: usize, scanned: usize) -> String {
        self.info(&format!(
            "Extracted {} data types from {} script tags",
            extracted, scanned
        ))
    }

    /// Report a written file.
    pub fn saved(&self, path: &str) -> String {
        self.success(&format!("Saved: {}", path))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("boom"), "✗ boom");
    }

    #[test]
    fn test_colorize_enabled() {
        colored::control::set_override(true);
        let formatter = Formatter::new(true);
        let msg = formatter.success("test");
        colored::control::unset_override();
        assert!(msg.contains("✓ test"));
        assert_ne!(msg, "✓ test");
    }

    #[test]
    fn test_summary_and_rule() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.rule().len(), 50);
        assert_eq!(
            formatter.extraction_summary(4, 6),
            "ℹ Extracted 4 data types from 6 script tags"
        );
        assert_eq!(formatter.processing("trace.html"), "ℹ Processing: trace.html");
    }
}
