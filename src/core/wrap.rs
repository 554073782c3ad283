//! Line wrapping at the first space past a width threshold.

use crate::config::{ToolsConfig, WrapConfig};

pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 60;
pub const LINE_BREAK: &str = "\n";
pub const HTML_LINE_BREAK: &str = "<br/>";

/// Applies a [`WrapConfig`] to lines of text.
///
/// The algorithm counts characters since the last break; once the count
/// exceeds `max_chars_per_line`, the next ASCII space is replaced by a break.
/// Characters are never dropped or moved, so a line without a space after
/// the threshold runs on unbroken. A width of `0` turns every space into a
/// break.
#[derive(Debug, Clone, Default)]
pub struct Wrapper {
    config: WrapConfig,
}

impl Wrapper {
    pub fn new(config: WrapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WrapConfig {
        &self.config
    }

    pub fn wrap(&self, line: &str) -> String {
        let WrapConfig {
            max_chars_per_line,
            html_safe,
            ref line_break,
            ref html_break,
        } = self.config;
        let break_marker = if html_safe { html_break } else { line_break };

        let mut wrapped = String::with_capacity(line.len());
        let mut count = 0usize;
        let mut breaks = 0usize;

        for c in line.chars() {
            count += 1;

            if count > max_chars_per_line && c == ' ' {
                wrapped.push_str(break_marker);
                count = 0;
                breaks += 1;
            } else if html_safe && c == '\n' {
                // Newlines already in the text are rendered as HTML breaks too
                wrapped.push_str(html_break);
            } else {
                wrapped.push(c);
            }
        }

        tracing::trace!(max_chars_per_line, html_safe, breaks, "wrapped line");
        wrapped
    }
}

impl From<&ToolsConfig> for Wrapper {
    fn from(config: &ToolsConfig) -> Self {
        Self::new(config.wrap.clone())
    }
}

/// Wraps `line` at the default width of 60 characters.
pub fn wrap(line: &str) -> String {
    wrap_with(line, DEFAULT_MAX_CHARS_PER_LINE, false)
}

pub fn wrap_at(line: &str, max_chars_per_line: usize) -> String {
    wrap_with(line, max_chars_per_line, false)
}

/// Wraps `line`, emitting `<br/>` instead of `\n` when `html_safe` is set.
///
/// In HTML mode newlines that were already present are converted as well.
pub fn wrap_with(line: &str, max_chars_per_line: usize, html_safe: bool) -> String {
    Wrapper::new(WrapConfig {
        max_chars_per_line,
        html_safe,
        ..WrapConfig::default()
    })
    .wrap(line)
}

pub fn wrap_html_safe(line: &str) -> String {
    wrap_with(line, DEFAULT_MAX_CHARS_PER_LINE, true)
}

pub fn wrap_html_safe_at(line: &str, max_chars_per_line: usize) -> String {
    wrap_with(line, max_chars_per_line, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "a very long line with many words";

    #[test]
    fn test_wrap_at_breaks_after_threshold() {
        let wrapped = wrap_at(SENTENCE, 10);
        assert_eq!(wrapped, "a very long\nline with many\nwords");
        assert_eq!(wrapped.chars().count(), SENTENCE.chars().count());
    }

    #[test]
    fn test_wrap_html_safe_matches_plain_breaks() {
        let plain = wrap_at(SENTENCE, 10);
        let html = wrap_html_safe_at(SENTENCE, 10);
        assert_eq!(html, "a very long<br/>line with many<br/>words");
        assert_eq!(html, plain.replace('\n', HTML_LINE_BREAK));
    }

    #[test]
    fn test_wrap_default_width() {
        let short = "short enough to stay on one line";
        assert_eq!(wrap(short), short);

        let long = "word ".repeat(20);
        let wrapped = wrap(&long);
        assert_eq!(wrapped.matches('\n').count(), 1);
        assert_eq!(wrapped.find('\n'), Some(64));
        assert_eq!(wrap_html_safe(&long), wrapped.replace('\n', "<br/>"));
    }

    #[test]
    fn test_wrap_without_space_after_threshold() {
        let line = "abcdefghijklmnop qr";
        assert_eq!(wrap_at(line, 3), "abcdefghijklmnop\nqr");
        assert_eq!(wrap_at("abcdefghijklmnop", 3), "abcdefghijklmnop");
    }

    #[test]
    fn test_wrap_zero_width_breaks_every_space() {
        assert_eq!(wrap_at("a b c", 0), "a\nb\nc");
        assert_eq!(wrap_at("a  b", 0), "a\n\nb");
        assert_eq!(wrap_html_safe_at("a b", 0), "a<br/>b");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap(""), "");
        assert_eq!(wrap_html_safe(""), "");
    }

    #[test]
    fn test_html_mode_converts_existing_newlines() {
        assert_eq!(wrap_html_safe("one\ntwo"), "one<br/>two");
        assert_eq!(wrap("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn test_wrapper_custom_markers() {
        let crlf = Wrapper::new(WrapConfig {
            max_chars_per_line: 3,
            line_break: "\r\n".to_string(),
            ..WrapConfig::default()
        });
        assert_eq!(crlf.wrap("ab cd ef"), "ab cd\r\nef");

        let html = Wrapper::new(WrapConfig {
            max_chars_per_line: 3,
            html_safe: true,
            html_break: "<br>".to_string(),
            ..WrapConfig::default()
        });
        assert_eq!(html.wrap("ab cd ef"), "ab cd<br>ef");
    }
}
