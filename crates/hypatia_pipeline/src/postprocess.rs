//! Textual normalization of raw model output.
//!
//! Pure string transformation with no failure modes. Step order matters:
//! fence extraction, then import enforcement, then color rewriting, then
//! LaTeX escape repair inside `MathTex` literals.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use strum::IntoEnumIterator;

/// The import line every candidate script must start with.
pub const REQUIRED_IMPORT: &str = "from manim import *";

/// Closed set of named color tokens the model tends to emit that are not
/// safe across Manim versions, each with its literal hex substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum ColorToken {
    /// `CYAN`
    Cyan,
    /// `ORANGE`
    Orange,
    /// `PURPLE`
    Purple,
    /// `PINK`
    Pink,
    /// `LIGHT_GREEN`
    LightGreen,
    /// `DARK_BLUE`
    DarkBlue,
    /// `LIGHT_BLUE`
    LightBlue,
}

impl ColorToken {
    /// The token as it appears in generated source.
    pub fn token(&self) -> &'static str {
        match self {
            ColorToken::Cyan => "CYAN",
            ColorToken::Orange => "ORANGE",
            ColorToken::Purple => "PURPLE",
            ColorToken::Pink => "PINK",
            ColorToken::LightGreen => "LIGHT_GREEN",
            ColorToken::DarkBlue => "DARK_BLUE",
            ColorToken::LightBlue => "LIGHT_BLUE",
        }
    }

    /// The hex string literal that replaces it.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Cyan => "#00FFFF",
            ColorToken::Orange => "#FFA500",
            ColorToken::Purple => "#800080",
            ColorToken::Pink => "#FFC0CB",
            ColorToken::LightGreen => "#90EE90",
            ColorToken::DarkBlue => "#00008B",
            ColorToken::LightBlue => "#ADD8E6",
        }
    }
}

/// Normalize raw model output into a candidate script.
pub fn normalize(raw: &str) -> String {
    let code = extract_fenced(raw);
    let code = ensure_import(code);
    let code = rewrite_colors(code);
    fix_mathtex_escapes(&code)
}

/// Slice out the interior of a fenced code block, preferring a
/// language-tagged fence over a bare one. An unterminated fence is sliced
/// to the end of the text so no delimiter ever survives.
fn extract_fenced(raw: &str) -> String {
    if let Some(tag_start) = raw.find("```python") {
        let start = tag_start + "```python".len();
        match raw[start..].find("```") {
            Some(end) => raw[start..start + end].trim().to_string(),
            None => raw[start..].trim().to_string(),
        }
    } else if let Some(fence_start) = raw.find("```") {
        let start = fence_start + 3;
        match raw[start..].find("```") {
            Some(end) => raw[start..start + end].trim().to_string(),
            None => raw[start..].trim().to_string(),
        }
    } else {
        raw.to_string()
    }
}

/// Prepend the required import when the script does not already begin
/// with a manim import. Idempotent.
fn ensure_import(code: String) -> String {
    if code.starts_with("from manim import") {
        code
    } else {
        format!("{REQUIRED_IMPORT}\n\n{code}")
    }
}

/// Rewrite `color=<TOKEN>` occurrences to literal hex strings. Plain
/// substring replacement also covers a token sitting immediately before a
/// closing call-argument parenthesis, so the last usage in an argument
/// list is never missed.
fn rewrite_colors(code: String) -> String {
    ColorToken::iter().fold(code, |acc, token| {
        acc.replace(
            &format!("color={}", token.token()),
            &format!("color=\"{}\"", token.hex()),
        )
    })
}

static MATHTEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"MathTex\("([^"]+)""#).unwrap());

/// Double the backslash in the small set of LaTeX escapes that form invalid
/// escape sequences inside a Python string literal, but only within
/// `MathTex("…")` arguments.
fn fix_mathtex_escapes(code: &str) -> String {
    MATHTEX_LITERAL
        .replace_all(code, |caps: &Captures<'_>| {
            let content = caps[1]
                .replace("\\s", "\\\\s")
                .replace("\\p", "\\\\p")
                .replace("\\f", "\\\\f");
            format!("MathTex(\"{content}\"")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_fence_preferred_over_bare() {
        let raw = "intro\n```python\nx = 1\n```\noutro ``` stray";
        assert_eq!(extract_fenced(raw), "x = 1");
    }

    #[test]
    fn unterminated_fence_sliced_to_end() {
        let raw = "```python\nx = 1\n";
        assert_eq!(extract_fenced(raw), "x = 1");
        let raw = "```\ny = 2";
        assert_eq!(extract_fenced(raw), "y = 2");
    }

    #[test]
    fn import_enforcement_is_idempotent() {
        let once = ensure_import("class MainScene(Scene): pass".to_string());
        let twice = ensure_import(once.clone());
        assert_eq!(once, twice);
        assert!(once.starts_with(REQUIRED_IMPORT));
    }

    #[test]
    fn color_rewrite_covers_argument_tail() {
        let code = "Square(color=CYAN)\nText(\"hi\", color=ORANGE, size=3)".to_string();
        let out = rewrite_colors(code);
        assert_eq!(
            out,
            "Square(color=\"#00FFFF\")\nText(\"hi\", color=\"#FFA500\", size=3)"
        );
    }

    #[test]
    fn mathtex_escapes_doubled_only_inside_literal() {
        let code = r#"eq = MathTex("\sqrt{2} + \pi") # \s outside stays"#;
        let out = fix_mathtex_escapes(code);
        assert!(out.contains(r#"MathTex("\\sqrt{2} + \\pi")"#));
        assert!(out.ends_with(r"# \s outside stays"));
    }
}
