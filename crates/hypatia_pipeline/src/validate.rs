//! Syntax validation and single-shot repair of candidate scripts.
//!
//! Candidates are compiled with the tree-sitter Python grammar. Exactly one
//! failure class gets a mechanical fix: a single line missing closing
//! parentheses. Everything else degrades to the synthesized error-display
//! script, so the renderer never sees broken source.

use crate::fallback::error_fallback;
use derive_getters::Getters;
use tracing::{debug, warn};

/// How a candidate became valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Compiled as-is
    Accepted,
    /// Compiled after the one-shot paren repair
    Repaired,
    /// Replaced with the error-display script
    Replaced,
}

/// A script that is guaranteed to compile, plus how it got that way.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Validated {
    /// The compiling source text
    source: String,
    /// Outcome of validation
    verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum IssueKind {
    /// An opening bracket on the given 1-based line was never closed
    UnclosedBracket { line: usize },
    /// Any other syntax failure
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompileIssue {
    kind: IssueKind,
    message: String,
}

/// Validate a candidate, repairing or replacing as needed. Never fails.
pub fn check_and_repair(source: &str, concept: &str) -> Validated {
    let issue = match compile(source) {
        Ok(()) => {
            return Validated {
                source: source.to_string(),
                verdict: Verdict::Accepted,
            };
        }
        Err(issue) => issue,
    };

    if let IssueKind::UnclosedBracket { line } = issue.kind {
        debug!(line, "attempting paren repair for unclosed bracket");
        if let Some(repaired) = append_missing_parens(source, line) {
            if compile(&repaired).is_ok() {
                return Validated {
                    source: repaired,
                    verdict: Verdict::Repaired,
                };
            }
            warn!(line, "paren repair did not produce compiling source");
        }
    }

    warn!(error = %issue.message, "replacing candidate with error-display script");
    Validated {
        source: error_fallback(concept, &issue.message),
        verdict: Verdict::Replaced,
    }
}

/// True when the source compiles unchanged.
pub fn compiles(source: &str) -> bool {
    compile(source).is_ok()
}

/// Append the paren deficit of the given 1-based line, if positive.
fn append_missing_parens(source: &str, line: usize) -> Option<String> {
    let mut lines: Vec<String> = source.lines().map(str::to_string).collect();
    if line == 0 || line > lines.len() {
        return None;
    }
    let target = &lines[line - 1];
    let open = target.matches('(').count();
    let close = target.matches(')').count();
    if open <= close {
        return None;
    }
    let deficit = open - close;
    lines[line - 1] = format!("{}{}", target, ")".repeat(deficit));
    Some(lines.join("\n"))
}

/// Compile the source with the tree-sitter Python grammar.
fn compile(source: &str) -> Result<(), CompileIssue> {
    let mut parser = tree_sitter::Parser::new();
    let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
    parser
        .set_language(&language)
        .map_err(|e| CompileIssue {
            kind: IssueKind::Other,
            message: format!("parser initialization failed: {e}"),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| CompileIssue {
        kind: IssueKind::Other,
        message: "parse failed".to_string(),
    })?;

    if !tree.root_node().has_error() {
        return Ok(());
    }

    // CPython points unclosed-bracket errors at the line of the unmatched
    // opener; reproduce that with a string-aware scan.
    if let Some((bracket, line)) = scan_unclosed(source) {
        return Err(CompileIssue {
            kind: IssueKind::UnclosedBracket { line },
            message: format!("'{bracket}' was never closed (line {line})"),
        });
    }

    let line = first_error_line(tree.root_node()).unwrap_or(1);
    Err(CompileIssue {
        kind: IssueKind::Other,
        message: format!("invalid syntax (line {line})"),
    })
}

/// First ERROR or missing node in the tree, as a 1-based line.
fn first_error_line(node: tree_sitter::Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_error_line(child) {
            return Some(line);
        }
    }
    None
}

fn pairs(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}'))
}

/// Scan for an opening bracket that is never closed, skipping string and
/// comment contents. Returns the earliest unmatched opener and its 1-based
/// line. Mismatched closers and unterminated strings are not this failure
/// class and yield `None`.
fn scan_unclosed(source: &str) -> Option<(char, usize)> {
    let chars: Vec<char> = source.chars().collect();
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut in_string: Option<(char, bool)> = None;
    let mut line = 1usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            line += 1;
            i += 1;
            continue;
        }

        if let Some((quote, triple)) = in_string {
            if c == '\\' {
                if i + 1 < chars.len() && chars[i + 1] == '\n' {
                    line += 1;
                }
                i += 2;
                continue;
            }
            if c == quote {
                if triple {
                    if i + 2 < chars.len() && chars[i + 1] == quote && chars[i + 2] == quote {
                        in_string = None;
                        i += 3;
                        continue;
                    }
                } else {
                    in_string = None;
                }
            }
            i += 1;
            continue;
        }

        match c {
            '#' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '\'' | '"' => {
                if i + 2 < chars.len() && chars[i + 1] == c && chars[i + 2] == c {
                    in_string = Some((c, true));
                    i += 3;
                } else {
                    in_string = Some((c, false));
                    i += 1;
                }
            }
            '(' | '[' | '{' => {
                stack.push((c, line));
                i += 1;
            }
            ')' | ']' | '}' => {
                match stack.last() {
                    Some(&(open, _)) if pairs(open, c) => {
                        stack.pop();
                    }
                    // stray or mismatched closer: a different syntax error
                    _ => return None,
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    // An unterminated string literal is its own failure class.
    if in_string.is_some() {
        return None;
    }

    stack.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanner_skips_strings_and_comments() {
        let src = "x = \"a ) b (\"\n# ( comment\ny = (1 + 2)\n";
        assert_eq!(scan_unclosed(src), None);
    }

    #[test]
    fn scanner_reports_earliest_unmatched_opener() {
        let src = "a = (1\nb = [2\n";
        assert_eq!(scan_unclosed(src), Some(('(', 1)));
    }

    #[test]
    fn scanner_handles_triple_quoted_blocks() {
        let src = "doc = \"\"\"\nhas ( and ) and \" inside\n\"\"\"\nz = 1\n";
        assert_eq!(scan_unclosed(src), None);
    }

    #[test]
    fn mismatched_closer_is_not_unclosed() {
        assert_eq!(scan_unclosed("x = 1)\n"), None);
    }
}
