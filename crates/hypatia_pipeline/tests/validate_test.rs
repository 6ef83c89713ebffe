//! Tests for the syntax validator and the single-shot paren repair.

use hypatia_pipeline::validate::{check_and_repair, compiles};
use hypatia_pipeline::Verdict;

fn paren_balance(line: &str) -> i64 {
    line.matches('(').count() as i64 - line.matches(')').count() as i64
}

#[test]
fn pristine_source_is_accepted_unchanged() {
    let src = "from manim import *\n\nclass MainScene(Scene):\n    def construct(self):\n        self.wait(1)\n";
    let out = check_and_repair(src, "limits");
    assert_eq!(out.verdict(), &Verdict::Accepted);
    assert_eq!(out.source(), src);
}

#[test]
fn single_missing_paren_is_repaired() {
    // The exact malformed-candidate scenario: one closing paren short.
    let src = "from manim import *\nclass MainScene(Scene):\n def construct(self):\n  Square(color=CYAN";
    let out = check_and_repair(src, "squares");
    assert_eq!(out.verdict(), &Verdict::Repaired);
    assert!(compiles(out.source()));

    let repaired_line = out.source().lines().nth(3).unwrap();
    assert!(repaired_line.ends_with(')'));
    assert_eq!(paren_balance(repaired_line), 0);
}

#[test]
fn multiple_missing_parens_on_one_line_are_all_appended() {
    let src = "from manim import *\nx = max(min(1, 2\ny = 3\n";
    let out = check_and_repair(src, "minmax");
    assert_eq!(out.verdict(), &Verdict::Repaired);
    assert!(compiles(out.source()));

    let repaired_line = out.source().lines().nth(1).unwrap();
    assert_eq!(repaired_line, "x = max(min(1, 2))");
    assert_eq!(paren_balance(repaired_line), 0);
}

#[test]
fn non_bracket_defect_is_replaced_with_error_scene() {
    let src = "from manim import *\nx = = 3\n";
    let concept = "fourier series";
    let out = check_and_repair(src, concept);
    assert_eq!(out.verdict(), &Verdict::Replaced);
    assert!(compiles(out.source()));
    assert!(out.source().contains(concept));

    // The embedded excerpt stays within its 80-character budget.
    let excerpt_line = out
        .source()
        .lines()
        .find(|l| l.contains("Error: "))
        .unwrap();
    let excerpt = excerpt_line
        .split("Error: ")
        .nth(1)
        .unwrap()
        .split("...")
        .next()
        .unwrap();
    assert!(excerpt.chars().count() <= 80);
}

#[test]
fn unfixable_bracket_deficit_is_replaced() {
    // The unmatched opener is a square bracket; the paren count on its line
    // balances, so no fix can be determined.
    let src = "from manim import *\nvals = [1, (2)\n";
    let out = check_and_repair(src, "lists");
    assert_eq!(out.verdict(), &Verdict::Replaced);
    assert!(compiles(out.source()));
    assert!(out.source().contains("Generation Error"));
}

#[test]
fn failed_repair_verification_falls_back() {
    // Appending the deficit to the opener's line does not make this parse;
    // the orphaned continuation line remains invalid.
    let src = "from manim import *\na = (\n= 2\n";
    let out = check_and_repair(src, "tuples");
    assert_eq!(out.verdict(), &Verdict::Replaced);
    assert!(compiles(out.source()));
}
