//! Tests for the fallback template catalog and its selector.

use hypatia_pipeline::{Topic, select_template};
use strum::IntoEnumIterator;

#[test]
fn pythagorean_concepts_get_the_theorem_script() {
    for concept in ["pythagoras", "the Pythagorean theorem", "right triangle sides"] {
        let script = select_template(concept);
        assert!(
            script.contains("a² + b² = c²"),
            "selector missed pythagorean for {concept:?}"
        );
    }
}

#[test]
fn more_keyword_hits_win() {
    // "hypotenuse" and "right triangle" both vote pythagorean; one "slope"
    // hit for derivative loses.
    let script = select_template("slope of the hypotenuse in a right triangle");
    assert!(script.contains("a² + b² = c²"));
}

#[test]
fn ties_keep_the_first_seen_maximum() {
    // One keyword hit each for Sphere and Cube; Sphere is declared first.
    assert_eq!(
        select_template("a sphere inside a cube"),
        Topic::Sphere.body()
    );
}

#[test]
fn unknown_concepts_fall_back_to_generic_visualization() {
    let script = select_template("category theory adjunctions");
    assert!(script.contains("Mathematical Function Visualization"));
}

#[test]
fn selection_is_case_and_padding_insensitive() {
    assert_eq!(
        select_template("  EIGENVALUE decomposition  "),
        Topic::Eigenvalue.body()
    );
}

#[test]
fn every_topic_has_keywords_and_a_scene() {
    for topic in Topic::iter() {
        assert!(!topic.keywords().is_empty());
        assert!(topic.body().contains("class MainScene"));
        assert!(topic.body().starts_with("from manim import *"));
    }
}
