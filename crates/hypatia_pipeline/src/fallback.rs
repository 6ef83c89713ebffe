//! Synthesized error-display script.
//!
//! A guaranteed-valid scene that renders a message instead of educational
//! content, used when generation output cannot be made to compile.

use hypatia_core::sanitize_title;

/// Longest error excerpt embedded in the scene.
const ERROR_EXCERPT_CHARS: usize = 80;

/// Build the error-display scene for a concept and a compile error.
///
/// Both strings are quote-stripped before embedding so they cannot break
/// out of the Python string literals that carry them.
pub fn error_fallback(concept: &str, error_msg: &str) -> String {
    let concept = sanitize_title(concept);
    let excerpt: String = sanitize_title(error_msg)
        .replace('\\', "")
        .chars()
        .take(ERROR_EXCERPT_CHARS)
        .collect();

    format!(
        r##"from manim import *

class MainScene(Scene):
    def construct(self):
        error_title = Text("Generation Error", font_size=48, color="#FF6B6B")
        error_title.to_edge(UP)

        concept_text = Text("Concept: {concept}", font_size=24, color="#FFFFFF")
        concept_text.next_to(error_title, DOWN, buff=0.8)

        error_detail = Text("Syntax Error Detected", font_size=32, color="#FFAA00")
        error_detail.next_to(concept_text, DOWN, buff=0.8)

        error_msg_text = Text("Error: {excerpt}...", font_size=18, color="#FFFFFF")
        error_msg_text.next_to(error_detail, DOWN, buff=0.5)

        retry_text = Text("Please try again with a different prompt", font_size=20, color="#4ECDC4")
        retry_text.next_to(error_msg_text, DOWN, buff=1.0)

        self.play(Write(error_title), run_time=2)
        self.play(Write(concept_text), run_time=1)
        self.play(Write(error_detail), run_time=1.5)
        self.play(Write(error_msg_text), run_time=2)
        self.play(Write(retry_text), run_time=1.5)
        self.wait(5)
"##
    )
}
