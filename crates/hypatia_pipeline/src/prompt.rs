//! Prompt construction for the generation model.
//!
//! Three variants feed the animation pipeline: the base instructional
//! prompt, a shortened variant swapped in when output hits the token
//! ceiling, and an amplified variant for the length-guard retry. The chat
//! endpoint has its own tutoring prompt.

/// Base instructional prompt embedding the concept and the formatting rules
/// the model must follow. Kept deliberately short to stay clear of token
/// limits.
pub fn animation_prompt(concept: &str) -> String {
    format!(
        r##"Create a Manim animation to explain: {concept}

CRITICAL REQUIREMENTS:
- Use class MainScene(Scene):
- Never use MathTex indexing like eq[0].set_color()
- Use Text() and MathTex() for educational content
- Colors: "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFD93D"
- Include self.wait() between sections
- 60+ seconds total duration

STRUCTURE:
1. Title introduction (8s)
2. Problem setup (10s)
3. Step-by-step solution (25s)
4. Visual demonstration (12s)
5. Summary (5s)

Generate complete working Python code."##
    )
}

/// Shortened prompt used after the model truncates at the token ceiling.
pub fn simplified_prompt(concept: &str) -> String {
    format!(
        "Create a simple Manim animation to explain: {concept}\n\n\
         Generate complete Python code with class MainScene(Scene): and a \
         construct method. Keep it under 6000 tokens."
    )
}

/// Amplified prompt for the length-guard retry: the original prompt plus an
/// explicit demand for a longer result.
pub fn amplified_prompt(base_prompt: &str) -> String {
    format!(
        "{base_prompt}\n\nIMPORTANT: The previous attempt was too short. Generate a MUCH \
         longer, more comprehensive script with extensive explanations, multiple examples, \
         and detailed step-by-step breakdowns. Minimum 60-90 seconds of content with \
         substantial educational value."
    )
}

/// Tutoring prompt for the chat endpoint.
pub fn tutor_prompt(message: &str) -> String {
    format!(
        r#"You are an expert AI mathematics tutor and assistant. You specialize in:

1. Explaining mathematical concepts clearly and step-by-step
2. Solving mathematical problems with detailed workings
3. Providing educational insights and real-world applications
4. Helping with calculus, algebra, geometry, trigonometry, linear algebra, differential equations, complex numbers, and more
5. Breaking down complex topics into understandable parts

User message: {message}

Please provide a helpful, educational, and engaging response. Use clear explanations, examples where appropriate, and maintain a friendly, encouraging tone. If the question involves calculations, show your work step by step. If it's about concepts, provide intuitive explanations along with the formal definitions.

Format your response in a conversational way that would work well in a chat interface. You can use basic formatting like **bold** for emphasis and *italics* for mathematical terms. Use bullet points or numbered lists when helpful.

Keep your response comprehensive but not overwhelming - aim for 2-4 paragraphs unless the topic requires more detail."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_the_concept() {
        assert!(animation_prompt("chain rule").contains("chain rule"));
        assert!(simplified_prompt("chain rule").contains("chain rule"));
    }

    #[test]
    fn amplified_extends_the_base() {
        let base = animation_prompt("limits");
        let amplified = amplified_prompt(&base);
        assert!(amplified.starts_with(&base));
        assert!(amplified.contains("MUCH longer"));
    }
}
