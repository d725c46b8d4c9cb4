//! Instruction template sent to the text-generation model.

use super::ToneDescriptor;

/// Reply the model is told to give for input it cannot sensibly rephrase.
pub const REFUSAL_MESSAGE: &str = "Unable to rephrase: Invalid or inappropriate content provided.";

/// Builds the single user message asking the model to rephrase `text`.
pub fn build_prompt(text: &str, tone: &ToneDescriptor) -> String {
    format!(
        "You are a professional text transformation assistant. Rephrase the given text \
according to the tone parameters below.

TONE PARAMETERS:
- Formality: {formality}
- Emotional tone: {emotion}
- Style: {style}

ORIGINAL TEXT:
{text}

RULES:
1. Return ONLY the rephrased text as a plain paragraph.
2. Do not include explanations, commentary or notes.
3. Do not add quotes, markdown formatting or special characters.
4. Do not open with phrases such as \"Here is...\" or \"The transformed text is...\".
5. If the input is nonsensical, gibberish or inappropriate, reply exactly: \"{refusal}\"
6. Preserve the core meaning while adapting the tone.
7. Keep the response concise and natural.

OUTPUT (plain text only):",
        formality = tone.formality,
        emotion = tone.emotion,
        style = tone.style,
        text = text,
        refusal = REFUSAL_MESSAGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_tone_and_text() {
        let tone = ToneDescriptor::new("casual", "neutral", "blend:10%");
        let prompt = build_prompt("Hello there", &tone);

        assert!(prompt.contains("- Formality: casual"));
        assert!(prompt.contains("- Emotional tone: neutral"));
        assert!(prompt.contains("- Style: blend:10%"));
        assert!(prompt.contains("ORIGINAL TEXT:\nHello there\n"));
    }

    #[test]
    fn test_prompt_includes_refusal_string() {
        let prompt = build_prompt("x", &ToneDescriptor::uniform("balanced"));
        assert!(prompt.contains(REFUSAL_MESSAGE));
        assert!(prompt.ends_with("OUTPUT (plain text only):"));
    }
}
