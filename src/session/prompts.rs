//! Fixed prompt texts and builders for the summary and context-question calls.

/// System instruction for the end-of-meeting executive summary.
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are LiveAssist AI, a domain-agnostic sales/meeting assistant. \
Generate an executive summary with this exact structure:\n\
• Overview (2–3 lines)\n\
• Key Points (bullets)\n\
• Decisions & Owners (bullets)\n\
• Action Items with Deadlines (bullets)\n\
• Risks/Concerns (bullets)\n\
• Overall Sentiment (1 line)\n\
Keep it factual, concise, and useful.";

/// System instruction for questions asked against the recent transcript.
pub const CONTEXT_SYSTEM_PROMPT: &str =
    "You are LiveAssist AI. Answer based on the meeting context. \
Be concise. Where helpful, add one short recommendation and a brief sentiment.";

/// User instruction embedding the full joined transcript.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Full meeting transcript:\n{transcript}\n\n\
Generate the summary exactly in that structure."
    )
}

/// User instruction embedding the recent context and the literal question.
pub fn build_context_prompt(context: &str, question: &str) -> String {
    format!("Meeting context (may be partial):\n{context}\n\nQuestion: {question}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_sections_are_in_order() {
        let sections = [
            "Overview",
            "Key Points",
            "Decisions & Owners",
            "Action Items with Deadlines",
            "Risks/Concerns",
            "Overall Sentiment",
        ];

        let positions: Vec<usize> = sections
            .iter()
            .map(|s| SUMMARY_SYSTEM_PROMPT.find(s).expect("section missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn summary_prompt_embeds_transcript_verbatim() {
        let prompt = build_summary_prompt("Hello world");
        assert_eq!(
            prompt,
            "Full meeting transcript:\nHello world\n\n\
Generate the summary exactly in that structure."
        );
    }

    #[test]
    fn context_prompt_embeds_question_literally() {
        let prompt = build_context_prompt("we agreed on Q3", "  when?  ");
        assert!(prompt.starts_with("Meeting context (may be partial):\nwe agreed on Q3\n\n"));
        assert!(prompt.ends_with("Question:   when?  "));
    }
}
