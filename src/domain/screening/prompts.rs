//! Fixed prompts and messages for the screening conversation.

/// Words that end the session when they appear anywhere in candidate input.
pub const EXIT_KEYWORDS: [&str; 5] = ["exit", "quit", "end", "stop", "goodbye"];

/// Substituted for any turn whose text the completion service failed to produce.
pub const SERVICE_FALLBACK_MESSAGE: &str =
    "I'm having trouble processing your request. Please try again later.";

/// Announces the move from profile collection to technical questions.
pub const SCREENING_TRANSITION_MESSAGE: &str =
    "Thanks for providing your information! Now I'll ask some technical questions.";

/// Returns true if the input asks to leave the conversation.
///
/// Case-insensitive substring match against [`EXIT_KEYWORDS`].
pub fn is_exit_request(input: &str) -> bool {
    let lower = input.to_lowercase();
    EXIT_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Confirmation appended after a field value is accepted.
pub fn acknowledgement(value: &str) -> String {
    format!("Got it! {} is recorded.", value)
}

/// User message carrying the tech stack for question generation.
pub fn tech_stack_message(tech_stack: &str) -> String {
    format!("Tech Stack: {}", tech_stack)
}

// ============================================================================
// System Prompts
// ============================================================================

pub const GREETING_SYSTEM_PROMPT: &str = "You are an AI Hiring Assistant for TalentScout, a recruitment agency specializing in technology placements. \
Greet the candidate warmly and briefly explain that you'll help with the initial screening process. \
Ask if they're ready to begin. Keep your response under 2 sentences.";

pub const QUESTION_GENERATION_SYSTEM_PROMPT: &str = "Based on the candidate's tech stack, generate 3-5 technical questions. \
Focus on core concepts and practical applications. \
Format questions as a list of quoted strings: ['Question 1', 'Question 2']. \
Respond with the list only.";

pub const CLOSING_SYSTEM_PROMPT: &str = "Thank the candidate for their time and inform them that: \
1. Their information has been recorded, \
2. The recruitment team will review their application, \
3. They'll be contacted within 3 business days. \
Wish them a great day and end the conversation.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_detection_is_case_insensitive() {
        assert!(is_exit_request("QUIT"));
        assert!(is_exit_request("Goodbye!"));
        assert!(is_exit_request("please stop"));
    }

    #[test]
    fn exit_detection_matches_substrings() {
        assert!(is_exit_request("let's wrap up, the end"));
        assert!(is_exit_request("exiting now"));
    }

    #[test]
    fn ordinary_answers_are_not_exit_requests() {
        for input in ["John Doe", "john@x.com", "Python, React", "5", "Berlin", ""] {
            assert!(!is_exit_request(input), "{}", input);
        }
    }

    #[test]
    fn acknowledgement_echoes_value() {
        assert_eq!(acknowledgement("John Doe"), "Got it! John Doe is recorded.");
    }

    #[test]
    fn closing_prompt_mentions_response_window() {
        assert!(CLOSING_SYSTEM_PROMPT.contains("3 business days"));
    }

    #[test]
    fn generation_prompt_requests_list_shape() {
        assert!(QUESTION_GENERATION_SYSTEM_PROMPT.contains("['Question 1', 'Question 2']"));
    }
}
