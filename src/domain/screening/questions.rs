//! Technical question queue, generated-list decoding and fallback questions.

use nom::{
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::{char, multispace0, none_of},
    combinator::{all_consuming, map, map_opt, opt, value},
    multi::{many0, separated_list0},
    sequence::{delimited, preceded, terminated},
    Finish, IResult,
};
use serde::Serialize;
use thiserror::Error;

/// Number of questions in the fallback set.
pub const FALLBACK_QUESTION_COUNT: usize = 3;

/// Errors from decoding a generated question list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionParseError {
    #[error("response is empty")]
    Empty,

    #[error("response is not a bracketed list")]
    NotAList,

    #[error("malformed list near position {position}")]
    Malformed { position: usize },

    #[error("list contains no questions")]
    EmptyList,
}

/// Decodes a generated response into a list of question strings.
///
/// Accepts a single bracketed list of single- or double-quoted strings,
/// optionally wrapped in a markdown code fence. A JSON array is decoded
/// directly; otherwise the body is read as a literal list, which also allows
/// single quotes and a trailing comma. Anything else is rejected and the
/// caller decides what to substitute.
pub fn parse_question_list(text: &str) -> Result<Vec<String>, QuestionParseError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(QuestionParseError::Empty);
    }
    if !body.starts_with('[') {
        return Err(QuestionParseError::NotAList);
    }

    let items = match serde_json::from_str::<Vec<String>>(body) {
        Ok(items) => items,
        Err(_) => parse_literal_list(body)?,
    };

    if items.is_empty() {
        return Err(QuestionParseError::EmptyList);
    }
    Ok(items)
}

/// Templated questions used when generation cannot be decoded.
///
/// Never fails, whatever the tech stack text looks like.
pub fn fallback_questions(tech_stack: &str) -> Vec<String> {
    let stack = tech_stack.trim();
    let subject = if stack.is_empty() {
        "your main technologies"
    } else {
        stack
    };
    let primary = stack
        .split(',')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("your primary technology");

    vec![
        format!("Can you explain your experience with {}?", subject),
        format!(
            "What's the most challenging project you've completed using {}?",
            subject
        ),
        format!(
            "How would you approach debugging a complex issue in {}?",
            primary
        ),
    ]
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop the info string (```python, ```json, ...)
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_literal_list(body: &str) -> Result<Vec<String>, QuestionParseError> {
    all_consuming(literal_list)(body)
        .finish()
        .map(|(_, items)| items)
        .map_err(|e| QuestionParseError::Malformed {
            position: body.len() - e.input.len(),
        })
}

// =============================================================================
// Literal list grammar
// =============================================================================

fn literal_list(input: &str) -> IResult<&str, Vec<String>> {
    delimited(
        terminated(char('['), multispace0),
        terminated(
            separated_list0(
                delimited(multispace0, char(','), multispace0),
                alt((single_quoted, double_quoted)),
            ),
            opt(preceded(multispace0, char(','))),
        ),
        preceded(multispace0, char(']')),
    )(input)
}

fn single_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        map(many0(alt((escaped_char, none_of("'\\")))), |chars| {
            chars.into_iter().collect()
        }),
        char('\''),
    )(input)
}

fn double_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(many0(alt((escaped_char, none_of("\"\\")))), |chars| {
            chars.into_iter().collect()
        }),
        char('"'),
    )(input)
}

fn escaped_char(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        alt((
            value('\n', char('n')),
            value('\t', char('t')),
            value('\r', char('r')),
            value('\0', char('0')),
            value('\\', char('\\')),
            value('\'', char('\'')),
            value('"', char('"')),
            value('/', char('/')),
            map_opt(
                preceded(
                    char('u'),
                    take_while_m_n(4, 4, |c: char| c.is_ascii_hexdigit()),
                ),
                |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
            ),
        )),
    )(input)
}

/// Generated technical questions plus a forward-only cursor.
///
/// The questions are loaded exactly once, when screening starts. Before that
/// the cursor is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionQueue {
    questions: Vec<String>,
    cursor: Option<usize>,
}

impl QuestionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the questions and sets the cursor to the first one.
    ///
    /// Returns false, leaving the queue untouched, if it was already loaded.
    pub fn load(&mut self, questions: Vec<String>) -> bool {
        if self.cursor.is_some() {
            return false;
        }
        self.questions = questions;
        self.cursor = Some(0);
        true
    }

    /// Index of the next question to ask, `None` until loaded.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question under the cursor and moves the cursor forward.
    pub fn advance(&mut self) -> Option<String> {
        let index = self.cursor?;
        let question = self.questions.get(index)?.clone();
        self.cursor = Some(index + 1);
        Some(question)
    }

    /// True once loaded and every question has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_some_and(|index| index >= self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn parses_single_quoted_list() {
            let parsed = parse_question_list("['What is ownership?', 'Explain lifetimes.']");
            assert_eq!(
                parsed,
                Ok(vec![
                    "What is ownership?".to_string(),
                    "Explain lifetimes.".to_string()
                ])
            );
        }

        #[test]
        fn parses_double_quoted_list_with_trailing_comma() {
            let parsed = parse_question_list("[\n  \"Q1\",\n  \"Q2\",\n]").unwrap();
            assert_eq!(parsed, vec!["Q1", "Q2"]);
        }

        #[test]
        fn handles_escaped_quotes() {
            let parsed = parse_question_list(r#"['What\'s a trait object?', "Say \"hi\""]"#).unwrap();
            assert_eq!(parsed, vec!["What's a trait object?", "Say \"hi\""]);
        }

        #[test]
        fn keeps_other_quote_kind_inside_string() {
            let parsed = parse_question_list(r#"["What's a closure?"]"#).unwrap();
            assert_eq!(parsed, vec!["What's a closure?"]);
        }

        #[test]
        fn decodes_unicode_escape() {
            let parsed = parse_question_list(r#"["caf\u00e9"]"#).unwrap();
            assert_eq!(parsed, vec!["café"]);
        }

        #[test]
        fn strips_code_fence() {
            let parsed = parse_question_list("```python\n['Q1', 'Q2', 'Q3']\n```").unwrap();
            assert_eq!(parsed.len(), 3);
        }

        #[test]
        fn returns_strings_verbatim() {
            let parsed = parse_question_list("['  padded  ']").unwrap();
            assert_eq!(parsed, vec!["  padded  "]);
        }

        #[test]
        fn parses_mixed_quotes_in_one_list() {
            let parsed = parse_question_list(r#"['Q1', "Q2"]"#).unwrap();
            assert_eq!(parsed, vec!["Q1", "Q2"]);
        }

        #[test]
        fn decodes_unicode_escape_in_single_quoted_list() {
            let parsed = parse_question_list(r"['na\u00efve', 'tab\there']").unwrap();
            assert_eq!(parsed, vec!["na\u{ef}ve", "tab\there"]);
        }

        #[test]
        fn accepts_json_array_with_escaped_slash() {
            let parsed = parse_question_list(r#"["Is I\/O blocking?"]"#).unwrap();
            assert_eq!(parsed, vec!["Is I/O blocking?"]);
        }

        #[test]
        fn rejects_prose() {
            assert_eq!(
                parse_question_list("Here are some questions: 1. What is SQL?"),
                Err(QuestionParseError::NotAList)
            );
        }

        #[test]
        fn rejects_empty_response() {
            assert_eq!(parse_question_list("   "), Err(QuestionParseError::Empty));
            assert_eq!(parse_question_list("```\n```"), Err(QuestionParseError::Empty));
        }

        #[test]
        fn rejects_empty_list() {
            assert_eq!(parse_question_list("[]"), Err(QuestionParseError::EmptyList));
            assert_eq!(parse_question_list("[ ]"), Err(QuestionParseError::EmptyList));
        }

        #[test]
        fn rejects_non_string_element() {
            assert_eq!(
                parse_question_list("['Q1', 42]"),
                Err(QuestionParseError::Malformed { position: 7 })
            );
        }

        #[test]
        fn rejects_unterminated_string() {
            assert!(matches!(
                parse_question_list("['Q1"),
                Err(QuestionParseError::Malformed { .. })
            ));
        }

        #[test]
        fn rejects_missing_separator() {
            assert!(matches!(
                parse_question_list("['Q1' 'Q2']"),
                Err(QuestionParseError::Malformed { .. })
            ));
        }

        #[test]
        fn rejects_trailing_content() {
            assert_eq!(
                parse_question_list("['Q1'] and more"),
                Err(QuestionParseError::Malformed { position: 6 })
            );
        }

        #[test]
        fn rejects_unknown_escape() {
            assert!(matches!(
                parse_question_list(r"['\q']"),
                Err(QuestionParseError::Malformed { .. })
            ));
        }

        #[test]
        fn rejects_short_unicode_escape() {
            assert!(parse_question_list(r"['\u12']").is_err());
        }

        #[test]
        fn rejects_service_apology_text() {
            let apology = "I'm having trouble processing your request. Please try again later.";
            assert_eq!(parse_question_list(apology), Err(QuestionParseError::NotAList));
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn produces_three_questions_naming_first_technology() {
            let questions = fallback_questions("Java, SQL");
            assert_eq!(questions.len(), FALLBACK_QUESTION_COUNT);
            assert!(questions.iter().all(|q| !q.is_empty()));
            assert!(questions[0].contains("Java, SQL"));
            assert!(questions[2].contains("Java"));
            assert!(!questions[2].contains("SQL"));
        }

        #[test]
        fn survives_empty_stack() {
            let questions = fallback_questions("");
            assert_eq!(questions.len(), FALLBACK_QUESTION_COUNT);
            assert!(questions.iter().all(|q| !q.is_empty()));
        }

        #[test]
        fn skips_blank_leading_segment() {
            let questions = fallback_questions(" , Go");
            assert!(questions[2].contains("Go"));
        }
    }

    mod queue {
        use super::*;

        fn loaded(questions: &[&str]) -> QuestionQueue {
            let mut queue = QuestionQueue::new();
            assert!(queue.load(questions.iter().map(|q| q.to_string()).collect()));
            queue
        }

        #[test]
        fn cursor_unset_until_loaded() {
            let queue = QuestionQueue::new();
            assert_eq!(queue.cursor(), None);
            assert!(!queue.is_exhausted());
        }

        #[test]
        fn load_sets_cursor_to_zero() {
            let queue = loaded(&["a", "b"]);
            assert_eq!(queue.cursor(), Some(0));
        }

        #[test]
        fn load_only_once() {
            let mut queue = loaded(&["a"]);
            assert!(!queue.load(vec!["x".to_string(), "y".to_string()]));
            assert_eq!(queue.questions(), &["a".to_string()]);
        }

        #[test]
        fn advance_walks_in_order_then_stops() {
            let mut queue = loaded(&["a", "b"]);
            assert_eq!(queue.advance().as_deref(), Some("a"));
            assert!(!queue.is_exhausted());
            assert_eq!(queue.advance().as_deref(), Some("b"));
            assert!(queue.is_exhausted());
            assert_eq!(queue.advance(), None);
            assert_eq!(queue.cursor(), Some(2));
        }

        #[test]
        fn advance_on_unloaded_queue_is_none() {
            let mut queue = QuestionQueue::new();
            assert_eq!(queue.advance(), None);
        }
    }
}
