//! Screening conversation state machine.
//!
//! Defines the lifecycle states of a candidate intake conversation and the
//! transitions allowed between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The lifecycle state of a screening conversation.
///
/// Conversations move strictly forward:
/// - `Greeting`: Nothing said yet, the assistant opens the session
/// - `CollectingInfo`: Candidate profile fields are gathered one at a time
/// - `TechnicalScreening`: Generated technical questions are asked in order
/// - `Ended`: Closing messages only
///
/// Any non-terminal state may jump straight to `Ended` when the candidate
/// asks to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Session created, no assistant turn yet.
    #[default]
    Greeting,

    /// Gathering the candidate profile fields.
    CollectingInfo,

    /// Asking the generated technical questions.
    TechnicalScreening,

    /// Conversation closed, only closing messages are produced.
    Ended,
}

impl ConversationState {
    /// Returns true once the conversation has been closed.
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Short label for operator display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::CollectingInfo => "collecting_info",
            Self::TechnicalScreening => "technical_screening",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl StateMachine for ConversationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            // Greeting always hands over to collection
            (Greeting, CollectingInfo) |
            // Last field stored, questions generated
            (CollectingInfo, TechnicalScreening) |
            // Last question asked, or the candidate asked to leave
            (Greeting, Ended) |
            (CollectingInfo, Ended) |
            (TechnicalScreening, Ended)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationState::*;
        match self {
            Greeting => vec![CollectingInfo, Ended],
            CollectingInfo => vec![TechnicalScreening, Ended],
            TechnicalScreening => vec![Ended],
            Ended => vec![],
        }
    }
}
