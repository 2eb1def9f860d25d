//! Terminal front end for the TalentScout hiring assistant.
//!
//! Reads candidate lines from stdin and prints every new assistant turn.
//! Logs go to stderr so the conversation on stdout stays readable.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talent_scout::adapters::ai::{OpenAIConfig, OpenAIProvider};
use talent_scout::application::{CompletionSettings, ConversationController};
use talent_scout::config::{AppConfig, LoggingConfig};
use talent_scout::domain::screening::{ScreeningSession, TurnRole};
use talent_scout::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let api_key = config.ai.openai_api_key.clone().unwrap_or_default();
    let provider = OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout()),
    )?;
    let info = provider.provider_info();

    let controller = ConversationController::new(Arc::new(provider)).with_settings(
        CompletionSettings {
            temperature: config.ai.temperature,
            max_tokens: config.ai.max_tokens,
        },
    );

    let mut session = ScreeningSession::new();
    tracing::info!(
        session_id = %session.id(),
        provider = %info.name,
        model = %info.model,
        "Starting screening session"
    );

    session = controller.handle_turn(session, "").await;
    let mut printed = print_new_turns(&session, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !session.is_closed() {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        session = controller.handle_turn(session, &line).await;
        printed = print_new_turns(&session, printed);
    }

    print_summary(&session);
    tracing::info!(session_id = %session.id(), state = %session.state(), "Session finished");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let json = logging.json;
    tracing_subscriber::registry()
        .with(logging.env_filter())
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "You: ")?;
    stdout.flush()
}

/// Prints assistant turns appended since `from` and returns the new cursor.
fn print_new_turns(session: &ScreeningSession, from: usize) -> usize {
    for turn in session.transcript().since(from) {
        if turn.role == TurnRole::Assistant {
            println!("TalentScout: {}", turn.content);
        }
    }
    session.transcript().len()
}

fn print_summary(session: &ScreeningSession) {
    let mut filled = session.collected().filled().peekable();
    if filled.peek().is_none() {
        return;
    }
    println!();
    println!("Collected information:");
    for (field, value) in filled {
        println!("  {}: {}", field.label(), value);
    }
}
