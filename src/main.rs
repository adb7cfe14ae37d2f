//! Trip Chat - terminal front-end for the trip-planning assistant

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trip_chat::backend::{BackendConfig, HttpChatBackend, LoggingBackend};
use trip_chat::render;
use trip_chat::runtime::{DialogueOrchestrator, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stdout belongs to the conversation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_chat=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Configuration
    let config = BackendConfig::from_env();
    let http = HttpChatBackend::new(&config)?;
    tracing::info!(
        endpoint = %http.endpoint(),
        timeout_secs = config.timeout.as_secs(),
        "Chat backend configured"
    );

    let orchestrator = DialogueOrchestrator::new(LoggingBackend::new(http), config.timeout);
    let mut session = Session::new();

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    println!("Interactive Travel Planner Assistant");

    // Step 1: who are we talking to
    let identity = loop {
        let Some(name) = prompt(&mut input, "What's your name? ").await? else {
            return Ok(());
        };
        match orchestrator.establish_identity(&mut session, &name) {
            Ok(identity) => break identity,
            Err(_) => println!("{}", render::name_required()),
        }
    };
    println!("{}", render::greeting(&identity));

    // Step 2: converse until EOF
    while let Some(message) = prompt(&mut input, "Your message: ").await? {
        match orchestrator.submit(&mut session, &message).await {
            Ok(directive) => {
                for line in render::directive(&directive) {
                    println!("{line}");
                }
            }
            Err(e) => println!("{}", render::error(&e)),
        }
    }

    println!();
    for line in render::transcript(&identity, session.history()) {
        println!("{line}");
    }
    tracing::info!(
        session_id = %session.id(),
        turns = session.history().len(),
        "Session ended"
    );

    Ok(())
}

/// Print `label` and read one line; `None` on EOF
async fn prompt(
    input: &mut Lines<BufReader<Stdin>>,
    label: &str,
) -> std::io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;
    input.next_line().await
}
