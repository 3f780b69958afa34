use std::process::ExitCode;

use clap::Parser;
use cli::command::Command;
use cli::{Conversation, DEFAULT_RELAY_URL, ExchangeError, RelayClient, Terminal};
use frames::{Mode, Role};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Exchange(#[from] ExchangeError),
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "revise", about = "Quick-revision chat over the revision relay")]
struct Cli {
    #[arg(long, env = "REVISE_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    /// Bearer credential sent to the relay.
    #[arg(long, env = "REVISE_API_KEY")]
    api_key: Option<String>,

    /// Starting revision mode (see `/modes`).
    #[arg(long, default_value = "default")]
    mode: Mode,

    /// Send one message, print the reply, and exit.
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(message) = failure_message(&e) {
                eprintln!("error: {message}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = RelayClient::new(cli.relay_url, cli.api_key)?;
    let mut conversation = Conversation::new();
    let mut terminal = Terminal::stdio();

    if let Some(prompt) = cli.prompt {
        client
            .send(&mut conversation, &prompt, cli.mode, &mut terminal)
            .await?;
        return Ok(());
    }

    run_repl(&client, &mut conversation, &mut terminal, cli.mode).await
}

/// Text to print for a failed run. `None` when a notice already reported it.
fn failure_message(e: &CliError) -> Option<String> {
    match e {
        CliError::Exchange(inner) if inner.notice().is_some() => None,
        other => Some(other.to_string()),
    }
}

async fn run_repl(
    client: &RelayClient,
    conversation: &mut Conversation,
    terminal: &mut Terminal<std::io::Stdout, std::io::Stderr>,
    mut mode: Mode,
) -> Result<(), CliError> {
    eprintln!("Quick-Revision Assistant at {}", client.url());
    eprintln!("mode: {} {} · /modes, /mode <tag>, /history, /quit", mode.emoji(), mode.label());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Modes => print_modes(mode),
            Command::History => print_history(conversation),
            Command::Mode(tag) => match tag.parse::<Mode>() {
                Ok(next) => {
                    mode = next;
                    eprintln!("mode: {} {}", mode.emoji(), mode.label());
                }
                Err(e) => eprintln!("{e}; try /modes"),
            },
            Command::Unknown(name) => eprintln!("unknown command /{name}"),
            Command::Send(text) => {
                // Failures were already shown as a notice; the loop carries on.
                if let Err(e) = client.send(conversation, text, mode, terminal).await {
                    tracing::debug!(error = %e, "send did not complete");
                }
            }
        }
    }
    Ok(())
}

fn print_modes(current: Mode) {
    for mode in Mode::ALL {
        let marker = if mode == current { '*' } else { ' ' };
        eprintln!("{marker} {:<12} {} {}", mode.as_str(), mode.emoji(), mode.label());
    }
}

fn print_history(conversation: &Conversation) {
    for message in conversation.messages() {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
            Role::System => "system",
        };
        println!("{who}> {}", message.content);
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
