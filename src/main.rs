#![deny(warnings)]

mod api;
mod config;
mod error;
mod models;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::error;

use config::Config;

/// Demo client for the Anthropic messages API.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Model identifier sent with the request
    #[arg(long, env = "AI_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Upper bound on generated tokens
    #[arg(long, env = "MAX_TOKENS", default_value_t = config::DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Prompt for the one-shot request (ignored with --interactive)
    #[arg(long)]
    prompt: Option<String>,

    /// Read prompts from stdin in a loop, one request per line
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("claude_demo=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env(cli.model, cli.max_tokens);

    println!("🤖 Claude API Demo\n");

    // Missing credential is a guarded early exit, not a failure: print the
    // guidance and terminate normally without touching the network.
    let Some(api_key) = config.api_key.clone() else {
        print!("{}", key_guidance());
        return Ok(());
    };

    let client = match api::build_client() {
        Ok(client) => client,
        Err(err) => {
            error!("could not build HTTP client: {err}");
            println!("\n❌ Error: {err}");
            return Ok(());
        }
    };

    if cli.interactive {
        run_interactive(&client, &config, &api_key).await;
    } else {
        let prompt = cli.prompt.as_deref().unwrap_or(config::DEFAULT_PROMPT);
        run_once(&client, &config, &api_key, prompt).await;
    }

    Ok(())
}

async fn run_once(client: &reqwest::Client, config: &Config, api_key: &str, prompt: &str) {
    println!("📤 Sending request to Claude...\n");

    match api::send_message(client, config, api_key, prompt).await {
        Ok(reply) => {
            if let Some(text) = reply {
                print_reply(&text);
            }
            println!("\n✅ Success! Claude API is working correctly.");
        }
        Err(err) => {
            error!("request failed: {err}");
            println!("\n❌ Error: {err}");
        }
    }
}

async fn run_interactive(client: &reqwest::Client, config: &Config, api_key: &str) {
    println!("Type a prompt and press enter; 'exit' or 'quit' stops.\n");

    let stdin = io::stdin();
    loop {
        print!("You: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }
        if prompt.eq_ignore_ascii_case("exit") || prompt.eq_ignore_ascii_case("quit") {
            println!("Goodbye.");
            break;
        }

        // Each turn is an independent single-message request; nothing is
        // carried over from previous turns.
        match api::send_message(client, config, api_key, prompt).await {
            Ok(Some(text)) => print_reply(&text),
            Ok(None) => {}
            Err(err) => {
                error!("request failed: {err}");
                println!("❌ Error: {err}");
            }
        }
    }
}

fn print_reply(text: &str) {
    println!("📥 Claude's Response:");
    println!("─────────────────────");
    println!("{text}");
    println!("─────────────────────");
}

fn key_guidance() -> String {
    [
        "❌ Error: ANTHROPIC_API_KEY environment variable not set!",
        "",
        "To set it:",
        "  Windows: setx ANTHROPIC_API_KEY \"your-api-key-here\"",
        "  Mac/Linux: export ANTHROPIC_API_KEY=\"your-api-key-here\"",
        "",
    ]
    .join("\n")
}
