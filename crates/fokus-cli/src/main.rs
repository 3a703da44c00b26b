use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod intent;
mod render;
mod ui;

const EXIT_WORDS: &[&str] = &["exit", "quit", "q"];

#[derive(Parser)]
#[command(name = "fokus", version, about = "Terminal Pomodoro timer driven by free-text commands")]
struct Cli {
    /// Timer length used when a start command carries no duration.
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u64).range(1..=120))]
    default_minutes: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fokus=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(default_minutes = cli.default_minutes, "starting fokus");

    let mut app = app::App::new();
    ui::print_welcome();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}you:{} ", ui::GREEN, ui::RESET);
        std::io::stdout().flush()?;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break; // EOF
                };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if EXIT_WORDS.contains(&input.to_lowercase().as_str()) {
                    break;
                }
                app.handle(intent::classify(input, cli.default_minutes));
            }
            _ = tokio::signal::ctrl_c() => {
                ui::print_interrupt_hint();
            }
        }
    }

    app.shutdown();
    ui::print_goodbye();
    Ok(())
}
