use clap::Parser;
use std::process::ExitCode;

/// Terminal chat client for Qwen and DeepSeek
#[derive(Parser, Debug)]
#[command(name = "duochat")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Model to chat with (qwen or deepseek); overrides the config default
    #[arg(short, long)]
    model: Option<String>,
}

fn main() -> ExitCode {
    // Pick up API credentials from a .env file if present.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match duochat_cli::cli::run(args.verbose, args.model) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
