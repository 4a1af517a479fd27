mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, compile, CheckArgs, CompileArgs};

/// Formstudio CLI - form designer export toolchain
#[derive(Parser, Debug)]
#[command(name = "formstudio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a form snapshot to HTML/CSS/JS artifacts
    Compile(CompileArgs),

    /// Validate a form snapshot
    Check(CheckArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Compile(args) => compile(args),
        Command::Check(args) => check(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
