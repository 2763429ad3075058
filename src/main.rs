use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// dacalc - evaluate integer arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "dacalc")]
#[command(about = "Evaluate integer arithmetic expressions", long_about = None)]
struct Args {
    /// Print the parse tree before the result
    #[arg(short = 't', long)]
    show_tree: bool,

    /// Expression to evaluate (starts the interactive prompt if omitted)
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the level; default to WARN
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(expression) = args.expression {
        return if dacalc::run(&expression, args.show_tree) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match dacalc::start_repl(args.show_tree) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error reading input: {}", error);
            ExitCode::FAILURE
        }
    }
}
