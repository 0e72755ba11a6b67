mod commands;

use clap::{Args, Parser, Subcommand};
use hexent::{Action, DEFAULT_ENCODING};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hexent")]
#[command(about = "HTML Hex Entity Encoder/Decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every character to an &#xHH; reference
    Encode(TransformArgs),
    /// Replace &#xHH; references with the characters they name
    Decode(TransformArgs),
    /// Show the reference for each character on its own line
    Demo(TransformArgs),
}

#[derive(Args)]
struct TransformArgs {
    /// Input string (if not provided, reads the file or stdin)
    #[arg(long, short)]
    input: Option<String>,

    /// Input file path
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Output file path (if not provided, prints to stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// File encoding
    #[arg(long, short, default_value = DEFAULT_ENCODING)]
    encoding: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Encode(args)) => run_transform(Action::Encode, args),
        Some(Commands::Decode(args)) => run_transform(Action::Decode, args),
        Some(Commands::Demo(args)) => run_transform(Action::Demo, args),
        None => commands::interactive().await,
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run_transform(action: Action, args: TransformArgs) -> Result<(), Box<dyn std::error::Error>> {
    let TransformArgs {
        input,
        file,
        output,
        encoding,
    } = args;

    commands::transform(
        action,
        input.as_deref(),
        file.as_deref(),
        output.as_deref(),
        &encoding,
        &mut std::io::stdout().lock(),
    )
}
