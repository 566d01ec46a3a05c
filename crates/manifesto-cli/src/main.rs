//! Manifesto CLI - Command-line interface for spoken goal narrations
//!
//! This binary turns a goal form into goal picture prose with a text model,
//! reads it aloud with a speech model, and packages the audio as WAV.

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use manifesto_audio::pcm::SPEECH_SAMPLE_RATE;
use manifesto_cli::commands;
use manifesto_cli::ConfigOverrides;

/// Manifesto - 30-day goal narration
#[derive(Parser)]
#[command(name = "manifesto")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a goal form
    Validate {
        /// Path to the goal form JSON
        #[arg(short, long)]
        form: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the narrative prompt for a goal form
    Prompt {
        /// Path to the goal form JSON
        #[arg(short, long)]
        form: String,
    },

    /// Print an example goal form
    Example,

    /// Generate goal picture prose, and optionally speech, for a goal form
    Generate {
        /// Path to the goal form JSON
        #[arg(short, long)]
        form: String,

        /// Also synthesize speech and write a WAV file
        #[arg(long)]
        speech: bool,

        /// Directory for the WAV file (default: current directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Also write the prose to this file
        #[arg(long)]
        text_out: Option<String>,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Synthesize speech for an existing text file
    Speak {
        /// Path to the text file
        #[arg(short, long)]
        text: String,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Package a raw 16-bit PCM file as WAV
    Convert {
        /// Path to the raw PCM file (interleaved i16 little-endian)
        #[arg(short, long)]
        input: String,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Sample rate of the input in Hz
        #[arg(long, default_value_t = SPEECH_SAMPLE_RATE)]
        sample_rate: u32,

        /// Number of interleaved channels in the input
        #[arg(long, default_value_t = 1)]
        channels: u16,
    },

    /// Print header fields, duration and PCM hash of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Model selection flags; each overrides its environment variable.
#[derive(Args, Debug, Default)]
struct ModelArgs {
    /// Text model name
    #[arg(long)]
    text_model: Option<String>,

    /// Speech model name
    #[arg(long)]
    speech_model: Option<String>,

    /// Prebuilt voice name
    #[arg(long)]
    voice: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl From<ModelArgs> for ConfigOverrides {
    fn from(args: ModelArgs) -> Self {
        Self {
            text_model: args.text_model,
            speech_model: args.speech_model,
            voice: args.voice,
            timeout_secs: args.timeout,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate { form, json } => commands::validate::run(&form, json),
        Commands::Prompt { form } => commands::prompt::run(&form),
        Commands::Example => commands::example::run(),
        Commands::Generate {
            form,
            speech,
            out_dir,
            text_out,
            model,
        } => commands::generate::run(
            &form,
            speech,
            out_dir.as_deref(),
            text_out.as_deref(),
            &model.into(),
        ),
        Commands::Speak { text, out, model } => commands::speak::run(&text, &out, &model.into()),
        Commands::Convert {
            input,
            out,
            sample_rate,
            channels,
        } => commands::convert::run(&input, &out, sample_rate, channels),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
