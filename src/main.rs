//! # kprompt CLI
//!
//! Interactive terminal prompts for shell scripts.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use keyprompt::{
    commands::{self, ask, AskArgs, ChoiceArgs, NumberArgs, TextArgs},
    constants::INTERRUPTED_EXIT_CODE,
    logging::Logging,
    PromptError,
};

const GLOBAL_HELP: &str = "\
Keys:
  ENTER          Submit the answer
  BACKSPACE      Delete the last character or digit
  UP / DOWN      Move through options, step numbers
  SPACE          Select an option, pick up an entry to sort
  CTRL+H         Show or hide masked text
  CTRL+D         Cancel (with --cancelable)
  CTRL+C         Abort with exit status 130

Output:
  The prompt is drawn on stderr; the answer is printed on stdout.
  Multiple labels print one per line, codes print as joined digits.

Configuration:
  ~/.config/keyprompt/config     Defaults (see `kprompt config --init`)

Examples:
  name=$(kprompt -q \"Your name?\" text --placeholder Jane)
  kprompt confirm && echo confirmed
  kprompt --keys $'++\\n' number --max 5";

#[derive(Parser)]
#[command(name = "kprompt")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Keyboard-driven terminal prompts for shell scripts")]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Question shown above the prompt
    #[arg(short, long, global = true)]
    question: Option<String>,

    /// Feed keys from this script instead of the keyboard (nothing is drawn)
    #[arg(long, global = true, value_name = "SCRIPT")]
    keys: Option<String>,

    /// Let CTRL+D cancel the prompt
    #[arg(long, global = true)]
    cancelable: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a yes/no question; prints true or false
    Confirm {
        /// Make "no" the answer for ENTER
        #[arg(long)]
        default_no: bool,
    },

    /// Ask for a line of text
    Text {
        /// Mask the input (CTRL+H toggles)
        #[arg(long)]
        hide: bool,

        /// Answer used when nothing is typed
        #[arg(long)]
        default: Option<String>,

        /// Example shown while the input is empty
        #[arg(long)]
        placeholder: Option<String>,

        /// Require ENTER twice to submit
        #[arg(long)]
        double_enter: bool,

        /// Reject empty answers
        #[arg(long)]
        required: bool,
    },

    /// Ask for an integer stepped with +/- or the arrow keys
    Number {
        /// Lowest allowed value
        #[arg(long, allow_hyphen_values = true)]
        min: Option<i64>,

        /// Highest allowed value
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i64>,

        /// Starting value
        #[arg(long, allow_hyphen_values = true)]
        default: Option<i64>,
    },

    /// Pick one (or with --multiple, several) of the given labels
    Choice {
        /// Labels to choose from
        #[arg(required = true)]
        labels: Vec<String>,

        /// Allow selecting several labels with SPACE
        #[arg(short, long)]
        multiple: bool,

        /// Required number of selected labels: N, A..B or A..=B
        #[arg(long, value_name = "COUNT")]
        require: Option<String>,
    },

    /// Reorder the given labels
    Sort {
        /// Labels to sort
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Ask for a fixed-length digit code
    Pin {
        /// Number of digits
        length: usize,

        /// Wait for ENTER after the last digit
        #[arg(long)]
        require_enter: bool,
    },

    /// Show the configuration or create the default file
    Config {
        /// Write ~/.config/keyprompt/config with defaults if missing
        #[arg(long)]
        init: bool,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<PromptError>() {
            Some(PromptError::Cancelled) => {
                eprintln!("cancelled");
                std::process::exit(1);
            }
            Some(PromptError::Interrupted) => {
                eprintln!("{} {err:#}", "error:".red().bold());
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            _ => {
                eprintln!("{} {err:#}", "error:".red().bold());
                std::process::exit(1);
            }
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    Logging::new().with_verbosity(cli.verbose).start()?;

    let args = AskArgs {
        question: cli.question,
        keys: cli.keys,
        cancelable: cli.cancelable,
    };

    match cli.command {
        Commands::Confirm { default_no } => ask::confirm(&args, default_no),

        Commands::Text {
            hide,
            default,
            placeholder,
            double_enter,
            required,
        } => ask::text(
            &args,
            TextArgs {
                hide,
                default,
                placeholder,
                double_enter,
                required,
            },
        ),

        Commands::Number { min, max, default } => {
            ask::number(&args, NumberArgs { min, max, default })
        }

        Commands::Choice {
            labels,
            multiple,
            require,
        } => ask::choice(
            &args,
            ChoiceArgs {
                labels,
                multiple,
                require,
            },
        ),

        Commands::Sort { labels } => ask::sort(&args, labels),

        Commands::Pin {
            length,
            require_enter,
        } => ask::pin(&args, length, require_enter),

        Commands::Config { init } => commands::config(init),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
