use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spamsift")]
#[command(about = "Rule-based spam message classifier", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single message as spam or legitimate
    Classify {
        /// Message text (reads stdin when neither this nor --file is given)
        message: Option<String>,

        /// Read the message from a file
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rule configuration file (defaults to the nearest .spamsift.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity (show the unclamped score)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective rule set
    Rules {
        /// Output format
        #[arg(long, value_enum, default_value = "toml")]
        format: RulesFormat,

        /// Rule configuration file (defaults to the nearest .spamsift.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RulesFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
