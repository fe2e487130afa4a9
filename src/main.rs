use anyhow::Result;
use clap::Parser;
use spamsift::cli::{Cli, Commands};

// Exit code for a message classified as spam, so shells can branch on the
// verdict without parsing output.
const EXIT_SPAM: i32 = 2;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            message,
            file,
            format,
            output,
            config,
            verbosity,
        } => {
            let classify_config = spamsift::commands::classify::ClassifyConfig {
                message,
                file,
                format,
                output,
                config,
                verbosity,
            };
            let result = spamsift::commands::classify::classify_message(classify_config)?;
            if result.is_spam {
                std::process::exit(EXIT_SPAM);
            }
            Ok(())
        }
        Commands::Init { force } => spamsift::commands::init::init_config(force),
        Commands::Rules { format, config } => {
            spamsift::commands::rules::print_rules(format, config)
        }
    }
}
