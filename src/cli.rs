//! Command-line interface implementation for vuez.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Arg, ArgAction, CommandFactory, Parser, Subcommand};

/// Command-line arguments structure for vuez.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "vuez: create a new project from the bundled template",
    long_about = None,
    disable_version_flag = true,
    arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version")
    )
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a new project in the current directory
    Create {
        /// Name of the project directory to create
        #[arg(value_name = "APP_NAME")]
        app_name: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the subcommand or its argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::MissingSubcommand
            ) {
                let printed = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if let Err(err) = printed {
                    eprintln!("{err}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
