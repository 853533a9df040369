//! vuez application entry point.
//! Parses the command line, sets up logging and runs the requested command.

use std::path::Path;

use vuez::{
    cli::{get_args, Args, Command},
    constants::TEMPLATE_DIR,
    create::{create_project, CreateOutcome},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the current working directory
/// 2. Creates the project from the bundled template
/// 3. Reports whether the project was created or already existed
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Create { app_name } => {
            let working_dir = std::env::current_dir().map_err(|e| Error::io(".", e))?;
            let renderer = MiniJinjaRenderer::new()?;

            match create_project(&app_name, &working_dir, Path::new(TEMPLATE_DIR), &renderer)? {
                CreateOutcome::AlreadyExists { .. } => {
                    println!("Project '{app_name}' already exists!");
                }
                CreateOutcome::Created { path } => {
                    println!("Project '{app_name}' created successfully in {}.", path.display());
                }
            }
        }
    }
    Ok(())
}
