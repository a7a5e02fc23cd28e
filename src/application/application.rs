use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::console::Console;
use crate::events::TracingSink;
use crate::materializer::{MaterializeError, Materializer};
use crate::parser::StructureError;
use crate::structure::Forest;

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let text = app_config.input.read_to_string().context(ReadInputSnafu {
            input: app_config.input.to_string(),
        })?;

        let console = Console::detect();
        let forest = Forest::parse(&text, &app_config.parser)
            .inspect_err(|error| console.print_structure_error(&text, error))
            .context(InvalidStructureSnafu {
                input: app_config.input.to_string(),
            })?;

        if app_config.plain_preview {
            console.print_indented(&forest);
        } else {
            console.print_preview(&forest);
        }

        if app_config.check_only {
            info!("Check only, nothing will be created");
            console.print_valid(&forest);
            return Ok(());
        }

        let created = Materializer::new(TracingSink)
            .materialize(&forest, &app_config.base)
            .context(CreationSnafu)?;
        console.print_summary(&forest, &created, &app_config.base);

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read the structure from {}", input))]
    ReadInputError {
        input: String,
        source: std::io::Error,
    },
    #[snafu(display("The structure in {} is invalid", input))]
    InvalidStructureError {
        input: String,
        source: StructureError,
    },
    #[snafu(display("Critical failure encountered while creating the structure"))]
    CreationError { source: MaterializeError },
    #[snafu(display("Failed to open the log file {}", path.display()))]
    LogFileError {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
