//! Status command implementation

use anyhow::Result;
use mg_engine::Migrator;
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::commands::common::{display_schema, open_database};

#[derive(Serialize)]
struct StatusView {
    database: String,
    current_schema: String,
}

/// Execute the status command
pub fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let conn = open_database(global)?;
    let migrator = Migrator::new(&conn)?;
    let current = migrator.current_schema()?;

    match args.output {
        OutputFormat::Text => {
            println!("Database: {}", global.database);
            println!("Current schema: {}", display_schema(&current));
        }
        OutputFormat::Json => {
            let view = StatusView {
                database: global.database.clone(),
                current_schema: current,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
