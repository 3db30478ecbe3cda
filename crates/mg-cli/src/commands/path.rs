//! Path command implementation

use anyhow::Result;
use mg_engine::Migrator;
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, PathArgs};
use crate::commands::common::{
    display_schema, load_manifest, open_database, print_steps, resolve_target, StepView,
};

#[derive(Serialize)]
struct PathView {
    from: String,
    to: String,
    steps: Vec<StepView>,
}

/// Execute the path command
///
/// Manifest migrations are registered on an uncommitted transaction, so the
/// database is left exactly as it was.
pub fn execute(args: &PathArgs, global: &GlobalArgs) -> Result<()> {
    let manifest = load_manifest(global)?;
    let to = resolve_target(args.to.as_deref(), &manifest)?;
    let mut conn = open_database(global)?;
    let tx = conn.transaction()?;

    let (from, path) = {
        let mut migrator = Migrator::new(&tx)?;
        for migration in &manifest.migrations {
            migrator.register(migration)?;
        }
        let from = match &args.from {
            Some(from) => from.clone(),
            None => migrator.current_schema()?,
        };
        let path = migrator.find_path(&from, &to)?;
        (from, path)
    };
    tx.rollback()?;

    let steps: Vec<StepView> = path.iter().map(StepView::from).collect();
    match args.output {
        OutputFormat::Text => {
            println!(
                "{} -> {}: {} step{}",
                display_schema(&from),
                display_schema(&to),
                steps.len(),
                if steps.len() == 1 { "" } else { "s" }
            );
            print_steps(&steps);
        }
        OutputFormat::Json => {
            let view = PathView { from, to, steps };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
