//! Migrate command implementation

use anyhow::{Context, Result};
use mg_engine::ensure_schema;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::commands::common::{
    display_schema, load_manifest, open_database, print_steps, resolve_target, StepView,
};

/// Execute the migrate command
pub fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let manifest = load_manifest(global)?;
    let target = resolve_target(args.target.as_deref(), &manifest)?;
    let mut conn = open_database(global)?;

    if global.verbose {
        eprintln!(
            "[verbose] {} migration(s) registered from {}",
            manifest.migrations.len(),
            manifest.root.display()
        );
    }

    let applied = ensure_schema(&mut conn, &manifest.migrations, &target)
        .with_context(|| format!("Failed to migrate {} to '{target}'", global.database))?;

    if applied.is_empty() {
        println!("Schema already at {}", display_schema(&target));
        return Ok(());
    }

    println!(
        "Applied {} migration{}:",
        applied.len(),
        if applied.len() == 1 { "" } else { "s" }
    );
    let steps: Vec<StepView> = applied.iter().map(StepView::from).collect();
    print_steps(&steps);
    println!("Schema is now at {}", display_schema(&target));
    Ok(())
}
