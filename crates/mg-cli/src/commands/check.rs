//! Check command implementation

use anyhow::Result;
use mg_core::MigrationGraph;

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::common::{display_schema, load_manifest, ExitCode};

/// Execute the check command
///
/// Works on the manifest alone; the database is never opened.
pub fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let manifest = load_manifest(global)?;
    let target = args.target.clone().or_else(|| manifest.target.clone());
    let graph = MigrationGraph::build(manifest.migrations);

    println!(
        "{} migration{} over {} schema{}",
        graph.len(),
        if graph.len() == 1 { "" } else { "s" },
        graph.schemas().len(),
        if graph.schemas().len() == 1 { "" } else { "s" }
    );

    for cycle in graph.cycles() {
        log::warn!("Migration graph contains a cycle through: {}", cycle.join(", "));
        println!("  warning: cycle through {}", cycle.join(", "));
    }

    let Some(target) = target else {
        if global.verbose {
            eprintln!("[verbose] No target declared, skipping reachability check");
        }
        return Ok(());
    };

    match graph.find_path("", &target) {
        Some(path) => {
            println!(
                "  ok: {} reachable from an empty database in {} step{}",
                display_schema(&target),
                path.len(),
                if path.len() == 1 { "" } else { "s" }
            );
            Ok(())
        }
        None => {
            eprintln!(
                "  error: {} is not reachable from an empty database",
                display_schema(&target)
            );
            let reachable = graph.reachable_from("");
            if !reachable.is_empty() {
                eprintln!("  reachable schemas: {}", reachable.join(", "));
            }
            Err(ExitCode(1).into())
        }
    }
}
