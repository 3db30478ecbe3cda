use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn parse_migrate_with_globals() {
    let cli = Cli::try_parse_from([
        "migraph",
        "--database",
        "app.duckdb",
        "migrate",
        "--target",
        "v2",
        "-v",
    ])
    .unwrap();

    assert!(cli.global.verbose);
    assert_eq!(cli.global.database, "app.duckdb");
    match cli.command {
        Commands::Migrate(args) => assert_eq!(args.target.as_deref(), Some("v2")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_path_defaults() {
    let cli = Cli::try_parse_from(["migraph", "path"]).unwrap();
    match cli.command {
        Commands::Path(args) => {
            assert!(args.to.is_none());
            assert!(args.from.is_none());
            assert_eq!(args.output, OutputFormat::Text);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_path_from_empty_schema() {
    let cli = Cli::try_parse_from(["migraph", "path", "--from", "", "--to", "v3", "-o", "json"])
        .unwrap();
    match cli.command {
        Commands::Path(args) => {
            assert_eq!(args.from.as_deref(), Some(""));
            assert_eq!(args.to.as_deref(), Some("v3"));
            assert_eq!(args.output, OutputFormat::Json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
