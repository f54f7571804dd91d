use std::path::Path;

use clap::Parser;

use super::{Cli, Commands, ContentKind};

#[test]
fn serve_accepts_overrides() {
    let cli = Cli::try_parse_from([
        "folio",
        "--data-root",
        "/srv/site/data",
        "serve",
        "--host",
        "0.0.0.0",
        "--port",
        "8080",
        "--skip-malformed",
    ])
    .expect("parse serve");

    assert_eq!(cli.data_root.as_deref(), Some(Path::new("/srv/site/data")));
    match cli.command {
        Commands::Serve(args) => {
            assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
            assert_eq!(args.port, Some(8080));
            assert!(args.skip_malformed);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn global_flags_work_after_the_subcommand() {
    let cli = Cli::try_parse_from(["folio", "list", "certificates", "-vv", "--config", "site.toml"])
        .expect("parse list");
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some(Path::new("site.toml")));
    assert!(matches!(
        cli.command,
        Commands::List(ref args) if args.kind == ContentKind::Certificates
    ));
}

#[test]
fn list_rejects_unknown_kinds() {
    assert!(Cli::try_parse_from(["folio", "list", "posts"]).is_err());
}

#[test]
fn logo_requires_a_name() {
    assert!(Cli::try_parse_from(["folio", "logo"]).is_err());
    let cli = Cli::try_parse_from(["folio", "logo", "Python", "Power BI"]).expect("parse logo");
    match cli.command {
        Commands::Logo(args) => assert_eq!(args.names, vec!["Python", "Power BI"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["folio", "-q", "-v", "profile"]).is_err());
}
