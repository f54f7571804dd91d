use anyhow::{Context, Result};
use serde::Serialize;

use folio_core::{ContentStore, LogoResolver, SiteConfig};

use crate::cli::{Cli, Commands, ContentKind, ServeArgs};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Init => {
            let store = ContentStore::new(config);
            let created = store.ensure_layout()?;
            print_json(&serde_json::json!({
                "status": "ok",
                "data_root": store.config().content.data_root,
                "created": created,
            }))?;
        }
        Commands::Serve(args) => {
            let config = apply_serve_overrides(config, &args);
            folio_web::serve_web(config, LogoResolver::builtin())?;
        }
        Commands::List(args) => {
            let store = ContentStore::new(config);
            let records = match args.kind {
                ContentKind::Projects => store.projects(),
                ContentKind::Certificates => store.certificates(),
            }
            .context("failed to load content records")?;
            print_json(&records)?;
        }
        Commands::Profile => {
            let profile = ContentStore::new(config)
                .profile()
                .context("failed to load profile")?;
            print_json(&profile)?;
        }
        Commands::Logo(args) => {
            let resolver = LogoResolver::builtin();
            for name in &args.names {
                println!("{}", resolver.resolve(name));
            }
        }
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = SiteConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(root) = &cli.data_root {
        config.content.data_root.clone_from(root);
    }
    if let Some(root) = &cli.static_root {
        config.content.static_root.clone_from(root);
    }
    config.validate()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

fn apply_serve_overrides(mut config: SiteConfig, args: &ServeArgs) -> SiteConfig {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.skip_malformed {
        config.content.skip_malformed = true;
    }
    config
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
