mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use reqwest::Url;
use tracing::debug;

use version_redirect::config::{RedirectConfig, log_path};
use version_redirect::redirect::location::UrlLocation;
use version_redirect::redirect::orchestrator::attempt_redirect;
use version_redirect::redirect::planner::{RedirectDecision, plan_redirect};
use version_redirect::version::catalog::VersionCatalog;
use version_redirect::version::manifest::{
    HttpManifestSource, ManifestSource, resolve_manifest_url,
};
use version_redirect::version::selector::select_closest;

#[derive(Parser)]
#[command(name = "version-redirect")]
#[command(version, about = "Redirect documentation requests to the closest published version")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Documentation root segment (overrides config)
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Manifest URL or path (overrides config)
    #[arg(long, global = true)]
    manifest_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a documentation URL against the published manifest and print
    /// the redirect target, if any
    Resolve { url: String },

    /// Plan a redirect for a path against an explicit version list
    Plan {
        path: String,
        /// Published versions, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        versions: Vec<String>,
    },

    /// Print the published version that should serve VERSION
    Select {
        version: String,
        candidates: Vec<String>,
    },

    /// List the published versions of a documentation site
    Versions {
        /// Site origin the manifest path is resolved against
        origin: String,
    },
}

impl Cli {
    fn redirect_config(&self) -> anyhow::Result<RedirectConfig> {
        let mut config = match &self.config {
            Some(path) => RedirectConfig::load(path)?,
            None => RedirectConfig::default(),
        };
        if let Some(prefix) = &self.prefix {
            config.doc_prefix = prefix.clone();
        }
        if let Some(manifest_url) = &self.manifest_url {
            config.manifest_url = manifest_url.clone();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.then(log_path);
    let _guard = logging::init(cli.verbose, cli.log_json, log_file.as_deref())?;

    let config = cli.redirect_config()?;
    debug!("Using config {:?}", config);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, config: RedirectConfig) -> anyhow::Result<()> {
    match command {
        Command::Resolve { url } => {
            let url = Url::parse(&url).with_context(|| format!("Invalid URL: {}", url))?;
            let location = UrlLocation::new(url);
            let source = HttpManifestSource::new(config.fetch_timeout())?;

            if let Some(target) = attempt_redirect(&source, Some(&location), &config).await {
                println!("{}", target);
            }
        }
        Command::Plan { path, versions } => {
            let catalog = VersionCatalog::from_versions(versions);
            match plan_redirect(&path, &catalog, &config.doc_prefix) {
                RedirectDecision::Redirect { path } => println!("{}", path),
                RedirectDecision::NoRedirect => println!("no redirect"),
            }
        }
        Command::Select {
            version,
            candidates,
        } => match select_closest(&version, candidates) {
            Some(selected) => println!("{}", selected),
            None => anyhow::bail!("No published version can serve {}", version),
        },
        Command::Versions { origin } => {
            let manifest_url = resolve_manifest_url(&origin, &config.manifest_url)?;
            let source = HttpManifestSource::new(config.fetch_timeout())?;
            let catalog = VersionCatalog::from_versions(source.fetch_versions(&manifest_url).await?);

            for line in version_listing(&catalog) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// One line per published version, ascending, with only the final entry
/// marked as latest.
fn version_listing(catalog: &VersionCatalog) -> Vec<String> {
    let last = catalog.len().saturating_sub(1);
    catalog
        .versions()
        .enumerate()
        .map(|(i, version)| {
            if i == last {
                format!("{} (latest)", version)
            } else {
                version.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_listing_marks_only_last_entry_as_latest() {
        let catalog = VersionCatalog::from_versions(["5.2.0", "5.1.0", "latest", "5.2.0"]);

        assert_eq!(
            version_listing(&catalog),
            vec![
                "5.1.0".to_string(),
                "5.2.0".to_string(),
                "5.2.0 (latest)".to_string()
            ]
        );
    }

    #[test]
    fn version_listing_of_empty_catalog_is_empty() {
        let catalog = VersionCatalog::from_versions(["nightly"]);

        assert!(version_listing(&catalog).is_empty());
    }
}
