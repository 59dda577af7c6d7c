use clap::{Parser, Subcommand};
use mintlify_migrate::config::{self, SiteConfig};
use mintlify_migrate::detect::SourceLayout;
use mintlify_migrate::migrate::{self, MigrateError};
use mintlify_migrate::output;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mintlify-migrate")]
#[command(about = "Migrate a Docusaurus documentation tree to a Mintlify site")]
#[command(long_about = "\
Migrate a Docusaurus documentation tree to a Mintlify site

Every .md/.mdx file under docs/ is rewritten into Mintlify MDX at the same
relative path, static/ assets are copied into images/, and a docs.json
manifest is generated with Guides, SDKs and Tools tabs.

Source layout:

  my-site/
  ├── migrate.toml                 # Optional settings (see gen-config)
  ├── docusaurus.config.js         # Site title → manifest name
  ├── src/css/custom.css           # --ifm-color-primary → manifest colors
  ├── static/                      # img/, assets/, logo files → images/
  └── docs/
      ├── intro.md                 # Top-level page → Guides / Getting Started
      ├── guides/                  # Child folders → Guides tab groups
      ├── android-core/            # SDK folder → SDKs / Mobile
      ├── cli/                     # Tool folder → Tools
      └── partials/                # Shared includes, not migrated

Ordering: index/readme first, then sidebar_position (pages) and
_category_.json position (folders), then name.

Without --source, docs/ is searched in the current directory, in
input-docusaurus/, and in the parent directory.

Run 'mintlify-migrate gen-config' to generate a documented migrate.toml.")]
#[command(version)]
struct Cli {
    /// Docusaurus docs directory (auto-detected when omitted)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory for the Mintlify site
    #[arg(long, default_value = "mintlify-output", global = true)]
    output: PathBuf,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the docs and write the Mintlify site
    Migrate,
    /// Walk and convert in memory, print the navigation, write nothing
    Check,
    /// Print a stock migrate.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), MigrateError> {
    match cli.command {
        Command::Migrate => {
            let (layout, config) = resolve_inputs(cli.source.as_deref())?;
            println!("==> Migrating {}", layout.docs_dir.display());
            let report = migrate::migrate(&layout, &cli.output, &config)?;
            output::print_migration_output(&report);
        }
        Command::Check => {
            let (layout, config) = resolve_inputs(cli.source.as_deref())?;
            println!("==> Checking {}", layout.docs_dir.display());
            let (report, _) = migrate::check(&layout, &config)?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }
    Ok(())
}

/// Locate the source tree and load its `migrate.toml`.
fn resolve_inputs(source: Option<&Path>) -> Result<(SourceLayout, SiteConfig), MigrateError> {
    let layout = match source {
        Some(docs) => SourceLayout::from_docs_dir(docs),
        None => SourceLayout::detect(Path::new("."))
            .ok_or_else(|| MigrateError::DocsNotFound(PathBuf::from("docs")))?,
    };
    let config = config::load_config(&layout.project_root)?;
    Ok((layout, config))
}

/// Initialize tracing from `-v` count; `RUST_LOG` takes precedence.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "mintlify_migrate=warn",
        1 => "mintlify_migrate=info",
        _ => "mintlify_migrate=debug",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
