//! Command shell entry point.
//!
//! A thin host around the library: it loads a catalog, reads commands from
//! stdin one line at a time, feeds them to the event handler, and prints one
//! JSON object per command to stdout.
//!
//! # Usage
//!
//! ```text
//! folio-catalog [-c FILE] [CATALOG.json]
//! ```
//!
//! The catalog path on the command line overrides `catalog_path` from the
//! config file.
//!
//! # Output
//!
//! ```text
//! {"render":true,"actions":[{"action":"register_key_bindings"}],"view":{...}}
//! ```
//!
//! `view` is present only when the command changed what would be drawn.
//! Parse errors are reported as `{"error":"..."}` and the shell keeps going.
//!
//! # Host Duties
//!
//! Actions are logged and echoed; the shell does not load images itself.
//! Answer a `load_image` action with `loaded` or `failed`.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use folio_catalog::catalog::{CatalogStore, JsonCatalog};
use folio_catalog::shell::{self, Command};
use folio_catalog::{handle_event, initialize, Action, AppState, Config};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "folio-catalog", version, about = "Browse a portfolio catalog from stdin commands")]
struct Cli {
    /// TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Catalog JSON file, overrides `catalog_path` from the config
    catalog: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio-catalog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }

    folio_catalog::observability::init_tracing(&config);

    let catalog_path = config
        .catalog_path
        .clone()
        .ok_or("no catalog given; pass CATALOG.json or set catalog_path")?;
    let store = CatalogStore::load(&JsonCatalog::new(catalog_path))?;

    tracing::info!(
        entries = store.entries().len(),
        duplicates = store.source_len() - store.entries().len(),
        "catalog loaded"
    );

    let mut app = initialize(&config, store);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    print_view(&mut stdout, &app)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match shell::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(error = %e, "rejected command");
                writeln!(stdout, "{}", json!({ "error": e.to_string() }))?;
                continue;
            }
        };

        match command {
            Command::Event(event) => {
                let (should_render, actions) = handle_event(&mut app, &event);
                for action in &actions {
                    execute_action(action);
                }
                let output = if should_render {
                    json!({
                        "render": true,
                        "actions": actions,
                        "view": app.compute_viewmodel(),
                    })
                } else {
                    json!({ "render": false, "actions": actions })
                };
                writeln!(stdout, "{output}")?;
            }
            Command::Show => print_view(&mut stdout, &app)?,
            Command::Help => writeln!(stdout, "{}", json!({ "help": shell::HELP }))?,
            Command::Quit => break,
        }
        stdout.flush()?;
    }

    // Leave the host in a clean state even if the detail view is still open.
    for action in app.close_detail() {
        execute_action(&action);
    }

    Ok(())
}

fn print_view(out: &mut impl Write, app: &AppState) -> io::Result<()> {
    writeln!(out, "{}", json!({ "view": app.compute_viewmodel() }))?;
    out.flush()
}

/// Executes a single action.
///
/// The shell has no real key listener or image loader; it logs what a
/// graphical host would do here.
fn execute_action(action: &Action) {
    match action {
        Action::RegisterKeyBindings => tracing::debug!("registering detail view keys"),
        Action::ReleaseKeyBindings => tracing::debug!("releasing detail view keys"),
        Action::LoadImage { src } => tracing::debug!(%src, "image load requested"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_flag_and_catalog_path() {
        let cli = Cli::try_parse_from(["folio-catalog", "-c", "folio.toml", "catalog.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("folio.toml")));
        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.json")));

        let cli = Cli::try_parse_from(["folio-catalog"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.catalog, None);
    }

    #[test]
    fn help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["folio-catalog", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["folio-catalog", "a.json", "b.json"]).is_err());
    }
}
