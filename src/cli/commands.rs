//! CLI command implementations
//!
//! `serve` loads the data file before binding; a load failure means the
//! server never starts.

use std::io::Write;
use std::path::Path;

use tracing::Level;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use crate::encoding::{to_indented_vec, RESPONSE_INDENT};
use crate::http_server::HttpServer;
use crate::query::{QueryEngine, QueryParams};
use crate::store::AdNetworkStore;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            data_file,
            port,
        } => {
            let config = Config::resolve(config.as_deref())?.with_overrides(data_file, port)?;
            serve(config)
        }
        Command::Query {
            config,
            data_file,
            params,
        } => {
            let config = Config::resolve(config.as_deref())?.with_overrides(data_file, None)?;
            let mut stdout = std::io::stdout().lock();
            query(&config, &params, &mut stdout)
        }
    }
}

/// Load the data file and serve until the listener fails
pub fn serve(config: Config) -> CliResult<()> {
    let store = load_store(&config.data_file)?;
    let server = HttpServer::with_config(config.http, store);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Run a single query and write the tab-indented result to `out`
pub fn query<W: Write>(config: &Config, args: &[String], out: &mut W) -> CliResult<()> {
    let params = QueryParams::from_args(args)?;
    let store = load_store(&config.data_file)?;

    let documents = store.documents()?;
    let outcome = QueryEngine::execute(&documents, &params)?;

    let body = to_indented_vec(&outcome.documents, RESPONSE_INDENT)
        .map_err(std::io::Error::from)?;
    out.write_all(&body)?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}

fn load_store(data_file: &Path) -> CliResult<AdNetworkStore> {
    AdNetworkStore::load(data_file).map_err(|e| {
        tracing::error!(code = e.code(), error = %e, "cannot load data file");
        e.into()
    })
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_data(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("output.txt");
        fs::write(
            &path,
            r#"[
 {"id": 1, "description": "admob", "value": 30, "platform": "android", "osversion": "9", "appname": "a", "appversion": "1", "countrycode": "de", "adtype": "video"},
 {"id": 2, "description": "unity", "value": 10, "platform": "android", "osversion": "9", "appname": "a", "appversion": "1", "countrycode": "de", "adtype": "video"}
]"#,
        )
        .unwrap();
        path
    }

    fn config_for(data_file: PathBuf) -> Config {
        Config {
            data_file,
            ..Config::default()
        }
    }

    #[test]
    fn test_query_command_prints_results() {
        let dir = TempDir::new().unwrap();
        let config = config_for(write_data(&dir));
        let mut out = Vec::new();

        query(
            &config,
            &["platform=android".to_string(), "osversion=9".to_string()],
            &mut out,
        )
        .unwrap();

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let ids: Vec<i64> = printed
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_query_command_missing_data_file() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path().join("absent.txt"));
        let mut out = Vec::new();

        let result = query(&config, &[], &mut out);
        assert!(matches!(result, Err(CliError::Boot(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_query_command_bad_argument() {
        let dir = TempDir::new().unwrap();
        let config = config_for(write_data(&dir));
        let mut out = Vec::new();

        let result = query(&config, &["id=one".to_string()], &mut out);
        assert!(matches!(result, Err(CliError::Query(_))));
    }

    #[test]
    fn test_serve_fails_before_binding_without_data_file() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path().join("absent.txt"));

        assert!(matches!(serve(config), Err(CliError::Boot(_))));
    }
}
