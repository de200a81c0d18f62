//! Local host for the NGO ledger core.
//!
//! # Responsibility
//! - Apply host configuration (env, then flags) and initialize logging once.
//! - Open the configured world-state store and run one invocation.
//! - Print the tagged response as JSON.
//!
//! Exit codes: `0` success response, `1` error response, `2` host setup failure.

use clap::{Args, Parser, Subcommand};
use log::error;
use ngo_ledger_core::db::open_db;
use ngo_ledger_core::{
    init, init_logging, invoke, HostConfig, LedgerStore, MemoryLedgerStore, Response,
    SqliteLedgerStore, StoreBackend,
};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_ERROR_RESPONSE: u8 = 1;
const EXIT_HOST_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "ngo-ledger",
    version,
    about = "Run NGO ledger operations against a local world state"
)]
struct Cli {
    #[command(flatten)]
    host: HostArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct HostArgs {
    /// SQLite world-state file (overrides NGO_LEDGER_DB).
    #[arg(long, value_name = "PATH", conflicts_with = "memory")]
    db: Option<PathBuf>,

    /// Use an ephemeral in-memory world state.
    #[arg(long)]
    memory: bool,

    /// Log level: trace|debug|info|warn|error (overrides NGO_LEDGER_LOG_LEVEL).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (overrides NGO_LEDGER_LOG_DIR).
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the lifecycle init call.
    Init,
    /// Invoke a ledger operation, e.g. `invoke registerNGO ngo1 "Red Cross"`.
    Invoke {
        /// Operation name (case-sensitive).
        function: String,
        /// Positional operation arguments.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl HostArgs {
    fn apply(self, mut config: HostConfig) -> HostConfig {
        if self.memory {
            config.store = StoreBackend::Memory;
        } else if let Some(path) = self.db {
            config.store = StoreBackend::Sqlite(path);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.host.apply(HostConfig::from_env());

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("ngo-ledger: {err}");
            return ExitCode::from(EXIT_HOST_FAILURE);
        }
    }

    let response = match run(&config.store, &cli.command) {
        Ok(response) => response,
        Err(message) => {
            error!("event=host_run module=cli status=error error={message}");
            eprintln!("ngo-ledger: {message}");
            return ExitCode::from(EXIT_HOST_FAILURE);
        }
    };

    match serde_json::to_string(&response) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("ngo-ledger: failed to encode response: {err}");
            return ExitCode::from(EXIT_HOST_FAILURE);
        }
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_ERROR_RESPONSE)
    }
}

fn run(backend: &StoreBackend, command: &Command) -> Result<Response, String> {
    match backend {
        StoreBackend::Memory => {
            let mut store = MemoryLedgerStore::new();
            Ok(execute(&mut store, command))
        }
        StoreBackend::Sqlite(path) => {
            let conn = open_db(path)
                .map_err(|err| format!("cannot open world state `{}`: {err}", path.display()))?;
            let mut store = SqliteLedgerStore::new(&conn);
            Ok(execute(&mut store, command))
        }
    }
}

fn execute<S: LedgerStore>(store: &mut S, command: &Command) -> Response {
    match command {
        Command::Init => init(),
        Command::Invoke { function, args } => invoke(store, function, args),
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, Cli, Command};
    use clap::Parser;
    use ngo_ledger_core::{HostConfig, MemoryLedgerStore, StoreBackend};
    use std::path::PathBuf;

    #[test]
    fn flags_override_environment_config() {
        let cli = Cli::try_parse_from([
            "ngo-ledger",
            "--db",
            "/tmp/state.sqlite3",
            "--log-level",
            "warn",
            "invoke",
            "queryNGO",
            "ngo1",
        ])
        .expect("valid command line");

        let env = HostConfig {
            log_dir: Some(PathBuf::from("/var/log/ngo")),
            ..HostConfig::default()
        };
        let config = cli.host.apply(env);
        assert_eq!(
            config.store,
            StoreBackend::Sqlite(PathBuf::from("/tmp/state.sqlite3"))
        );
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/ngo")));
    }

    #[test]
    fn memory_flag_conflicts_with_db() {
        let result = Cli::try_parse_from(["ngo-ledger", "--memory", "--db", "x.sqlite3", "init"]);
        assert!(result.is_err());
    }

    #[test]
    fn invoke_passes_hyphenated_arguments_through() {
        let cli = Cli::try_parse_from([
            "ngo-ledger",
            "--memory",
            "invoke",
            "registerNGO",
            "ngo-1",
            "--not-a-flag",
        ])
        .expect("valid command line");

        let mut store = MemoryLedgerStore::new();
        let response = execute(&mut store, &cli.command);
        assert!(response.is_success(), "{response:?}");
        assert!(matches!(cli.command, Command::Invoke { ref args, .. } if args.len() == 2));
    }
}
