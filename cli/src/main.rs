use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tutorbook_cli::check::{check_lines, write_reports};
use tutorbook_cli::commands::cli;
use tutorbook_cli::repl::run_repl;
use tutorbook_cli::session::{render_outcome, Session};
use tutorbook_core::config::{AppConfig, LoggingConfig};
use tutorbook_core::error::{self, CliError};

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

fn main() {
    let exit = match real_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let cfg = tutorbook_core::config::load_default().map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Config)?;

    let data_file = resolve_data_file(&args, &cfg);
    tracing::debug!(data_file = %data_file.display(), "resolved data file");

    match args.command.unwrap_or(cli::Commands::Repl) {
        cli::Commands::Repl => {
            let mut session = Session::open(data_file)?;
            let stdin = std::io::stdin();
            let prompt = atty::is(atty::Stream::Stdin);
            run_repl(&mut session, stdin.lock(), &mut std::io::stdout(), prompt)?;
            Ok(0)
        }
        cli::Commands::Exec(lines) => {
            let mut session = Session::open(data_file)?;
            let mut out = std::io::stdout();
            for line in &lines.lines {
                let outcome = session.handle_line(line)?;
                render_outcome(&mut out, &outcome)?;
                if outcome.exit {
                    break;
                }
            }
            Ok(0)
        }
        cli::Commands::Check(lines) => {
            let reports = check_lines(&lines.lines);
            let all_ok = write_reports(&mut std::io::stdout(), &reports)?;
            Ok(if all_ok { 0 } else { 2 })
        }
    }
}

fn resolve_data_file(args: &cli::Args, cfg: &AppConfig) -> PathBuf {
    args.data_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.storage.data_file))
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 2: rejected command line
    // 3: command could not be applied to the book
    // 11: config error
    // 20: storage / IO error
    // 50: internal/uncategorized
    match e {
        error::CliError::Parse(_) => 2,
        error::CliError::Command(_) => 3,
        error::CliError::Config(_) => 11,
        error::CliError::Storage(_) => 20,
        error::CliError::Io(_) => 20,
        error::CliError::Anyhow(_) => 50,
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if let Some(path) = logging.log_file_path() {
        let (dir, name) = match (path.parent(), path.file_name()) {
            (Some(dir), Some(name)) => (dir.to_path_buf(), name.to_os_string()),
            _ => return Err(format!("invalid log file path: {}", path.display())),
        };
        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let appender = tracing_appender::rolling::never(dir, name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
