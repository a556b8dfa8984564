//! car-catalog CLI
//!
//! Regenerates the versioned car catalog JSON from the bilingual source
//! file and mirrors it into the web tree. Paths are fixed relative to the
//! repository; there are no options beyond `--help` and `--version`.

mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "car-catalog")]
#[command(version, about = "Generate the car catalog with stable IDs", long_about = None)]
struct Cli {}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Plain messages at `info` and above unless `RUST_LOG` says otherwise.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                record.args()
            ),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                record.args()
            ),
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{level}] {}", record.args()),
        })
        .init();
}

fn main() {
    Cli::parse();
    init_logging();

    let today = chrono::Local::now().date_naive();
    let result = commands::default_repo_root()
        .and_then(|root| commands::generate::run_generate(&root, today));

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
