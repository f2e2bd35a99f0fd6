//! bazinga CLI - binary entry point.
//!
//! ```text
//! main() -> Cli::parse -> init_tracing -> load config -> apply log level -> transform words | stdin
//! ```
//!
//! Transformed text goes to stdout; logs go to stderr so the two never mix.

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use std::{
    env,
    io::{self, Read, Write},
};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

use args::Cli;
use bazinga_config::BazingaConfig;
use bazinga_types::{Bazingafier, VowelSet, bazingafy_utf8, count_vowel_runs};

const LOG_ENV: &str = "BAZINGA_LOG";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the subscriber before config is read, so the loader's events are kept.
fn init_tracing() -> FilterHandle {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(bazinga_config::DEFAULT_LOG_LEVEL));
    let (filter, handle) = reload::Layer::new(env_filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
    handle
}

/// `BAZINGA_LOG` takes precedence over `[log] level`.
fn apply_config_level(handle: &FilterHandle, level: &str) {
    if env::var_os(LOG_ENV).is_some() {
        return;
    }
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(err) = handle.reload(filter) {
                tracing::warn!("Failed to apply configured log level: {err}");
            }
        }
        Err(err) => tracing::warn!(level, "Invalid log level in config: {err}"),
    }
}

fn load_config(cli: &Cli) -> Result<BazingaConfig> {
    let config = match &cli.config {
        Some(path) => BazingaConfig::load_from(path)?,
        None => BazingaConfig::load()?.unwrap_or_default(),
    };
    Ok(config)
}

fn vowel_set(cli: &Cli, config: &BazingaConfig) -> VowelSet {
    if cli.ignore_case {
        VowelSet::AsciiCaseInsensitive
    } else {
        config.vowel_set()
    }
}

fn transform_words(words: &[String], bazingafier: Bazingafier, out: &mut impl Write) -> Result<()> {
    for word in words {
        tracing::debug!(
            word = %word,
            runs = count_vowel_runs(word, bazingafier.vowels()),
            "Transforming word"
        );
        writeln!(out, "{}", bazingafier.apply(word))?;
    }
    Ok(())
}

/// Newlines are never vowels, so each line is transformed independently.
fn transform_stdin(vowels: VowelSet, input: &mut impl Read, out: &mut impl Write) -> Result<()> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;
    tracing::debug!(bytes = bytes.len(), "Read standard input");

    let transformed = bazingafy_utf8(&bytes, vowels).context("cannot transform standard input")?;
    out.write_all(transformed.as_bytes())?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_handle = init_tracing();
    let config = load_config(&cli)?;
    apply_config_level(&log_handle, config.log_level());

    let vowels = vowel_set(&cli, &config);
    tracing::debug!(vowels = %vowels, words = cli.words.len(), "Starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.words.is_empty() {
        transform_stdin(vowels, &mut io::stdin().lock(), &mut out)?;
    } else {
        transform_words(&cli.words, Bazingafier::new(vowels), &mut out)?;
    }
    out.flush().context("failed to flush standard output")?;
    Ok(())
}
