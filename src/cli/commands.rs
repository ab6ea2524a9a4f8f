//! CLI command definitions and handlers

use clap::Subcommand;

use crate::core::client::DictionaryClient;
use crate::core::errors::DictionaryError;
use crate::core::flags::LookupFlags;

/// Commands for the dictionary CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List translation directions supported by the service
    Langs,

    /// Look up a word or phrase in the dictionary
    Lookup {
        /// Word or phrase to search for
        text: String,

        /// Translation direction, e.g. "en-ru"
        #[arg(short, long)]
        lang: String,

        /// Language of auxiliary metadata in the response
        #[arg(long, default_value = "en")]
        ui: String,

        /// Exclude adult and profane results
        #[arg(long)]
        family: bool,

        /// Match by word form instead of exact form only
        #[arg(long)]
        morpho: bool,

        /// Restrict results by part of speech
        #[arg(long)]
        pos_filter: bool,

        /// Raw flags bitmask; overrides the individual flag switches
        #[arg(long)]
        flags: Option<u32>,
    },
}

/// Handle the langs command
pub async fn handle_langs() -> anyhow::Result<()> {
    use tracing::info;

    let client = DictionaryClient::from_env()?;

    info!("Fetching supported translation directions");

    match client.get_langs().await {
        Ok(body) => emit_body(&body),
        Err(e) => {
            report_failure(&e);
            Err(e.into())
        }
    }
}

/// Handle the lookup command
pub async fn handle_lookup(
    text: String,
    lang: String,
    ui: String,
    family: bool,
    morpho: bool,
    pos_filter: bool,
    raw_flags: Option<u32>,
) -> anyhow::Result<()> {
    use tracing::info;

    let client = DictionaryClient::from_env()?;

    let mut flags = LookupFlags::empty();
    if family {
        flags |= LookupFlags::FAMILY;
    }
    if morpho {
        flags |= LookupFlags::MORPHO;
    }
    if pos_filter {
        flags |= LookupFlags::POS_FILTER;
    }
    if let Some(raw) = raw_flags {
        flags = LookupFlags::from_bits_retain(raw);
    }

    info!(
        "Looking up {:?} ({} -> ui {}, flags {})",
        text,
        lang,
        ui,
        flags.bits()
    );

    match client.lookup(&text, &lang, &ui, flags).await {
        Ok(body) => emit_body(&body),
        Err(e) => {
            report_failure(&e);
            Err(e.into())
        }
    }
}

/// Write the raw response body to stdout, unmodified.
fn emit_body(body: &[u8]) -> anyhow::Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body)?;
    stdout.flush()?;
    Ok(())
}

/// Print the service's diagnostic payload to stderr, if the error carried one.
fn report_failure(err: &DictionaryError) {
    if let Some(body) = err.body() {
        if !body.is_empty() {
            eprintln!("Service response: {}", String::from_utf8_lossy(body));
        }
    }
}
