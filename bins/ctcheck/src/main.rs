// contenttype-rs - HTTP Content-Type parsing and formatting
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use contenttype::parse;
use tracing::debug;

/// Validates a Content-Type header value and prints its canonical form.
///
/// Reads the value from the command line, or from stdin when no argument
/// is given. Exits non-zero when the value does not parse.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Header value to check, e.g. 'text/html; charset=utf-8'
    value: Option<String>,
    /// Also print the media type and each parameter on its own line
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let raw = match args.value {
        Some(value) => value,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading header value from stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_owned()
        }
    };
    debug!(raw = %raw, "parsing header value");

    let media_type = parse(&raw).with_context(|| format!("invalid value: {:?}", raw))?;

    if args.explain {
        println!("media-type: {}", media_type.essence());
        for (name, value) in media_type.params() {
            println!("parameter:  {}={:?}", name, value);
        }
    }

    let canonical = media_type.canonical().context("re-formatting value")?;
    println!("{}", canonical);
    Ok(())
}
