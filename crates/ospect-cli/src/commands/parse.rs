//! Parse command - run a registry filter over captured show output.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;
use tracing::{debug, info};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Filter name (see `ospect filters`)
    #[arg(short, long)]
    filter: String,

    /// Input file with the captured output (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let filter = ospect_core::registry::lookup(&args.filter).with_context(|| {
        format!(
            "unknown filter '{}'; run `ospect filters` for the list",
            args.filter
        )
    })?;

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    info!("running {} over {} bytes of input", args.filter, text.len());

    let result = filter(&[Value::String(text)])
        .with_context(|| format!("filter '{}' failed", args.filter))?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    if let Some(path) = &args.output {
        fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("result written to {}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
