use anyhow::Context;
use clap::Parser;

use supplestore_cli::{Args, OutputFormat, render};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    supplestore_observability::init(args.log_format);

    let outcome = supplestore_cli::run(&args)?;

    let out = match args.output {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&outcome).context("failed to serialize view")?
        }
        OutputFormat::Text => render::text(&outcome),
    };
    println!("{out}");
    Ok(())
}
