// src/main.rs
use anyhow::Result;
use clap::Parser;
use zeppelin::cli::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    zeppelin::util::logging::init_logging(args.verbose, env!("CARGO_CRATE_NAME"))?;

    zeppelin::run(args).await
}
