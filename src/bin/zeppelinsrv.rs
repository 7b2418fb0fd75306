// src/bin/zeppelinsrv.rs
use anyhow::Result;
use clap::Parser;
use zeppelin::cli::args::ServerArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();

    zeppelin::util::logging::init_logging(args.verbose, env!("CARGO_CRATE_NAME"))?;

    zeppelin::serve(args).await
}
