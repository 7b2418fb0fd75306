// src/bin/zeppelinfmt.rs
use anyhow::Result;
use clap::Parser;
use zeppelin::cli::args::FmtArgs;

fn main() -> Result<()> {
    let args = FmtArgs::parse();

    zeppelin::util::logging::init_logging(args.verbose, env!("CARGO_CRATE_NAME"))?;

    let json = zeppelin::format_note(&args)?;
    println!("{}", json);
    Ok(())
}
