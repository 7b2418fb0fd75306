// src/util/logging.rs
use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber for a binary.
///
/// Output goes to stderr; stdout carries response bodies only.
pub fn init_logging(verbose: u8, binary: &str) -> Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["zeppelin", binary] {
        let directive: Directive = format!("{}={}", target, level)
            .parse()
            .with_context(|| format!("Invalid log directive for {}", target))?;
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    Ok(())
}
