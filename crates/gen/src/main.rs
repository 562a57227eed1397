use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use log::*;

#[derive(Parser)]
#[command(name = "reform-gen")]
#[command(about = "Generate reform record code next to Rust source files")]
#[command(version)]
struct Cli {
    /// Files, or directories to search for `.rs` files
    #[arg(required = true)]
    paths: Vec<Utf8PathBuf>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    reform_logging::log_to_stderr_with_default(if cli.debug { "debug" } else { "info" });

    let written = reform_gen::run(&cli.paths)?;
    info!("Wrote {} files", written.len());
    Ok(())
}
