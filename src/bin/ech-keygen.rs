use anyhow::Context;
use clap::{CommandFactory, Parser};
use ech_keygen::{default_output_path, generate_ech_pem, resolve_config_id};
use log::{debug, info};
use std::path::PathBuf;

/// Generate an X25519 ECH key and its ECHConfigList
#[derive(Parser)]
#[command(name = "ech-keygen")]
struct Cli {
    /// Server name, published as the ECHConfig public_name
    #[arg(short, long)]
    server_name: String,

    /// ECH config ID (uint8); random when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    id: Option<i64>,

    /// Output file [default: <server-name>.pem.ech]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // No arguments at all: show usage and succeed
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();

    if cli.server_name.is_empty() {
        anyhow::bail!("Server name is required");
    }

    let id = resolve_config_id(cli.id)?;
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(default_output_path(&cli.server_name)));
    debug!("config id {} for {}", id, cli.server_name);

    let pem = generate_ech_pem(id, &cli.server_name).context("Failed to generate ECH key")?;

    std::fs::write(&output, &pem)
        .with_context(|| format!("Failed to write to file {}", output.display()))?;

    info!("wrote {} bytes to {}", pem.len(), output.display());
    println!("ECH key and config written to {}", output.display());
    Ok(())
}
