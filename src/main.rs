use anyhow::Context;
use clap::Parser;
use hospital_factory::{Demo, DemoConfig, HospitalFamily};
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hospital-factory",
    version,
    about = "Builds field and capital hospitals through an abstract factory"
)]
struct Cli {
    #[arg(
        long = "family",
        value_parser = HospitalFamily::from_str,
        help = "Run only this family (field or capital); repeat to run several"
    )]
    families: Vec<HospitalFamily>,
    #[arg(long, help = "TOML file describing the scenarios to run")]
    config: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, help = "Do not print the banner")]
    no_banner: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the demo itself
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if !cli.families.is_empty() {
        config = config.only_families(&cli.families);
    }
    if cli.no_banner {
        config.show_banner = false;
    }

    let demo = Demo::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        demo.write_json(&mut out)?;
    } else {
        demo.write_text(&mut out)?;
    }
    out.flush()?;

    Ok(())
}
