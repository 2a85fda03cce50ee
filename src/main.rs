use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use squidicons::{generate_icons_with, DriverConfig};

/// Render the SlopSquid extension icons into ./icons
#[derive(Parser, Debug)]
#[command(name = "squidicons", version, about)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = DriverConfig::default();
    generate_icons_with(&config, |icon| {
        if !cli.quiet {
            println!("Created {}", icon.file_name());
        }
    })
    .with_context(|| format!("generating icons in {}", config.out_dir.display()))?;

    if !cli.quiet {
        println!("🦑 All icons created successfully!");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("squidicons failed: {:#}", e);
        std::process::exit(1);
    }
}
