use clap::Parser;
use tracing::{debug, info};
use vaultcheck::report::EnvReport;

#[derive(Parser)]
#[command(name = "vaultcheck")]
#[command(about = "Confirm that vault-injected environment variables reached this process")]
struct Args {
    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_target(false)
            .compact()
            .init();
        debug!("Verbose logging enabled");
    }

    info!("Capturing process environment...");
    let report = EnvReport::from_process_env();
    debug!("Snapshot holds {} variables", report.len());

    print!("{}", report.render());

    info!("Reported {} VAULT-marked variables", report.marker_lines().len());
    Ok(())
}
