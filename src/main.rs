use clap::Parser;
use rolltrack::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(e) = rolltrack::logging::init(cli.verbosity()) {
        eprintln!("[rolltrack] Warning: {}", e);
    }
    cli.run()
}
