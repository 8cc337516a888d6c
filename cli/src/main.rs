use clap::Parser;

use abby_post::{Cli, UreqTransport};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    abby_post::init_logging(&cli.log_level);

    let transport = UreqTransport::new();
    let stdout = std::io::stdout();
    abby_post::run(&cli, &transport, &mut stdout.lock())?;
    Ok(())
}
