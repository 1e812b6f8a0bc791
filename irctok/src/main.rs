use clap::Parser;
use irctok_core::cli::{TokenizeArgs, run};
use irctok_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "irctok",
    version,
    about = "Tokenise content from IRC logs."
)]
struct Cli {
    #[command(flatten)]
    args: TokenizeArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = try_main(cli) {
        eprintln!("irctok error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let config = cli.args.resolve()?;
    init_logging(&config.progress_log)?;

    let summary = run(&config)?;
    if summary.failed > 0 {
        tracing::warn!(
            failed = summary.failed,
            processed = summary.processed,
            "some logs could not be tokenised; see the progress log"
        );
    }
    Ok(())
}
