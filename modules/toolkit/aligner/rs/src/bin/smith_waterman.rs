use eyre::Result;

use optalign_aligner_rs::{init_logger, run, Args};
use optalign_alignment_rs::pairwise::Strategy;

fn main() -> Result<()> {
    init_logger();

    let args = Args::parse_for(Strategy::Local)?;
    let report = run(&args, Strategy::Local)?;
    report.emit(&args.output_dir, &args.output)?;
    Ok(())
}
