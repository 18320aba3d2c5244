use eyre::{Result, WrapErr};

use optalign_alignment_rs::pairwise::scoring::{self, gaps};
use optalign_alignment_rs::pairwise::{Aligner, Strategy};
use optalign_io_rs::substitution;
use optalign_io_rs::Report;

use crate::Args;

pub type Score = i32;

/// Reads the substitution matrix, aligns both sequences and wraps the optimal alignments
/// into a report.
pub fn run(args: &Args, strategy: Strategy) -> Result<Report<Score>> {
    let table = substitution::Reader::from_path(&args.substitution_matrix)?
        .read::<Score>(args.missing_pair)
        .wrap_err_with(|| {
            format!("Invalid substitution matrix: {}", args.substitution_matrix.display())
        })?;

    let mut aligner = Aligner::new(
        scoring::compose(table, gaps::Linear::new(args.gap_penalty)),
        strategy,
    );
    aligner.with_config(args.traceback());

    let alignments = aligner.find_optimal_alignments(&args.seq1, &args.seq2, args.n)?;
    log::info!(
        "Found {} optimal {strategy} alignment(s) with score {}",
        alignments.len(),
        alignments.score()
    );
    for (ind, pair) in alignments.iter().enumerate() {
        log::debug!("Alignment no. {}: {}", ind + 1, pair.rle());
    }
    Ok(Report::new(strategy, alignments))
}
