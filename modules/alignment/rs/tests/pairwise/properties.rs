use optalign_alignment_rs::pairwise::scoring::{self, gaps, symbols};
use optalign_alignment_rs::pairwise::{Aligner, Strategy};
use proptest::prelude::*;

use super::*;

type Scheme = scoring::Delegate<Score, u8, symbols::Equality<Score, u8>, gaps::Linear<Score>>;

fn aligner(strategy: Strategy) -> Aligner<Scheme> {
    Aligner::new(
        scoring::compose(symbols::Equality::new(2, -1), gaps::Linear::new(-2)),
        strategy,
    )
}

fn substitution(a: u8, b: u8) -> Score {
    if a == b {
        2
    } else {
        -1
    }
}

proptest! {
    #[test]
    fn matrices_have_expected_shape(seq1 in "[ACGT]{0,20}", seq2 in "[ACGT]{0,20}") {
        for strategy in [Strategy::Global, Strategy::Local] {
            let matrices = aligner(strategy).matrices(&seq1.as_str(), &seq2.as_str()).unwrap();
            prop_assert_eq!(matrices.shape(), (seq1.len() + 1, seq2.len() + 1));

            let (rows, cols) = matrices.shape();
            let maximum = matrices.scores().cells().map(|(_, x)| *x).max().unwrap();
            match strategy {
                Strategy::Global => {
                    prop_assert_eq!(matrices.optimum(), matrices.scores()[(rows - 1, cols - 1)]);
                }
                Strategy::Local => {
                    prop_assert!(matrices.scores().cells().all(|(_, x)| *x >= 0));
                    prop_assert_eq!(matrices.optimum(), maximum);
                }
            }
        }
    }

    #[test]
    fn global_alignments_are_optimal(
        seq1 in "[ACGT]{0,10}",
        seq2 in "[ACGT]{0,10}",
        n in 0usize..6,
    ) {
        let alignments = aligner(Strategy::Global)
            .find_optimal_alignments(&seq1.as_str(), &seq2.as_str(), n)
            .unwrap();
        prop_assert!(alignments.len() <= n);
        if n > 0 {
            prop_assert!(!alignments.is_empty());
        }

        for pair in alignments.iter() {
            prop_assert_eq!(pair.first().len(), pair.second().len());
            prop_assert_eq!(pair.ungapped_first(), seq1.clone());
            prop_assert_eq!(pair.ungapped_second(), seq2.clone());
            prop_assert_eq!(rescore(pair, substitution, -2), *alignments.score());
        }
        prop_assert!(alignments.pairs().windows(2).all(|x| x[0] > x[1]));
    }

    #[test]
    fn local_alignments_are_optimal(
        seq1 in "[ACGT]{0,10}",
        seq2 in "[ACGT]{0,10}",
        n in 1usize..6,
    ) {
        let alignments = aligner(Strategy::Local)
            .find_optimal_alignments(&seq1.as_str(), &seq2.as_str(), n)
            .unwrap();
        prop_assert!(*alignments.score() >= 0);
        prop_assert_eq!(alignments.is_empty(), *alignments.score() == 0);

        for pair in alignments.iter() {
            prop_assert_eq!(pair.first().len(), pair.second().len());
            prop_assert!(seq1.contains(&pair.ungapped_first()));
            prop_assert!(seq2.contains(&pair.ungapped_second()));
            prop_assert_eq!(rescore(pair, substitution, -2), *alignments.score());
        }
        prop_assert!(alignments.pairs().windows(2).all(|x| x[0] > x[1]));
    }

    #[test]
    fn alignment_is_idempotent(seq1 in "[ACGT]{0,12}", seq2 in "[ACGT]{0,12}", n in 0usize..8) {
        for strategy in [Strategy::Global, Strategy::Local] {
            let aligner = aligner(strategy);
            let (seq1, seq2) = (seq1.as_str(), seq2.as_str());
            let first = aligner.find_optimal_alignments(&seq1, &seq2, n).unwrap();
            let second = aligner.find_optimal_alignments(&seq1, &seq2, n).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
