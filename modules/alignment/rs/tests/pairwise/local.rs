use eyre::Result;
use optalign_alignment_rs::pairwise::scoring::{self, gaps};
use optalign_alignment_rs::pairwise::{AlignedPair, Aligner, Strategy};

use super::*;

#[test]
fn test_poor_prefix_is_excluded() -> Result<()> {
    let model = scoring::compose(
        table(
            b"ACGT",
            b"ACGT",
            vec![
                vec![2, -1, -1, -1],
                vec![-1, 2, -1, -1],
                vec![-1, -1, 2, -1],
                vec![-1, -1, -1, 2],
            ],
        ),
        gaps::Linear::new(-2),
    );
    let aligner = Aligner::new(model, Strategy::Local);

    let alignments = aligner.find_optimal_alignments(&"TTTTACGT", &"ACGT", 5)?;
    assert_eq!(*alignments.score(), 8);
    assert_eq!(alignments.pairs(), &vec![AlignedPair::new("ACGT", "ACGT")?]);
    Ok(())
}

#[test]
fn test_textbook_example() {
    let align = equality(3, -3, -2, Strategy::Local);
    let (alignments, score) = align("TGTTACGG", "GGTTGACTA", 5);
    assert_eq!(score, 13);
    assert_eq!(alignments, pairs(&[("GTT-AC", "GTTGAC")]));
}

#[test]
fn test_no_positive_score() {
    let align = equality(1, -1, -1, Strategy::Local);

    let (alignments, score) = align("AAAA", "CCCC", 5);
    assert!(alignments.is_empty());
    assert_eq!(score, 0);

    let (alignments, score) = align("", "ACGT", 5);
    assert!(alignments.is_empty());
    assert_eq!(score, 0);
}

#[test]
fn test_repeated_hits_are_deduplicated() {
    let align = equality(1, -1, -1, Strategy::Local);
    let (alignments, score) = align("ACxAC", "AC", 5);
    assert_eq!(score, 2);
    assert_eq!(alignments, pairs(&[("AC", "AC")]));
}

#[test]
fn test_alignments_are_substrings() {
    let align = equality(2, -3, -2, Strategy::Local);
    let (seq1, seq2) = ("CCTTGACGATTAA", "GGGACGTTA");
    let (alignments, score) = align(seq1, seq2, 10);

    assert!(score > 0);
    assert!(!alignments.is_empty());
    for (first, second) in alignments {
        let pair = AlignedPair::new(first, second).unwrap();
        assert!(seq1.contains(&pair.ungapped_first()));
        assert!(seq2.contains(&pair.ungapped_second()));
        assert_eq!(rescore(&pair, |a, b| if a == b { 2 } else { -3 }, -2), score);
    }
}
