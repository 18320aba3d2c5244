use eyre::Result;
use optalign_alignment_rs::pairwise::scoring::{self, gaps, symbols, ScoringModel};
use optalign_alignment_rs::pairwise::{AlignedPair, Aligner, Strategy};
use optalign_alignment_rs::Sequence;

use super::*;

fn dna_model(gap: Score) -> ScoringModel<Score> {
    let table = table(
        b"ACGT",
        b"ACGT",
        vec![
            vec![1, -1, -1, -1],
            vec![-1, 1, -1, -1],
            vec![-1, -1, 1, -1],
            vec![-1, -1, -1, 1],
        ],
    );
    scoring::compose(table, gaps::Linear::new(gap))
}

#[test]
fn test_single_symbol() -> Result<()> {
    let model = scoring::compose(table(b"A", b"A", vec![vec![1]]), gaps::Linear::default());
    let aligner = Aligner::new(model, Strategy::Global);

    let alignments = aligner.find_optimal_alignments(&"A", &"A", 1)?;
    assert_eq!(*alignments.score(), 1);
    assert_eq!(alignments.pairs(), &vec![AlignedPair::new("A", "A")?]);
    assert!(!alignments.truncated());
    Ok(())
}

#[test]
fn test_ties_are_sorted_descending() -> Result<()> {
    let aligner = Aligner::new(dna_model(-1), Strategy::Global);
    let alignments = aligner.find_optimal_alignments(&"AC", &"CA", 2)?;

    assert_eq!(*alignments.score(), -1);
    assert_eq!(
        alignments.pairs(),
        &vec![AlignedPair::new("AC-", "-CA")?, AlignedPair::new("-AC", "CA-")?]
    );
    Ok(())
}

#[test]
fn test_limit_is_respected() {
    let align = equality(0, 0, 0, Strategy::Global);

    let (alignments, score) = align("AC", "AC", 2);
    assert_eq!(score, 0);
    assert_eq!(alignments, pairs(&[("AC", "AC"), ("-AC", "A-C")]));

    // Every monotone path is optimal: 13 distinct alignments in total
    let (alignments, _) = align("AC", "AC", 100);
    assert_eq!(alignments.len(), 13);
    assert!(alignments.windows(2).all(|x| x[0] > x[1]));
}

#[test]
fn test_textbook_example() {
    let align = equality(1, -1, -1, Strategy::Global);
    let (alignments, score) = align("GATTACA", "GCATGCU", 10);

    assert_eq!(score, 0);
    assert_eq!(
        alignments,
        pairs(&[
            ("G-ATTACA", "GCATG-CU"),
            ("G-ATTACA", "GCAT-GCU"),
            ("G-ATTACA", "GCA-TGCU"),
        ])
    );
}

#[test]
fn test_alignments_cover_both_sequences() -> Result<()> {
    let (seq1, seq2) = ("ACCGTTAGC".parse::<Sequence>()?, "CAGTTAC".parse::<Sequence>()?);
    let aligner = Aligner::new(dna_model(-2), Strategy::Global);
    let alignments = aligner.find_optimal_alignments(&seq1, &seq2, 10)?;

    assert!(!alignments.is_empty());
    for pair in alignments.iter() {
        assert_eq!(pair.ungapped_first(), seq1.to_string());
        assert_eq!(pair.ungapped_second(), seq2.to_string());
        let score = rescore(pair, |a, b| if a == b { 1 } else { -1 }, -2);
        assert_eq!(score, *alignments.score());
    }
    Ok(())
}

#[test]
fn test_empty_sequences() -> Result<()> {
    let aligner = Aligner::new(dna_model(-2), Strategy::Global);

    let alignments = aligner.find_optimal_alignments(&"ACG", &"", 3)?;
    assert_eq!(*alignments.score(), -6);
    assert_eq!(alignments.pairs(), &vec![AlignedPair::new("ACG", "---")?]);

    let alignments = aligner.find_optimal_alignments(&"", &"", 3)?;
    assert_eq!(*alignments.score(), 0);
    assert_eq!(alignments.pairs(), &vec![AlignedPair::new("", "")?]);
    Ok(())
}

#[test]
fn test_zero_alignments_requested() -> Result<()> {
    let aligner = Aligner::new(dna_model(-2), Strategy::Global);
    let alignments = aligner.find_optimal_alignments(&"ACGT", &"AGT", 0)?;
    assert!(alignments.is_empty());
    assert_eq!(*alignments.score(), 1);
    Ok(())
}

#[test]
fn test_missing_pair() -> Result<()> {
    let sparse = table(b"AC", b"AC", vec![vec![1, -1], vec![-1, 1]]);

    let aligner = Aligner::new(
        scoring::compose(sparse.clone(), gaps::Linear::default()),
        Strategy::Global,
    );
    let err = aligner.find_optimal_alignments(&"ACN", &"AC", 1).unwrap_err();
    assert!(format!("{err:?}").contains("('N', 'A')"));

    let lenient = sparse.with_missing(symbols::MissingPair::Zero);
    let aligner =
        Aligner::new(scoring::compose(lenient, gaps::Linear::default()), Strategy::Global);
    let alignments = aligner.find_optimal_alignments(&"ACN", &"AC", 1)?;
    assert_eq!(*alignments.score(), 0);
    assert_eq!(alignments.pairs(), &vec![AlignedPair::new("ACN", "AC-")?]);
    Ok(())
}

#[test]
fn test_score_overflow_is_an_error() {
    let scheme = scoring::compose(symbols::Equality::new(1, -1), gaps::Linear::new(i32::MIN));
    let aligner = Aligner::new(scheme, Strategy::Global);

    let err = aligner.find_optimal_alignments(&"AA", &"A", 1).unwrap_err();
    assert!(format!("{err:?}").contains("overflow"), "{err:?}");
}
