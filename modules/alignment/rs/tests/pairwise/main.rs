use optalign_alignment_rs::pairwise::scoring::{self, gaps, symbols};
use optalign_alignment_rs::pairwise::{AlignedPair, Aligner, Strategy};

mod global;
mod local;
mod properties;

pub type Score = i32;

pub fn table(
    rows: &[u8],
    cols: &[u8],
    scores: Vec<Vec<Score>>,
) -> symbols::SubstitutionTable<Score> {
    symbols::SubstitutionTable::new(rows.to_vec(), cols.to_vec(), scores).unwrap()
}

/// Aligner shortcut returning plain (first, second) strings and the optimal score.
pub fn equality(
    equal: Score,
    different: Score,
    gap: Score,
    strategy: Strategy,
) -> impl Fn(&str, &str, usize) -> (Vec<(String, String)>, Score) {
    let aligner = Aligner::new(
        scoring::compose(symbols::Equality::new(equal, different), gaps::Linear::new(gap)),
        strategy,
    );
    move |seq1: &str, seq2: &str, n: usize| {
        let alignments = aligner.find_optimal_alignments(&seq1, &seq2, n).unwrap();
        let score = *alignments.score();
        (alignments.into_iter().map(|x| x.dissolve()).collect(), score)
    }
}

/// Score of the aligned pair recomputed column by column.
pub fn rescore(pair: &AlignedPair, score: impl Fn(u8, u8) -> Score, gap: Score) -> Score {
    pair.columns()
        .map(|(a, b)| if a == b'-' || b == b'-' { gap } else { score(a, b) })
        .sum()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}
