//! Bag-of-words term counting over a vocabulary shared by two documents.

use std::collections::BTreeMap;

/// Tokens shorter than this are dropped.
pub const MIN_TOKEN_LEN: usize = 2;

/// Splits text into runs of ASCII alphanumerics, keeping runs of at least
/// [`MIN_TOKEN_LEN`] characters.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
}

/// Per-term occurrence counts for a résumé and a job description.
///
/// Terms are keyed in a `BTreeMap`, so enumeration is alphabetical and
/// stable for a given pair of inputs.
#[derive(Debug)]
pub struct TermCounts<'a> {
    counts: BTreeMap<&'a str, (u32, u32)>,
}

impl<'a> TermCounts<'a> {
    /// Builds the shared vocabulary of `resume` and `jd` and counts each term in both.
    pub fn build(resume: &'a str, jd: &'a str) -> Self {
        let mut counts: BTreeMap<&'a str, (u32, u32)> = BTreeMap::new();
        for token in tokenize(resume) {
            counts.entry(token).or_default().0 += 1;
        }
        for token in tokenize(jd) {
            counts.entry(token).or_default().1 += 1;
        }
        Self { counts }
    }

    /// Number of distinct terms across both documents.
    pub fn vocabulary_len(&self) -> usize {
        self.counts.len()
    }

    /// `(term, resume_count, jd_count)` in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, u32, u32)> + '_ {
        self.counts
            .iter()
            .map(|(term, &(resume, jd))| (*term, resume, jd))
    }
}
