use std::fmt;

use super::{Phred, fastq::FastQRecord};
use crate::cli::Config;

/// Bases with a numeric quality at or below this count as low quality for
/// the quality filter
const LOW_QUAL: i32 = 3;

/// Reason for dropping a read. The alphabet and quality range checks carry
/// the first offending byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reject {
    Alphabet(u8),
    QualityRange(u8),
    Ambiguous,
    LowQuality,
    TooShort,
}

impl Reject {
    pub const N_REASONS: usize = 5;

    /// Description of each reason, indexed by `ix()`
    pub const LABELS: [&'static str; Self::N_REASONS] = [
        "unexpected base",
        "quality out of range",
        "ambiguous base",
        "too many low quality bases",
        "too short",
    ];

    pub fn ix(&self) -> usize {
        match self {
            Self::Alphabet(_) => 0,
            Self::QualityRange(_) => 1,
            Self::Ambiguous => 2,
            Self::LowQuality => 3,
            Self::TooShort => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        Self::LABELS[self.ix()]
    }
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabet(c) | Self::QualityRange(c) => {
                write!(f, "{} '{}'", self.label(), c.escape_ascii())
            }
            _ => write!(f, "{}", self.label()),
        }
    }
}

/// Trim and filter a single read. On success the window of `rec` has been
/// narrowed to the part of the read that should be written out.
///
/// The steps are applied in order, each one working on the window left by
/// the previous ones:
///  1. remove runs of 'N' from both ends
///  2. (paranoid) check all bases are one of A, C, G, T, N
///  3. (paranoid) check all quality values are in the range for the encoding
///  4. (filter ambiguous) reject reads that still contain an 'N'
///  5. (quality trim) trim the 3' end
///  6. (quality filter) reject reads with too many bases of quality <= 3
///  7. reject reads shorter than the minimum length
pub fn filter_record(cfg: &Config, rec: &mut FastQRecord) -> Result<(), Reject> {
    let phred = cfg.phred();

    trim_ambiguous_ends(rec);

    if cfg.paranoid() {
        check_bases(rec)?;
        check_quals(rec, phred)?;
    }

    if cfg.filter_ambiguous() && rec.seq().contains(&b'N') {
        return Err(Reject::Ambiguous);
    }

    if let Some(t) = cfg.qual_trim() {
        let l = quality_trim_point(rec.qual(), t, phred);
        rec.truncate(l)
    }

    if let Some(f) = cfg.qual_filter()
        && count_low_qual(rec.qual(), phred) > f
    {
        return Err(Reject::LowQuality);
    }

    if rec.len() < cfg.min_length() {
        Err(Reject::TooShort)
    } else {
        Ok(())
    }
}

/// Strip leading and trailing 'N's. An all 'N' read ends up empty.
pub fn trim_ambiguous_ends(rec: &mut FastQRecord) {
    let seq = rec.seq();
    let start = seq.iter().position(|c| *c != b'N').unwrap_or(seq.len());
    let end = seq
        .iter()
        .rposition(|c| *c != b'N')
        .map(|i| i + 1)
        .unwrap_or(start);
    rec.trim(start, end)
}

fn check_bases(rec: &FastQRecord) -> Result<(), Reject> {
    match rec
        .seq()
        .iter()
        .find(|c| !matches!(**c, b'A' | b'C' | b'G' | b'T' | b'N'))
    {
        Some(c) => {
            warn!(
                "Found '{}' in sequence of read {}",
                c.escape_ascii(),
                rec.id().escape_ascii()
            );
            Err(Reject::Alphabet(*c))
        }
        None => Ok(()),
    }
}

fn check_quals(rec: &FastQRecord, phred: Phred) -> Result<(), Reject> {
    let r = phred.valid_range();
    match rec.qual().iter().find(|c| !r.contains(*c)) {
        Some(c) => {
            warn!(
                "Found '{}' in quality scores of read {} (phred{} = ('{}' to '{}'))",
                c.escape_ascii(),
                rec.id().escape_ascii(),
                phred.offset(),
                *r.start() as char,
                *r.end() as char,
            );
            Err(Reject::QualityRange(*c))
        }
        None => Ok(()),
    }
}

/// Position at which to cut the read (i.e., the new length) for quality
/// trimming with threshold `t`. This is the `x` that maximizes
/// `sum_{i >= x} (t - q[i])`, as used by BWA, except that the scan does not
/// stop once the sum drops below zero. Trimming only happens if the last
/// base has quality below `t`.
///
/// When several positions share the maximum, the rightmost one (i.e., the
/// longest read) is chosen.
fn quality_trim_point(qual: &[u8], t: u8, phred: Phred) -> usize {
    let t = t as i32;
    match qual.last() {
        Some(c) if phred.qual(*c) < t => {
            let mut sum = 0;
            let mut max_sum = 0;
            let mut cut = qual.len();
            for (i, c) in qual.iter().enumerate().rev() {
                sum += t - phred.qual(*c);
                if sum > max_sum {
                    max_sum = sum;
                    cut = i
                }
            }
            cut
        }
        _ => qual.len(),
    }
}

fn count_low_qual(qual: &[u8], phred: Phred) -> usize {
    qual.iter().filter(|c| phred.qual(**c) <= LOW_QUAL).count()
}
