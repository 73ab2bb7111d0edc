use std::ops::AddAssign;

use super::filter::Reject;

/// Record counts for one input file (or one side of a pair)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    n_reads: u64,
    n_written: u64,
    rejected: [u64; Reject::N_REASONS],
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Self) {
        self.n_reads += rhs.n_reads;
        self.n_written += rhs.n_written;
        for (c1, c2) in self.rejected.iter_mut().zip(rhs.rejected) {
            *c1 += c2
        }
    }
}

impl Stats {
    #[inline]
    pub fn add_read(&mut self) {
        self.n_reads += 1
    }

    #[inline]
    pub fn add_written(&mut self) {
        self.n_written += 1
    }

    #[inline]
    pub fn add_reject(&mut self, r: Reject) {
        self.rejected[r.ix()] += 1
    }

    /// Count the outcome of running the filter on one read
    pub fn add_outcome(&mut self, res: Result<(), Reject>) {
        self.add_read();
        if let Err(r) = res {
            self.add_reject(r)
        }
    }

    pub fn n_reads(&self) -> u64 {
        self.n_reads
    }

    pub fn n_written(&self) -> u64 {
        self.n_written
    }

    pub fn n_rejected(&self, r: Reject) -> u64 {
        self.rejected[r.ix()]
    }

    pub fn log_summary(&self, name: &str) {
        let pct = |x: u64| {
            if self.n_reads() > 0 {
                100.0 * (x as f64) / (self.n_reads() as f64)
            } else {
                0.0
            }
        };
        info!(
            "{name}: {} reads, {} written ({:.2}%)",
            self.n_reads(),
            self.n_written(),
            pct(self.n_written())
        );
        for (label, n) in Reject::LABELS.iter().zip(self.rejected) {
            if n > 0 {
                info!("{name}: {n} reads rejected - {label} ({:.2}%)", pct(n))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_outcomes() {
        let mut s = Stats::default();
        s.add_outcome(Ok(()));
        s.add_written();
        s.add_outcome(Err(Reject::TooShort));
        s.add_outcome(Err(Reject::TooShort));
        s.add_outcome(Err(Reject::Alphabet(b'a')));
        assert_eq!(s.n_reads(), 4);
        assert_eq!(s.n_written(), 1);
        assert_eq!(s.n_rejected(Reject::TooShort), 2);
        assert_eq!(s.n_rejected(Reject::Alphabet(b'a')), 1);
        assert_eq!(s.n_rejected(Reject::LowQuality), 0);

        let mut t = Stats::default();
        t.add_outcome(Err(Reject::Alphabet(b'x')));
        t += s;
        assert_eq!(t.n_reads(), 5);
        // Counted per reason, whatever the offending byte
        assert_eq!(t.n_rejected(Reject::Alphabet(b'?')), 2);
    }
}
