use std::ops::Range;

/// One FASTQ read borrowed from the line buffers of a `FastQReader`.
///
/// Sequence and quality are viewed through a single `[start, end)` window so
/// trimming never copies and the two always have the same length.
#[derive(Debug)]
pub struct FastQRecord<'a> {
    id: &'a [u8],
    seq: &'a [u8],
    qual: &'a [u8],
    window: Range<usize>,
}

impl<'a> FastQRecord<'a> {
    /// `seq` and `qual` must have the same length
    pub(in crate::process) fn make(id: &'a [u8], seq: &'a [u8], qual: &'a [u8]) -> Self {
        debug_assert_eq!(seq.len(), qual.len());
        Self {
            id,
            seq,
            qual,
            window: 0..seq.len(),
        }
    }

    #[inline]
    pub fn id(&self) -> &[u8] {
        self.id
    }

    #[inline]
    pub fn seq(&self) -> &[u8] {
        &self.seq[self.window.clone()]
    }

    #[inline]
    pub fn qual(&self) -> &[u8] {
        &self.qual[self.window.clone()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Narrow the window to `[start, end)`, relative to the current window
    pub fn trim(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end <= self.len(),
            "Trim range {start}..{end} outside of window of length {}",
            self.len()
        );
        let s = self.window.start;
        self.window = (s + start)..(s + end);
    }

    /// Keep only the first `len` bases of the current window
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.trim(0, len.min(self.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_is_relative_to_window() {
        let mut r = FastQRecord::make(b"r1", b"NACGTN", b"!IIII!");
        r.trim(1, 5);
        assert_eq!(r.seq(), b"ACGT");
        assert_eq!(r.qual(), b"IIII");
        r.trim(1, 3);
        assert_eq!(r.seq(), b"CG");
        r.truncate(1);
        assert_eq!(r.seq(), b"C");
        assert_eq!(r.qual(), b"I");
        r.truncate(10);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn trim_to_empty() {
        let mut r = FastQRecord::make(b"r1", b"NNN", b"!!!");
        r.trim(3, 3);
        assert!(r.is_empty());
        assert_eq!(r.qual(), b"");
    }

    #[test]
    #[should_panic]
    fn trim_outside_window() {
        let mut r = FastQRecord::make(b"r1", b"ACGT", b"IIII");
        r.trim(2, 5);
    }
}
