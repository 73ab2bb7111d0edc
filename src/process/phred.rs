use std::ops::RangeInclusive;

/// Quality encoding of the input files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phred {
    #[default]
    Phred33,
    Phred64,
}

impl Phred {
    pub fn offset(&self) -> i32 {
        match self {
            Self::Phred33 => 33,
            Self::Phred64 => 64,
        }
    }

    /// Numeric quality of a quality character. Can be negative if the
    /// character is below the offset (only possible without range checks)
    #[inline]
    pub fn qual(&self, c: u8) -> i32 {
        c as i32 - self.offset()
    }

    /// Range of quality characters accepted by the range check
    pub fn valid_range(&self) -> RangeInclusive<u8> {
        match self {
            Self::Phred33 => b'!'..=b'J',
            Self::Phred64 => b';'..=b'h',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        assert_eq!(Phred::Phred33.valid_range(), 33..=74);
        assert_eq!(Phred::Phred64.valid_range(), 59..=104);
    }

    #[test]
    fn numeric_quality() {
        assert_eq!(Phred::Phred33.qual(b'I'), 40);
        assert_eq!(Phred::Phred33.qual(b'#'), 2);
        assert_eq!(Phred::Phred64.qual(b'h'), 40);
        assert_eq!(Phred::Phred64.qual(b'B'), 2);
        assert_eq!(Phred::Phred64.qual(b'#'), -29);
    }
}
