use std::{
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;
use compress_io::compress::{CompressIo, Reader};

use super::fastq::{FastQError, FastQRecord};

/// Reads FASTQ records one at a time, reusing the same four line buffers.
/// Records borrow from the reader so only one can be alive at any time.
pub struct FastQReader<R> {
    rdr: R,
    buf: [Vec<u8>; 4],
    line: usize,
    n_records: usize,
}

impl FastQReader<BufReader<Reader>> {
    /// Open (possibly compressed) input file
    pub fn open(p: &Path) -> anyhow::Result<Self> {
        let rdr = CompressIo::new()
            .path(p)
            .bufreader()
            .with_context(|| format!("Error opening input file {}", p.display()))?;
        Ok(Self::new(rdr))
    }
}

impl<R: BufRead> FastQReader<R> {
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
            line: 0,
            n_records: 0,
        }
    }

    /// Number of records successfully read so far
    pub fn n_records(&self) -> usize {
        self.n_records
    }

    /// Returns Ok(None) at a clean end of file, i.e., if the stream ends
    /// before the first byte of a new record.
    pub fn read_record(&mut self) -> Result<Option<FastQRecord<'_>>, FastQError> {
        for ix in 0..4 {
            let b = &mut self.buf[ix];
            b.clear();
            if self.rdr.read_until(b'\n', b)? == 0 {
                return if ix == 0 {
                    Ok(None)
                } else {
                    Err(FastQError::Truncated {
                        line: self.line + 1,
                    })
                };
            }
            self.line += 1;
            match ix {
                0 if trim_end(b).first() != Some(&b'@') => {
                    return Err(FastQError::MissingIdMarker { line: self.line });
                }
                2 if b.first() != Some(&b'+') => {
                    return Err(FastQError::MissingSeparator { line: self.line });
                }
                _ => {}
            }
        }

        let id = &trim_end(&self.buf[0])[1..];
        let seq = trim_end(&self.buf[1]);
        let qual = trim_end(&self.buf[3]);
        if seq.len() != qual.len() {
            return Err(FastQError::LengthMismatch {
                id: String::from_utf8_lossy(id).into_owned(),
                seq_len: seq.len(),
                qual_len: qual.len(),
            });
        }
        self.n_records += 1;
        Ok(Some(FastQRecord::make(id, seq, qual)))
    }
}

/// Strip trailing whitespace. Unlike `trim_ascii_end` this also removes
/// vertical tabs, matching C `isspace`
fn trim_end(s: &[u8]) -> &[u8] {
    let l = s
        .iter()
        .rposition(|&c| !matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'))
        .map(|i| i + 1)
        .unwrap_or(0);
    &s[..l]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(s: &str) -> FastQReader<Cursor<Vec<u8>>> {
        FastQReader::new(Cursor::new(s.as_bytes().to_vec()))
    }

    #[test]
    fn read_records() {
        let mut rdr = reader("@r1 extra\nACGT\n+r1\nIIII\n@r2\nGG\n+\n##\n");
        {
            let r = rdr.read_record().unwrap().unwrap();
            assert_eq!(r.id(), b"r1 extra");
            assert_eq!(r.seq(), b"ACGT");
            assert_eq!(r.qual(), b"IIII");
        }
        {
            let r = rdr.read_record().unwrap().unwrap();
            assert_eq!(r.id(), b"r2");
            assert_eq!(r.seq(), b"GG");
        }
        assert!(rdr.read_record().unwrap().is_none());
        assert!(rdr.read_record().unwrap().is_none());
        assert_eq!(rdr.n_records(), 2);
    }

    #[test]
    fn crlf_and_trailing_whitespace() {
        let mut rdr = reader("@r1 \t\r\nACGT  \r\n+\r\nIIII\t\r\n");
        let r = rdr.read_record().unwrap().unwrap();
        assert_eq!(r.id(), b"r1");
        assert_eq!(r.seq(), b"ACGT");
        assert_eq!(r.qual(), b"IIII");
    }

    #[test]
    fn vertical_tab_is_whitespace() {
        let mut rdr = reader("@r1\x0b\nACGT\x0b\n+\nIIII\x0c \n");
        let r = rdr.read_record().unwrap().unwrap();
        assert_eq!(r.id(), b"r1");
        assert_eq!(r.seq(), b"ACGT");
        assert_eq!(r.qual(), b"IIII");
    }

    #[test]
    fn trim_all_whitespace() {
        assert_eq!(trim_end(b" \t\x0b\x0c\r\n"), b"");
        assert_eq!(trim_end(b"A \x0b"), b"A");
        assert_eq!(trim_end(b""), b"");
    }

    #[test]
    fn last_line_without_newline() {
        let mut rdr = reader("@r1\nACGT\n+\nIIII");
        assert_eq!(rdr.read_record().unwrap().unwrap().qual(), b"IIII");
        assert!(rdr.read_record().unwrap().is_none());
    }

    #[test]
    fn empty_input() {
        assert!(reader("").read_record().unwrap().is_none());
    }

    #[test]
    fn missing_id_marker() {
        let e = reader("r1\nACGT\n+\nIIII\n").read_record().unwrap_err();
        assert!(matches!(e, FastQError::MissingIdMarker { line: 1 }));
    }

    #[test]
    fn missing_separator() {
        let e = reader("@r1\nACGT\n-\nIIII\n").read_record().unwrap_err();
        assert!(matches!(e, FastQError::MissingSeparator { line: 3 }));
    }

    #[test]
    fn truncated_record() {
        let mut rdr = reader("@r1\nACGT\n+\nIIII\n@r2\nAC\n");
        assert!(rdr.read_record().unwrap().is_some());
        let e = rdr.read_record().unwrap_err();
        assert!(matches!(e, FastQError::Truncated { line: 7 }));
    }

    #[test]
    fn length_mismatch() {
        let e = reader("@r1\nACGT\n+\nIII\n").read_record().unwrap_err();
        match e {
            FastQError::LengthMismatch {
                id,
                seq_len,
                qual_len,
            } => {
                assert_eq!(id, "r1");
                assert_eq!((seq_len, qual_len), (4, 3));
            }
            _ => panic!("Unexpected error {e}"),
        }
    }

    #[test]
    fn trailing_blank_line_is_not_a_record() {
        let mut rdr = reader("@r1\nACGT\n+\nIIII\n\n");
        assert!(rdr.read_record().unwrap().is_some());
        assert!(matches!(
            rdr.read_record(),
            Err(FastQError::MissingIdMarker { line: 5 })
        ));
    }

    #[test]
    fn blank_header_line() {
        let e = reader("\r\nACGT\n+\nIIII\n").read_record().unwrap_err();
        assert!(matches!(e, FastQError::MissingIdMarker { line: 1 }));
    }
}
