use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::Context;
use compress_io::compress::CompressIo;

use super::fastq::FastQRecord;

pub struct FastQWriter<W: Write> {
    wrt: W,
    n_records: usize,
}

impl FastQWriter<Box<dyn Write>> {
    /// Create output file, truncating any existing file
    pub fn create(p: &Path) -> anyhow::Result<Self> {
        let wrt = CompressIo::new()
            .path(p)
            .bufwriter()
            .with_context(|| format!("Could not open {} for writing", p.display()))?;
        Ok(Self::new(Box::new(wrt)))
    }
}

impl<W: Write> FastQWriter<W> {
    pub fn new(wrt: W) -> Self {
        Self { wrt, n_records: 0 }
    }

    pub fn n_records(&self) -> usize {
        self.n_records
    }

    /// Write the current window of `rec`. The separator line is always a bare '+'
    pub fn write_record(&mut self, rec: &FastQRecord) -> io::Result<()> {
        self.wrt.write_all(b"@")?;
        self.wrt.write_all(rec.id())?;
        self.wrt.write_all(b"\n")?;
        self.wrt.write_all(rec.seq())?;
        self.wrt.write_all(b"\n+\n")?;
        self.wrt.write_all(rec.qual())?;
        self.wrt.write_all(b"\n")?;
        self.n_records += 1;
        Ok(())
    }

    /// Flush any buffered output; errors here would otherwise be lost on drop
    pub fn finish(&mut self) -> io::Result<()> {
        self.wrt.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.wrt
    }
}
