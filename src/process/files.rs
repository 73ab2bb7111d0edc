use std::{
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use compress_io::compress::Reader;

use super::{read::FastQReader, write::FastQWriter};
use crate::cli::FilePair;

pub type InputFile = FastQFile<BufReader<Reader>, Box<dyn Write>>;

/// An input FASTQ stream together with the output stream for its surviving
/// records. Both handles are closed when this is dropped.
pub struct FastQFile<R: BufRead, W: Write> {
    pub(super) rdr: FastQReader<R>,
    pub(super) wrt: FastQWriter<W>,
    pub(super) input: PathBuf,
    pub(super) output: PathBuf,
}

impl<R: BufRead, W: Write> FastQFile<R, W> {
    pub fn new(rdr: FastQReader<R>, wrt: FastQWriter<W>, input: PathBuf, output: PathBuf) -> Self {
        Self {
            rdr,
            wrt,
            input,
            output,
        }
    }

    /// Flush the output. Must be called once input is exhausted
    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.wrt
            .finish()
            .with_context(|| format!("Write to {} failed", self.output.display()))?;
        debug!(
            "{}: read {} records, wrote {} records to {}",
            self.input.display(),
            self.rdr.n_records(),
            self.wrt.n_records(),
            self.output.display()
        );
        Ok(())
    }
}

/// Open all input files, and then all output files. If anything fails, the
/// handles opened so far are dropped (and so closed) before the error is
/// returned. As inputs are opened first, no output file is created (or
/// truncated) if an input is missing.
pub fn open_all(files: &[FilePair]) -> anyhow::Result<Vec<InputFile>> {
    let readers = files
        .iter()
        .map(|f| FastQReader::open(f.input()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    debug!("Opened {} input file(s)", readers.len());

    let writers = files
        .iter()
        .map(|f| FastQWriter::create(f.output()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(readers
        .into_iter()
        .zip(writers)
        .zip(files)
        .map(|((rdr, wrt), f)| {
            FastQFile::new(rdr, wrt, f.input().to_owned(), f.output().to_owned())
        })
        .collect())
}
