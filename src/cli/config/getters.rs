use super::{Config, FilePair};
use crate::process::Phred;

impl Config {
    pub fn qual_trim(&self) -> Option<u8> {
        self.qual_trim
    }

    pub fn qual_filter(&self) -> Option<usize> {
        self.qual_filter
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn filter_ambiguous(&self) -> bool {
        self.filter_ambiguous
    }

    pub fn paranoid(&self) -> bool {
        self.paranoid
    }

    pub fn phred(&self) -> Phred {
        self.phred
    }

    pub fn paired(&self) -> bool {
        self.paired
    }

    pub fn files(&self) -> &[FilePair] {
        self.files.as_ref()
    }
}

// Builder style setters so that tests can put together a configuration
// without going through the command line
#[cfg(test)]
impl Config {
    pub fn with_qual_trim(mut self, x: u8) -> Self {
        self.qual_trim = Some(x);
        self
    }

    pub fn with_qual_filter(mut self, x: usize) -> Self {
        self.qual_filter = Some(x);
        self
    }

    pub fn with_min_length(mut self, x: usize) -> Self {
        self.min_length = x;
        self
    }

    pub fn with_filter_ambiguous(mut self, x: bool) -> Self {
        self.filter_ambiguous = x;
        self
    }

    pub fn with_paranoid(mut self, x: bool) -> Self {
        self.paranoid = x;
        self
    }

    pub fn with_phred(mut self, x: Phred) -> Self {
        self.phred = x;
        self
    }

    pub fn with_paired(mut self, x: bool) -> Self {
        self.paired = x;
        self
    }

    pub fn with_files(mut self, files: Vec<FilePair>) -> Self {
        self.files = files;
        self
    }
}
