mod getters;
mod mk_config;

use std::path::PathBuf;

use crate::process::Phred;

/// Input file and the path its surviving records are written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    input: PathBuf,
    output: PathBuf,
}

impl FilePair {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    pub fn input(&self) -> &PathBuf {
        &self.input
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }
}

pub struct Config {
    qual_trim: Option<u8>,
    qual_filter: Option<usize>,
    min_length: usize,
    filter_ambiguous: bool,
    paranoid: bool,
    phred: Phred,
    paired: bool,
    files: Vec<FilePair>,
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            qual_trim: None,
            qual_filter: None,
            min_length: 0,
            filter_ambiguous: false,
            paranoid: true,
            phred: Phred::default(),
            paired: false,
            files: Vec::new(),
        }
    }
}
