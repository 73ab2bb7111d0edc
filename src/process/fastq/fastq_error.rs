use thiserror::Error;

/// Structural faults in a FASTQ stream. All of these are fatal for the run:
/// skipping a broken record could desynchronize paired files.
#[derive(Debug, Error)]
pub enum FastQError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated FASTQ record (end of file at line {line})")]
    Truncated { line: usize },

    #[error("Bad FASTQ format at line {line} (expected '@')")]
    MissingIdMarker { line: usize },

    #[error("Bad FASTQ format at line {line} (expected '+')")]
    MissingSeparator { line: usize },

    #[error("Sequence and qualities have different lengths ({seq_len} vs {qual_len}) for read {id}")]
    LengthMismatch {
        id: String,
        seq_len: usize,
        qual_len: usize,
    },
}
