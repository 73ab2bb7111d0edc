mod fastq_error;
mod fastq_record;

pub use fastq_error::FastQError;
pub use fastq_record::FastQRecord;
