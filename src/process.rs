mod counts;
mod fastq;
mod files;
mod filter;
mod paired;
mod phred;
mod read;
mod single;
mod write;

#[cfg(test)]
mod test_utils;

pub use phred::Phred;

use files::open_all;
use paired::process_paired;
use single::process_single;

use super::cli::Config;

/// Trim and filter all input files. Any fatal error (unreadable or
/// malformed input, write failure, paired files of different lengths)
/// aborts processing. Output written up to that point is left on disk.
pub fn process(cfg: &Config) -> anyhow::Result<()> {
    let mut files = open_all(cfg.files())?;

    if cfg.paired() {
        let [s1, s2] = process_paired(cfg, &mut files)?;
        debug!(
            "Paired processing complete: {} + {} reads",
            s1.n_reads(),
            s2.n_reads()
        );
    } else {
        let stats = process_single(cfg, &mut files)?;
        if files.len() > 1 {
            stats.log_summary("Total")
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::*;
    use crate::cli::FilePair;

    fn write_input(dir: &Path, name: &str, data: &str) -> FilePair {
        let input = dir.join(name);
        fs::write(&input, data).unwrap();
        FilePair::new(input, dir.join(format!("{name}.filtered")))
    }

    #[test]
    fn single_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let f = write_input(
            dir.path(),
            "reads.fq",
            "@r1\nNACGTACGTACGN\n+\n#IIIIII#####!\n@r2\nACGTA\n+\nIIIII\n@r3\nACGTACGT\n+\nII#I#I#I\n",
        );
        let cfg = Config::default()
            .with_qual_trim(20)
            .with_min_length(6)
            .with_files(vec![f.clone()]);
        process(&cfg).unwrap();
        let out = fs::read_to_string(f.output()).unwrap();
        assert_eq!(out, "@r1\nACGTAC\n+\nIIIIII\n@r3\nACGTACGT\n+\nII#I#I#I\n");
    }

    #[test]
    fn paired_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let f1 = write_input(
            dir.path(),
            "r_1.fq",
            "@p1/1\r\nACGT\r\n+p1/1\r\nIIII\r\n@p2/1\nACNT\n+\nIIII\n",
        );
        let f2 = write_input(
            dir.path(),
            "r_2.fq",
            "@p1/2\r\nTTGG\r\n+\r\nIIII\r\n@p2/2\nGGGG\n+\nIIII\n",
        );
        let cfg = Config::default()
            .with_paired(true)
            .with_filter_ambiguous(true)
            .with_files(vec![f1.clone(), f2.clone()]);
        process(&cfg).unwrap();
        assert_eq!(
            fs::read_to_string(f1.output()).unwrap(),
            "@p1/1\nACGT\n+\nIIII\n"
        );
        assert_eq!(
            fs::read_to_string(f2.output()).unwrap(),
            "@p1/2\nTTGG\n+\nIIII\n"
        );
    }

    #[test]
    fn paired_desync_keeps_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let rec = "@r\nACGT\n+\nIIII\n";
        let f1 = write_input(dir.path(), "a.fq", &rec.repeat(3));
        let f2 = write_input(dir.path(), "b.fq", &rec.repeat(2));
        let cfg = Config::default()
            .with_paired(true)
            .with_files(vec![f1.clone(), f2.clone()]);
        let e = process(&cfg).unwrap_err();
        assert!(e.to_string().contains("has more records than"));
        // Output files were created; partial output is not cleaned up
        assert!(f1.output().exists());
        assert!(f2.output().exists());
    }

    #[test]
    fn missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let f1 = write_input(dir.path(), "a.fq", "@r\nACGT\n+\nIIII\n");
        let f2 = FilePair::new(dir.path().join("missing.fq"), dir.path().join("missing.out"));
        let cfg = Config::default().with_files(vec![f1.clone(), f2.clone()]);
        let e = process(&cfg).unwrap_err();
        assert!(format!("{e:#}").contains("missing.fq"));
        assert!(!f1.output().exists());
        assert!(!f2.output().exists());
    }
}
