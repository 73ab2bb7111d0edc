use std::io::{BufRead, Write};

use anyhow::Context;

use super::{counts::Stats, files::FastQFile, filter::filter_record};
use crate::cli::Config;

/// Process two mate files in lockstep. A pair is written only if both reads
/// pass the filters; otherwise both are dropped.
///
/// Once one file runs out, the next read from the other must also hit end of
/// file. Anything else means the files have different numbers of records,
/// which is a fatal error.
pub fn process_paired<R: BufRead, W: Write>(
    cfg: &Config,
    files: &mut [FastQFile<R, W>],
) -> anyhow::Result<[Stats; 2]> {
    let n = files.len();
    let [left, right] = files else {
        return Err(anyhow!(
            "Paired mode requires exactly two input files, got {n}"
        ));
    };
    info!(
        "Processing pair ({}, {})",
        left.input.display(),
        right.input.display()
    );

    let mut stats = [Stats::default(), Stats::default()];
    let mut n_pairs = 0;

    loop {
        let r1 = left
            .rdr
            .read_record()
            .with_context(|| format!("Error reading from {}", left.input.display()))?;
        let r2 = right
            .rdr
            .read_record()
            .with_context(|| format!("Error reading from {}", right.input.display()))?;

        let (mut rec1, mut rec2) = match (r1, r2) {
            (Some(a), Some(b)) => (a, b),
            (None, None) => break,
            (Some(_), None) => return Err(more_records(left, right)),
            (None, Some(_)) => return Err(more_records(right, left)),
        };

        let res1 = filter_record(cfg, &mut rec1);
        let res2 = filter_record(cfg, &mut rec2);
        stats[0].add_outcome(res1);
        stats[1].add_outcome(res2);

        if res1.is_ok() && res2.is_ok() {
            left.wrt
                .write_record(&rec1)
                .with_context(|| format!("Write to {} failed", left.output.display()))?;
            right
                .wrt
                .write_record(&rec2)
                .with_context(|| format!("Write to {} failed", right.output.display()))?;
            stats[0].add_written();
            stats[1].add_written();
            n_pairs += 1;
        }
    }

    left.finish()?;
    right.finish()?;
    stats[0].log_summary(&left.input.display().to_string());
    stats[1].log_summary(&right.input.display().to_string());
    info!("{n_pairs} read pairs written");
    Ok(stats)
}

fn more_records<R: BufRead, W: Write>(
    longer: &FastQFile<R, W>,
    shorter: &FastQFile<R, W>,
) -> anyhow::Error {
    anyhow!(
        "{} has more records than {}",
        longer.input.display(),
        shorter.input.display()
    )
}
