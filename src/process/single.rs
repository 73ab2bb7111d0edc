use std::io::{BufRead, Write};

use anyhow::Context;

use super::{counts::Stats, files::FastQFile, filter::filter_record};
use crate::cli::Config;

/// Process each file independently, one after the other. The first fatal
/// error stops the run; output already written for earlier files is kept.
pub fn process_single<R: BufRead, W: Write>(
    cfg: &Config,
    files: &mut [FastQFile<R, W>],
) -> anyhow::Result<Stats> {
    let mut total = Stats::default();
    for f in files.iter_mut() {
        total += process_file(cfg, f)?;
    }
    Ok(total)
}

fn process_file<R: BufRead, W: Write>(
    cfg: &Config,
    f: &mut FastQFile<R, W>,
) -> anyhow::Result<Stats> {
    info!("Processing {}", f.input.display());
    let mut stats = Stats::default();

    while let Some(mut rec) = f
        .rdr
        .read_record()
        .with_context(|| format!("Error reading from {}", f.input.display()))?
    {
        let res = filter_record(cfg, &mut rec);
        stats.add_outcome(res);
        if res.is_ok() {
            f.wrt
                .write_record(&rec)
                .with_context(|| format!("Write to {} failed", f.output.display()))?;
            stats.add_written()
        }
    }
    f.finish()?;
    stats.log_summary(&f.input.display().to_string());
    Ok(stats)
}
