use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ArgMatches;

use super::{Config, FilePair};
use crate::process::Phred;

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let inputs: Vec<_> = m
            .get_many::<PathBuf>("input")
            .expect("Missing required inputs")
            .map(|p| p.to_owned())
            .collect();

        let paired = m.get_flag("paired");
        if paired && inputs.len() != 2 {
            return Err(anyhow!(
                "Paired mode assumes two file names, {} were given",
                inputs.len()
            ));
        }

        let suffix = m
            .get_one::<String>("suffix")
            .expect("Missing default for suffix");
        if suffix.contains('/') {
            return Err(anyhow!("Suffix cannot contain '/'"));
        }

        let output_dir = match m.get_one::<PathBuf>("outputdir") {
            Some(d) => Some(check_output_dir(d)?),
            None => None,
        };

        let files = inputs
            .into_iter()
            .map(|input| -> anyhow::Result<FilePair> {
                let output = output_path(&input, output_dir, suffix)?;
                debug!("{} -> {}", input.display(), output.display());
                Ok(FilePair::new(input, output))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let phred = if m.get_flag("phred64") {
            Phred::Phred64
        } else {
            Phred::Phred33
        };

        let min_length = m
            .get_one::<usize>("minlength")
            .copied()
            .expect("Missing default for minlength");

        Ok(Self {
            qual_trim: m.get_one::<u8>("softclip").copied(),
            qual_filter: m.get_one::<usize>("qualityfilter").copied(),
            min_length,
            filter_ambiguous: m.get_flag("filterambiguous"),
            paranoid: !m.get_flag("no_paranoid"),
            phred,
            paired,
            files,
        })
    }
}

fn check_output_dir(d: &Path) -> anyhow::Result<&Path> {
    let md = d
        .metadata()
        .with_context(|| format!("Could not stat output directory {}", d.display()))?;
    if md.is_dir() {
        Ok(d)
    } else {
        Err(anyhow!("{} is not a valid directory", d.display()))
    }
}

/// Output file is the input name with `suffix` appended, placed either next to
/// the input or, if given, in `dir`
fn output_path(input: &Path, dir: Option<&Path>, suffix: &str) -> anyhow::Result<PathBuf> {
    let mut name = match dir {
        Some(d) => {
            let base = input
                .file_name()
                .with_context(|| format!("Input path {} has no file name", input.display()))?;
            d.join(base).into_os_string()
        }
        None => input.as_os_str().to_owned(),
    };
    name.push(suffix);
    Ok(PathBuf::from(name))
}
