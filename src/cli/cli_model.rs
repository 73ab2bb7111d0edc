use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, command, value_parser};

use super::log_level::LogLevel;

pub(super) const DEFAULT_SUFFIX: &str = ".filtered";

pub(super) fn cli_model() -> Command {
    command!()
        .arg(
            Arg::new("timestamp")
                .short('X')
                .long("timestamp")
                .value_parser(value_parser!(stderrlog::Timestamp))
                .value_name("GRANULARITY")
                .default_value("none")
                .help("Prepend log entries with a timestamp"),
        )
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("info")
                .help("Set log level"),
        )
        .arg(
            Arg::new("quiet")
                .action(ArgAction::SetTrue)
                .long("quiet")
                .conflicts_with("loglevel")
                .help("Silence all output"),
        )
        .arg(
            Arg::new("softclip")
                .short('q')
                .long("softclip")
                .value_parser(value_parser!(u8))
                .value_name("INT")
                .help("Quality trim threshold [default: no trimming]"),
        )
        .arg(
            Arg::new("qualityfilter")
                .short('f')
                .long("qualityfilter")
                .value_parser(value_parser!(usize))
                .value_name("INT")
                .help("Maximum number of bases with quality <= 3 [default: no filter]"),
        )
        .arg(
            Arg::new("minlength")
                .short('m')
                .long("minlength")
                .value_parser(value_parser!(usize))
                .value_name("INT")
                .default_value("0")
                .help("Minimum read length after trimming"),
        )
        .arg(
            Arg::new("paired")
                .action(ArgAction::SetTrue)
                .short('p')
                .long("paired")
                .help("Paired end reads (requires exactly two input files)"),
        )
        .arg(
            Arg::new("filterambiguous")
                .action(ArgAction::SetTrue)
                .short('n')
                .long("filterambiguous")
                .help("Filter reads containing 'N's"),
        )
        .arg(
            Arg::new("phred64")
                .action(ArgAction::SetTrue)
                .short('z')
                .long("phred64")
                .help("Phred offset of 64 (default 33)"),
        )
        .arg(
            Arg::new("no_paranoid")
                .action(ArgAction::SetTrue)
                .long("no-paranoid")
                .help("Do not check that bases and quality values are in the expected ranges"),
        )
        .arg(
            Arg::new("outputdir")
                .short('d')
                .long("outputdir")
                .value_parser(value_parser!(PathBuf))
                .value_name("DIR")
                .help("Output directory [default: same directory as input]"),
        )
        .arg(
            Arg::new("suffix")
                .short('s')
                .long("suffix")
                .value_parser(value_parser!(String))
                .value_name("STR")
                .default_value(DEFAULT_SUFFIX)
                .help("Suffix appended to output file names"),
        )
        .arg(
            Arg::new("input")
                .value_parser(value_parser!(PathBuf))
                .value_name("INPUT")
                .action(ArgAction::Append)
                .num_args(1..)
                .required(true)
                .help("Input FASTQ file(s)"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_is_consistent() {
        cli_model().debug_assert()
    }
}
