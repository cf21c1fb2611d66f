//! Command-line front end for the external merge sort
//!
//! Sorts each FILE in place, then merges them all into one sorted stream on
//! stdout or the file given with -o.

use clap::{Arg, Command};
use std::process;

use ext_line_sort::{sort, LineEnding, SortConfig, SortResult};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("lmsort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();

    let config = parse_config_from_matches(&matches)?;

    let input_files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    sort(&config, &input_files)
}

fn build_cli() -> Command {
    Command::new("lmsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("lmsort [OPTION]... [FILE]...")
        .about("Sort each FILE in place, then merge all FILEs into one sorted stream")
        .long_about(
            "Sort each FILE's lines in place (byte-lexicographic, ascending), then \
             merge every FILE into a single sorted stream.\n\nThe line ending (LF or \
             CRLF) is detected from the first FILE and applied to every rewritten \
             file and to the merged output.",
        )
        // Input files
        .arg(
            Arg::new("files")
                .help("Input files to sort and merge")
                .num_args(0..)
                .value_name("FILE"),
        )
        // I/O options
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write merged result to FILE instead of standard output")
                .value_name("FILE"),
        )
        // Line-ending options (mutually exclusive)
        .arg(
            Arg::new("crlf")
                .long("crlf")
                .help("Force CRLF line endings instead of detecting them")
                .conflicts_with("lf")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lf")
                .long("lf")
                .help("Force LF line endings instead of detecting them")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detect-lines")
                .long("detect-lines")
                .help("Sample at most N lines of the first FILE when detecting the line ending")
                .value_name("N"),
        )
        // Diagnostics
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Print the detected line ending and file count to stderr")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let line_ending = if matches.get_flag("crlf") {
        Some(LineEnding::Crlf)
    } else if matches.get_flag("lf") {
        Some(LineEnding::Lf)
    } else {
        None
    };

    let detect_lines = match matches.get_one::<String>("detect-lines") {
        Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
            ext_line_sort::SortError::InvalidDetectLimit { limit: raw.clone() }
        })?),
        None => None,
    };

    let config = SortConfig::new()
        .with_output_file(matches.get_one::<String>("output").cloned())
        .with_line_ending(line_ending)
        .with_detect_lines(detect_lines)
        .with_debug(matches.get_flag("debug"));

    config.validate()?;

    Ok(config)
}
