use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::process;

use clap::{value_t, App, Arg};
use log::LevelFilter;
use safe_nodes::Algorithm;

fn open(path: Option<&str>) -> io::Result<Box<dyn BufRead>> {
    match path {
        None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
    }
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let matches = App::new("safe-nodes")
        .version("0.0.1")
        .about("Prints the nodes of a directed graph that no edge can lead out of their SCC")
        .arg(
            Arg::with_name("INPUT").help("graph to read, `-` or nothing for standard input"),
        )
        .arg(
            Arg::with_name("ALGORITHM")
                .short("a")
                .long("algorithm")
                .help("algorithm computing the strongly connected components")
                .takes_value(true)
                .possible_values(&Algorithm::NAMES)
                .default_value(Algorithm::NAMES[0]),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("log more details to stderr, repeat for even more"),
        )
        .get_matches();

    init_logger(matches.occurrences_of("verbose"));
    let algorithm =
        value_t!(matches.value_of("ALGORITHM"), Algorithm).unwrap_or_else(|e| e.exit());

    let result = open(matches.value_of("INPUT"))
        .map_err(safe_nodes::Error::from)
        .and_then(|input| {
            let stdout = io::stdout();
            safe_nodes::run(input, BufWriter::new(stdout.lock()), algorithm)
        });

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
