use crate::report::{Action, Format};
use clap::{App, Arg};

pub struct Args {
    pub action: Action,
    pub input_file: String,
    pub format: Format,

    /// Number of times `-v` was given.
    pub verbosity: u64,
}

impl Args {
    pub fn parse() -> Self {
        let matches = App::new("ferry_stats")
            .version("0.1.0")
            .about("Summarises ferry sailing performance from a sailing record file")
            .arg(Arg::with_name("action")
                .takes_value(true).required(true).possible_values(&Action::NAMES)
                .help("report to produce"))
            .arg(Arg::with_name("input_file")
                .takes_value(true).required(true).help("path of the sailing file to read from"))
            .arg(Arg::with_name("format")
                .long("format").takes_value(true).possible_values(&Format::NAMES)
                .default_value("text").help("output format of the report"))
            .arg(Arg::with_name("verbose")
                .short("v").long("verbose").multiple(true)
                .help("log more detail to stderr, repeat for debug output"))
            .get_matches();

        // clap has already restricted both values to the known names.
        Self {
            action: matches.value_of("action").and_then(Action::from_name).unwrap_or(Action::RouteSummary),
            input_file: matches.value_of("input_file").unwrap_or_default().to_string(),
            format: matches.value_of("format").and_then(Format::from_name).unwrap_or(Format::Text),
            verbosity: matches.occurrences_of("verbose"),
        }
    }

    /// The default log filter when `RUST_LOG` isn't set.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
