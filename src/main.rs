use ferry_stats::args::Args;
use ferry_stats::dataset::SailingLog;
use ferry_stats::report;
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ferry_stats={}", args.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let log = match SailingLog::try_from(PathBuf::from(&args.input_file)) {
        Ok(log) => log,
        Err(err) => {
            error!("failed to process input file: {}", err);
            process::exit(1);
        }
    };

    let output = match report::render(&log, args.action, args.format) {
        Ok(output) => output,
        Err(err) => {
            error!("failed to generate output report: {}", err);
            process::exit(1);
        }
    };
    print!("{}", output);
}
