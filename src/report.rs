use crate::dataset::SailingLog;
use crate::errors::ReportError;
use crate::stats::{best_days, performance_by_route, worst_days, DayStatistics};
use serde::Serialize;
use std::fmt::{self, Write};

/// The report requested on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Totals and late counts for each route.
    RouteSummary,

    /// The days with the lowest and highest share of late sailings.
    Days,

    /// Every valid sailing, one per line.
    Sailings,
}

impl Action {
    pub const NAMES: [&'static str; 3] = ["route_summary", "days", "sailings"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "route_summary" => Some(Action::RouteSummary),
            "days" => Some(Action::Days),
            "sailings" => Some(Action::Sailings),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Csv,
}

impl Format {
    pub const NAMES: [&'static str; 2] = ["text", "csv"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Format::Text),
            "csv" => Some(Format::Csv),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct RouteRow {
    route: i32,
    total: u64,
    late: u64,
}

#[derive(Serialize)]
struct DayRow {
    kind: &'static str,
    date: String,
    total: u64,
    late: u64,
}

impl DayRow {
    fn new(kind: &'static str, day: &DayStatistics) -> Self {
        Self {
            kind,
            date: day.date.to_string(),
            total: day.total_sailings,
            late: day.late_sailings,
        }
    }
}

#[derive(Serialize)]
struct SailingRow<'a> {
    route: i32,
    source: &'a str,
    destination: &'a str,
    date: String,
    departure: String,
    vessel: &'a str,
    expected: i32,
    actual: i32,
    late: bool,
}

/// Renders the requested report for every sailing in `log`.
pub fn render(log: &SailingLog, action: Action, format: Format) -> Result<String, ReportError> {
    match format {
        Format::Text => Ok(render_text(log, action)?),
        Format::Csv => render_csv(log, action),
    }
}

fn render_text(log: &SailingLog, action: Action) -> Result<String, fmt::Error> {
    let sailings = log.sailings();
    let mut out = String::new();

    writeln!(out, "Read {} records.", sailings.len())?;
    writeln!(out, "Skipped {} invalid records.", log.skipped_lines())?;

    match action {
        Action::RouteSummary => {
            writeln!(out, "Performance by route:")?;
            for stats in performance_by_route(sailings) {
                writeln!(
                    out,
                    "Route {}: {} sailings ({} late)",
                    stats.route_number, stats.total_sailings, stats.late_sailings
                )?;
            }
        }
        Action::Days => {
            writeln!(out, "Best days:")?;
            for day in best_days(sailings) {
                write_day(&mut out, &day)?;
            }
            writeln!(out, "Worst days:")?;
            for day in worst_days(sailings) {
                write_day(&mut out, &day)?;
            }
        }
        Action::Sailings => {
            for sailing in sailings {
                writeln!(out, "{}", sailing)?;
            }
        }
    }

    Ok(out)
}

/// Day lines leave the month and day unpadded, e.g. `2019-4-2`.
fn write_day(out: &mut String, day: &DayStatistics) -> fmt::Result {
    writeln!(
        out,
        "{}-{}-{}: {} sailings ({} late)",
        day.date.year, day.date.month, day.date.day, day.total_sailings, day.late_sailings
    )
}

fn render_csv(log: &SailingLog, action: Action) -> Result<String, ReportError> {
    let sailings = log.sailings();
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);

        match action {
            Action::RouteSummary => {
                for stats in performance_by_route(sailings) {
                    wtr.serialize(RouteRow {
                        route: stats.route_number,
                        total: stats.total_sailings,
                        late: stats.late_sailings,
                    })?;
                }
            }
            Action::Days => {
                for day in best_days(sailings) {
                    wtr.serialize(DayRow::new("best", &day))?;
                }
                for day in worst_days(sailings) {
                    wtr.serialize(DayRow::new("worst", &day))?;
                }
            }
            Action::Sailings => {
                for sailing in sailings {
                    wtr.serialize(SailingRow {
                        route: sailing.route_number(),
                        source: sailing.source_terminal(),
                        destination: sailing.dest_terminal(),
                        date: sailing.departure_date().to_string(),
                        departure: sailing.scheduled_departure_time().to_string(),
                        vessel: sailing.vessel_name(),
                        expected: sailing.expected_duration(),
                        actual: sailing.actual_duration(),
                        late: sailing.is_late(),
                    })?;
                }
            }
        }

        wtr.flush().map_err(csv::Error::from)?;
    }

    Ok(String::from_utf8(buf)?)
}
