use crate::errors::ParseError;
use std::fmt;
use std::str::FromStr;

/// Every record line carries exactly this many comma separated fields.
pub const FIELD_COUNT: usize = 11;

/// A sailing is late once it runs this many minutes over its expected
/// duration.
pub const LATE_THRESHOLD_MINUTES: i64 = 5;

const FIELD_DELIMITER: char = ',';

const ROUTE_FIELD: usize = 0;
const SOURCE_FIELD: usize = 1;
const DESTINATION_FIELD: usize = 2;
const YEAR_FIELD: usize = 3;
const MONTH_FIELD: usize = 4;
const DAY_FIELD: usize = 5;
const HOUR_FIELD: usize = 6;
const MINUTE_FIELD: usize = 7;
const VESSEL_FIELD: usize = 8;
const EXPECTED_FIELD: usize = 9;
const ACTUAL_FIELD: usize = 10;

/// A calendar day as it appears in the input. Values are only range checked
/// for the time of day, so a day of 40 is carried through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: i32,
    pub minute: i32,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A single scheduled crossing on a ferry route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sailing {
    route_number: i32,
    source_terminal: String,
    dest_terminal: String,
    vessel_name: String,
    departure_date: Date,
    scheduled_departure_time: TimeOfDay,

    /// Minutes the crossing was scheduled to take.
    expected_duration: i32,

    /// Minutes the crossing actually took.
    actual_duration: i32,
}

impl Sailing {
    pub fn route_number(&self) -> i32 {
        self.route_number
    }

    pub fn source_terminal(&self) -> &str {
        &self.source_terminal
    }

    pub fn dest_terminal(&self) -> &str {
        &self.dest_terminal
    }

    pub fn vessel_name(&self) -> &str {
        &self.vessel_name
    }

    pub fn departure_date(&self) -> Date {
        self.departure_date
    }

    pub fn scheduled_departure_time(&self) -> TimeOfDay {
        self.scheduled_departure_time
    }

    pub fn expected_duration(&self) -> i32 {
        self.expected_duration
    }

    pub fn actual_duration(&self) -> i32 {
        self.actual_duration
    }

    /// A sailing is late when it took at least five minutes longer than
    /// expected.
    pub fn is_late(&self) -> bool {
        is_late(self.actual_duration, self.expected_duration)
    }
}

/// Returns true when `actual - expected` reaches the late threshold.
pub fn is_late(actual: i32, expected: i32) -> bool {
    i64::from(actual) - i64::from(expected) >= LATE_THRESHOLD_MINUTES
}

impl fmt::Display for Sailing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route {} ({} -> {}): {} {} [Vessel: {}] {} minutes ({} expected)",
            self.route_number,
            self.source_terminal,
            self.dest_terminal,
            self.departure_date,
            self.scheduled_departure_time,
            self.vessel_name,
            self.actual_duration,
            self.expected_duration
        )
    }
}

impl FromStr for Sailing {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_sailing(line)
    }
}

/// Parses one raw input line into a Sailing.
///
/// Errors are detected in a fixed order and the first one found is returned:
/// the field count, then empty fields, then non-numeric data in any numeric
/// field, and finally an out of range departure time. Numeric fields only
/// need to start with an integer, so "123abc" is read as 123.
pub fn parse_sailing(line: &str) -> Result<Sailing, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::IncompleteLine {
            field_count: fields.len(),
        });
    }

    if let Some(field_index) = fields.iter().position(|field| is_blank(field)) {
        return Err(ParseError::EmptyField { field_index });
    }

    let route_number = parse_leading_int(fields[ROUTE_FIELD])?;
    let year = parse_leading_int(fields[YEAR_FIELD])?;
    let month = parse_leading_int(fields[MONTH_FIELD])?;
    let day = parse_leading_int(fields[DAY_FIELD])?;
    let hour = parse_leading_int(fields[HOUR_FIELD])?;
    let minute = parse_leading_int(fields[MINUTE_FIELD])?;
    let expected_duration = parse_leading_int(fields[EXPECTED_FIELD])?;
    let actual_duration = parse_leading_int(fields[ACTUAL_FIELD])?;

    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(ParseError::InvalidTime { hour, minute });
    }

    Ok(Sailing {
        route_number,
        source_terminal: fields[SOURCE_FIELD].to_string(),
        dest_terminal: fields[DESTINATION_FIELD].to_string(),
        vessel_name: fields[VESSEL_FIELD].to_string(),
        departure_date: Date::new(year, month, day),
        scheduled_departure_time: TimeOfDay { hour, minute },
        expected_duration,
        actual_duration,
    })
}

/// The whitespace set of C's `isspace` in the default locale.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// A field is blank when it is zero length or every character is whitespace.
/// The first non-whitespace character ends the scan.
fn is_blank(field: &str) -> bool {
    field.chars().all(is_space)
}

/// Reads the integer a field begins with, ignoring anything that follows it.
///
/// Leading whitespace and a single sign are accepted before the digits. A
/// field that doesn't begin with digits, or whose leading digits overflow an
/// i32, is reported with its original text.
fn parse_leading_int(field: &str) -> Result<i32, ParseError> {
    let non_numeric = || ParseError::NonNumericData {
        field_text: field.to_string(),
    };

    let number = field.trim_start_matches(is_space);
    let sign_len = match number.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digit_len = number.as_bytes()[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return Err(non_numeric());
    }

    number[..sign_len + digit_len]
        .parse::<i32>()
        .map_err(|_| non_numeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LINE: &str =
        "1,Tsawwassen,Swartz Bay,2017,9,1,7,0,Spirit of British Columbia,95,98";

    #[test]
    fn should_parse_a_complete_line() {
        let sailing = parse_sailing(VALID_LINE).unwrap();

        assert_eq!(sailing.route_number(), 1);
        assert_eq!(sailing.source_terminal(), "Tsawwassen");
        assert_eq!(sailing.dest_terminal(), "Swartz Bay");
        assert_eq!(sailing.departure_date(), Date::new(2017, 9, 1));
        assert_eq!(
            sailing.scheduled_departure_time(),
            TimeOfDay { hour: 7, minute: 0 }
        );
        assert_eq!(sailing.vessel_name(), "Spirit of British Columbia");
        assert_eq!(sailing.expected_duration(), 95);
        assert_eq!(sailing.actual_duration(), 98);
        assert!(!sailing.is_late());
    }

    #[test]
    fn should_parse_through_from_str() {
        let sailing: Sailing = VALID_LINE.parse().unwrap();
        assert_eq!(sailing, parse_sailing(VALID_LINE).unwrap());
    }

    #[test]
    fn should_report_actual_field_count_for_incomplete_lines() {
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,7,0,Vessel,95").unwrap_err(),
            ParseError::IncompleteLine { field_count: 10 }
        );
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,7,0,Vessel,95,98,extra").unwrap_err(),
            ParseError::IncompleteLine { field_count: 12 }
        );

        // An empty line still splits into a single field.
        assert_eq!(
            parse_sailing("").unwrap_err(),
            ParseError::IncompleteLine { field_count: 1 }
        );
    }

    #[test]
    fn should_prefer_incomplete_line_over_empty_field() {
        // Both the field count and field 1 are wrong, only the count is
        // reported.
        assert_eq!(
            parse_sailing("1,,B,2017,9,1,7,0,Vessel,95").unwrap_err(),
            ParseError::IncompleteLine { field_count: 10 }
        );
    }

    #[test]
    fn should_report_first_empty_field() {
        assert_eq!(
            parse_sailing("1,A,   ,2017,9,1,7,0,,95,98").unwrap_err(),
            ParseError::EmptyField { field_index: 2 }
        );
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,7,0,Vessel,95,").unwrap_err(),
            ParseError::EmptyField { field_index: 10 }
        );
        assert_eq!(
            parse_sailing("\t,A,B,2017,9,1,7,0,Vessel,95,98").unwrap_err(),
            ParseError::EmptyField { field_index: 0 }
        );
    }

    #[test]
    fn should_not_treat_padded_text_as_empty() {
        // A field with any non-whitespace character is not empty, wherever
        // the whitespace sits.
        let sailing = parse_sailing("1, A ,B ,2017,9,1,7,0,  V,95,98").unwrap();
        assert_eq!(sailing.source_terminal(), " A ");
        assert_eq!(sailing.dest_terminal(), "B ");
        assert_eq!(sailing.vessel_name(), "  V");
    }

    #[test]
    fn should_prefer_empty_field_over_non_numeric_data() {
        assert_eq!(
            parse_sailing("abc,A,B,2017,9,1,7,0,Vessel,95, ").unwrap_err(),
            ParseError::EmptyField { field_index: 10 }
        );
    }

    #[test]
    fn should_accept_numeric_prefix_with_trailing_text() {
        let sailing = parse_sailing("12x3,A,B,2017,9,1,7,0,Vessel,95,98").unwrap();
        assert_eq!(sailing.route_number(), 12);

        let sailing = parse_sailing("1,A,B,2017,9,1,7,0,Vessel,95min,98 min").unwrap();
        assert_eq!(sailing.expected_duration(), 95);
        assert_eq!(sailing.actual_duration(), 98);
    }

    #[test]
    fn should_report_original_text_of_non_numeric_field() {
        assert_eq!(
            parse_sailing("x123,A,B,2017,9,1,7,0,Vessel,95,98").unwrap_err(),
            ParseError::NonNumericData {
                field_text: String::from("x123")
            }
        );
        assert_eq!(
            parse_sailing("1,A,B,2017,Sept,1,7,0,Vessel,95,98").unwrap_err(),
            ParseError::NonNumericData {
                field_text: String::from("Sept")
            }
        );
    }

    #[test]
    fn should_report_first_non_numeric_field_in_field_order() {
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,seven,zero,Vessel,95,98").unwrap_err(),
            ParseError::NonNumericData {
                field_text: String::from("seven")
            }
        );
    }

    #[test]
    fn should_not_require_text_fields_to_be_numeric() {
        assert!(parse_sailing("1,123,456,2017,9,1,7,0,789,95,98").is_ok());
    }

    #[test]
    fn should_parse_signs_and_leading_whitespace_like_stoi() {
        let sailing = parse_sailing("+3,A,B, 2017,9,1,7,0,Vessel,95,-2").unwrap();
        assert_eq!(sailing.route_number(), 3);
        assert_eq!(sailing.departure_date().year, 2017);
        assert_eq!(sailing.actual_duration(), -2);

        // A sign must be followed directly by digits.
        assert_eq!(
            parse_sailing("- 3,A,B,2017,9,1,7,0,Vessel,95,98").unwrap_err(),
            ParseError::NonNumericData {
                field_text: String::from("- 3")
            }
        );
    }

    #[test]
    fn should_report_overflowing_numbers_as_non_numeric() {
        assert_eq!(
            parse_sailing("99999999999,A,B,2017,9,1,7,0,Vessel,95,98").unwrap_err(),
            ParseError::NonNumericData {
                field_text: String::from("99999999999")
            }
        );
    }

    #[test]
    fn should_reject_out_of_range_times() {
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,24,0,Vessel,95,98").unwrap_err(),
            ParseError::InvalidTime {
                hour: 24,
                minute: 0
            }
        );
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,7,60,Vessel,95,98").unwrap_err(),
            ParseError::InvalidTime {
                hour: 7,
                minute: 60
            }
        );
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,-1,30,Vessel,95,98").unwrap_err(),
            ParseError::InvalidTime {
                hour: -1,
                minute: 30
            }
        );
    }

    #[test]
    fn should_accept_boundary_times() {
        assert!(parse_sailing("1,A,B,2017,9,1,0,0,Vessel,95,98").is_ok());
        assert!(parse_sailing("1,A,B,2017,9,1,23,59,Vessel,95,98").is_ok());
    }

    #[test]
    fn should_prefer_non_numeric_data_over_invalid_time() {
        assert_eq!(
            parse_sailing("1,A,B,2017,9,1,99,0,Vessel,95,late").unwrap_err(),
            ParseError::NonNumericData {
                field_text: String::from("late")
            }
        );
    }

    #[test]
    fn should_not_validate_calendar_dates() {
        let sailing = parse_sailing("1,A,B,2017,13,40,7,0,Vessel,95,98").unwrap();
        assert_eq!(sailing.departure_date(), Date::new(2017, 13, 40));
    }

    #[test]
    fn should_mark_sailings_late_at_five_minutes_over() {
        assert!(!is_late(99, 95));
        assert!(is_late(100, 95));
        assert!(is_late(130, 95));
        assert!(!is_late(90, 95));
        assert!(is_late(i32::MAX, i32::MIN));
        assert!(!is_late(i32::MIN, i32::MAX));
    }

    #[test]
    fn should_display_sailing_with_padded_date_and_time() {
        let sailing = parse_sailing(
            "3,Horseshoe Bay,Departure Bay,2018,1,5,6,5,Queen of Oak Bay,100,102",
        )
        .unwrap();

        assert_eq!(
            sailing.to_string(),
            "Route 3 (Horseshoe Bay -> Departure Bay): 2018-01-05 06:05 \
             [Vessel: Queen of Oak Bay] 102 minutes (100 expected)"
        );
    }
}
