use crate::sailing::{Date, Sailing};
use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Total and late sailing counts for a single route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteStatistics {
    pub route_number: i32,
    pub total_sailings: u64,
    pub late_sailings: u64,
}

/// Total and late sailing counts for a single departure date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayStatistics {
    pub date: Date,
    pub total_sailings: u64,
    pub late_sailings: u64,
}

impl DayStatistics {
    fn new(date: Date) -> Self {
        Self {
            date,
            total_sailings: 0,
            late_sailings: 0,
        }
    }

    fn record(&mut self, sailing: &Sailing) {
        self.total_sailings += 1;
        if sailing.is_late() {
            self.late_sailings += 1;
        }
    }

    /// Compares the late/total ratios of two days without dividing.
    ///
    /// Every grouped day has at least one sailing, so both denominators are
    /// positive and `a/b < c/d` holds exactly when `a*d < c*b`.
    fn cmp_late_ratio(&self, other: &DayStatistics) -> Ordering {
        let lhs = u128::from(self.late_sailings) * u128::from(other.total_sailings);
        let rhs = u128::from(other.late_sailings) * u128::from(self.total_sailings);
        lhs.cmp(&rhs)
    }
}

/// Summarises the sailings of every route present in `sailings`.
///
/// Exactly one entry is returned per distinct route number, ordered by route
/// number. Routes that never appear produce no entry.
pub fn performance_by_route(sailings: &[Sailing]) -> Vec<RouteStatistics> {
    let mut routes: BTreeMap<i32, RouteStatistics> = BTreeMap::new();

    for sailing in sailings {
        let stats = match routes.entry(sailing.route_number()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(vacancy) => vacancy.insert(RouteStatistics {
                route_number: sailing.route_number(),
                total_sailings: 0,
                late_sailings: 0,
            }),
        };

        stats.total_sailings += 1;
        if sailing.is_late() {
            stats.late_sailings += 1;
        }
    }

    routes.into_values().collect()
}

/// Summarises the sailings of every departure date present in `sailings`,
/// ordered by date.
pub fn performance_by_day(sailings: &[Sailing]) -> Vec<DayStatistics> {
    let mut days: BTreeMap<Date, DayStatistics> = BTreeMap::new();

    for sailing in sailings {
        let date = sailing.departure_date();
        days.entry(date)
            .or_insert_with(|| DayStatistics::new(date))
            .record(sailing);
    }

    days.into_values().collect()
}

/// Returns every day sharing the lowest late/total ratio in the dataset.
pub fn best_days(sailings: &[Sailing]) -> Vec<DayStatistics> {
    select_days(performance_by_day(sailings), Ordering::Less)
}

/// Returns every day sharing the highest late/total ratio in the dataset.
pub fn worst_days(sailings: &[Sailing]) -> Vec<DayStatistics> {
    select_days(performance_by_day(sailings), Ordering::Greater)
}

/// Keeps the days whose ratio is extreme in the direction of `preferred`,
/// including all ties. An empty list selects nothing.
fn select_days(days: Vec<DayStatistics>, preferred: Ordering) -> Vec<DayStatistics> {
    let extreme = match days.iter().reduce(|current, candidate| {
        if candidate.cmp_late_ratio(current) == preferred {
            candidate
        } else {
            current
        }
    }) {
        Some(extreme) => extreme.clone(),
        None => return Vec::new(),
    };

    days.into_iter()
        .filter(|day| day.cmp_late_ratio(&extreme) == Ordering::Equal)
        .collect()
}
