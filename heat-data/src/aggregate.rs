//! Year/month projections of a daily temperature series.
//!
//! Both projections are pure, recomputed from scratch from the record set,
//! and returned in chronological month order.

use crate::field::TemperatureField;
use crate::record::DailyRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of years the recent-years view keeps.
pub const RETAINED_YEARS: u32 = 10;

/// A (year, month) pair, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(record: &DailyRecord) -> Self {
        Self::new(record.year(), record.month())
    }
}

/// Renders the cell identity used to key rendered cells, e.g. "2020-1".
impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

/// Max of max_temperature and min of min_temperature for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub max: f64,
    pub min: f64,
}

impl MonthlySummary {
    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }

    pub fn value(&self, field: TemperatureField) -> f64 {
        match field {
            TemperatureField::Max => self.max,
            TemperatureField::Min => self.min,
        }
    }
}

/// All days of one month, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyDayBucket {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DailyRecord>,
}

impl MonthlyDayBucket {
    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }

    /// Max-of-max or min-of-min over the bucket, `None` when empty.
    pub fn aggregate(&self, field: TemperatureField) -> Option<f64> {
        self.days
            .iter()
            .map(|d| field.of(d))
            .reduce(|a, b| field.combine(a, b))
    }
}

/// Inclusive year range kept by the recent-years view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    pub first_year: i32,
    pub last_year: i32,
}

impl YearWindow {
    pub fn contains(&self, year: i32) -> bool {
        (self.first_year..=self.last_year).contains(&year)
    }
}

/// The (min, max) pair of a value across a collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Extent of an iterator of values, `None` when it is empty.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Extent> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(e) => Some(Extent {
                min: e.min.min(v),
                max: e.max.max(v),
            }),
        })
    }

    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

fn group_by_month(records: &[DailyRecord]) -> BTreeMap<MonthKey, Vec<DailyRecord>> {
    let mut groups: BTreeMap<MonthKey, Vec<DailyRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(MonthKey::of(record)).or_default().push(*record);
    }
    groups
}

/// One summary per (year, month) present in `records`.
pub fn summarize(records: &[DailyRecord]) -> Vec<MonthlySummary> {
    let mut acc: BTreeMap<MonthKey, (f64, f64)> = BTreeMap::new();
    for record in records {
        acc.entry(MonthKey::of(record))
            .and_modify(|(max, min)| {
                *max = max.max(record.max_temperature);
                *min = min.min(record.min_temperature);
            })
            .or_insert((record.max_temperature, record.min_temperature));
    }
    let summaries: Vec<MonthlySummary> = acc
        .into_iter()
        .map(|(key, (max, min))| MonthlySummary {
            year: key.year,
            month: key.month,
            max,
            min,
        })
        .collect();
    log::info!(
        "aggregate: summarized {} records into {} months",
        records.len(),
        summaries.len()
    );
    summaries
}

/// One bucket per (year, month) present in `records`, days sorted by date.
pub fn bucket_daily(records: &[DailyRecord]) -> Vec<MonthlyDayBucket> {
    group_by_month(records)
        .into_iter()
        .map(|(key, mut days)| {
            // stable: same-date rows keep input order
            days.sort_by_key(|d| d.date);
            MonthlyDayBucket {
                year: key.year,
                month: key.month,
                days,
            }
        })
        .collect()
}

/// The `years` most recent calendar years ending at the dataset's max year.
pub fn retained_window(records: &[DailyRecord], years: u32) -> Option<YearWindow> {
    let last_year = records.iter().map(DailyRecord::year).max()?;
    let span = i32::try_from(years.max(1) - 1).unwrap_or(i32::MAX);
    Some(YearWindow {
        first_year: last_year.saturating_sub(span),
        last_year,
    })
}

pub fn filter_window(records: &[DailyRecord], window: &YearWindow) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|r| window.contains(r.year()))
        .copied()
        .collect()
}

/// Extent of one field across daily records.
pub fn field_extent(records: &[DailyRecord], field: TemperatureField) -> Option<Extent> {
    Extent::of(records.iter().map(|r| field.of(r)))
}

/// Extent across both temperature fields.
pub fn temperature_extent(records: &[DailyRecord]) -> Option<Extent> {
    Extent::of(
        records
            .iter()
            .flat_map(|r| [r.max_temperature, r.min_temperature]),
    )
}

/// Extent of one field across monthly summaries.
pub fn summary_extent(summaries: &[MonthlySummary], field: TemperatureField) -> Option<Extent> {
    Extent::of(summaries.iter().map(|s| s.value(field)))
}

/// [min of mins, max of maxes] across monthly summaries.
pub fn summary_color_domain(summaries: &[MonthlySummary]) -> Option<Extent> {
    let min = summary_extent(summaries, TemperatureField::Min)?.min;
    let max = summary_extent(summaries, TemperatureField::Max)?.max;
    Some(Extent { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_daily_records;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    /// Deterministic pseudo-random series spanning several years.
    fn series(first_year: i32, last_year: i32) -> Vec<DailyRecord> {
        let mut out = Vec::new();
        let mut seed: u64 = 42;
        for y in first_year..=last_year {
            for m in 1..=12u32 {
                for d in [3u32, 17, 9, 28, 1] {
                    seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    let base = ((seed >> 33) % 400) as f64 / 10.0 - 10.0;
                    out.push(day(y, m, d, base + 6.0, base - 4.0));
                }
            }
        }
        out
    }

    #[test]
    fn summarize_scenario() {
        let csv = "\
date,max_temperature,min_temperature
2020-01-15,10,2
2020-01-20,15,-1
2020-02-01,5,-5
";
        let records = load_daily_records(csv).unwrap().records;
        let summaries = summarize(&records);
        assert_eq!(
            summaries,
            vec![
                MonthlySummary { year: 2020, month: 1, max: 15.0, min: -1.0 },
                MonthlySummary { year: 2020, month: 2, max: 5.0, min: -5.0 },
            ]
        );
    }

    #[test]
    fn summarize_one_per_month_with_true_extremes() {
        let records = series(2001, 2004);
        let summaries = summarize(&records);

        let distinct: BTreeSet<MonthKey> = records.iter().map(MonthKey::of).collect();
        assert_eq!(summaries.len(), distinct.len());

        for s in &summaries {
            let group: Vec<&DailyRecord> = records
                .iter()
                .filter(|r| MonthKey::of(r) == s.key())
                .collect();
            let max = group.iter().map(|r| r.max_temperature).fold(f64::MIN, f64::max);
            let min = group.iter().map(|r| r.min_temperature).fold(f64::MAX, f64::min);
            assert_eq!(s.max, max);
            assert_eq!(s.min, min);
        }
    }

    #[test]
    fn summarize_empty() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn buckets_are_sorted_and_complete() {
        let records = series(2010, 2011);
        let buckets = bucket_daily(&records);

        let total: usize = buckets.iter().map(|b| b.days.len()).sum();
        assert_eq!(total, records.len());

        for b in &buckets {
            assert!(b.days.windows(2).all(|w| w[0].date <= w[1].date));
            assert!(b.days.iter().all(|d| MonthKey::of(d) == b.key()));
            let expected = records.iter().filter(|r| MonthKey::of(r) == b.key()).count();
            assert_eq!(b.days.len(), expected);
        }
        assert!(buckets.windows(2).all(|w| w[0].key() < w[1].key()));
    }

    #[test]
    fn bucket_aggregate_follows_field() {
        let bucket = MonthlyDayBucket {
            year: 2020,
            month: 1,
            days: vec![day(2020, 1, 1, 3.0, -2.0), day(2020, 1, 2, 8.0, 1.0)],
        };
        assert_eq!(bucket.aggregate(TemperatureField::Max), Some(8.0));
        assert_eq!(bucket.aggregate(TemperatureField::Min), Some(-2.0));
    }

    #[test]
    fn window_keeps_exactly_last_ten_years() {
        let records = series(1995, 2020);
        let window = retained_window(&records, RETAINED_YEARS).unwrap();
        assert_eq!(window, YearWindow { first_year: 2011, last_year: 2020 });

        let kept = filter_window(&records, &window);
        assert!(kept.iter().all(|r| (2011..=2020).contains(&r.year())));
        let expected = records.iter().filter(|r| r.year() >= 2011).count();
        assert_eq!(kept.len(), expected);
    }

    #[test]
    fn window_of_single_year_dataset() {
        let records = vec![day(2015, 3, 1, 5.0, 1.0), day(2015, 7, 9, 25.0, 14.0)];
        let window = retained_window(&records, RETAINED_YEARS).unwrap();
        let kept = filter_window(&records, &window);
        let years: BTreeSet<i32> = bucket_daily(&kept).iter().map(|b| b.year).collect();
        assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![2015]);
    }

    #[test]
    fn oversized_year_count_keeps_everything() {
        let records = vec![day(1900, 1, 1, 3.0, -2.0), day(2020, 1, 1, 8.0, 1.0)];
        for years in [u32::MAX, i32::MAX as u32 + 1] {
            let window = retained_window(&records, years).unwrap();
            assert!(window.first_year <= window.last_year);
            assert_eq!(filter_window(&records, &window).len(), 2);
        }
    }

    #[test]
    fn window_of_empty_dataset() {
        assert_eq!(retained_window(&[], RETAINED_YEARS), None);
    }

    #[test]
    fn extents_round_trip_through_summaries() {
        let records = series(1990, 1999);
        let summaries = summarize(&records);

        let from_summaries = summary_extent(&summaries, TemperatureField::Max).unwrap();
        let from_records = field_extent(&records, TemperatureField::Max).unwrap();
        assert_eq!(from_summaries.max, from_records.max);

        let from_summaries = summary_extent(&summaries, TemperatureField::Min).unwrap();
        let from_records = field_extent(&records, TemperatureField::Min).unwrap();
        assert_eq!(from_summaries.min, from_records.min);

        // every row has max >= min, so the color domain spans both fields
        let domain = summary_color_domain(&summaries).unwrap();
        assert_eq!(domain, temperature_extent(&records).unwrap());
    }

    #[test]
    fn month_key_display_and_order() {
        assert_eq!(MonthKey::new(2020, 1).to_string(), "2020-1");
        assert!(MonthKey::new(2019, 12) < MonthKey::new(2020, 1));
    }
}
