use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::Dated;

/// `Oct 13, 2025`. One label per date, so grouping by label and by date agree.
pub const WEEK_LABEL_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket<'a, T> {
    #[serde(rename = "weekStart")]
    pub week_start: NaiveDate,
    #[serde(rename = "weekLabel")]
    pub label: String,
    pub members: Vec<&'a T>,
}

impl<T> WeekBucket<'_, T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Monday on or before `date`. Sunday belongs to the week that started six
/// days earlier.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(back))
}

pub fn week_label(start: NaiveDate) -> String {
    start.format(WEEK_LABEL_FORMAT).to_string()
}

/// Group records by the UTC week they were created in, newest week first.
pub fn group_by_week<T: Dated>(records: &[T]) -> Vec<WeekBucket<'_, T>> {
    group_by_week_in(records, &Utc)
}

/// Group records by creation week as seen from `tz`, newest week first.
/// Members keep their input order.
pub fn group_by_week_in<'a, T, Z>(records: &'a [T], tz: &Z) -> Vec<WeekBucket<'a, T>>
where
    T: Dated,
    Z: TimeZone,
{
    let mut weeks: BTreeMap<NaiveDate, Vec<&'a T>> = BTreeMap::new();
    for r in records {
        let local = r.created_at().with_timezone(tz).date_naive();
        weeks.entry(week_start(local)).or_default().push(r);
    }

    weeks
        .into_iter()
        .rev()
        .map(|(start, members)| WeekBucket {
            week_start: start,
            label: week_label(start),
            members,
        })
        .collect()
}
