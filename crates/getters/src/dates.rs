//! Date range covered by a ledger.

use chrono::{Datelike, NaiveDate};
use tally_core::{Entry, EntryKind, GetterError, GetterResult};

fn min_max(dates: impl Iterator<Item = NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    dates.fold(None, |span, date| match span {
        None => Some((date, date)),
        Some((min, max)) => Some((min.min(date), max.max(date))),
    })
}

/// Earliest and latest entry dates.
///
/// Every entry is inspected, so the result holds even if the input is not
/// perfectly sorted. An empty sequence is a precondition violation.
pub fn get_min_max_dates(entries: &[Entry]) -> GetterResult<(NaiveDate, NaiveDate)> {
    let (min, max) = min_max(entries.iter().map(Entry::date))
        .ok_or_else(|| GetterError::empty_input("get_min_max_dates"))?;
    tracing::debug!(entries = entries.len(), %min, %max, "computed date range");
    Ok((min, max))
}

/// Like [`get_min_max_dates`], restricted to entries of the given kinds.
pub fn get_min_max_dates_of(
    entries: &[Entry],
    kinds: &[EntryKind],
) -> GetterResult<(NaiveDate, NaiveDate)> {
    let (min, max) = min_max(
        entries
            .iter()
            .filter(|entry| kinds.contains(&entry.kind()))
            .map(Entry::date),
    )
    .ok_or_else(|| GetterError::empty_input("get_min_max_dates_of"))?;
    tracing::debug!(kinds = kinds.len(), %min, %max, "computed date range by kind");
    Ok((min, max))
}

/// Calendar years spanned by a ledger, inclusive on both ends.
///
/// Lazy and restartable: iterating does not consume the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveYears {
    span: Option<(i32, i32)>,
}

impl ActiveYears {
    pub fn iter(&self) -> core::ops::RangeInclusive<i32> {
        match self.span {
            Some((first, last)) => first..=last,
            #[allow(clippy::reversed_empty_ranges)]
            None => 1..=0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    pub fn len(&self) -> usize {
        self.span.map_or(0, |(first, last)| (last - first) as usize + 1)
    }

    pub fn first(&self) -> Option<i32> {
        self.span.map(|(first, _)| first)
    }

    pub fn last(&self) -> Option<i32> {
        self.span.map(|(_, last)| last)
    }
}

impl IntoIterator for ActiveYears {
    type Item = i32;
    type IntoIter = core::ops::RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ActiveYears {
    type Item = i32;
    type IntoIter = core::ops::RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every year between the earliest and the latest entry, even years in
/// which no entry falls. Empty input yields no years.
pub fn get_active_years(entries: &[Entry]) -> ActiveYears {
    let span = min_max(entries.iter().map(Entry::date))
        .map(|(min, max)| (min.year(), max.year()));
    let years = ActiveYears { span };
    tracing::debug!(years = years.len(), "computed active years");
    years
}
