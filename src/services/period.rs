//! Budget cycle resolution
//!
//! Turns a cycle start day and a reference date into the inclusive window of
//! the cycle containing that date, and steps between neighbouring cycles.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};

use crate::models::{CycleDay, MonthOverflow, Period};

/// Resolve the budget cycle containing `reference`
///
/// When the reference day is on or after the cycle day, the cycle started
/// this month; otherwise it started last month. The end is the day before
/// the cycle day of the following month.
pub fn resolve_period(cycle_day: CycleDay, reference: NaiveDate, overflow: MonthOverflow) -> Period {
    cycle_for_month(nominal_month(cycle_day, reference), cycle_day, overflow)
}

/// Service for budget cycle navigation
#[derive(Debug, Clone, Copy)]
pub struct PeriodResolver {
    cycle_day: CycleDay,
    overflow: MonthOverflow,
}

impl PeriodResolver {
    pub fn new(cycle_day: CycleDay, overflow: MonthOverflow) -> Self {
        Self {
            cycle_day,
            overflow,
        }
    }

    pub fn cycle_day(&self) -> CycleDay {
        self.cycle_day
    }

    /// The cycle containing today's local date
    pub fn current_period(&self) -> Period {
        self.period_for_date(Local::now().date_naive())
    }

    pub fn period_for_date(&self, date: NaiveDate) -> Period {
        resolve_period(self.cycle_day, date, self.overflow)
    }

    /// The cycle `offset` cycles away from the one containing `date`
    ///
    /// Stepping is done on the month the cycle nominally starts in, so it
    /// stays well-defined when overflow moves a boundary into the next month.
    pub fn period_offset(&self, date: NaiveDate, offset: i32) -> Period {
        let month = shift_months(nominal_month(self.cycle_day, date), offset);
        cycle_for_month(month, self.cycle_day, self.overflow)
    }

    pub fn next_period(&self, date: NaiveDate) -> Period {
        self.period_offset(date, 1)
    }

    pub fn previous_period(&self, date: NaiveDate) -> Period {
        self.period_offset(date, -1)
    }

    /// The last `count` cycles up to and including the one containing `date`,
    /// oldest first
    pub fn recent_periods(&self, date: NaiveDate, count: usize) -> Vec<Period> {
        (0..count as i32)
            .rev()
            .map(|back| self.period_offset(date, -back))
            .collect()
    }

    /// Format a period in a human-friendly way, e.g. "Jun 15 - Jul 14, 2025"
    pub fn format_period_friendly(&self, period: &Period) -> String {
        if period.start.year() == period.end.year() {
            format!(
                "{} - {}",
                period.start.format("%b %d"),
                period.end.format("%b %d, %Y")
            )
        } else {
            format!(
                "{} - {}",
                period.start.format("%b %d, %Y"),
                period.end.format("%b %d, %Y")
            )
        }
    }
}

/// First day of the month in which the cycle containing `reference` starts
fn nominal_month(cycle_day: CycleDay, reference: NaiveDate) -> NaiveDate {
    let first = first_of_month(reference);
    if reference.day() >= cycle_day.get() {
        first
    } else {
        shift_months(first, -1)
    }
}

fn cycle_for_month(month: NaiveDate, cycle_day: CycleDay, overflow: MonthOverflow) -> Period {
    let day = cycle_day.get();
    let start = day_in_month(month, day, overflow);
    let end = day_in_month(shift_months(month, 1), day - 1, overflow);
    Period::new(start, end)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn shift_months(first: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        first.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        first.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    (shift_months(first, 1) - first).num_days() as u32
}

/// Build day `day` of the month starting at `first`
///
/// Day 0 is the last day of the previous month under both policies.
fn day_in_month(first: NaiveDate, day: u32, overflow: MonthOverflow) -> NaiveDate {
    let day = match overflow {
        MonthOverflow::Roll => day,
        MonthOverflow::Clamp if day == 0 => 0,
        MonthOverflow::Clamp => day.min(days_in_month(first)),
    };
    first
        .checked_add_signed(Duration::days(i64::from(day) - 1))
        .unwrap_or(first)
}
