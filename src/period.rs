use chrono::{Datelike, Months, NaiveDate};

/// Inclusive calendar-month window used to partition dated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// The month the reference date falls in. The reference is always passed in
/// explicitly so reports can be computed for any point in time.
pub fn current_month(reference: NaiveDate) -> MonthWindow {
    let start = first_of_month(reference);
    let end = (start + Months::new(1)).pred_opt().unwrap_or(reference);
    MonthWindow { start, end }
}

/// The month before the reference month. Rolls the year back at January.
pub fn previous_month(reference: NaiveDate) -> MonthWindow {
    let this_start = first_of_month(reference);
    let start = this_start - Months::new(1);
    let end = this_start.pred_opt().unwrap_or(start);
    MonthWindow { start, end }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn current_month_spans_first_to_last_day() {
        let w = current_month(day(2024, 5, 15));
        assert_eq!(w.start, day(2024, 5, 1));
        assert_eq!(w.end, day(2024, 5, 31));
        assert!(w.contains(day(2024, 5, 1)));
        assert!(w.contains(day(2024, 5, 31)));
        assert!(!w.contains(day(2024, 6, 1)));
    }

    #[test]
    fn leap_february_ends_on_the_29th() {
        let w = current_month(day(2024, 2, 10));
        assert_eq!(w.end, day(2024, 2, 29));
    }

    #[test]
    fn previous_month_rolls_the_year_back_at_january() {
        let w = previous_month(day(2024, 1, 20));
        assert_eq!(w.start, day(2023, 12, 1));
        assert_eq!(w.end, day(2023, 12, 31));
    }

    #[test]
    fn windows_never_overlap() {
        let reference = day(2024, 3, 1);
        let current = current_month(reference);
        let previous = previous_month(reference);
        assert_eq!(previous.end.succ_opt().unwrap(), current.start);
    }
}
