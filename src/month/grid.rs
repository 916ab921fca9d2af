use thiserror::Error;
use time::{Date, Month};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// How many whole weeks a month view spans.
///
/// Most months need five weeks.  A month that overflows five (a 30- or
/// 31-day month starting late in the week) gets six, and a 28-day February
/// starting on Monday fits exactly in four with no fill at all.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) enum GridSize {
    FourWeeks,
    FiveWeeks,
    SixWeeks,
}

impl GridSize {
    pub(crate) const fn weeks(self) -> usize {
        match self {
            GridSize::FourWeeks => 4,
            GridSize::FiveWeeks => 5,
            GridSize::SixWeeks => 6,
        }
    }

    pub(crate) const fn cells(self) -> usize {
        self.weeks() * DAYS_IN_WEEK
    }
}

/// One month laid out as a flat sequence of day numbers, padded at the
/// front with the tail of the previous month and at the back with the head
/// of the next month so that every week is complete.
///
/// Cells in `[0, fill_start)` and `[fill_end, len)` belong to the
/// neighboring months; cells in `[fill_start, fill_end)` are the days
/// `1..=month_len` of the requested month.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    pub(super) year: i32,
    pub(super) month: Month,
    pub(super) month_len: u8,
    pub(super) cells: Vec<u8>,
    pub(super) fill_start: usize,
    pub(super) fill_end: usize,
    pub(super) size: GridSize,
}

impl MonthGrid {
    /// Lay out the given month.  `month` is the calendar month number,
    /// 1 (January) through 12 (December).
    pub(crate) fn build(year: i32, month: u8) -> Result<MonthGrid, GridError> {
        let month = Month::try_from(month).map_err(|_| GridError::InvalidMonth(month))?;
        MonthGrid::for_month(year, month)
    }

    pub(crate) fn for_month(year: i32, month: Month) -> Result<MonthGrid, GridError> {
        let first = Date::from_calendar_date(year, month, 1)
            .map_err(|_| GridError::InvalidYear(year))?;
        let month_len = time::util::days_in_month(month, year);
        // Weeks start on Monday: a month starting on Monday needs no
        // leading fill, one starting on Sunday needs six cells.
        let lead = first.weekday().number_days_from_monday();
        let used = usize::from(lead) + usize::from(month_len);
        let size = if used > GridSize::FiveWeeks.cells() {
            GridSize::SixWeeks
        } else if used == GridSize::FourWeeks.cells() {
            // The five-week layout would end in a row of nothing but
            // next-month fill; drop it.
            GridSize::FourWeeks
        } else {
            GridSize::FiveWeeks
        };
        let prev_len = match month {
            Month::January => time::util::days_in_month(Month::December, year - 1),
            m => time::util::days_in_month(m.previous(), year),
        };
        let mut cells = Vec::with_capacity(size.cells());
        cells.extend(prev_len - lead + 1..=prev_len);
        cells.extend(1..=month_len);
        cells.extend((1u8..).take(size.cells() - used));
        let fill_start = usize::from(lead);
        let fill_end = used;
        debug_assert_eq!(
            cells.len(),
            size.cells(),
            "fill and month days should exactly cover the grid"
        );
        debug_assert!(
            fill_start <= fill_end && fill_end <= size.cells(),
            "fill boundaries should lie within the grid"
        );
        Ok(MonthGrid {
            year,
            month,
            month_len,
            cells,
            fill_start,
            fill_end,
            size,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("invalid month number {0}; expected 1-12")]
    InvalidMonth(u8),
    #[error("year {0} is outside the representable calendar range")]
    InvalidYear(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_week_month() {
        // February 2023 starts on a Wednesday.
        let grid = MonthGrid::build(2023, 2).unwrap();
        assert_eq!(grid.size, GridSize::FiveWeeks);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.fill_start, 2);
        assert_eq!(grid.fill_end, 30);
        assert_eq!(grid.month_len, 28);
        assert_eq!(grid.cells[..2], [30, 31]);
        assert_eq!(grid.cells[2], 1);
        assert_eq!(grid.cells[29], 28);
        assert_eq!(grid.cells[30..], [1, 2, 3, 4, 5]);
    }

    #[test]
    fn four_week_collapse() {
        // February 2021 starts on a Monday and has 28 days, so the fifth
        // week would hold nothing but March.
        let grid = MonthGrid::build(2021, 2).unwrap();
        assert_eq!(grid.size, GridSize::FourWeeks);
        assert_eq!(grid.cells.len(), 28);
        assert_eq!(grid.fill_start, 0);
        assert_eq!(grid.fill_end, 28);
        let days = (1..=28).collect::<Vec<u8>>();
        assert_eq!(grid.cells, days);
    }

    #[test]
    fn sunday_start_february_does_not_collapse() {
        // February 2015 starts on a Sunday: six leading fill cells push
        // the month one cell past four weeks, leaving a single trailing
        // fill day.
        let grid = MonthGrid::build(2015, 2).unwrap();
        assert_eq!(grid.size, GridSize::FiveWeeks);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.fill_start, 6);
        assert_eq!(grid.fill_end, 34);
        assert_eq!(grid.cells[..6], [26, 27, 28, 29, 30, 31]);
        assert_eq!(grid.cells[34], 1);
    }

    #[test]
    fn six_week_month() {
        // October 2023 starts on a Sunday and has 31 days.
        let grid = MonthGrid::build(2023, 10).unwrap();
        assert_eq!(grid.size, GridSize::SixWeeks);
        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.fill_start, 6);
        assert_eq!(grid.fill_end, 37);
        assert_eq!(grid.cells[..6], [25, 26, 27, 28, 29, 30]);
        assert_eq!(grid.cells[37..], [1, 2, 3, 4, 5]);
    }

    #[test]
    fn exact_five_week_fit() {
        // December 2023 starts on a Friday: four leading cells plus 31
        // days fill five weeks exactly, with no trailing fill and no
        // collapse.
        let grid = MonthGrid::build(2023, 12).unwrap();
        assert_eq!(grid.size, GridSize::FiveWeeks);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.fill_start, 4);
        assert_eq!(grid.fill_end, 35);
        assert_eq!(grid.cells[..4], [27, 28, 29, 30]);
        assert_eq!(grid.cells[34], 31);
    }

    #[test]
    fn leap_february() {
        // February 2024 starts on a Thursday and has 29 days.
        let grid = MonthGrid::build(2024, 2).unwrap();
        assert_eq!(grid.size, GridSize::FiveWeeks);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.fill_start, 3);
        assert_eq!(grid.fill_end, 32);
        assert_eq!(grid.month_len, 29);
        assert_eq!(grid.cells[..3], [29, 30, 31]);
        assert_eq!(grid.cells[32..], [1, 2, 3]);
    }

    #[test]
    fn january_leads_with_december() {
        // January 2023 starts on a Sunday; the leading fill comes from
        // December of the previous year.
        let grid = MonthGrid::build(2023, 1).unwrap();
        assert_eq!(grid.size, GridSize::SixWeeks);
        assert_eq!(grid.fill_start, 6);
        assert_eq!(grid.cells[..6], [26, 27, 28, 29, 30, 31]);
    }

    #[test]
    fn december_trails_with_january() {
        // December 2024 starts on a Sunday; the trailing fill comes from
        // January of the next year.
        let grid = MonthGrid::build(2024, 12).unwrap();
        assert_eq!(grid.size, GridSize::SixWeeks);
        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.fill_end, 37);
        assert_eq!(grid.cells[37..], [1, 2, 3, 4, 5]);
    }

    #[test]
    fn invariants_hold_across_years() {
        for year in 2015..=2030 {
            for month in 1..=12 {
                let grid = MonthGrid::build(year, month).unwrap();
                assert_eq!(grid.cells.len(), grid.size.cells());
                assert_eq!(
                    grid.fill_end - grid.fill_start,
                    usize::from(grid.month_len),
                    "non-fill cells must cover {year}-{month} exactly"
                );
                assert_eq!(grid.cells[grid.fill_start], 1);
                assert_eq!(grid.cells[grid.fill_end - 1], grid.month_len);
            }
        }
    }

    #[test]
    fn rebuild_is_identical() {
        assert_eq!(
            MonthGrid::build(2024, 5).unwrap(),
            MonthGrid::build(2024, 5).unwrap()
        );
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(MonthGrid::build(2024, 0), Err(GridError::InvalidMonth(0)));
        assert_eq!(MonthGrid::build(2024, 13), Err(GridError::InvalidMonth(13)));
    }

    #[test]
    fn year_out_of_range() {
        assert_eq!(
            MonthGrid::build(10_000, 1),
            Err(GridError::InvalidYear(10_000))
        );
    }
}
