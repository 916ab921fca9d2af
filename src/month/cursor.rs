use time::{Date, Month};

/// A year/month pair, the unit the calendar navigates by.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct YearMonth {
    pub(crate) year: i32,
    pub(crate) month: Month,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: Month) -> YearMonth {
        YearMonth { year, month }
    }

    pub(crate) fn forward(self) -> YearMonth {
        let year = if self.month == Month::December {
            self.year + 1
        } else {
            self.year
        };
        YearMonth {
            year,
            month: self.month.next(),
        }
    }

    pub(crate) fn backward(self) -> YearMonth {
        let year = if self.month == Month::January {
            self.year - 1
        } else {
            self.year
        };
        YearMonth {
            year,
            month: self.month.previous(),
        }
    }
}

impl From<Date> for YearMonth {
    fn from(date: Date) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// The position being viewed: either a bare month or a month with a day of
/// interest in it.  Month navigation never carries the day along.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cursor {
    Month(YearMonth),
    Day(Date),
}

impl Cursor {
    pub(crate) fn year_month(self) -> YearMonth {
        match self {
            Cursor::Month(ym) => ym,
            Cursor::Day(date) => YearMonth::from(date),
        }
    }

    pub(crate) fn forward_month(self) -> Cursor {
        Cursor::Month(self.year_month().forward())
    }

    pub(crate) fn backward_month(self) -> Cursor {
        Cursor::Month(self.year_month().backward())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn forward_mid_year() {
        let ym = YearMonth::new(2024, Month::May).forward();
        assert_eq!(ym, YearMonth::new(2024, Month::June));
    }

    #[test]
    fn forward_across_year() {
        let ym = YearMonth::new(2023, Month::December).forward();
        assert_eq!(ym, YearMonth::new(2024, Month::January));
    }

    #[test]
    fn backward_across_year() {
        let ym = YearMonth::new(2024, Month::January).backward();
        assert_eq!(ym, YearMonth::new(2023, Month::December));
    }

    #[test]
    fn navigation_drops_the_day() {
        let cursor = Cursor::Day(date!(2024 - 12 - 31));
        assert_eq!(
            cursor.forward_month(),
            Cursor::Month(YearMonth::new(2025, Month::January))
        );
        assert_eq!(
            cursor.backward_month(),
            Cursor::Month(YearMonth::new(2024, Month::November))
        );
    }
}
