use crate::month::YearMonth;
use std::collections::BTreeSet;
use time::Date;

/// The dates that carry an event marker, independent of what month is on
/// screen.  Each render pass projects the set down to the day numbers of
/// the viewed month.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct EventCalendar(BTreeSet<Date>);

impl EventCalendar {
    pub(crate) fn new<I: IntoIterator<Item = Date>>(dates: I) -> EventCalendar {
        EventCalendar(dates.into_iter().collect())
    }

    /// Day numbers with an event inside the given month.
    pub(crate) fn day_numbers(&self, ym: YearMonth) -> BTreeSet<u8> {
        self.0
            .iter()
            .copied()
            .filter(|date| date.year() == ym.year && date.month() == ym.month)
            .map(Date::day)
            .collect()
    }
}
