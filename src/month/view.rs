use super::cells::CellContext;
use super::cursor::{Cursor, YearMonth};
use super::grid::{GridError, MonthGrid};
use crate::events::EventCalendar;
use crate::labels::Labels;
use time::{Date, Month};

/// What a user interaction changed, for the embedding layer to report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Notice {
    DayChanged(Date),
    MonthChanged(YearMonth),
}

/// The mutable state behind one calendar pane: the viewed cursor, its
/// grid, the selection, the keyboard focus, and the event set.  The grid
/// is rebuilt on every navigation; nothing else carries over between
/// months.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    pub(super) today: Date,
    pub(super) cursor: Cursor,
    pub(super) grid: MonthGrid,
    pub(super) selected: Option<Date>,
    /// Day of the viewed month the keyboard is on, 1-based.
    pub(super) focus: u8,
    pub(super) events: EventCalendar,
    pub(super) labels: Labels,
    pub(super) show_fill: bool,
}

impl MonthView {
    pub(crate) fn new(today: Date, events: EventCalendar) -> Result<MonthView, GridError> {
        let grid = MonthGrid::for_month(today.year(), today.month())?;
        Ok(MonthView {
            today,
            cursor: Cursor::Day(today),
            grid,
            selected: None,
            focus: today.day(),
            events,
            labels: Labels::default(),
            show_fill: true,
        })
    }

    pub(crate) fn labels(mut self, labels: Labels) -> MonthView {
        self.labels = labels;
        self
    }

    pub(crate) fn show_fill(mut self, show_fill: bool) -> MonthView {
        self.show_fill = show_fill;
        self
    }

    /// Open the view on the given date and select it.
    pub(crate) fn open(&mut self, date: Date) -> Result<(), GridError> {
        self.grid = MonthGrid::for_month(date.year(), date.month())?;
        self.cursor = Cursor::Day(date);
        self.selected = Some(date);
        self.focus = date.day();
        Ok(())
    }

    /// Open the view on a bare year/month cursor, with nothing selected.
    /// `month` is the calendar month number and is validated here.
    pub(crate) fn open_month(&mut self, year: i32, month: u8) -> Result<(), GridError> {
        self.grid = MonthGrid::build(year, month)?;
        self.cursor = Cursor::Month(YearMonth::new(self.grid.year, self.grid.month));
        self.clamp_focus();
        Ok(())
    }

    pub(crate) fn viewed(&self) -> YearMonth {
        self.cursor.year_month()
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub(crate) fn month_name(&self, month: Month) -> &'static str {
        self.labels.month_name(month)
    }

    pub(crate) fn next_month(&mut self) -> Result<Notice, GridError> {
        self.shift_month(Cursor::forward_month)
    }

    pub(crate) fn previous_month(&mut self) -> Result<Notice, GridError> {
        self.shift_month(Cursor::backward_month)
    }

    fn shift_month(&mut self, step: fn(Cursor) -> Cursor) -> Result<Notice, GridError> {
        let cursor = step(self.cursor);
        let ym = cursor.year_month();
        // Build before committing so a failed move leaves the view as it
        // was.
        self.grid = MonthGrid::for_month(ym.year, ym.month)?;
        self.cursor = cursor;
        self.clamp_focus();
        Ok(Notice::MonthChanged(ym))
    }

    pub(crate) fn jump_to(&mut self, ym: YearMonth) -> Result<Notice, GridError> {
        self.grid = MonthGrid::for_month(ym.year, ym.month)?;
        self.cursor = Cursor::Month(ym);
        self.clamp_focus();
        Ok(Notice::MonthChanged(ym))
    }

    pub(crate) fn jump_to_today(&mut self) -> Notice {
        self.grid = MonthGrid::for_month(self.today.year(), self.today.month())
            .expect("the grid for today's month should always build");
        self.cursor = Cursor::Day(self.today);
        self.focus = self.today.day();
        Notice::MonthChanged(YearMonth::from(self.today))
    }

    /// Move the focus by a signed number of days, clamped to the viewed
    /// month.
    pub(crate) fn step_focus(&mut self, delta: i32) {
        let len = i32::from(self.grid.month_len);
        let day = (i32::from(self.focus) + delta).clamp(1, len);
        self.focus = u8::try_from(day).unwrap_or(1);
    }

    pub(crate) fn select_focused(&mut self) -> Notice {
        let ym = self.viewed();
        let date = Date::from_calendar_date(ym.year, ym.month, self.focus)
            .expect("the focused day should exist in the viewed month");
        self.selected = Some(date);
        Notice::DayChanged(date)
    }

    fn clamp_focus(&mut self) {
        self.focus = self.focus.clamp(1, self.grid.month_len);
    }

    pub(super) fn cell_context(&self) -> CellContext {
        CellContext {
            today: Some(self.today),
            selected: self.selected,
            event_days: self.events.day_numbers(self.viewed()),
        }
    }
}
