use super::view::MonthView;
use crate::theme::{cell_style, TITLE_STYLE, WEEKDAY_STYLE};
use ratatui::{prelude::*, widgets::*};
use std::iter::zip;

/// Columns per weekday column, cell plus the gap to its right neighbor.
const DAY_WIDTH: u16 = 5;

/// Width of the pane: seven columns without the last gap.
pub(crate) const MAIN_WIDTH: u16 = DAY_WIDTH * 7 - 1;

/// Lines taken up by the title, the weekday header, and its rule.
const HEADER_LINES: u16 = 3;

const ACS_HLINE: char = '─';

/// Renders a [`MonthView`]: a centered "<month> <year>" title, the weekday
/// header, and one line per week of the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthPane;

impl StatefulWidget for MonthPane {
    type State = MonthView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut MonthView) {
        let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
        let mut canvas = BufferCanvas::new(area, buf);
        let title = format!(
            "{} {}",
            state.labels.month_name(state.grid.month),
            state.grid.year,
        );
        let title_width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        let title_x = left + MAIN_WIDTH.saturating_sub(title_width) / 2;
        canvas.mvprint(0, title_x, title, Some(TITLE_STYLE));
        let header = state
            .labels
            .weekdays
            .map(|name| format!(" {name:<2} "))
            .join(" ");
        canvas.mvprint(1, left, header, Some(WEEKDAY_STYLE));
        canvas.hline(2, left, MAIN_WIDTH);
        let ctx = state.cell_context();
        for (i, cell) in zip(0u16.., state.grid.cell_views(&ctx)) {
            if cell.is_fill && !state.show_fill {
                continue;
            }
            let focused = !cell.is_fill && cell.day == state.focus;
            let s = if cell.is_today {
                format!("[{:2}]", cell.day)
            } else {
                format!(" {:2} ", cell.day)
            };
            canvas.mvprint(
                HEADER_LINES + i / 7,
                left + (i % 7) * DAY_WIDTH,
                s,
                Some(cell_style(cell, focused)),
            );
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // A Paragraph truncates text that would extend past the pane,
            // as long as the Rect handed to it stays inside the frame.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, length: u16) {
        self.mvprint(y, x, String::from(ACS_HLINE).repeat(length.into()), None);
    }
}
