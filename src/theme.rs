use crate::month::CellView;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

/// Cells borrowed from the previous or next month.
pub(crate) const FILL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const EVENT_STYLE: Style = Style::new().fg(Color::LightYellow).bg(Color::Black);

pub(crate) const FOOTER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) mod jumpto {
    use super::{Color, Modifier, Style, BASE_STYLE};

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}

/// Resolve the style for one day cell.  Fill cells stay muted no matter
/// what else they match; the focus marker layers on top of everything.
pub(crate) fn cell_style(cell: CellView, focused: bool) -> Style {
    let mut style = if cell.is_fill {
        FILL_STYLE
    } else if cell.has_event {
        EVENT_STYLE
    } else {
        BASE_STYLE
    };
    if cell.is_today {
        style = style.add_modifier(Modifier::BOLD);
    }
    if cell.is_selected {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
