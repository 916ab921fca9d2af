mod cells;
mod cursor;
mod grid;
mod view;
mod widget;
pub(crate) use self::cells::CellView;
pub(crate) use self::cursor::YearMonth;
pub(crate) use self::grid::GridError;
pub(crate) use self::view::{MonthView, Notice};
pub(crate) use self::widget::{MonthPane, MAIN_WIDTH};
