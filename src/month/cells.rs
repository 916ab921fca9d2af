use super::grid::MonthGrid;
use std::collections::BTreeSet;
use time::Date;

/// Ambient state every cell is classified against: today's date, the
/// current selection, and the day numbers carrying an event in the viewed
/// month.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct CellContext {
    pub(crate) today: Option<Date>,
    pub(crate) selected: Option<Date>,
    pub(crate) event_days: BTreeSet<u8>,
}

/// Presentation flags for a single grid cell.  Recomputed on every render,
/// never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CellView {
    pub(crate) day: u8,
    pub(crate) is_fill: bool,
    pub(crate) is_today: bool,
    pub(crate) is_selected: bool,
    pub(crate) has_event: bool,
}

impl MonthGrid {
    /// Classify the cell at `index`.
    ///
    /// Today/selected matching is keyed on the index as well as the day
    /// number: a fill cell whose number happens to equal today's day must
    /// not light up.  Event matching is by day number alone, fill cells
    /// included, mirroring how callers hand over plain day numbers for the
    /// viewed month.
    pub(crate) fn classify(&self, index: usize, ctx: &CellContext) -> CellView {
        let day = self.cells[index];
        let is_fill = index < self.fill_start || index >= self.fill_end;
        let in_viewed_month = |date: Date| {
            !is_fill && date.day() == day && date.month() == self.month && date.year() == self.year
        };
        CellView {
            day,
            is_fill,
            is_today: ctx.today.is_some_and(in_viewed_month),
            is_selected: ctx.selected.is_some_and(in_viewed_month),
            has_event: ctx.event_days.contains(&day),
        }
    }

    /// All cells of the grid, classified in display order.
    pub(crate) fn cell_views<'a>(
        &'a self,
        ctx: &'a CellContext,
    ) -> impl Iterator<Item = CellView> + 'a {
        (0..self.cells.len()).map(move |index| self.classify(index, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    // May 2024: two leading April cells (29, 30), then 1..=31, then two
    // trailing June cells (1, 2).
    fn may24() -> MonthGrid {
        MonthGrid::build(2024, 5).unwrap()
    }

    #[test]
    fn fill_boundaries() {
        let grid = may24();
        let ctx = CellContext::default();
        assert!(grid.classify(0, &ctx).is_fill);
        assert!(grid.classify(1, &ctx).is_fill);
        assert!(!grid.classify(2, &ctx).is_fill);
        assert!(!grid.classify(32, &ctx).is_fill);
        assert!(grid.classify(33, &ctx).is_fill);
        assert!(grid.classify(34, &ctx).is_fill);
    }

    #[test]
    fn today_in_viewed_month() {
        let grid = may24();
        let ctx = CellContext {
            today: Some(date!(2024 - 05 - 14)),
            ..CellContext::default()
        };
        let view = grid.classify(15, &ctx);
        assert_eq!(view.day, 14);
        assert!(view.is_today);
    }

    #[test]
    fn today_does_not_match_fill_twin() {
        // June 1st: the trailing fill cell at index 33 carries the same
        // day number as the in-month cell at index 2.
        let grid = may24();
        let ctx = CellContext {
            today: Some(date!(2024 - 05 - 01)),
            ..CellContext::default()
        };
        assert!(grid.classify(2, &ctx).is_today);
        let twin = grid.classify(33, &ctx);
        assert_eq!(twin.day, 1);
        assert!(twin.is_fill);
        assert!(!twin.is_today);
    }

    #[test]
    fn today_in_another_month() {
        let grid = may24();
        let ctx = CellContext {
            today: Some(date!(2024 - 04 - 29)),
            ..CellContext::default()
        };
        // Neither the April fill cell showing 29 nor May's own 29th is
        // today while May is the viewed month.
        assert!(!grid.classify(0, &ctx).is_today);
        assert!(!grid.classify(30, &ctx).is_today);
    }

    #[test]
    fn selection_requires_month_and_index() {
        let grid = may24();
        let ctx = CellContext {
            selected: Some(date!(2024 - 05 - 02)),
            ..CellContext::default()
        };
        assert!(grid.classify(3, &ctx).is_selected);
        // The trailing June 2nd shares the number but not the month.
        assert!(!grid.classify(34, &ctx).is_selected);
        let elsewhere = CellContext {
            selected: Some(date!(2023 - 05 - 02)),
            ..CellContext::default()
        };
        assert!(!grid.classify(3, &elsewhere).is_selected);
    }

    #[test]
    fn events_match_by_day_number_alone() {
        let grid = may24();
        let ctx = CellContext {
            event_days: BTreeSet::from([1]),
            ..CellContext::default()
        };
        assert!(grid.classify(2, &ctx).has_event);
        // Day-number matching deliberately reaches the June fill cell too.
        assert!(grid.classify(33, &ctx).has_event);
        assert!(!grid.classify(3, &ctx).has_event);
    }

    #[test]
    fn views_cover_the_grid_in_order() {
        let grid = may24();
        let ctx = CellContext::default();
        let views = grid.cell_views(&ctx).collect::<Vec<_>>();
        assert_eq!(views.len(), 35);
        assert_eq!(views[0].day, 29);
        assert_eq!(views[2].day, 1);
        assert_eq!(views[34].day, 2);
    }
}
