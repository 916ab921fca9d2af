mod app;
mod events;
mod help;
mod jumpto;
mod labels;
mod month;
mod theme;
use crate::app::App;
use crate::events::EventCalendar;
use crate::labels::Labels;
use crate::month::MonthView;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Pick {
        start: Option<Start>,
        events: Vec<Date>,
        show_fill: bool,
    },
    Help,
    Version,
}

/// Where to open: on a full date (preselected) or on a bare month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Start {
    Day(Date),
    Month { year: i32, month: u8 },
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut start = None;
        let mut events = Vec::new();
        let mut show_fill = true;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('e') | Arg::Long("event") => {
                    events.push(parse_date(parser.value()?.string()?)?);
                }
                Arg::Long("no-fill") => show_fill = false,
                Arg::Value(value) if start.is_none() => {
                    start = Some(parse_start(value.string()?)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Pick {
            start,
            events,
            show_fill,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Pick {
                start,
                events,
                show_fill,
            } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut view = MonthView::new(today, EventCalendar::new(events))
                    .context("failed to lay out the current month")?
                    .labels(Labels::default())
                    .show_fill(show_fill);
                match start {
                    Some(Start::Day(date)) => view.open(date),
                    Some(Start::Month { year, month }) => view.open_month(year, month),
                    None => Ok(()),
                }
                .context("failed to lay out the requested month")?;
                let picked = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let picked = App::new(view).run(&mut terminal)?;
                    Ok(picked)
                })?;
                if let Some(date) = picked {
                    println!("{date}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: monthpick [OPTIONS] [YYYY-MM-DD | YYYY-MM]");
                println!();
                println!("Terminal month-calendar date picker; prints the picked date on exit.");
                println!("A full date opens its month with the day preselected; a bare");
                println!("year-month just opens the month.");
                println!();
                println!("Options:");
                println!("  -e, --event <YYYY-MM-DD>  Mark the date's day in its month; may be");
                println!("                            given multiple times");
                println!("      --no-fill             Leave previous/next-month cells blank");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_date(value: String) -> Result<Date, lexopt::Error> {
    match Date::parse(&value, &YMD_FMT) {
        Ok(d) => Ok(d),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn parse_start(value: String) -> Result<Start, lexopt::Error> {
    match Date::parse(&value, &YMD_FMT) {
        Ok(date) => Ok(Start::Day(date)),
        // Not a full date; accept YYYY-MM as a bare month.  The month
        // number is range-checked when the grid is laid out.
        Err(e) => match parse_year_month(&value) {
            Some((year, month)) => Ok(Start::Month { year, month }),
            None => Err(lexopt::Error::ParsingFailed {
                value,
                error: Box::new(e),
            }),
        },
    }
}

fn parse_year_month(value: &str) -> Option<(i32, u8)> {
    let (year, month) = value.rsplit_once('-')?;
    Some((year.parse().ok()?, month.parse().ok()?))
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parse_bare_invocation() {
        let parser = Parser::from_args(std::iter::empty::<String>());
        assert_eq!(
            Command::from_parser(parser).unwrap(),
            Command::Pick {
                start: None,
                events: Vec::new(),
                show_fill: true,
            }
        );
    }

    #[test]
    fn parse_start_date_and_events() {
        let parser = Parser::from_args(["-e", "2024-05-03", "--event", "2024-05-21", "2024-05-14"]);
        assert_eq!(
            Command::from_parser(parser).unwrap(),
            Command::Pick {
                start: Some(Start::Day(date!(2024 - 05 - 14))),
                events: vec![date!(2024 - 05 - 03), date!(2024 - 05 - 21)],
                show_fill: true,
            }
        );
    }

    #[test]
    fn parse_bare_month_start() {
        let parser = Parser::from_args(["2024-05"]);
        assert_eq!(
            Command::from_parser(parser).unwrap(),
            Command::Pick {
                start: Some(Start::Month {
                    year: 2024,
                    month: 5,
                }),
                events: Vec::new(),
                show_fill: true,
            }
        );
    }

    #[test]
    fn parse_no_fill() {
        let parser = Parser::from_args(["--no-fill"]);
        let Ok(Command::Pick { show_fill, .. }) = Command::from_parser(parser) else {
            panic!("expected a pick command");
        };
        assert!(!show_fill);
    }

    #[test]
    fn reject_malformed_date() {
        let parser = Parser::from_args(["05/14/2024"]);
        assert!(Command::from_parser(parser).is_err());
    }

    #[test]
    fn reject_second_positional() {
        let parser = Parser::from_args(["2024-05-14", "2024-05-15"]);
        assert!(Command::from_parser(parser).is_err());
    }
}
