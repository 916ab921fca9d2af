use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::month::{GridError, MonthPane, MonthView, Notice, MAIN_WIDTH};
use crate::theme::{BASE_STYLE, FOOTER_STYLE};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    view: MonthView,
    state: AppState,
    notice: Option<Notice>,
}

impl App {
    pub(crate) fn new(view: MonthView) -> App {
        App {
            view,
            state: AppState::Calendar,
            notice: None,
        }
    }

    /// Run until the user quits.  Returns the picked date, unless the
    /// session was cancelled.
    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<Option<Date>> {
        while !self.finished() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(self.picked())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Cancelled;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other
        // stuff too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => {
                    self.view.step_focus(-1);
                    true
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.view.step_focus(1);
                    true
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.view.step_focus(-7);
                    true
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.view.step_focus(7);
                    true
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.notice = Some(self.view.select_focused());
                    true
                }
                KeyCode::Char('n') | KeyCode::PageDown => {
                    let outcome = self.view.next_month();
                    self.record(outcome)
                }
                KeyCode::Char('p') | KeyCode::PageUp => {
                    let outcome = self.view.previous_month();
                    self.record(outcome)
                }
                KeyCode::Char('t' | '0') | KeyCode::Home => {
                    self.notice = Some(self.view.jump_to_today());
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char('0') => state.handle_input(JumpToInput::Digit(0)),
                        KeyCode::Char('1') => state.handle_input(JumpToInput::Digit(1)),
                        KeyCode::Char('2') => state.handle_input(JumpToInput::Digit(2)),
                        KeyCode::Char('3') => state.handle_input(JumpToInput::Digit(3)),
                        KeyCode::Char('4') => state.handle_input(JumpToInput::Digit(4)),
                        KeyCode::Char('5') => state.handle_input(JumpToInput::Digit(5)),
                        KeyCode::Char('6') => state.handle_input(JumpToInput::Digit(6)),
                        KeyCode::Char('7') => state.handle_input(JumpToInput::Digit(7)),
                        KeyCode::Char('8') => state.handle_input(JumpToInput::Digit(8)),
                        KeyCode::Char('9') => state.handle_input(JumpToInput::Digit(9)),
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(ym) => match self.view.jump_to(ym) {
                            Ok(notice) => {
                                self.notice = Some(notice);
                                self.state = AppState::Calendar;
                                true
                            }
                            // The target month exists but its year is out
                            // of calendar range; leave the entry open for
                            // correction.
                            Err(_) => false,
                        },
                    }
                }
            }
            AppState::Quitting | AppState::Cancelled => false,
        }
    }

    fn record(&mut self, outcome: Result<Notice, GridError>) -> bool {
        match outcome {
            Ok(notice) => {
                self.notice = Some(notice);
                true
            }
            Err(_) => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn finished(&self) -> bool {
        matches!(self.state, AppState::Quitting | AppState::Cancelled)
    }

    fn picked(&self) -> Option<Date> {
        if self.state == AppState::Quitting {
            self.view.selected()
        } else {
            None
        }
    }

    fn footer(&self) -> String {
        match self.notice {
            Some(Notice::DayChanged(date)) => format!("selected {date}"),
            Some(Notice::MonthChanged(ym)) => {
                format!("viewing {} {}", self.view.month_name(ym.month), ym.year)
            }
            None => String::from("? help"),
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        MonthPane.render(area, buf, &mut self.view);
        if area.height > 0 {
            let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
            buf.set_string(
                area.x + left,
                area.y + area.height - 1,
                self.footer(),
                FOOTER_STYLE,
            );
        }
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
    Cancelled,
}
