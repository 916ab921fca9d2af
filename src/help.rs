use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "ARROWS, hjkl    Move the focused day",
    "ENTER, SPACE    Select the focused day",
    "n, PAGE DOWN    Forward one month",
    "p, PAGE UP      Back one month",
    "t, 0, HOME      Jump to today",
    "g               Jump to a year & month",
    "?               Show this help",
    "q, ESC          Quit, printing the selection",
    "CTRL-C          Quit without selecting",
    "",
    "Press the Any Key to dismiss.",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter(TEXT.iter().copied());
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let [overlay] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [overlay] = Layout::vertical([height]).flex(Flex::Center).areas(overlay);
        Clear.render(overlay, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0)
            .render(overlay, buf);
    }
}
