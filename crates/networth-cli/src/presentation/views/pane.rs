use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::PaneViewModel;

/// Body of the active section.
pub struct PaneView<'a> {
    model: &'a PaneViewModel,
}

impl<'a> PaneView<'a> {
    pub fn new(model: &'a PaneViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PaneView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .model
            .lines
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();

        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.model.title.as_str()),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
