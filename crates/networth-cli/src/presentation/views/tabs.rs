use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::presentation::view_models::TabViewModel;

/// Navigation bar: one tab per registered section.
pub struct TabsView<'a> {
    tabs: &'a [TabViewModel],
}

impl<'a> TabsView<'a> {
    pub fn new(tabs: &'a [TabViewModel]) -> Self {
        Self { tabs }
    }
}

impl<'a> Widget for TabsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .tabs
            .iter()
            .map(|tab| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", tab.hotkey),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(tab.title.as_str()),
                ])
            })
            .collect();

        let selected = self.tabs.iter().position(|tab| tab.active);

        let widget = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("networth"))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        widget.render(area, buf);
    }
}
