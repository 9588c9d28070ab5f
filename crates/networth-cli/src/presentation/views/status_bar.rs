//! Status Bar View Component
//!
//! Renders the current fragment, history availability and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

fn availability(enabled: bool) -> Style {
    if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let fragment = if self.model.fragment.is_empty() {
            "(none)"
        } else {
            self.model.fragment.as_str()
        };
        let mut status = vec![
            Span::raw("Fragment: "),
            Span::styled(fragment, Style::default().fg(Color::Cyan)),
        ];
        if let Some(message) = &self.model.message {
            status.push(Span::raw(" | "));
            status.push(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Yellow),
            ));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let help = Line::from(vec![
            Span::styled("[←]", availability(self.model.can_go_back)),
            Span::raw("back "),
            Span::styled("[→]", availability(self.model.can_go_forward)),
            Span::raw("fwd "),
            Span::styled("[tab]", Style::default().fg(Color::Yellow)),
            Span::raw("next "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
