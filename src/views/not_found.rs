use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::kernel::ResolutionMiss;

pub fn render(miss: &ResolutionMiss, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            "Page not found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Nothing lives at {}.", miss.path)),
        Line::from(Span::styled(
            "Press 1 for the dashboard or [ to go back.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    Paragraph::new(lines).render(area, buf);
}
