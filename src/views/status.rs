//! Interim placeholder and error-boundary fallback.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::kernel::containment::{FALLBACK_HINT, FALLBACK_MESSAGE};
use crate::kernel::ViewId;

pub fn render_loading(view: ViewId, area: Rect, buf: &mut Buffer) {
    let line = Line::from(Span::styled(
        format!("Loading {}…", view.title()),
        Style::default().fg(Color::DarkGray),
    ));
    Paragraph::new(line).render(area, buf);
}

pub fn render_fallback(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            FALLBACK_MESSAGE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            FALLBACK_HINT,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    Paragraph::new(lines).render(area, buf);
}
