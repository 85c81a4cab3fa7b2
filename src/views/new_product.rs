use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::fit;
use crate::kernel::catalog::{filter_templates, NewProductContent};

const NAME_WIDTH: usize = 16;

pub fn render(content: &NewProductContent, query: &str, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let matches = filter_templates(&content.templates, query);
    let mut lines = Vec::with_capacity(matches.len() + 2);
    lines.push(Line::from(Span::styled(
        "Pick a template to start a new product",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    if matches.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No templates match \"{}\"", query.trim()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for template in matches {
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:<w$} ",
                fit(&template.name, NAME_WIDTH),
                w = NAME_WIDTH
            )),
            Span::styled(
                format!("[{}] ", template.category),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                template.description.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    Paragraph::new(lines).render(area, buf);
}
