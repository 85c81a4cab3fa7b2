use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{fit, format_price};
use crate::kernel::catalog::{filter_products, DashboardContent};

const NAME_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 12;

pub fn render(content: &DashboardContent, query: &str, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let [stats_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let stats = &content.stats;
    let stats_line = Line::from(vec![
        Span::styled("Products ", Style::default().fg(Color::DarkGray)),
        Span::raw(stats.product_count.to_string()),
        Span::styled("   Sold ", Style::default().fg(Color::DarkGray)),
        Span::raw(stats.units_sold.to_string()),
        Span::styled("   Revenue ", Style::default().fg(Color::DarkGray)),
        Span::raw(format_price(stats.revenue_cents)),
    ]);
    Paragraph::new(stats_line).render(stats_area, buf);

    let matches = filter_products(&content.products, query);
    let mut lines = Vec::with_capacity(matches.len() + 1);
    lines.push(Line::from(Span::styled(
        format!(
            "{:<name$} {:<cat$} {:>9} {:>6}",
            "Product",
            "Category",
            "Price",
            "Sold",
            name = NAME_WIDTH,
            cat = CATEGORY_WIDTH
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if matches.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No products match \"{}\"", query.trim()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for product in matches {
        lines.push(Line::from(format!(
            "{:<name$} {:<cat$} {:>9} {:>6}",
            fit(&product.name, NAME_WIDTH),
            fit(&product.category, CATEGORY_WIDTH),
            format_price(product.price_cents),
            product.sold,
            name = NAME_WIDTH,
            cat = CATEGORY_WIDTH
        )));
    }

    Paragraph::new(lines).render(list_area, buf);
}
