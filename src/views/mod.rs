//! Page renderers. Each draws into a plain `Buffer` so callers can render
//! off-screen first and only keep complete output.

pub mod dashboard;
pub mod new_product;
pub mod not_found;
pub mod status;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::kernel::{ViewContent, ViewFault, ViewId};

/// Draws loaded content for `view`. Content of the wrong kind is a render fault.
pub fn render_content(
    view: ViewId,
    content: &ViewContent,
    query: &str,
    area: Rect,
    buf: &mut Buffer,
) -> Result<(), ViewFault> {
    match (view, content) {
        (ViewId::Dashboard, ViewContent::Dashboard(content)) => {
            dashboard::render(content, query, area, buf);
            Ok(())
        }
        (ViewId::NewProduct, ViewContent::NewProduct(content)) => {
            new_product::render(content, query, area, buf);
            Ok(())
        }
        (view, other) => Err(ViewFault::RenderFault {
            view,
            message: format!("received {} content", other.view()),
        }),
    }
}

pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Cuts `text` to at most `width` columns, marking the cut with `…`.
pub fn fit(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/views/mod.rs"]
mod tests;
