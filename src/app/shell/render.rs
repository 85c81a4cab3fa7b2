use super::{Shell, HEADER_HEIGHT, SIDEBAR_WIDTH, STATUS_HEIGHT};
use crate::kernel::{Action as KernelAction, Affordance, FocusTarget, MountKind, ViewFault, ViewState};
use crate::views;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use unicode_width::UnicodeWidthStr;

const BRAND: &str = " UniMart ";
const SEARCH_LABEL: &str = "Search: ";
const SEARCH_PLACEHOLDER: &str = "press / to search";
const SEARCH_WIDTH: u16 = 32;

pub(super) fn render(shell: &mut Shell, frame: &mut Frame, area: Rect) {
    shell.hit_regions.clear();
    shell.last_search_area = None;
    if area.width == 0 || area.height == 0 {
        return;
    }

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    render_header(shell, frame.buffer_mut(), header_area);

    let content_area = if shell.sidebar_visible() {
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body_area);
        render_sidebar(shell, frame, sidebar_area);
        content_area
    } else {
        body_area
    };

    render_content(shell, frame, content_area);
    render_status(shell, frame, status_area);
}

pub(super) fn cursor_position(shell: &Shell) -> Option<(u16, u16)> {
    if shell.focus() != FocusTarget::Search {
        return None;
    }
    let area = shell.last_search_area?;
    let offset = (SEARCH_LABEL.width() + shell.query().width()) as u16;
    let x = area
        .x
        .saturating_add(offset)
        .min(area.x + area.width.saturating_sub(1));
    Some((x, area.y))
}

fn render_header(shell: &mut Shell, buf: &mut Buffer, area: Rect) {
    let brand_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let (mut x, _) = buf.set_stringn(area.x, area.y, BRAND, area.width as usize, brand_style);
    x = x.saturating_add(1);

    let right_edge = area.x + area.width;
    let mut buttons_x = right_edge;
    let mut buttons = Vec::new();
    for affordance in [Affordance::Profile, Affordance::CreateProduct] {
        let label = format!("[{}]", affordance.label());
        let width = label.width() as u16;
        if buttons_x < x + width + SEARCH_WIDTH.min(10) {
            break;
        }
        buttons_x -= width;
        buttons.push((Rect::new(buttons_x, area.y, width, 1), affordance, label));
        buttons_x = buttons_x.saturating_sub(1);
    }

    let search_width = SEARCH_WIDTH.min(buttons_x.saturating_sub(x));
    if search_width > 0 {
        let search_area = Rect::new(x, area.y, search_width, 1);
        let focused = shell.focus() == FocusTarget::Search;
        let query = shell.query();
        let (text, text_style) = if query.is_empty() && !focused {
            (SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            (query, Style::default())
        };
        let label_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (after_label, _) = buf.set_stringn(
            search_area.x,
            search_area.y,
            SEARCH_LABEL,
            search_width as usize,
            label_style,
        );
        let remaining = (search_area.x + search_width).saturating_sub(after_label);
        buf.set_stringn(after_label, area.y, text, remaining as usize, text_style);
        shell.last_search_area = Some(search_area);
    }

    for (rect, affordance, label) in buttons {
        buf.set_string(rect.x, rect.y, label, Style::default().fg(Color::Cyan));
        shell.hit_regions.push((rect, affordance));
    }
}

fn render_sidebar(shell: &mut Shell, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::RIGHT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let location = shell.location().to_string();
    let buf = frame.buffer_mut();
    for (index, affordance) in Affordance::SIDEBAR.into_iter().enumerate() {
        let y = inner.y + 1 + index as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let style = if affordance.target_path() == location {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let label = format!(" {} {}", index + 1, affordance.label());
        buf.set_style(row, style);
        buf.set_stringn(row.x, row.y, label, row.width as usize, style);
        shell.hit_regions.push((row, affordance));
    }
}

fn render_content(shell: &mut Shell, frame: &mut Frame, area: Rect) {
    let title = match shell.state().router.mount().map(|m| &m.kind) {
        Some(MountKind::Routed { view, .. }) => view.title(),
        Some(MountKind::NotFound(_)) => "Not found",
        None => "",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fault = {
        let state = shell.store.state();
        let Some(mount) = state.router.mount() else {
            return;
        };
        let buf = frame.buffer_mut();
        match &mount.kind {
            MountKind::NotFound(miss) => {
                views::not_found::render(miss, inner, buf);
                None
            }
            MountKind::Routed { view, boundary } => match boundary.state() {
                ViewState::Loading => {
                    views::status::render_loading(*view, inner, buf);
                    None
                }
                ViewState::Failed(_) => {
                    views::status::render_fallback(inner, buf);
                    None
                }
                ViewState::Ready(content) => {
                    let mut scratch = Buffer::empty(inner);
                    let query = state.search.query.as_str();
                    let result = catch_unwind(AssertUnwindSafe(|| {
                        views::render_content(*view, content, query, inner, &mut scratch)
                    }))
                    .unwrap_or_else(|payload| {
                        Err(ViewFault::RenderFault {
                            view: *view,
                            message: panic_message(payload.as_ref()),
                        })
                    });
                    match result {
                        Ok(()) => {
                            buf.merge(&scratch);
                            None
                        }
                        Err(fault) => Some((mount.generation, fault)),
                    }
                }
            },
        }
    };

    if let Some((generation, fault)) = fault {
        shell.dispatch_kernel(KernelAction::ViewFaulted { generation, fault });
        views::status::render_fallback(inner, frame.buffer_mut());
    }
}

fn render_status(shell: &Shell, frame: &mut Frame, area: Rect) {
    let router = &shell.state().router;
    let phase = match router.mount().map(|m| &m.kind) {
        Some(MountKind::NotFound(_)) => "not found",
        Some(MountKind::Routed { boundary, .. }) => match boundary.state() {
            ViewState::Loading => "loading",
            ViewState::Ready(_) => "ready",
            ViewState::Failed(_) => "failed",
        },
        None => "",
    };

    let muted = Style::default().fg(Color::DarkGray);
    let enabled = |on: bool| if on { Style::default() } else { muted };
    let line = Line::from(vec![
        Span::raw(format!(" {} ", router.location())),
        Span::styled(format!("({phase})"), muted),
        Span::raw("  "),
        Span::styled("[ back", enabled(router.can_go_back())),
        Span::raw("  "),
        Span::styled("] forward", enabled(router.can_go_forward())),
        Span::styled("  r reload  / search  q quit", muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic while rendering".to_string()
    }
}
