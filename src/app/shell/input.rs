use super::Shell;
use crate::core::event::{InputEvent, Key};
use crate::core::view::EventResult;
use crate::kernel::{Action as KernelAction, Affordance, FocusTarget};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub(super) fn handle_input(shell: &mut Shell, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key) => handle_key(shell, key),
        InputEvent::Mouse(mouse) => handle_mouse(shell, mouse),
        InputEvent::Paste(text) if shell.focus() == FocusTarget::Search => {
            for ch in text.chars() {
                shell.dispatch_kernel(KernelAction::SearchAppend(ch));
            }
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

fn handle_key(shell: &mut Shell, event: &KeyEvent) -> EventResult {
    if event.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    let key = Key::from(*event);
    if key == Key::ctrl(KeyCode::Char('c')) {
        return EventResult::Quit;
    }

    if shell.focus() == FocusTarget::Search {
        return handle_search_key(shell, event);
    }

    let action = if key == Key::ctrl(KeyCode::Char('b')) {
        KernelAction::ToggleSidebar
    } else if key == Key::alt(KeyCode::Left) {
        KernelAction::HistoryBack
    } else if key == Key::alt(KeyCode::Right) {
        KernelAction::HistoryForward
    } else if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return EventResult::Ignored;
    } else {
        match key.code {
            KeyCode::Char('q') => return EventResult::Quit,
            KeyCode::Char(ch @ '1'..='5') => {
                let index = (ch as usize) - ('1' as usize);
                KernelAction::Navigate(Affordance::SIDEBAR[index].intent())
            }
            KeyCode::Char('c') => KernelAction::Navigate(Affordance::CreateProduct.intent()),
            KeyCode::Char('p') => KernelAction::Navigate(Affordance::Profile.intent()),
            KeyCode::Char('[') => KernelAction::HistoryBack,
            KeyCode::Char(']') => KernelAction::HistoryForward,
            KeyCode::Char('r') => KernelAction::Reload,
            KeyCode::Char('/') => KernelAction::SearchFocus,
            _ => return EventResult::Ignored,
        }
    };

    shell.dispatch_kernel(action);
    EventResult::Consumed
}

fn handle_search_key(shell: &mut Shell, event: &KeyEvent) -> EventResult {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let action = match event.code {
        KeyCode::Esc | KeyCode::Enter => KernelAction::SearchBlur,
        KeyCode::Backspace => KernelAction::SearchBackspace,
        KeyCode::Char('u') if ctrl => KernelAction::SearchClear,
        KeyCode::Char(ch) if !ctrl && !event.modifiers.contains(KeyModifiers::ALT) => {
            KernelAction::SearchAppend(ch)
        }
        _ => return EventResult::Ignored,
    };

    shell.dispatch_kernel(action);
    EventResult::Consumed
}

fn handle_mouse(shell: &mut Shell, event: &MouseEvent) -> EventResult {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return EventResult::Ignored;
    }

    let (x, y) = (event.column, event.row);
    let hit = shell
        .hit_regions
        .iter()
        .find(|(rect, _)| contains(*rect, x, y))
        .map(|(_, affordance)| *affordance);

    if let Some(affordance) = hit {
        shell.dispatch_kernel(KernelAction::SearchBlur);
        shell.dispatch_kernel(KernelAction::Navigate(affordance.intent()));
        return EventResult::Consumed;
    }

    if shell
        .last_search_area
        .is_some_and(|rect| contains(rect, x, y))
    {
        shell.dispatch_kernel(KernelAction::SearchFocus);
        return EventResult::Consumed;
    }

    if shell.focus() == FocusTarget::Search {
        shell.dispatch_kernel(KernelAction::SearchBlur);
        return EventResult::Consumed;
    }

    EventResult::Ignored
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
