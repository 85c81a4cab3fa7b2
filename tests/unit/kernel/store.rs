use super::*;
use crate::kernel::catalog::{Catalog, ViewContent};
use crate::kernel::containment::TracingFaultSink;
use crate::kernel::intent::{Affordance, NavigationIntent};
use crate::kernel::location::Location;
use crate::kernel::route::ViewId;
use crate::kernel::view_state::{ViewFault, ViewState};
use std::sync::Arc;

fn store_at(path: &str) -> Store {
    Store::new(AppState::new(Location::new(path), Arc::new(TracingFaultSink)))
}

fn loaded(view: ViewId) -> Result<ViewContent, ViewFault> {
    Ok(ViewContent::for_view(view, &Catalog::default()))
}

fn single_load(result: &DispatchResult) -> crate::kernel::LoadTicket {
    match result.effects.as_slice() {
        [Effect::LoadView(ticket)] => *ticket,
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn test_start_requests_initial_load() {
    let mut store = store_at("/");
    let result = store.start();

    assert!(result.state_changed);
    assert_eq!(single_load(&result).view, ViewId::Dashboard);
}

#[test]
fn test_navigate_scenario_emits_load_then_applies() {
    let mut store = store_at("/");
    let first = single_load(&store.start());
    store.dispatch(Action::ViewLoaded {
        generation: first.generation,
        result: loaded(ViewId::Dashboard),
    });

    let result = store.dispatch(Action::Navigate(Affordance::CreateProduct.intent()));
    let ticket = single_load(&result);
    assert_eq!(ticket.view, ViewId::NewProduct);
    assert_eq!(store.state().router.location().path(), "/new-product");
    assert_eq!(store.state().router.view_state(), Some(&ViewState::Loading));

    let result = store.dispatch(Action::ViewLoaded {
        generation: ticket.generation,
        result: loaded(ViewId::NewProduct),
    });
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().router.mounted_view(), Some(ViewId::NewProduct));
}

#[test]
fn test_stale_load_reports_no_change() {
    let mut store = store_at("/");
    let first = single_load(&store.start());
    store.dispatch(Action::Navigate(NavigationIntent::to("/new-product")));

    let result = store.dispatch(Action::ViewLoaded {
        generation: first.generation,
        result: loaded(ViewId::Dashboard),
    });

    assert!(!result.state_changed);
    assert_eq!(store.state().router.view_state(), Some(&ViewState::Loading));
}

#[test]
fn test_unregistered_navigation_cancels_load() {
    let mut store = store_at("/");
    store.start();

    let result = store.dispatch(Action::Navigate(NavigationIntent::to("/settings")));

    assert!(result.state_changed);
    assert_eq!(result.effects, vec![Effect::CancelLoad]);
    assert_eq!(store.state().router.mounted_view(), None);
}

#[test]
fn test_history_back_without_entries_is_noop() {
    let mut store = store_at("/");
    store.start();

    let result = store.dispatch(Action::HistoryBack);
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn test_view_fault_moves_to_failed() {
    let mut store = store_at("/");
    let ticket = single_load(&store.start());
    store.dispatch(Action::ViewLoaded {
        generation: ticket.generation,
        result: loaded(ViewId::Dashboard),
    });

    let result = store.dispatch(Action::ViewFaulted {
        generation: ticket.generation,
        fault: ViewFault::RenderFault {
            view: ViewId::Dashboard,
            message: "bad".to_string(),
        },
    });

    assert!(result.state_changed);
    assert!(store
        .state()
        .router
        .view_state()
        .is_some_and(ViewState::is_failed));
}

#[test]
fn test_search_editing_and_focus() {
    let mut store = store_at("/");

    assert!(store.dispatch(Action::SearchFocus).state_changed);
    assert!(!store.dispatch(Action::SearchFocus).state_changed);
    assert_eq!(store.state().ui.focus, FocusTarget::Search);

    store.dispatch(Action::SearchAppend('t'));
    store.dispatch(Action::SearchAppend('e'));
    assert!(!store.dispatch(Action::SearchAppend('\n')).state_changed);
    assert_eq!(store.state().search.query, "te");

    assert!(store.dispatch(Action::SearchBackspace).state_changed);
    assert_eq!(store.state().search.query, "t");
    assert!(store.dispatch(Action::SearchClear).state_changed);
    assert!(!store.dispatch(Action::SearchClear).state_changed);
    assert!(!store.dispatch(Action::SearchBackspace).state_changed);

    assert!(store.dispatch(Action::SearchBlur).state_changed);
    assert_eq!(store.state().ui.focus, FocusTarget::Content);
}

#[test]
fn test_toggle_sidebar() {
    let mut store = store_at("/");
    assert!(store.state().ui.sidebar_visible);
    store.dispatch(Action::ToggleSidebar);
    assert!(!store.state().ui.sidebar_visible);
}
