use super::*;
use crate::kernel::catalog::{Catalog, Product};
use std::sync::Mutex;

#[derive(Default)]
struct RecordingSink {
    faults: Mutex<Vec<ViewFault>>,
}

impl FaultSink for RecordingSink {
    fn report(&self, fault: &ViewFault, _context: &FaultContext) {
        self.faults.lock().unwrap().push(fault.clone());
    }
}

fn catalog() -> Catalog {
    Catalog {
        products: vec![Product {
            name: "Classic Tee".to_string(),
            category: "Apparel".to_string(),
            price_cents: 1_999,
            sold: 3,
        }],
        templates: Vec::new(),
    }
}

fn content(view: ViewId) -> ViewContent {
    ViewContent::for_view(view, &catalog())
}

fn router_at(path: &str) -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let router = Router::new(Location::new(path), sink.clone());
    (router, sink)
}

#[test]
fn test_start_mounts_initial_location_loading() {
    let (mut router, _) = router_at("/");
    assert!(router.mount().is_none());

    let transition = router.start();
    let ticket = transition.load.unwrap();

    assert_eq!(ticket.view, ViewId::Dashboard);
    assert_eq!(router.mounted_view(), Some(ViewId::Dashboard));
    assert_eq!(router.view_state(), Some(&ViewState::Loading));
    assert_eq!(router.in_flight(), Some(ticket));
}

#[test]
fn test_successful_load_becomes_ready() {
    let (mut router, _) = router_at("/");
    let ticket = router.start().load.unwrap();

    let outcome = router.apply_load(ticket.generation, Ok(content(ViewId::Dashboard)));

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(
        router.view_state(),
        Some(&ViewState::Ready(content(ViewId::Dashboard)))
    );
    assert_eq!(router.in_flight(), None);
}

#[test]
fn test_failed_load_trips_boundary_and_reports() {
    let (mut router, sink) = router_at("/new-product");
    let ticket = router.start().load.unwrap();
    let fault = ViewFault::LoadFailure {
        view: ViewId::NewProduct,
        message: "network".to_string(),
    };

    let outcome = router.apply_load(ticket.generation, Err(fault.clone()));

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(router.view_state(), Some(&ViewState::Failed(fault.clone())));
    assert_eq!(*sink.faults.lock().unwrap(), vec![fault]);
}

#[test]
fn test_late_completion_is_discarded_after_navigation() {
    let (mut router, _) = router_at("/");
    let dashboard = router.start().load.unwrap();

    let new_product = router
        .navigate(NavigationIntent::to("/new-product"))
        .load
        .unwrap();

    assert_eq!(
        router.apply_load(dashboard.generation, Ok(content(ViewId::Dashboard))),
        LoadOutcome::Stale
    );
    assert_eq!(router.mounted_view(), Some(ViewId::NewProduct));
    assert_eq!(router.view_state(), Some(&ViewState::Loading));

    assert_eq!(
        router.apply_load(new_product.generation, Ok(content(ViewId::NewProduct))),
        LoadOutcome::Applied
    );
    assert_eq!(router.location().path(), "/new-product");
    assert_eq!(
        router.view_state(),
        Some(&ViewState::Ready(content(ViewId::NewProduct)))
    );
}

#[test]
fn test_late_failure_does_not_trip_new_mount() {
    let (mut router, sink) = router_at("/");
    let dashboard = router.start().load.unwrap();
    router.navigate(NavigationIntent::to("/new-product"));

    let fault = ViewFault::TimedOut {
        view: ViewId::Dashboard,
        after_ms: 5_000,
    };
    assert_eq!(
        router.apply_load(dashboard.generation, Err(fault.clone())),
        LoadOutcome::Stale
    );
    assert!(!router.report_fault(dashboard.generation, fault));
    assert_eq!(router.view_state(), Some(&ViewState::Loading));
    assert!(sink.faults.lock().unwrap().is_empty());
}

#[test]
fn test_returning_to_a_failed_path_starts_fresh() {
    let (mut router, _) = router_at("/");
    let first = router.start().load.unwrap();
    router.apply_load(
        first.generation,
        Err(ViewFault::LoadFailure {
            view: ViewId::Dashboard,
            message: "boom".to_string(),
        }),
    );
    assert!(router.view_state().is_some_and(ViewState::is_failed));

    router.navigate(NavigationIntent::to("/new-product"));
    let again = router.navigate(NavigationIntent::to("/")).load.unwrap();

    assert!(again.generation > first.generation);
    assert_eq!(router.view_state(), Some(&ViewState::Loading));
    assert_eq!(
        router.apply_load(again.generation, Ok(content(ViewId::Dashboard))),
        LoadOutcome::Applied
    );
    assert!(router.view_state().is_some_and(ViewState::is_ready));
}

#[test]
fn test_unregistered_path_mounts_not_found() {
    let (mut router, _) = router_at("/");
    let dashboard = router.start().load.unwrap();

    let transition = router.navigate(NavigationIntent::to("/profile"));

    assert_eq!(transition.load, None);
    assert_eq!(router.location().path(), "/profile");
    assert_eq!(router.mounted_view(), None);
    assert_eq!(router.view_state(), None);
    assert_eq!(router.in_flight(), None);
    match router.mount().map(|m| &m.kind) {
        Some(MountKind::NotFound(miss)) => assert_eq!(miss.path, "/profile"),
        other => panic!("unexpected mount: {other:?}"),
    }

    assert_eq!(
        router.apply_load(dashboard.generation, Ok(content(ViewId::Dashboard))),
        LoadOutcome::Stale
    );
    assert_eq!(router.mounted_view(), None);
}

#[test]
fn test_render_fault_trips_ready_view() {
    let (mut router, sink) = router_at("/");
    let ticket = router.start().load.unwrap();
    router.apply_load(ticket.generation, Ok(content(ViewId::Dashboard)));

    let fault = ViewFault::RenderFault {
        view: ViewId::Dashboard,
        message: "bad layout".to_string(),
    };
    assert!(router.report_fault(ticket.generation, fault.clone()));
    assert_eq!(router.view_state(), Some(&ViewState::Failed(fault)));
    assert_eq!(sink.faults.lock().unwrap().len(), 1);

    // No automatic recovery: a late duplicate load cannot revive it.
    assert_eq!(
        router.apply_load(ticket.generation, Ok(content(ViewId::Dashboard))),
        LoadOutcome::Stale
    );
    assert!(router.view_state().is_some_and(ViewState::is_failed));
}

#[test]
fn test_back_and_forward_remount() {
    let (mut router, _) = router_at("/");
    router.start();
    router.navigate(NavigationIntent::to("/new-product"));

    let back = router.back().unwrap();
    assert_eq!(router.location().path(), "/");
    assert_eq!(back.load.map(|t| t.view), Some(ViewId::Dashboard));
    assert!(router.can_go_forward());

    let forward = router.forward().unwrap();
    assert_eq!(router.location().path(), "/new-product");
    assert_eq!(forward.load.map(|t| t.view), Some(ViewId::NewProduct));
    assert!(router.forward().is_none());
}

#[test]
fn test_back_with_empty_history_changes_nothing() {
    let (mut router, _) = router_at("/");
    let ticket = router.start().load.unwrap();

    assert!(router.back().is_none());
    assert_eq!(router.generation(), ticket.generation);
    assert_eq!(router.in_flight(), Some(ticket));
}

#[test]
fn test_reload_replaces_failed_mount() {
    let (mut router, _) = router_at("/");
    let first = router.start().load.unwrap();
    router.apply_load(
        first.generation,
        Err(ViewFault::LoadFailure {
            view: ViewId::Dashboard,
            message: "boom".to_string(),
        }),
    );

    let reload = router.reload().load.unwrap();

    assert_eq!(reload.view, ViewId::Dashboard);
    assert!(reload.generation > first.generation);
    assert_eq!(router.view_state(), Some(&ViewState::Loading));
    assert!(!router.can_go_back());
}

#[test]
fn test_create_product_intent_unmounts_dashboard() {
    let (mut router, _) = router_at("/");
    let first = router.start().load.unwrap();
    router.apply_load(first.generation, Ok(content(ViewId::Dashboard)));

    let ticket = router
        .navigate(crate::kernel::intent::Affordance::CreateProduct.intent())
        .load
        .unwrap();
    assert_eq!(ticket.view, ViewId::NewProduct);
    assert_eq!(router.view_state(), Some(&ViewState::Loading));

    router.apply_load(ticket.generation, Ok(content(ViewId::NewProduct)));
    let mount = router.mount().unwrap();
    assert_eq!(mount.view(), Some(ViewId::NewProduct));
    assert_eq!(mount.generation, ticket.generation);
    assert!(matches!(
        mount.state(),
        Some(ViewState::Ready(ViewContent::NewProduct(_)))
    ));
}
