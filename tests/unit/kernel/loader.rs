use super::*;

#[test]
fn test_begin_issues_increasing_generations() {
    let mut loader = DeferredViewLoader::new();
    let a = loader.begin(ViewId::Dashboard);
    let b = loader.begin(ViewId::NewProduct);

    assert!(b.generation > a.generation);
    assert_eq!(loader.in_flight(), Some(b));
    assert_eq!(loader.generation(), b.generation);
}

#[test]
fn test_only_latest_ticket_settles() {
    let mut loader = DeferredViewLoader::new();
    let stale = loader.begin(ViewId::Dashboard);
    let current = loader.begin(ViewId::NewProduct);

    assert_eq!(loader.settle(stale.generation), None);
    assert_eq!(loader.settle(current.generation), Some(current));
    assert_eq!(loader.settle(current.generation), None);
}

#[test]
fn test_supersede_turns_in_flight_stale() {
    let mut loader = DeferredViewLoader::new();
    let ticket = loader.begin(ViewId::Dashboard);
    let generation = loader.supersede();

    assert!(generation > ticket.generation);
    assert_eq!(loader.in_flight(), None);
    assert_eq!(loader.settle(ticket.generation), None);
}

#[test]
fn test_cancel_forgets_in_flight() {
    let mut loader = DeferredViewLoader::new();
    let ticket = loader.begin(ViewId::Dashboard);

    assert_eq!(loader.cancel(), Some(ticket));
    assert_eq!(loader.settle(ticket.generation), None);
}
