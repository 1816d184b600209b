use shared::PaginationRequest;
use spa::paginator::selection::{Phase, SharedSelection};

#[test]
fn test_begin_request_uses_current_selection() {
    let selection = SharedSelection::new(25, 3);

    let request = selection.begin_request();

    assert_eq!(request.page_size, 25);
    assert_eq!(request.current_page, 3);
    assert_eq!(selection.phase(), Phase::AwaitingData(request.id));
    assert_eq!(
        PaginationRequest::from(request),
        PaginationRequest {
            page_size: 25,
            current_page: 3
        }
    );
}

#[test]
fn test_complete_latest_request_returns_to_idle() {
    let selection = SharedSelection::new(10, 1);

    let request = selection.begin_request();

    assert!(selection.complete(request.id));
    assert_eq!(selection.phase(), Phase::Idle);
    // A second completion of the same request is not accepted.
    assert!(!selection.complete(request.id));
}

#[test]
fn test_stale_response_is_rejected() {
    let selection = SharedSelection::new(10, 1);

    let first = selection.begin_request();
    selection.set_current_page(2);
    let second = selection.begin_request();

    assert!(!selection.complete(first.id));
    assert_eq!(selection.phase(), Phase::AwaitingData(second.id));
    assert!(selection.complete(second.id));
    assert_eq!(second.current_page, 2);
}

#[test]
fn test_clones_share_state() {
    let selection = SharedSelection::new(10, 1);
    let other = selection.clone();

    other.set_current_page(6);

    assert_eq!(selection.current_page(), 6);
    assert_eq!(selection, other);
    assert_ne!(selection, SharedSelection::new(10, 6));
}
