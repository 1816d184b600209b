use std::{cell::RefCell, rc::Rc};

use shared::PaginationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingData(RequestId),
}

/// What the data source is asked for, tagged with the request sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub id: RequestId,
    pub page_size: usize,
    pub current_page: usize,
}

impl From<PageRequest> for PaginationRequest {
    fn from(value: PageRequest) -> Self {
        PaginationRequest {
            page_size: value.page_size,
            current_page: value.current_page,
        }
    }
}

#[derive(Debug)]
struct Selection {
    page_size: usize,
    current_page: usize,
    last_request: u64,
    phase: Phase,
}

/// Current page and page size, shared by the paginator and the code that loads the table.
///
/// Every fetch goes through [`SharedSelection::begin_request`], so only the newest
/// response is accepted by [`SharedSelection::complete`].
#[derive(Debug, Clone)]
pub struct SharedSelection(Rc<RefCell<Selection>>);

impl SharedSelection {
    pub fn new(page_size: usize, current_page: usize) -> Self {
        Self(Rc::new(RefCell::new(Selection {
            page_size,
            current_page,
            last_request: 0,
            phase: Phase::Idle,
        })))
    }

    pub fn page_size(&self) -> usize {
        self.0.borrow().page_size
    }

    pub fn current_page(&self) -> usize {
        self.0.borrow().current_page
    }

    pub fn set_current_page(&self, page: usize) {
        self.0.borrow_mut().current_page = page;
    }

    pub fn phase(&self) -> Phase {
        self.0.borrow().phase
    }

    pub fn begin_request(&self) -> PageRequest {
        let mut selection = self.0.borrow_mut();
        selection.last_request += 1;
        let id = RequestId(selection.last_request);
        selection.phase = Phase::AwaitingData(id);
        PageRequest {
            id,
            page_size: selection.page_size,
            current_page: selection.current_page,
        }
    }

    /// Returns false when a newer request was issued after `id`; its response is stale.
    pub fn complete(&self, id: RequestId) -> bool {
        let mut selection = self.0.borrow_mut();
        if selection.phase != Phase::AwaitingData(id) {
            return false;
        }
        selection.phase = Phase::Idle;
        true
    }
}

impl PartialEq for SharedSelection {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
