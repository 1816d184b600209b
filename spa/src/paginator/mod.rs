//! Page links with Previous/Next controls and the bookkeeping of which page is active.
//!
//! The links are built once by [`Paginator::initialize`]. Clicks then update the
//! existing links in place: the active flag moves and the Previous/Next targets
//! follow the current page.

pub mod container;
pub mod fetch;
pub mod link;
pub mod selection;

use std::collections::BTreeMap;

use container::LinkContainer;
use fetch::DataFetch;
use link::{page_number, parse_target, PageLink};
use selection::{PageRequest, SharedSelection};

/// Id of the element the paginator is rendered into.
pub const CONTAINER_ID: &str = "paginator";
/// Class carried by every paginator link.
pub const LINK_CLASS: &str = "pager";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Requested(PageRequest),
}

#[derive(Debug)]
struct LinkMap<H> {
    previous: H,
    pages: BTreeMap<usize, H>,
    next: H,
}

#[derive(Debug)]
pub struct Paginator<C: LinkContainer> {
    container: C,
    selection: SharedSelection,
    page_count: usize,
    links: Option<LinkMap<C::Handle>>,
}

impl<C: LinkContainer> Paginator<C> {
    pub fn new(container: C, selection: SharedSelection) -> Self {
        Self {
            container,
            selection,
            page_count: 0,
            links: None,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn selection(&self) -> &SharedSelection {
        &self.selection
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The numbered link for `page`, if it was rendered.
    pub fn link_for_page(&self, page: usize) -> Option<&PageLink> {
        let handle = self.links.as_ref()?.pages.get(&page)?;
        self.container.link(*handle)
    }

    /// Renders `[Previous, 1..=page_count, Next]` and highlights the link at position
    /// `current_page`. Does nothing when the container already has children.
    pub fn initialize(&mut self, page_count: usize, current_page: usize) {
        if self.container.child_count() > 0 {
            log::debug!(
                "Paginator already rendered, children={}",
                self.container.child_count()
            );
            return;
        }

        let previous = self.container.append(PageLink::previous(current_page));
        let pages = (1..=page_count)
            .map(|page| (page, self.container.append(PageLink::page(page))))
            .collect();
        let next = self.container.append(PageLink::next(current_page));

        self.page_count = page_count;
        self.links = Some(LinkMap {
            previous,
            pages,
            next,
        });

        if let Some(handle) = self.link_at_position(current_page) {
            self.container.set_active(handle, true);
        }
        log::info!("Paginator rendered, page_count={page_count}, current_page={current_page}");
    }

    /// Handles a click on a link whose `data-page` attribute holds `raw`.
    pub fn on_data_page(&mut self, raw: &str, fetch: &mut impl DataFetch) -> ClickOutcome {
        match parse_target(raw) {
            Some(target) => self.on_link_click(target, fetch),
            None => {
                log::debug!("Ignoring click on paginator link, data-page={raw:?}");
                ClickOutcome::Ignored
            }
        }
    }

    /// Moves to page `target` and asks `fetch` for its rows.
    ///
    /// Targets outside `1..=page_count` are ignored. Clicking the page that is already
    /// active still fetches it again.
    pub fn on_link_click(&mut self, target: i64, fetch: &mut impl DataFetch) -> ClickOutcome {
        let page = match usize::try_from(target) {
            Ok(page) if page > 0 && page <= self.page_count => page,
            _ => {
                log::debug!(
                    "Ignoring paginator target={target}, page_count={}",
                    self.page_count
                );
                return ClickOutcome::Ignored;
            }
        };

        self.selection.set_current_page(page);
        self.container.clear_active();

        let request = self.selection.begin_request();
        fetch.fetch(request);

        if let Some(handle) = self.link_at_position(page) {
            self.container.set_active(handle, true);
        }
        if let Some(links) = &self.links {
            let current = page_number(page);
            self.container.set_target(links.previous, current - 1);
            self.container.set_target(links.next, current + 1);
        }
        ClickOutcome::Requested(request)
    }

    // Position 0 is Previous, page_count + 1 is Next.
    fn link_at_position(&self, position: usize) -> Option<C::Handle> {
        let links = self.links.as_ref()?;
        match position {
            0 => Some(links.previous),
            p if p == self.page_count + 1 => Some(links.next),
            p => links.pages.get(&p).copied(),
        }
    }
}
