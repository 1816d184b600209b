use std::fmt::Debug;

use super::link::PageLink;

/// A DOM-like node holding the paginator links as its children.
pub trait LinkContainer {
    type Handle: Copy + Eq + Debug;

    fn child_count(&self) -> usize;

    /// Appends `link` as the last child and returns a handle to it.
    fn append(&mut self, link: PageLink) -> Self::Handle;

    fn link(&self, handle: Self::Handle) -> Option<&PageLink>;

    fn link_mut(&mut self, handle: Self::Handle) -> Option<&mut PageLink>;

    /// Handles of every child, in document order.
    fn handles(&self) -> Vec<Self::Handle>;

    fn set_active(&mut self, handle: Self::Handle, active: bool) {
        match self.link_mut(handle) {
            Some(link) => link.active = active,
            None => log::warn!("No paginator link for handle={handle:?}"),
        }
    }

    fn set_target(&mut self, handle: Self::Handle, target: i64) {
        match self.link_mut(handle) {
            Some(link) => link.target = target,
            None => log::warn!("No paginator link for handle={handle:?}"),
        }
    }

    fn clear_active(&mut self) {
        for handle in self.handles() {
            self.set_active(handle, false);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkHandle(usize);

impl LinkHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// In-memory container the paginator view renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkList {
    links: Vec<PageLink>,
}

impl LinkList {
    pub fn iter(&self) -> impl Iterator<Item = (LinkHandle, &PageLink)> {
        self.links
            .iter()
            .enumerate()
            .map(|(index, link)| (LinkHandle(index), link))
    }

    pub fn targets(&self) -> Vec<i64> {
        self.links.iter().map(|link| link.target).collect()
    }

    pub fn active(&self) -> Vec<&PageLink> {
        self.links.iter().filter(|link| link.active).collect()
    }
}

impl LinkContainer for LinkList {
    type Handle = LinkHandle;

    fn child_count(&self) -> usize {
        self.links.len()
    }

    fn append(&mut self, link: PageLink) -> LinkHandle {
        self.links.push(link);
        LinkHandle(self.links.len() - 1)
    }

    fn link(&self, handle: LinkHandle) -> Option<&PageLink> {
        self.links.get(handle.0)
    }

    fn link_mut(&mut self, handle: LinkHandle) -> Option<&mut PageLink> {
        self.links.get_mut(handle.0)
    }

    fn handles(&self) -> Vec<LinkHandle> {
        (0..self.links.len()).map(LinkHandle).collect()
    }
}
