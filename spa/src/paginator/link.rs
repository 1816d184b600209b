/// What a rendered link stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Previous,
    Page(usize),
    Next,
}

/// One entry of the paginator: a label, the page it points to and whether it is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub kind: LinkKind,
    pub target: i64,
    pub active: bool,
}

impl PageLink {
    pub fn previous(current_page: usize) -> Self {
        Self {
            kind: LinkKind::Previous,
            target: page_number(current_page).saturating_sub(1),
            active: false,
        }
    }

    pub fn page(page: usize) -> Self {
        Self {
            kind: LinkKind::Page(page),
            target: page_number(page),
            active: false,
        }
    }

    pub fn next(current_page: usize) -> Self {
        Self {
            kind: LinkKind::Next,
            target: page_number(current_page).saturating_add(1),
            active: false,
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            LinkKind::Previous => "Previous".to_owned(),
            LinkKind::Page(page) => page.to_string(),
            LinkKind::Next => "Next".to_owned(),
        }
    }

    /// Value written to the `data-page` attribute.
    pub fn data_page(&self) -> String {
        self.target.to_string()
    }
}

/// Reads a `data-page` attribute value. Anything that is not an integer yields `None`.
pub fn parse_target(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub(crate) fn page_number(page: usize) -> i64 {
    i64::try_from(page).unwrap_or(i64::MAX)
}
