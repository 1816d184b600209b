use yew::Callback;

use super::selection::PageRequest;

/// The routine that loads and displays the rows of the requested page.
pub trait DataFetch {
    fn fetch(&mut self, request: PageRequest);
}

impl DataFetch for Callback<PageRequest> {
    fn fetch(&mut self, request: PageRequest) {
        self.emit(request);
    }
}
