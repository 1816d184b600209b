use std::rc::Rc;

use shared::{Order, PaginatedResponse, PaginationRequest, User};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::{
    api::listings_api,
    components::composite::{
        orders_table::OrdersTable, paginator_view::PaginatorView,
        records_summary::RecordsSummary, users_table::UsersTable,
    },
    config::{Listing, SpaConfig},
    error::ApiError,
    paginator::selection::{PageRequest, SharedSelection},
};

#[derive(Clone, PartialEq, Debug)]
pub enum TableRows {
    Orders(Vec<Order>),
    Users(Vec<User>),
}

impl TableRows {
    pub fn len(&self) -> usize {
        match self {
            TableRows::Orders(orders) => orders.len(),
            TableRows::Users(users) => users.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct PageData {
    pub rows: TableRows,
    pub current_page: usize,
    pub last_page: usize,
    pub total_records: usize,
}

impl PageData {
    fn from_response<E>(
        response: PaginatedResponse<E>,
        rows: impl FnOnce(Vec<E>) -> TableRows,
    ) -> Self {
        Self {
            current_page: response.request.current_page,
            last_page: response.last_page,
            total_records: response.total_records,
            rows: rows(response.page_data),
        }
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ListingState {
    pub page: Option<PageData>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ListingMessage {
    Loading,
    Loaded(PageData),
    Failed(String),
    ClearError,
}

impl Reducible for ListingState {
    type Action = ListingMessage;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();

        match action {
            ListingMessage::Loading => {
                state.is_loading = true;
            }
            ListingMessage::Loaded(page) => {
                state.is_loading = false;
                state.error_message = None;
                state.page = Some(page);
            }
            ListingMessage::Failed(error) => {
                state.is_loading = false;
                state.error_message = Some(error);
            }
            ListingMessage::ClearError => {
                state.error_message = None;
            }
        }

        Rc::new(state)
    }
}

async fn load_rows(listing: Listing, request: PaginationRequest) -> Result<PageData, ApiError> {
    let page = match listing {
        Listing::Users => {
            let response = listings_api::fetch_page::<User>(listing, &request).await?;
            PageData::from_response(response, TableRows::Users)
        }
        Listing::Sales | Listing::Subscriptions => {
            let response = listings_api::fetch_page::<Order>(listing, &request).await?;
            PageData::from_response(response, TableRows::Orders)
        }
    };
    Ok(page)
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub config: SpaConfig,
}

#[function_component(ListingPage)]
pub fn listing_page(props: &Props) -> Html {
    let listing = props.config.listing;
    let state = use_reducer(ListingState::default);
    let config = props.config;
    let selection_handle =
        use_state(move || SharedSelection::new(config.page_size, config.current_page));
    let selection = (*selection_handle).clone();

    use_title(listing.title().to_owned());

    // Loads the rows of the requested page; responses to superseded requests are dropped.
    let update_table = {
        let state = state.clone();
        let selection = selection.clone();
        Callback::from(move |request: PageRequest| {
            let state = state.clone();
            let selection = selection.clone();
            state.dispatch(ListingMessage::Loading);
            spawn_local(async move {
                let result = load_rows(listing, request.into()).await;
                if !selection.complete(request.id) {
                    log::debug!(
                        "Dropping stale response, listing={}, page={}",
                        listing.as_ref(),
                        request.current_page
                    );
                    return;
                }
                match result {
                    Ok(page) => state.dispatch(ListingMessage::Loaded(page)),
                    Err(error) => {
                        log::error!(
                            "Fail to load listing={}, page={}, error={error}",
                            listing.as_ref(),
                            request.current_page
                        );
                        state.dispatch(ListingMessage::Failed(format!(
                            "Failed to load {}: {error}",
                            listing.title()
                        )));
                    }
                }
            });
        })
    };

    use_effect_with(listing, {
        let selection = selection.clone();
        let update_table = update_table.clone();
        move |_| {
            update_table.emit(selection.begin_request());
        }
    });

    let on_clear_error = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(ListingMessage::ClearError);
        })
    };

    let table = match state.page.as_ref().map(|page| &page.rows) {
        Some(TableRows::Orders(orders)) => html! {
            <OrdersTable orders={orders.clone()} is_recurring={listing == Listing::Subscriptions} />
        },
        Some(TableRows::Users(users)) => html! {
            <UsersTable users={users.clone()} />
        },
        None => html! {},
    };

    html! {
        <div class="container mt-5">
            <h1 class="mb-4">{listing.title()}</h1>

            if let Some(error) = &state.error_message {
                <div class="alert alert-danger alert-dismissible" role="alert">
                    {error}
                    <button type="button" class="btn-close" onclick={on_clear_error}></button>
                </div>
            }

            if state.is_loading && state.page.is_none() {
                <div class="text-center">
                    <div class="spinner-border" role="status"></div>
                </div>
            }

            if let Some(page) = &state.page {
                <RecordsSummary
                    current_page={page.current_page}
                    page_size={selection.page_size()}
                    current_count={page.rows.len()}
                    total_records={page.total_records} />
            }

            {table}

            if let Some(page) = &state.page {
                <PaginatorView
                    page_count={page.last_page}
                    current_page={selection.current_page()}
                    selection={selection.clone()}
                    on_fetch={update_table.clone()} />
            }
        </div>
    }
}
