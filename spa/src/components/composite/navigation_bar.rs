use yew::prelude::*;

use crate::config::Listing;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub active_listing: Listing,
    pub on_listing_change: Callback<Listing>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &Props) -> Html {
    let items = Listing::ALL.into_iter().map(|listing| {
        let on_click = {
            let on_listing_change = props.on_listing_change.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_listing_change.emit(listing);
            })
        };
        let classes = if props.active_listing == listing {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        };
        html! {
            <li class="nav-item" key={listing.as_ref()}>
                <a href="#" onclick={on_click} class={classes}>{listing.title()}</a>
            </li>
        }
    });

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <a class="navbar-brand" href="#">{"Admin"}</a>
                <div class="collapse navbar-collapse">
                    <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                        { for items }
                    </ul>
                </div>
            </div>
        </nav>
    }
}
