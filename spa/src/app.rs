use yew::prelude::*;

use crate::{
    components::composite::navigation_bar::NavigationBar,
    config::{Listing, SpaConfig, DEFAULT_PAGE},
    pages::listing::ListingPage,
};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(SpaConfig::from_location);

    let on_listing_change = {
        let config = config.clone();
        Callback::from(move |listing: Listing| {
            if listing == config.listing {
                return;
            }
            log::info!("Switching to listing={}", listing.as_ref());
            config.set(SpaConfig {
                listing,
                current_page: DEFAULT_PAGE,
                ..*config
            });
        })
    };

    html! {
        <>
            <NavigationBar active_listing={config.listing} on_listing_change={on_listing_change} />
            <ListingPage key={config.listing.as_ref()} config={*config} />
        </>
    }
}
