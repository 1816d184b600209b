use web_sys::Element;
use yew::functional::use_force_update;
use yew::prelude::*;

use crate::paginator::{
    container::LinkList, link::PageLink, selection::PageRequest, selection::SharedSelection,
    ClickOutcome, Paginator, CONTAINER_ID, LINK_CLASS,
};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub page_count: usize,
    pub current_page: usize,
    pub selection: SharedSelection,
    pub on_fetch: Callback<PageRequest>,
}

fn render_link(link: &PageLink, key: usize, on_click: Callback<MouseEvent>) -> Html {
    let classes = if link.active {
        classes!("page-link", LINK_CLASS, "active")
    } else {
        classes!("page-link", LINK_CLASS)
    };
    html! {
        <li class="page-item" key={key}>
            <a class={classes} href="#" data-page={link.data_page()} onclick={on_click}>
                {link.label()}
            </a>
        </li>
    }
}

#[function_component(PaginatorView)]
pub fn paginator_view(props: &Props) -> Html {
    let selection = props.selection.clone();
    let paginator = use_mut_ref(move || Paginator::new(LinkList::default(), selection));
    let trigger = use_force_update();

    paginator
        .borrow_mut()
        .initialize(props.page_count, props.current_page);

    let on_click = {
        let paginator = paginator.clone();
        let on_fetch = props.on_fetch.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let Some(element) = event.target_dyn_into::<Element>() else {
                log::warn!("Paginator click without an element target");
                return;
            };
            let data_page = element.get_attribute("data-page").unwrap_or_default();
            let mut on_fetch = on_fetch.clone();
            let outcome = paginator.borrow_mut().on_data_page(&data_page, &mut on_fetch);
            if let ClickOutcome::Requested(request) = outcome {
                log::info!("Paginator moved to page={}", request.current_page);
                trigger.force_update();
            }
        })
    };

    let links: Html = paginator
        .borrow()
        .container()
        .iter()
        .map(|(handle, link)| render_link(link, handle.index(), on_click.clone()))
        .collect();

    html! {
        <nav>
            <ul id={CONTAINER_ID} class="pagination">
                {links}
            </ul>
        </nav>
    }
}
