use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub current_page: usize,
    pub page_size: usize,
    pub current_count: usize,
    pub total_records: usize,
}

/// First and last record numbers shown on `current_page`, or `None` for an empty page
/// or when the numbers do not fit in a `usize`.
pub fn record_range(
    current_page: usize,
    page_size: usize,
    current_count: usize,
) -> Option<(usize, usize)> {
    if current_count == 0 || current_page == 0 {
        return None;
    }
    let start_index = (current_page - 1).checked_mul(page_size)?.checked_add(1)?;
    let end_index = start_index.checked_add(current_count - 1)?;
    Some((start_index, end_index))
}

#[function_component(RecordsSummary)]
pub fn records_summary(props: &Props) -> Html {
    let text = match record_range(props.current_page, props.page_size, props.current_count) {
        Some((start_index, end_index)) => format!(
            "Showing {} - {} of {} records",
            start_index, end_index, props.total_records
        ),
        None => "No records".to_owned(),
    };

    html! {
        <div class="text-muted mb-2">{text}</div>
    }
}
