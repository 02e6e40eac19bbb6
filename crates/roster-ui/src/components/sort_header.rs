use crate::core::query::SortOrder;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SortHeaderProps {
    pub label: AttrValue,
    /// Direction when this column is the active sort.
    pub direction: Option<SortOrder>,
    pub on_sort: Callback<()>,
}

#[function_component(SortHeader)]
pub(crate) fn sort_header(props: &SortHeaderProps) -> Html {
    let (indicator, aria_sort) = match props.direction {
        Some(SortOrder::Asc) => ("▲", "ascending"),
        Some(SortOrder::Desc) => ("▼", "descending"),
        None => ("", "none"),
    };
    let onclick = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |_: MouseEvent| on_sort.emit(()))
    };
    html! {
        <th aria-sort={aria_sort}>
            <button class="btn btn-ghost btn-xs font-semibold" type="button" {onclick}>
                {props.label.clone()}
                <span class="sort-indicator">{indicator}</span>
            </button>
        </th>
    }
}
