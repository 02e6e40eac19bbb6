//! Pager and page-size control under a table.

use crate::core::pagination::{PageItem, page_items, range_label};
use crate::core::query::PageSize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub page: u32,
    pub page_size: PageSize,
    pub total_pages: u32,
    pub total_elements: u64,
    pub on_page: Callback<u32>,
    pub on_page_size: Callback<PageSize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let page = props.page;
    let last = props.total_pages.saturating_sub(1);
    let go = |target: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };
    let on_size = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            if let Some(size) = select.value().parse().ok().and_then(PageSize::new) {
                on_page_size.emit(size);
            }
        })
    };

    html! {
        <div class="pagination flex flex-wrap items-center justify-between gap-3 py-3">
            <span class="text-sm text-base-content/70">
                {range_label(page, props.page_size.get(), props.total_elements)}
            </span>
            <div class="flex items-center gap-3">
                <label class="flex items-center gap-2 text-sm">
                    {"Rows"}
                    <select class="select select-sm select-bordered" onchange={on_size}>
                        {for PageSize::all().map(|size| html! {
                            <option value={size.get().to_string()} selected={size == props.page_size}>
                                {size.get()}
                            </option>
                        })}
                    </select>
                </label>
                if props.total_pages > 1 {
                    <div class="join">
                        <button class="join-item btn btn-sm" disabled={page == 0} onclick={go(page.saturating_sub(1))} aria-label="Previous page">
                            {"‹"}
                        </button>
                        {for page_items(page, props.total_pages).into_iter().map(|item| match item {
                            PageItem::Page(target) => html! {
                                <button
                                    class={classes!("join-item", "btn", "btn-sm", (target == page).then_some("btn-active"))}
                                    aria-current={(target == page).then_some("page")}
                                    onclick={go(target)}
                                >
                                    {target + 1}
                                </button>
                            },
                            PageItem::Gap => html! {
                                <button class="join-item btn btn-sm btn-disabled" tabindex="-1">{"…"}</button>
                            },
                        })}
                        <button class="join-item btn btn-sm" disabled={page >= last} onclick={go(page.saturating_add(1).min(last))} aria-label="Next page">
                            {"›"}
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}
