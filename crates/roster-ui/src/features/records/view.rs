//! Table, toolbar and pager pieces shared by the record views.
//!
//! # Design
//! - Columns come from the record's sortable column list, so headers and cells share one order.
//! - Row cells are supplied by the caller; selection, row actions and body states live here.
//! - Placeholder rows shown while another page loads cannot be selected.

use crate::components::atoms::{BulkActionBar, EmptyState, SearchInput, SelectCheckbox};
use crate::components::pagination::Pagination;
use crate::components::sort_header::SortHeader;
use crate::components::status_filter::StatusFilterControl;
use crate::core::list_state::TableBody;
use crate::core::mutation::MutationKind;
use crate::core::query::ListPatch;
use crate::core::resource::SortColumn;
use crate::core::store::StoreRecord;
use crate::features::records::actions::{bulk_update, delete_record, toggle_record};
use crate::features::records::controller::RecordList;
use crate::services::api::ApiClient;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use yew::prelude::*;

/// Search box plus status filter bound to the list URL.
pub(crate) fn toolbar_filters<T: StoreRecord>(list: &RecordList<T>) -> Html {
    let on_search = list.on_patch.reform(ListPatch::search);
    let on_status = list.on_patch.reform(ListPatch::status);
    html! {
        <>
            <SearchInput
                value={list.query.search.clone()}
                placeholder={format!("Search {}...", T::KIND.plural())}
                class="w-full sm:w-80"
                {on_search}
            />
            <StatusFilterControl value={list.query.status} on_change={on_status} />
        </>
    }
}

/// Bulk activate/deactivate/delete buttons; `extra` renders before delete.
pub(crate) fn bulk_bar<T: StoreRecord>(
    list: &RecordList<T>,
    client: Option<Rc<ApiClient>>,
    extra: Html,
) -> Html {
    let summary = list.state.summary();
    let pending = &list.state.pending;
    let ids = list.state.selection.ids();
    let action = |kind: MutationKind| {
        let client = client.clone();
        let ids = ids.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(client) = client.clone() {
                bulk_update::<T>(client, kind, ids.clone());
            }
        })
    };
    let on_clear = list.on_clear_selection.reform(|_: MouseEvent| ());
    html! {
        <BulkActionBar selected_count={summary.count} noun={T::KIND.plural()} busy={pending.any_bulk()} {on_clear}>
            if summary.can_activate() {
                <button class="btn btn-success btn-sm" disabled={pending.blocks(MutationKind::BulkActivate)} onclick={action(MutationKind::BulkActivate)}>
                    {"Activate"}
                </button>
            }
            if summary.can_deactivate() {
                <button class="btn btn-warning btn-sm" disabled={pending.blocks(MutationKind::BulkDeactivate)} onclick={action(MutationKind::BulkDeactivate)}>
                    {"Deactivate"}
                </button>
            }
            {extra}
            <button class="btn btn-error btn-sm" disabled={pending.blocks(MutationKind::BulkDelete)} onclick={action(MutationKind::BulkDelete)}>
                {"Delete"}
            </button>
        </BulkActionBar>
    }
}

/// Clickable active/inactive badge that toggles the record.
pub(crate) fn status_cell<T>(record: &T, client: Option<Rc<ApiClient>>, busy: bool) -> Html
where
    T: StoreRecord + DeserializeOwned,
{
    let active = record.is_active();
    let onclick = {
        let record = record.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(client) = client.clone() {
                toggle_record(client, &record);
            }
        })
    };
    html! {
        <td>
            <button
                class={classes!("badge", "cursor-pointer", if active { "badge-success" } else { "badge-ghost" })}
                title="Toggle status"
                disabled={busy}
                {onclick}
            >
                {if active { "Active" } else { "Inactive" }}
            </button>
        </td>
    }
}

/// Optional text cell; blank values render as a dash.
pub(crate) fn text_cell(value: Option<&str>) -> Html {
    html! { <td>{value.filter(|value| !value.is_empty()).unwrap_or("-")}</td> }
}

/// Selectable, sortable table for the current page.
pub(crate) fn record_table<T: StoreRecord>(
    list: &RecordList<T>,
    client: Option<Rc<ApiClient>>,
    extra_headers: &[&'static str],
    cells: impl Fn(&T) -> Html,
    on_edit: &Callback<T>,
) -> Html {
    let view = list.state.view();
    let summary = list.state.summary();
    let columns = <T::Column as SortColumn>::ALL;
    let colspan = (columns.len() + extra_headers.len() + 2).to_string();
    let delete_busy = list.state.pending.is_pending(MutationKind::Delete);
    let rows: &[T] = view.page.as_ref().map_or(&[][..], |page| page.content.as_slice());

    let selectable = list.state.rows_selectable();
    let body = match list.state.table_body() {
        TableBody::Loading => html! {
            <tr><td colspan={colspan} class="py-8 text-center text-base-content/60">{"Loading..."}</td></tr>
        },
        TableBody::Empty => html! {
            <tr><td colspan={colspan}>
                <EmptyState title={format!("No {} found", T::KIND.plural())} filtered={list.query.is_filtered()} />
            </td></tr>
        },
        TableBody::Rows => rows.iter()
            .map(|record| {
                let id = record.id();
                let checked = id.is_some_and(|id| list.state.selection.contains(id));
                let on_toggle = {
                    let on_toggle_row = list.on_toggle_row.clone();
                    Callback::from(move |()| {
                        if let Some(id) = id {
                            on_toggle_row.emit(id);
                        }
                    })
                };
                let edit = {
                    let on_edit = on_edit.clone();
                    let record = record.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(record.clone()))
                };
                let delete = {
                    let client = client.clone();
                    let record = record.clone();
                    Callback::from(move |_: MouseEvent| {
                        if let Some(client) = client.clone() {
                            delete_record(client, &record);
                        }
                    })
                };
                html! {
                    <tr key={id.map_or_else(String::new, |id| id.to_string())} class={classes!(checked.then_some("bg-base-200"))}>
                        <td>
                            <SelectCheckbox
                                checked={checked}
                                label={format!("Select {}", record.display_name())}
                                disabled={id.is_none() || !selectable}
                                {on_toggle}
                            />
                        </td>
                        {cells(record)}
                        <td>
                            <div class="flex gap-1">
                                <button class="btn btn-ghost btn-xs" type="button" onclick={edit}>{"Edit"}</button>
                                <button class="btn btn-ghost btn-xs text-error" type="button" disabled={delete_busy} onclick={delete}>{"Delete"}</button>
                            </div>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class={classes!("overflow-x-auto", "rounded-box", "bg-base-100", view.stale.then_some("opacity-70"))} aria-busy={view.loading.to_string()}>
            <table class="table">
                <thead>
                    <tr>
                        <th class="w-10">
                            <SelectCheckbox
                                checked={summary.all_selected}
                                indeterminate={summary.indeterminate}
                                label="Select all on this page"
                                disabled={rows.is_empty() || !selectable}
                                on_toggle={list.on_toggle_all.clone()}
                            />
                        </th>
                        {for columns.iter().map(|column| {
                            let column = *column;
                            html! {
                                <SortHeader
                                    label={column.label()}
                                    direction={list.query.sort_direction(column)}
                                    on_sort={list.on_sort.reform(move |()| column)}
                                />
                            }
                        })}
                        {for extra_headers.iter().map(|label| html! { <th>{*label}</th> })}
                        <th class="w-24">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

/// Pager bound to the list URL; hidden until the first page arrives.
pub(crate) fn pager<T: StoreRecord>(list: &RecordList<T>) -> Html {
    let Some(page) = list.state.view().page else {
        return html! {};
    };
    html! {
        <Pagination
            page={list.query.page}
            page_size={list.query.page_size}
            total_pages={page.total_pages}
            total_elements={page.total_elements}
            on_page={list.on_patch.reform(ListPatch::page)}
            on_page_size={list.on_patch.reform(ListPatch::page_size)}
        />
    }
}
