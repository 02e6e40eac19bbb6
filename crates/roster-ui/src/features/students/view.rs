//! Student dashboard: counters, toolbar, bulk bar, table, pager and dialog.
//!
//! # Design
//! - List mechanics come from the shared record controller; this view adds stats, invites and CSV.
//! - Stats refetch whenever the student cache is invalidated.
//! - Import and invite outcomes land in a dismissible banner, not a toast.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::banner::ResultBanner;
use crate::components::record_dialog::{ActiveToggle, FormField, RecordDialog};
use crate::components::stats_cards::{StatCard, StatsCards};
use crate::core::config::EXPORT_FILENAME;
use crate::core::dialog::{DialogAction, FormDialog};
use crate::core::mutation::MutationKind;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::records::actions::{notify, notify_failure, run_mutation, submit_dialog};
use crate::features::records::controller::use_record_list;
use crate::features::records::view::{bulk_bar, pager, record_table, status_cell, text_cell, toolbar_filters};
use crate::features::students::api::{export_csv, fetch_stats, import_csv, send_invites};
use crate::features::students::state::StudentForm;
use crate::models::ToastKind;
use crate::services::download::save_csv;
use gloo::console;
use roster_api_models::Student;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(StudentsPage)]
pub(crate) fn students_page() -> Html {
    let client = use_context::<ApiCtx>().map(|ctx| ctx.client);
    let dialog = use_reducer(FormDialog::<StudentForm>::default);
    let list = use_record_list::<Student>(Route::Students, dialog.open);
    let stats = use_selector(|store: &AppStore| store.student_stats.clone());
    let file_input = use_node_ref();
    let generation = list.state.cache.generation();

    {
        let client = client.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(client) = client {
                    yew::platform::spawn_local(async move {
                        match fetch_stats(&client).await {
                            Ok(stats) => app_dispatch().reduce_mut(|store| store.student_stats = Some(stats)),
                            Err(err) if err.is_session_expired() => {}
                            Err(err) => console::warn!("student stats fetch failed", err.to_string()),
                        }
                    });
                }
                || ()
            },
            generation,
        );
    }

    let pending = list.state.pending.clone();
    let stats = (*stats).clone();
    let cards = vec![
        StatCard {
            label: "Total Students",
            value: stats.as_ref().map(|stats| stats.total),
            tone: "",
        },
        StatCard {
            label: "Active",
            value: stats.as_ref().map(|stats| stats.active),
            tone: "text-success",
        },
        StatCard {
            label: "Inactive",
            value: stats.as_ref().map(|stats| stats.inactive),
            tone: "text-base-content/60",
        },
    ];

    let on_create = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.dispatch(DialogAction::OpenCreate))
    };
    let on_edit = {
        let dialog = dialog.clone();
        Callback::from(move |student: Student| dialog.dispatch(DialogAction::OpenEdit(student)))
    };
    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |()| dialog.dispatch(DialogAction::Close))
    };
    let on_submit = {
        let dialog = dialog.clone();
        let client = client.clone();
        Callback::from(move |()| {
            if let Some(client) = client.clone() {
                submit_dialog(client, &dialog);
            }
        })
    };
    let field = |apply: fn(&mut StudentForm, String)| {
        let dialog = dialog.clone();
        Callback::from(move |value: String| {
            dialog.dispatch(DialogAction::Edit(Box::new(move |form: &mut StudentForm| apply(form, value))));
        })
    };
    let on_active = {
        let dialog = dialog.clone();
        Callback::from(move |active: bool| {
            dialog.dispatch(DialogAction::Edit(Box::new(move |form: &mut StudentForm| form.active = active)));
        })
    };

    let on_invite = {
        let client = client.clone();
        let ids = list.state.selection.ids();
        Callback::from(move |_: MouseEvent| {
            let Some(client) = client.clone() else {
                return;
            };
            let ids = ids.clone();
            run_mutation::<Student, _, _>(
                MutationKind::BulkInvite,
                async move { send_invites(&client, ids).await },
                |result| match result {
                    Ok(banner) => app_dispatch().reduce_mut(|store| store.students.banner = Some(banner)),
                    Err(err) => notify_failure(MutationKind::BulkInvite, &err),
                },
            );
        })
    };
    let on_pick_file = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_file_chosen = {
        let client = client.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            let (Some(file), Some(client)) = (file, client.clone()) else {
                return;
            };
            run_mutation::<Student, _, _>(
                MutationKind::ImportCsv,
                async move { import_csv(&client, file).await },
                |result| match result {
                    Ok(result) => app_dispatch().reduce_mut(|store| store.students.banner = Some(result.into())),
                    Err(err) => notify_failure(MutationKind::ImportCsv, &err),
                },
            );
        })
    };
    let on_export = {
        let client = client.clone();
        let query = (*list.query).clone();
        Callback::from(move |_: MouseEvent| {
            let Some(client) = client.clone() else {
                return;
            };
            let query = query.clone();
            run_mutation::<Student, _, _>(
                MutationKind::ExportCsv,
                async move { export_csv(&client, &query).await },
                |result| match result {
                    Ok(bytes) => {
                        if let Err(err) = save_csv(&bytes, EXPORT_FILENAME) {
                            console::error!("csv download failed", err.to_string());
                            notify(ToastKind::Error, MutationKind::ExportCsv.failure_fallback());
                        }
                    }
                    Err(err) => notify_failure(MutationKind::ExportCsv, &err),
                },
            );
        })
    };
    let on_dismiss_banner = Callback::from(|()| {
        app_dispatch().reduce_mut(|store| store.students.banner = None);
    });

    let toggle_busy = pending.is_pending(MutationKind::ToggleActive);
    let table = {
        let client = client.clone();
        record_table(
            &list,
            client.clone(),
            &[],
            move |student: &Student| html! {
                <>
                    <td class="font-medium">{student.full_name()}</td>
                    <td>{student.email.clone()}</td>
                    {text_cell(student.student_class.as_deref())}
                    {text_cell(student.section.as_deref())}
                    {text_cell(student.phone.as_deref())}
                    {status_cell(student, client.clone(), toggle_busy)}
                </>
            },
            &on_edit,
        )
    };
    let invite_button = html! {
        <button class="btn btn-info btn-sm" disabled={pending.blocks(MutationKind::BulkInvite)} onclick={on_invite}>
            {if pending.is_pending(MutationKind::BulkInvite) { "Sending..." } else { "Send Invite" }}
        </button>
    };

    html! {
        <div class="space-y-6">
            <StatsCards {cards} />

            <div class="flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-center">
                <div class="flex w-full flex-wrap gap-2 sm:w-auto">
                    {toolbar_filters(&list)}
                </div>
                <div class="flex flex-wrap gap-2">
                    <input
                        ref={file_input}
                        type="file"
                        accept=".csv"
                        class="hidden"
                        onchange={on_file_chosen}
                    />
                    <button class="btn btn-outline" disabled={pending.is_pending(MutationKind::ImportCsv)} onclick={on_pick_file}>
                        {if pending.is_pending(MutationKind::ImportCsv) { "Importing..." } else { "Import CSV" }}
                    </button>
                    <button class="btn btn-outline" disabled={pending.is_pending(MutationKind::ExportCsv)} onclick={on_export}>
                        {if pending.is_pending(MutationKind::ExportCsv) { "Exporting..." } else { "Export CSV" }}
                    </button>
                    <button class="btn btn-primary" onclick={on_create}>{"Add Student"}</button>
                </div>
            </div>

            if let Some(banner) = list.state.banner.clone() {
                <ResultBanner {banner} on_dismiss={on_dismiss_banner} />
            }
            if let Some(error) = list.state.fetch_error.clone() {
                <div class="alert alert-error" role="alert">{error}</div>
            }

            {bulk_bar(&list, client.clone(), invite_button)}
            {table}
            {pager(&list)}

            if dialog.open {
                <RecordDialog
                    title={if dialog.is_edit() { "Edit Student" } else { "Add Student" }}
                    submit_label={if dialog.is_edit() { "Update" } else { "Create" }}
                    error={dialog.error.clone()}
                    busy={pending.is_pending(MutationKind::Save)}
                    {on_close}
                    {on_submit}
                >
                    <FormField label="First Name" required={true} value={dialog.form.first_name.clone()} on_input={field(|form, value| form.first_name = value)} />
                    <FormField label="Last Name" required={true} value={dialog.form.last_name.clone()} on_input={field(|form, value| form.last_name = value)} />
                    <FormField label="Email" input_type="email" required={true} value={dialog.form.email.clone()} on_input={field(|form, value| form.email = value)} />
                    <FormField label="Phone" value={dialog.form.phone.clone()} on_input={field(|form, value| form.phone = value)} />
                    <FormField label="Class" value={dialog.form.student_class.clone()} on_input={field(|form, value| form.student_class = value)} />
                    <FormField label="Section" value={dialog.form.section.clone()} on_input={field(|form, value| form.section = value)} />
                    <FormField label="Enrollment Date" input_type="date" value={dialog.form.enrollment_date.clone()} on_input={field(|form, value| form.enrollment_date = value)} />
                    <ActiveToggle checked={dialog.form.active} on_change={on_active} />
                </RecordDialog>
            }
        </div>
    }
}
