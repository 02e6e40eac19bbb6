use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::record_dialog::{ActiveToggle, FormField, RecordDialog};
use crate::components::stats_cards::{StatCard, StatsCards};
use crate::core::dialog::{DialogAction, FormDialog};
use crate::core::mutation::MutationKind;
use crate::features::records::actions::submit_dialog;
use crate::features::records::controller::use_record_list;
use crate::features::records::view::{bulk_bar, pager, record_table, status_cell, text_cell, toolbar_filters};
use crate::features::staff::state::{StaffForm, format_salary};
use roster_api_models::Staff;
use yew::prelude::*;

#[function_component(StaffPage)]
pub(crate) fn staff_page() -> Html {
    let client = use_context::<ApiCtx>().map(|ctx| ctx.client);
    let dialog = use_reducer(FormDialog::<StaffForm>::default);
    let list = use_record_list::<Staff>(Route::Staff, dialog.open);
    let pending = list.state.pending.clone();

    let cards = vec![StatCard {
        label: "Total Staff",
        value: list.state.view().page.map(|page| page.total_elements),
        tone: "",
    }];

    let on_create = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.dispatch(DialogAction::OpenCreate))
    };
    let on_edit = {
        let dialog = dialog.clone();
        Callback::from(move |staff: Staff| dialog.dispatch(DialogAction::OpenEdit(staff)))
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
    let field = |apply: fn(&mut StaffForm, String)| {
        let dialog = dialog.clone();
        Callback::from(move |value: String| {
            dialog.dispatch(DialogAction::Edit(Box::new(move |form: &mut StaffForm| apply(form, value))));
        })
    };
    let on_active = {
        let dialog = dialog.clone();
        Callback::from(move |active: bool| {
            dialog.dispatch(DialogAction::Edit(Box::new(move |form: &mut StaffForm| form.active = active)));
        })
    };

    let toggle_busy = pending.is_pending(MutationKind::ToggleActive);
    let table = {
        let client = client.clone();
        record_table(
            &list,
            client.clone(),
            &["Salary"],
            move |staff: &Staff| html! {
                <>
                    <td class="font-medium">{staff.full_name()}</td>
                    <td>{staff.email.clone()}</td>
                    {text_cell(staff.department.as_deref())}
                    {text_cell(staff.position.as_deref())}
                    {text_cell(staff.phone.as_deref())}
                    {status_cell(staff, client.clone(), toggle_busy)}
                    {text_cell(Some(format_salary(staff.salary).as_str()))}
                </>
            },
            &on_edit,
        )
    };

    html! {
        <div class="space-y-6">
            <StatsCards {cards} />

            <div class="flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-center">
                <div class="flex w-full flex-wrap gap-2 sm:w-auto">
                    {toolbar_filters(&list)}
                </div>
                <button class="btn btn-primary" onclick={on_create}>{"Add Staff"}</button>
            </div>

            if let Some(error) = list.state.fetch_error.clone() {
                <div class="alert alert-error" role="alert">{error}</div>
            }

            {bulk_bar(&list, client.clone(), Html::default())}
            {table}
            {pager(&list)}

            if dialog.open {
                <RecordDialog
                    title={if dialog.is_edit() { "Edit Staff" } else { "Add Staff" }}
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
                    <FormField label="Department" value={dialog.form.department.clone()} on_input={field(|form, value| form.department = value)} />
                    <FormField label="Position" value={dialog.form.position.clone()} on_input={field(|form, value| form.position = value)} />
                    <FormField label="Join Date" input_type="date" value={dialog.form.join_date.clone()} on_input={field(|form, value| form.join_date = value)} />
                    <FormField label="Salary" input_type="number" value={dialog.form.salary.clone()} on_input={field(|form, value| form.salary = value)} />
                    <FormField label="Qualification" value={dialog.form.qualification.clone()} on_input={field(|form, value| form.qualification = value)} />
                    <FormField label="Address" value={dialog.form.address.clone()} on_input={field(|form, value| form.address = value)} />
                    <ActiveToggle checked={dialog.form.active} on_change={on_active} />
                </RecordDialog>
            }
        </div>
    }
}
