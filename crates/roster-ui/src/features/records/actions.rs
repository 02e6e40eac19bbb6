//! Mutations shared by the record views.
//!
//! # Design
//! - Each mutation kind is single-flight per list; a second click while pending is ignored.
//! - Success and failure settle through the store before the caller sees the result.
//! - Session expiry is handled by the client hook, so it never produces a toast here.
//! - Dialog saves report back through the dialog reducer, which knows whether the editing
//!   session that submitted is still open.

use crate::core::dialog::{DialogAction, EditForm, FormDialog, Submission};
use crate::core::error::ApiError;
use crate::core::mutation::MutationKind;
use crate::core::store::{StoreRecord, app_dispatch, push_toast};
use crate::models::ToastKind;
use crate::services::api::ApiClient;
use gloo::console;
use gloo::dialogs::confirm;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::rc::Rc;
use yew::functional::{Reducible, UseReducerHandle};

/// Run `task` as mutation `kind` on `T`'s list, then hand the result to `on_done`.
pub(crate) fn run_mutation<T, R, Fut>(
    kind: MutationKind,
    task: Fut,
    on_done: impl FnOnce(Result<R, ApiError>) + 'static,
) where
    T: StoreRecord,
    R: 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
{
    let dispatch = app_dispatch();
    let mut started = false;
    dispatch.reduce_mut(|store| started = T::list_mut(store).start_mutation(kind));
    if !started {
        console::warn!("mutation already pending", format!("{kind:?}"));
        return;
    }
    yew::platform::spawn_local(async move {
        let result = task.await;
        let ok = result.is_ok();
        dispatch.reduce_mut(|store| T::list_mut(store).complete_mutation(kind, ok));
        on_done(result);
    });
}

pub(crate) fn notify(kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    app_dispatch().reduce_mut(|store| push_toast(store, kind, message));
}

/// Toast a failed mutation unless the session just expired.
pub(crate) fn notify_failure(kind: MutationKind, err: &ApiError) {
    if err.is_session_expired() {
        return;
    }
    notify(ToastKind::Error, err.display_message(kind.failure_fallback()));
}

pub(crate) fn delete_record<T: StoreRecord>(client: Rc<ApiClient>, record: &T) {
    let Some(id) = record.id() else {
        return;
    };
    if !confirm(&format!(
        "Are you sure you want to delete this {}?",
        T::KIND.singular()
    )) {
        return;
    }
    let name = record.display_name();
    run_mutation::<T, _, _>(
        MutationKind::Delete,
        async move { client.remove(T::KIND, id).await },
        move |result| match result {
            Ok(()) => notify(ToastKind::Success, format!("{name} deleted")),
            Err(err) => notify_failure(MutationKind::Delete, &err),
        },
    );
}

pub(crate) fn toggle_record<T>(client: Rc<ApiClient>, record: &T)
where
    T: StoreRecord + DeserializeOwned,
{
    let Some(id) = record.id() else {
        return;
    };
    run_mutation::<T, T, _>(
        MutationKind::ToggleActive,
        async move { client.toggle_active::<T>(T::KIND, id).await },
        |result| match result {
            Ok(updated) => notify(
                ToastKind::Success,
                format!(
                    "{} is now {}",
                    updated.display_name(),
                    if updated.is_active() { "active" } else { "inactive" }
                ),
            ),
            Err(err) => notify_failure(MutationKind::ToggleActive, &err),
        },
    );
}

/// Bulk delete, activate or deactivate the selected ids.
pub(crate) fn bulk_update<T: StoreRecord>(client: Rc<ApiClient>, kind: MutationKind, ids: Vec<i64>) {
    let Some(action) = kind.bulk_action() else {
        return;
    };
    if ids.is_empty() {
        return;
    }
    let count = ids.len();
    if kind == MutationKind::BulkDelete
        && !confirm(&format!(
            "Are you sure you want to delete {count} {}? This cannot be undone.",
            T::KIND.plural()
        ))
    {
        return;
    }
    run_mutation::<T, _, _>(
        kind,
        async move { client.bulk(T::KIND, action, ids).await },
        move |result| match result {
            Ok(body) => notify(
                ToastKind::Success,
                body.message
                    .unwrap_or_else(|| format!("{count} {} updated", T::KIND.plural())),
            ),
            Err(err) => notify_failure(kind, &err),
        },
    );
}

impl<F: EditForm> Reducible for FormDialog<F> {
    type Action = DialogAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(err) = next.apply(action) {
            console::warn!("save refused after dialog closed", err.to_string());
            notify_failure(MutationKind::Save, &err);
        }
        Rc::new(next)
    }
}

/// Save the dialog form; on failure the dialog stays open with the error.
pub(crate) fn submit_dialog<F>(client: Rc<ApiClient>, dialog: &UseReducerHandle<FormDialog<F>>)
where
    F: EditForm,
    F::Record: StoreRecord + Serialize + DeserializeOwned,
{
    let Some(session) = dialog.session() else {
        return;
    };
    let submission = match dialog.submission() {
        Ok(submission) => submission,
        Err(err) => {
            dialog.dispatch(DialogAction::Invalid(err.to_string()));
            return;
        }
    };
    let fallback = submission.failure_fallback();
    let verb = submission.verb();
    let kind = F::Record::KIND;
    let dispatcher = dialog.dispatcher();
    run_mutation::<F::Record, _, _>(
        MutationKind::Save,
        async move {
            match submission {
                Submission::Create(record) => client.create(kind, &record).await,
                Submission::Update { id, record } => client.update(kind, id, &record).await,
            }
        },
        move |result| match result {
            Ok(saved) => {
                notify(ToastKind::Success, format!("{} {verb}", saved.display_name()));
                dispatcher.dispatch(DialogAction::Saved { session });
            }
            Err(err) if err.is_session_expired() => {}
            Err(error) => dispatcher.dispatch(DialogAction::Refused {
                session,
                error,
                fallback,
            }),
        },
    );
}
