//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Reducers are free functions so they can be exercised without a DOM.

use crate::core::auth::Session;
use crate::core::list_state::ListState;
use crate::core::resource::Record;
use crate::models::{ToastKind, ToastQueue};
use roster_api_models::{Staff, Student, StudentStats};
#[cfg(target_arch = "wasm32")]
use yewdux::dispatch::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Signed-in session.
    pub session: SessionSlice,
    /// Student list state.
    pub students: ListState<Student>,
    /// Staff list state.
    pub staff: ListState<Staff>,
    /// Latest student counters.
    pub student_stats: Option<StudentStats>,
    /// Visible toasts.
    pub toasts: ToastQueue,
}

/// Shared authentication state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Active session, `None` when signed out.
    pub current: Option<Session>,
}

impl SessionSlice {
    /// Whether a session exists.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}

/// Record types with a list slice in the store.
pub trait StoreRecord: Record {
    /// Borrow this type's list slice.
    fn list(store: &AppStore) -> &ListState<Self>;

    /// Mutably borrow this type's list slice.
    fn list_mut(store: &mut AppStore) -> &mut ListState<Self>;
}

impl StoreRecord for Student {
    fn list(store: &AppStore) -> &ListState<Self> {
        &store.students
    }

    fn list_mut(store: &mut AppStore) -> &mut ListState<Self> {
        &mut store.students
    }
}

impl StoreRecord for Staff {
    fn list(store: &AppStore) -> &ListState<Self> {
        &store.staff
    }

    fn list_mut(store: &mut AppStore) -> &mut ListState<Self> {
        &mut store.staff
    }
}

/// Install a freshly issued or restored session.
pub fn sign_in(store: &mut AppStore, session: Session) {
    store.session.current = Some(session);
}

/// Drop the session and everything fetched under it.
pub fn sign_out(store: &mut AppStore) {
    let toasts = std::mem::take(&mut store.toasts);
    *store = AppStore {
        toasts,
        ..AppStore::default()
    };
}

/// Queue a toast.
pub fn push_toast(store: &mut AppStore, kind: ToastKind, message: impl Into<String>) {
    store.toasts.push(kind, message);
}

/// Remove a toast.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.toasts.dismiss(id);
}

/// Shared dispatch handle for the app store.
#[cfg(target_arch = "wasm32")]
pub(crate) fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}
