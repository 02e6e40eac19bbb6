//! Routing definitions for the Roster console.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Students,
    #[at("/dashboard/staff")]
    Staff,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether the route needs a signed-in session.
    pub(crate) const fn requires_session(&self) -> bool {
        matches!(self, Self::Students | Self::Staff)
    }
}
