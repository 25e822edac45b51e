//! Routing definitions for the Vista UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/d/:uid")]
    Dashboard { uid: String },
    #[at("/d/:uid/:slug")]
    DashboardSlug { uid: String, slug: String },
    #[at("/playlists/play/:uids")]
    Playlist { uids: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a dashboard uid.
    pub(crate) fn dashboard(uid: impl Into<String>) -> Self {
        Self::Dashboard { uid: uid.into() }
    }

    /// Route matching the browser's current path, falling back to home.
    pub(crate) fn current() -> Self {
        gloo::utils::window()
            .location()
            .pathname()
            .ok()
            .and_then(|path| Self::recognize(&path))
            .unwrap_or(Self::Home)
    }
}
