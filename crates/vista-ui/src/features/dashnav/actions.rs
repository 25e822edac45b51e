//! Commands issued from the navigation bar.

use crate::core::refresh::RefreshSelection;

/// Navigation bar commands emitted from UI controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Re-query all panels now.
    RefreshNow,
    /// Pick a new auto-refresh interval.
    ChangeRefresh(RefreshSelection),
    /// Open the dashboard search overlay.
    OpenSearch,
    /// Leave the edit view or fullscreen panel.
    Close,
    /// Cycle kiosk mode.
    ToggleKiosk,
    /// Persist the dashboard.
    Save,
    /// Open the settings edit view.
    OpenSettings,
    /// Star or unstar the dashboard.
    ToggleStar,
    /// Previous playlist dashboard.
    PlaylistPrev,
    /// Next playlist dashboard.
    PlaylistNext,
    /// Stop the playlist.
    PlaylistStop,
    /// Open the share dialog.
    OpenShare,
    /// Add a panel (handled by the parent view).
    AddPanel,
}

impl NavAction {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RefreshNow => "refresh_now",
            Self::ChangeRefresh(_) => "change_refresh",
            Self::OpenSearch => "open_search",
            Self::Close => "close",
            Self::ToggleKiosk => "toggle_kiosk",
            Self::Save => "save",
            Self::OpenSettings => "open_settings",
            Self::ToggleStar => "toggle_star",
            Self::PlaylistPrev => "playlist_prev",
            Self::PlaylistNext => "playlist_next",
            Self::PlaylistStop => "playlist_stop",
            Self::OpenShare => "open_share",
            Self::AddPanel => "add_panel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NavAction;
    use crate::core::refresh::RefreshSelection;

    #[test]
    fn names_are_distinct() {
        let actions = [
            NavAction::RefreshNow,
            NavAction::ChangeRefresh(RefreshSelection::Off),
            NavAction::OpenSearch,
            NavAction::Close,
            NavAction::ToggleKiosk,
            NavAction::Save,
            NavAction::OpenSettings,
            NavAction::ToggleStar,
            NavAction::PlaylistPrev,
            NavAction::PlaylistNext,
            NavAction::PlaylistStop,
            NavAction::OpenShare,
            NavAction::AddPanel,
        ];
        let mut names: Vec<_> = actions.iter().map(NavAction::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), actions.len());
    }
}
