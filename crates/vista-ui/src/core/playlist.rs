//! Playlist session state: an ordered list of dashboards cycled in turn.

/// Dashboard entry in a playlist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistItem {
    /// Dashboard uid.
    pub uid: String,
    /// Display title.
    pub title: String,
}

/// Active (or stopped) playlist session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistState {
    /// Dashboards in play order.
    pub items: Vec<PlaylistItem>,
    /// Index of the current dashboard.
    pub position: usize,
    /// Whether the session is running.
    pub playing: bool,
}

impl PlaylistState {
    /// Start a session at the first item. Empty lists never start.
    #[must_use]
    pub fn start(items: Vec<PlaylistItem>) -> Self {
        let playing = !items.is_empty();
        Self {
            items,
            position: 0,
            playing,
        }
    }

    /// Item currently shown, when playing.
    #[must_use]
    pub fn current(&self) -> Option<&PlaylistItem> {
        if self.playing {
            self.items.get(self.position)
        } else {
            None
        }
    }

    /// Advance, wrapping to the first item.
    pub fn next(&mut self) -> Option<&PlaylistItem> {
        if !self.playing || self.items.is_empty() {
            return None;
        }
        self.position = (self.position + 1) % self.items.len();
        self.items.get(self.position)
    }

    /// Step back, wrapping to the last item.
    pub fn prev(&mut self) -> Option<&PlaylistItem> {
        if !self.playing || self.items.is_empty() {
            return None;
        }
        self.position = self
            .position
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
        self.items.get(self.position)
    }

    /// End the session and forget the items.
    pub fn stop(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(uids: &[&str]) -> Vec<PlaylistItem> {
        uids.iter()
            .map(|uid| PlaylistItem {
                uid: (*uid).to_string(),
                title: uid.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut state = PlaylistState::start(items(&["a", "b", "c"]));
        assert_eq!(state.current().map(|item| item.uid.as_str()), Some("a"));
        assert_eq!(state.prev().map(|item| item.uid.as_str()), Some("c"));
        assert_eq!(state.next().map(|item| item.uid.as_str()), Some("a"));
        assert_eq!(state.next().map(|item| item.uid.as_str()), Some("b"));
    }

    #[test]
    fn stop_clears_the_session() {
        let mut state = PlaylistState::start(items(&["a", "b"]));
        state.next();
        state.stop();
        assert!(!state.playing);
        assert_eq!(state.current(), None);
        assert_eq!(state.next(), None);
    }

    #[test]
    fn empty_playlist_does_not_play() {
        let mut state = PlaylistState::start(Vec::new());
        assert!(!state.playing);
        assert_eq!(state.prev(), None);
    }
}
