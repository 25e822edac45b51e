//! UI primitives shared across the crate (kiosk mode, toasts).

/// Chrome-hiding display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KioskMode {
    /// Full chrome.
    #[default]
    Off,
    /// Side menu hidden, navigation bar kept.
    Tv,
    /// All chrome hidden.
    Full,
}

impl KioskMode {
    /// Next mode in the toggle cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Tv,
            Self::Tv => Self::Full,
            Self::Full => Self::Off,
        }
    }

    /// CSS class applied to the app shell.
    #[must_use]
    pub const fn shell_class(self) -> &'static str {
        match self {
            Self::Off => "",
            Self::Tv => "view-mode--tv",
            Self::Full => "view-mode--kiosk",
        }
    }
}

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational message.
    Info,
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// Transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used for dismissal.
    pub id: u64,
    /// Message text.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

#[cfg(test)]
mod tests {
    use super::KioskMode;

    #[test]
    fn kiosk_cycle_returns_to_off() {
        let mode = KioskMode::default();
        assert_eq!(mode.next(), KioskMode::Tv);
        assert_eq!(mode.next().next(), KioskMode::Full);
        assert_eq!(mode.next().next().next(), KioskMode::Off);
        assert_eq!(KioskMode::Off.shell_class(), "");
    }
}
