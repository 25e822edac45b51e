pub(crate) mod dash_nav_button;
pub(crate) mod refresh_picker;
pub(crate) mod search;
pub(crate) mod share_modal;
pub(crate) mod shell;
pub(crate) mod time_picker;
pub(crate) mod toast;
pub(crate) mod tooltip;
