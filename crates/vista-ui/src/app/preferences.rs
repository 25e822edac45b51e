//! Environment helpers for the app shell.

use gloo::utils::document;
use vista_config::{NavConfig, load_or_default};

/// Id of the `<script type="application/json">` element holding configuration.
pub(crate) const CONFIG_ELEMENT_ID: &str = "vista-config";

/// Uid opened from the home route.
pub(crate) const HOME_DASHBOARD_UID: &str = "home";

/// Load configuration from the page, falling back to defaults.
pub(crate) fn load_config() -> NavConfig {
    let document_text = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    load_or_default(document_text.as_deref())
}
