use crate::core::ui::KioskMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub kiosk: KioskMode,
    pub navbar: Html,
    #[prop_or_default]
    pub overlays: Html,
    #[prop_or_default]
    pub children: Children,
}

/// Page chrome: navigation bar, content, overlays. Kiosk mode hides chrome
/// through the shell class.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let show_navbar = props.kiosk != KioskMode::Full;
    html! {
        <div class={classes!("app-shell", props.kiosk.shell_class())}>
            if show_navbar {
                <header class="dashboard-header">{props.navbar.clone()}</header>
            }
            <main class="dashboard-container">
                { for props.children.iter() }
            </main>
            {props.overlays.clone()}
        </div>
    }
}
