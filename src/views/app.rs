use dioxus::prelude::*;

use crate::preference::{ reflect_theme, ThemePreference };
use crate::utils::ThemeState;
use crate::views::{ Home, Navbar };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

/// Root component. Uses a `ThemePreference` from the root context when one
/// was provided, otherwise the platform default.
#[component]
pub fn App() -> Element {
    let preference = use_hook(|| {
        try_consume_context::<ThemePreference>().unwrap_or_else(ThemePreference::platform)
    });
    use_context_provider(|| preference.clone());

    let theme = use_signal(|| preference.initialize());
    use_context_provider(|| theme);

    use_effect(move || {
        if let Err(e) = reflect_theme(theme()) {
            log::error!("Failed to apply theme to document: {}", e);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Shell {}
    }
}

/// Page chrome under the theme context: root class, navbar, generator.
#[component]
pub fn Shell() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let root_class = theme().root_class();

    rsx! {
        div {
            class: "app {root_class}",
            Navbar {}
            Home {}
        }
    }
}
