use dioxus::prelude::*;

use crate::preference::ThemePreference;
use crate::utils::ThemeState;

/// Toggle-button action: flip, persist, publish.
pub fn toggle_theme(preference: &ThemePreference, mut theme: Signal<ThemeState>) {
    let next = preference.toggle(theme());
    theme.set(next);
}

#[component]
pub fn Navbar() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let preference = use_context::<ThemePreference>();
    let label = theme().toggle_label();

    rsx! {
        nav {
            class: "navbar",
            h1 { class: "title", "Lotto Number Generator" }
            button {
                id: "dark-mode-toggle",
                class: "theme-toggle",
                onclick: move |_| toggle_theme(&preference, theme),
                "{label}"
            }
        }
    }
}
