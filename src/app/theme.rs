use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::state::Theme;

use super::icons::{Icon, MOON, SUN};
use super::OUTLINE_ICON_BUTTON;

#[cfg(feature = "hydrate")]
const THEME_STORAGE_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
fn system_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches());
    Theme::from_system(prefers_dark)
}

/// Provides the page theme as context. In the browser a stored preference
/// is restored, falling back to the system color scheme, and explicit
/// choices are written back to local storage.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        let system = system_theme();

        Effect::watch(
            || (),
            move |_, _, _| {
                let preference = Theme::resolve(stored.get_untracked(), system);
                log::debug!("restoring {} theme", preference.as_str());
                theme.set(preference);
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |current, _, _| {
                if current.needs_storing(stored.get_untracked(), system) {
                    set_stored.set(Some(*current));
                }
            },
            false,
        );
    }

    provide_context(theme);
    theme
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class=format!("{OUTLINE_ICON_BUTTON} bg-background/80 backdrop-blur-md shadow-lg")
            title=move || theme.get().toggle_label()
            on:click=move |_| theme.update(|t| *t = t.toggle())
        >
            {move || {
                let svg = if theme.get().is_dark() { SUN } else { MOON };
                view! { <Icon svg class="h-[1.2rem] w-[1.2rem]" /> }
            }}
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}
