use leptos::{ev, prelude::*};

use crate::site::{copyright_year, NAV_LINKS};

use super::icons::{Icon, CLOSE, MENU};
use super::theme::ThemeToggle;
use super::GHOST_ICON_BUTTON;

/// Floating navigation bar. Desktop gets the pill nav, mobile gets a
/// drawer behind the menu trigger.
#[component]
pub fn Header(menu_open: RwSignal<bool>, name: &'static str) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu_open.get_untracked() {
            close_menu(menu_open);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class="fixed top-6 left-0 right-0 z-50 px-6">
            <div class="max-w-7xl mx-auto flex justify-between items-center md:justify-center">
                <div class="md:absolute md:left-6">
                    <button
                        type="button"
                        class=format!("{GHOST_ICON_BUTTON} bg-background/80 backdrop-blur-md shadow-lg md:hidden")
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.set(true)
                    >
                        <Icon svg=MENU class="h-6 w-6" />
                        <span class="sr-only">"Open menu"</span>
                    </button>
                    <MobileMenu open=menu_open name />
                </div>
                <nav class="hidden md:block bg-background/80 backdrop-blur-md rounded-full px-6 py-3 shadow-lg">
                    <ul class="flex space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            href=link.href
                                            class="text-sm font-medium hover:text-primary transition-colors"
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="md:absolute md:right-6">
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

/// Shared by the drawer's links, overlay and close button.
pub fn close_menu(open: RwSignal<bool>) {
    open.set(false);
}

#[component]
pub fn MobileMenu(open: RwSignal<bool>, name: &'static str) -> impl IntoView {
    let close = move |_: ev::MouseEvent| close_menu(open);
    let copyright = format!("© {} {name}", copyright_year());

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 bg-black/80 animate-fade-in" aria-hidden="true" on:click=close></div>
            <div
                id="mobile-menu"
                role="dialog"
                aria-modal="true"
                aria-label="Navigation"
                class="fixed inset-y-0 left-0 z-50 h-full w-[300px] sm:w-[400px] border-r bg-background p-6 shadow-lg animate-slide-in-left"
            >
                <button
                    type="button"
                    class="absolute right-4 top-4 rounded-sm opacity-70 hover:opacity-100 transition-opacity"
                    on:click=close
                >
                    <Icon svg=CLOSE class="h-4 w-4" />
                    <span class="sr-only">"Close"</span>
                </button>
                <nav class="flex flex-col h-full">
                    <div class="flex-grow py-6">
                        <ul class="space-y-4">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href
                                                class="block px-4 py-2 text-lg hover:bg-accent rounded-md"
                                                on:click=close
                                            >
                                                {link.mobile_label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="py-6 flex justify-between items-center border-t">
                        <span class="text-sm text-muted-foreground">{copyright.clone()}</span>
                        <ThemeToggle />
                    </div>
                </nav>
            </div>
        </Show>
    }
}
