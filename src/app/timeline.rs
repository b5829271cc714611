use leptos::prelude::*;

use crate::content::{EntryKind, TimelineEntry};
use crate::site::SECTION_TIMELINE;
use crate::state::OpenItems;

use super::icons::{Icon, CHEVRON_DOWN};
use super::{CARD, GHOST_ICON_BUTTON};

#[component]
pub fn Timeline(
    entries: &'static [TimelineEntry],
    open_items: RwSignal<OpenItems>,
) -> impl IntoView {
    view! {
        <section id=SECTION_TIMELINE class="py-20 bg-zinc-100 dark:bg-zinc-950">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-8 text-center">"Education & Work Experience"</h2>
                <ol class="relative mx-auto max-w-3xl border-l border-border">
                    {entries
                        .iter()
                        .map(|entry| view! { <TimelineItem entry open_items /> })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(
    entry: &'static TimelineEntry,
    open_items: RwSignal<OpenItems>,
) -> impl IntoView {
    let id = entry.id.as_str();
    let details_id = format!("{id}-details");
    let is_open = move || open_items.with(|items| items.is_open(id));
    let marker = match entry.kind {
        EntryKind::Education => "E",
        EntryKind::Work => "W",
    };

    // entries without details have nothing to expand
    let toggle = (!entry.details.is_empty()).then(|| {
        view! {
            <button
                type="button"
                class=GHOST_ICON_BUTTON
                aria-controls=details_id.clone()
                aria-expanded=move || is_open().to_string()
                on:click=move |_| open_items.update(|items| items.toggle(id))
            >
                <span class=move || {
                    if is_open() {
                        "block rotate-180 transition-transform"
                    } else {
                        "block transition-transform"
                    }
                }>
                    <Icon svg=CHEVRON_DOWN class="h-4 w-4" />
                </span>
                <span class="sr-only">"Toggle details"</span>
            </button>
        }
    });

    view! {
        <li class="relative mb-10 ml-6">
            <span class="absolute -left-9 top-4 flex h-6 w-6 items-center justify-center rounded-full bg-primary text-primary-foreground text-xs font-bold">
                {marker}
            </span>
            <div class=CARD>
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <p class="text-xs uppercase tracking-wide text-muted-foreground">
                            {entry.kind.label()}
                        </p>
                        <h3 class="text-lg font-semibold">{entry.title.as_str()}</h3>
                        <p class="text-sm text-muted-foreground">
                            {entry.organization.as_str()} " · " {entry.period.as_str()}
                        </p>
                    </div>
                    {toggle}
                </div>
                <p class="mt-2">{entry.summary.as_str()}</p>
                <Show when=is_open>
                    <ul id=details_id.clone() class="mt-4 list-disc pl-5 space-y-1 text-sm animate-fade-in">
                        {entry.details.iter().map(|d| view! { <li>{d.as_str()}</li> }).collect_view()}
                    </ul>
                </Show>
            </div>
        </li>
    }
}
