use leptos::{either::Either, prelude::*};

use crate::content::{Portfolio, Social, SocialKind};

use super::icons::{Icon, GITHUB, LINKEDIN, MAIL};
use super::OUTLINE_ICON_BUTTON;

const LETTER_DELAY_MS: usize = 40;

#[component]
pub fn Hero(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section class="mx-auto py-32 bg-zinc-100 dark:bg-zinc-950 text-center h-screen flex flex-col justify-center items-center">
            <GradualSpacing
                class="font-display text-center text-4xl font-bold tracking-[-0.1em] text-black dark:text-white md:text-7xl md:leading-[5rem]"
                text=portfolio.name.as_str()
            />
            <p class="text-xl mb-8">{portfolio.tagline.as_str()}</p>
            <div class="flex justify-center space-x-4">
                {portfolio.socials.iter().map(|social| view! { <SocialButton social /> }).collect_view()}
            </div>
        </section>
    }
}

/// Heading whose letters slide in one after another.
#[component]
fn GradualSpacing(text: &'static str, class: &'static str) -> impl IntoView {
    let letters = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let c = if c == ' ' { '\u{a0}' } else { c };
            view! {
                <span
                    class="inline-block animate-gradual-spacing"
                    style=format!("animation-delay: {}ms", i * LETTER_DELAY_MS)
                >
                    {c.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="flex justify-center">
            <h1 class=class aria-label=text>
                {letters}
            </h1>
        </div>
    }
}

#[component]
fn SocialButton(social: &'static Social) -> impl IntoView {
    let svg = match social.kind {
        SocialKind::GitHub => GITHUB,
        SocialKind::LinkedIn => LINKEDIN,
        SocialKind::Email => MAIL,
    };
    let inner = view! {
        <Icon svg class="h-5 w-5" />
        <span class="sr-only">{social.label.as_str()}</span>
    };

    match social.target() {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=OUTLINE_ICON_BUTTON>
                {inner}
            </a>
        }),
        None => Either::Right(view! {
            <button type="button" class=OUTLINE_ICON_BUTTON>
                {inner}
            </button>
        }),
    }
}
