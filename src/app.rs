mod contact;
mod header;
mod hero;
mod icons;
mod projects;
mod skills;
mod theme;
mod timeline;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{self, Portfolio};
use crate::site::copyright_year;
use crate::state::{ContactForm, OpenItems};

use contact::Contact;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use theme::{provide_theme, use_theme};
use timeline::Timeline;

const CARD: &str = "rounded-lg border bg-card text-card-foreground shadow-sm p-6";
const OUTLINE_ICON_BUTTON: &str = "inline-flex h-10 w-10 items-center justify-center rounded-md border border-input bg-background hover:bg-accent hover:text-accent-foreground transition-colors";
const GHOST_ICON_BUTTON: &str = "inline-flex h-10 w-10 items-center justify-center rounded-md hover:bg-accent hover:text-accent-foreground transition-colors";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Html attr:class=move || theme.get().as_str() />
        <Title formatter=|title| format!("{title} - Portfolio") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Renders its children only once the page is running in the browser, so
/// the server output and the hydration pass never disagree.
#[component]
fn MountGate(children: ChildrenFn) -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));

    view! { <Show when=move || mounted.get()>{children()}</Show> }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match content::portfolio() {
        Ok(portfolio) => Either::Left(view! {
            <Title text=portfolio.name.as_str() />
            <MountGate>
                <Page portfolio />
            </MountGate>
        }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center">"Portfolio content is unavailable."</p>
            })
        }
    }
}

#[component]
fn Page(portfolio: &'static Portfolio) -> impl IntoView {
    let theme = use_theme();
    // owned here so a theme change re-renders the sections without losing input
    let menu_open = RwSignal::new(false);
    let contact_form = RwSignal::new(ContactForm::default());
    let open_items = RwSignal::new(OpenItems::default());

    move || {
        let theme = theme.get();
        view! {
            <div
                class="min-h-screen bg-background text-foreground animate-page-enter"
                data-theme=theme.as_str()
            >
                <Header menu_open name=portfolio.name.as_str() />
                <Hero portfolio />
                <Skills groups=portfolio.skills.as_slice() />
                <Timeline entries=portfolio.timeline.as_slice() open_items />
                <Projects projects=portfolio.projects.as_slice() />
                <Contact copy=&portfolio.contact form=contact_form />
                <Footer name=portfolio.name.as_str() />
            </div>
        }
    }
}

#[component]
fn Footer(name: &'static str) -> impl IntoView {
    view! {
        <footer class="bg-background text-center py-8">
            <p>{format!("© {} {name}. All rights reserved.", copyright_year())}</p>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use crate::site::NAV_LINKS;
    use crate::state::Theme;

    use super::header::{close_menu, MobileMenu};
    use super::icons::{MOON, SUN};
    use super::theme::ThemeToggle;
    use super::*;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| f().into_view().to_html())
    }

    #[test]
    fn test_mount_gate_hides_children_on_server() {
        let html = render(|| {
            view! {
                <MountGate>
                    <p>"gated content"</p>
                </MountGate>
            }
        });
        assert!(!html.contains("gated content"));
    }

    #[test]
    fn test_footer_copyright() {
        let html = render(|| view! { <Footer name="Ada Lovelace" /> });
        assert!(html.contains("Ada Lovelace. All rights reserved."));
        assert!(html.contains(&copyright_year().to_string()));
    }

    #[test]
    fn test_mobile_menu_lists_links_when_open() {
        let html = render(|| {
            provide_context(RwSignal::new(Theme::Dark));
            view! { <MobileMenu open=RwSignal::new(true) name="Ada" /> }
        });
        assert!(html.contains("mobile-menu"));
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
        }
        assert!(html.contains("Toggle theme"));
    }

    #[test]
    fn test_mobile_menu_hidden_when_closed() {
        let html = render(|| {
            provide_context(RwSignal::new(Theme::Light));
            view! { <MobileMenu open=RwSignal::new(false) name="Ada" /> }
        });
        assert!(!html.contains("mobile-menu"));
        assert!(!html.contains("#timeline"));
    }

    #[test]
    fn test_close_menu_closes_open_drawer() {
        let owner = Owner::new();
        owner.with(|| {
            let open = RwSignal::new(true);
            close_menu(open);
            assert!(!open.get_untracked());

            // closing an already closed drawer leaves it closed
            close_menu(open);
            assert!(!open.get_untracked());
        });
    }

    #[test]
    fn test_theme_toggle_icon_follows_theme() {
        let light = render(|| {
            provide_context(RwSignal::new(Theme::Light));
            view! { <ThemeToggle /> }
        });
        assert!(light.contains(MOON));
        assert!(!light.contains(SUN));
        assert!(light.contains(Theme::Light.toggle_label()));

        let dark = render(|| {
            provide_context(RwSignal::new(Theme::Dark));
            view! { <ThemeToggle /> }
        });
        assert!(dark.contains(SUN));
        assert!(!dark.contains(MOON));
        assert!(dark.contains(Theme::Dark.toggle_label()));
    }

    #[test]
    fn test_nav_links_target_rendered_sections() {
        let portfolio = content::portfolio().expect("embedded portfolio should parse");
        let html = render(move || {
            let open_items = RwSignal::new(OpenItems::default());
            let form = RwSignal::new(ContactForm::default());
            view! {
                <Hero portfolio />
                <Skills groups=portfolio.skills.as_slice() />
                <Timeline entries=portfolio.timeline.as_slice() open_items />
                <Projects projects=portfolio.projects.as_slice() />
                <Contact copy=&portfolio.contact form />
            }
        });
        for id in NAV_LINKS.iter().filter_map(|link| link.section_id()) {
            assert!(html.contains(&format!("id=\"{id}\"")), "no section for #{id}");
        }
    }
}
