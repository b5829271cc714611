use leptos::prelude::*;

// Lucide outlines, sized by the wrapping element
macro_rules! lucide {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" width="100%" height="100%">"#,
            $body,
            "</svg>"
        )
    };
}

pub const GITHUB: &str = lucide!(
    r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
);
pub const LINKEDIN: &str = lucide!(
    r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
);
pub const MAIL: &str = lucide!(
    r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
);
pub const SEND: &str = lucide!(r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#);
pub const MENU: &str = lucide!(
    r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
);
pub const CLOSE: &str = lucide!(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#);
pub const MOON: &str = lucide!(r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#);
pub const SUN: &str = lucide!(
    r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
);
pub const CHEVRON_DOWN: &str = lucide!(r#"<path d="m6 9 6 6 6-6"/>"#);
pub const EXTERNAL_LINK: &str = lucide!(
    r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
);

#[component]
pub fn Icon(svg: &'static str, #[prop(into)] class: String) -> impl IntoView {
    view! { <span class=format!("inline-block {class}") aria-hidden="true" inner_html=svg></span> }
}
