use leptos::prelude::*;

use crate::content::Project;
use crate::site::SECTION_PROJECTS;

use super::icons::{Icon, EXTERNAL_LINK};
use super::CARD;

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=SECTION_PROJECTS class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-8 text-center">"Projects"</h2>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class=format!("{CARD} flex flex-col")>
            <h3 class="text-xl font-semibold mb-2">{project.title.as_str()}</h3>
            <p class="text-muted-foreground mb-4 flex-grow">{project.description.as_str()}</p>
            <ul class="flex flex-wrap gap-2 mb-4">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <li class="rounded-md border px-2 py-0.5 text-xs font-medium">
                                {tag.as_str()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {project
                .link
                .as_deref()
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-1 text-sm font-medium text-primary hover:underline"
                        >
                            "View project"
                            <Icon svg=EXTERNAL_LINK class="h-4 w-4" />
                        </a>
                    }
                })}
        </article>
    }
}
