use leptos::prelude::*;

use crate::content::SkillGroup;
use crate::site::SECTION_SKILLS;

use super::CARD;

#[component]
pub fn Skills(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section id=SECTION_SKILLS class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-8 text-center">"Skills"</h2>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {groups
                        .iter()
                        .map(|group| {
                            view! {
                                <div class=CARD>
                                    <h3 class="text-xl font-semibold mb-4">{group.name.as_str()}</h3>
                                    <ul class="flex flex-wrap gap-2">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="rounded-full bg-secondary text-secondary-foreground px-3 py-1 text-sm">
                                                        {skill.as_str()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
