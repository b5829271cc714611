use leptos::{ev, prelude::*};

use crate::content::ContactCopy;
use crate::site::SECTION_CONTACT;
use crate::state::{ContactField, ContactForm, Submission};

use super::icons::{Icon, SEND};
use super::CARD;

const INPUT: &str = "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring";
const TEXTAREA: &str = "flex min-h-[80px] w-full rounded-md border border-input bg-background px-3 py-2 text-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring";

fn log_submission(submission: &Submission) {
    match serde_json::to_string(submission) {
        Ok(json) => log::info!("Form submitted: {json}"),
        Err(e) => log::warn!("Form submitted but couldn't be serialized: {e}"),
    }
}

#[component]
pub fn Contact(copy: &'static ContactCopy, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move |field: ContactField| move || form.with(|f| f.get(field).to_string());

    let on_submit = move |ev: ev::SubmitEvent| {
        // nothing is sent anywhere
        ev.prevent_default();
        if let Some(submission) = form.try_update(ContactForm::submit) {
            log_submission(&submission);
        }
    };

    view! {
        <section id=SECTION_CONTACT class="py-20 bg-zinc-100 dark:bg-zinc-950">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-8 text-center">{copy.heading.as_str()}</h2>
                <div class=format!("{CARD} max-w-md mx-auto")>
                    <div class="mb-6 space-y-1.5">
                        <h3 class="text-2xl font-semibold leading-none tracking-tight">
                            {copy.title.as_str()}
                        </h3>
                        <p class="text-sm text-muted-foreground">{copy.description.as_str()}</p>
                    </div>
                    <form on:submit=on_submit>
                        <div class="space-y-4">
                            <div>
                                <label for="name" class="block text-sm font-medium mb-1">
                                    "Name"
                                </label>
                                <input
                                    id="name"
                                    class=INPUT
                                    required=true
                                    prop:value=value(ContactField::Name)
                                    on:input=move |ev| {
                                        form.update(|f| f.set(ContactField::Name, event_target_value(&ev)))
                                    }
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium mb-1">
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class=INPUT
                                    required=true
                                    prop:value=value(ContactField::Email)
                                    on:input=move |ev| {
                                        form.update(|f| f.set(ContactField::Email, event_target_value(&ev)))
                                    }
                                />
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium mb-1">
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    class=TEXTAREA
                                    required=true
                                    prop:value=value(ContactField::Message)
                                    on:input=move |ev| {
                                        form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="inline-flex w-full items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground hover:bg-primary/90 transition-colors"
                            >
                                "Send Message"
                                <Icon svg=SEND class="ml-2 h-4 w-4" />
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}
