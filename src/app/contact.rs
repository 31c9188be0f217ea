use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::{
    catalog::CATALOG,
    contact::{ContactForm, Field, SubmitStatus},
    motion::Section,
    relay::{EmailJsRelay, Relay},
};

use super::backdrop::Backdrop;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border bg-white text-gray-900 dark:bg-gray-900 dark:text-gray-100 placeholder-gray-400 dark:placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-emerald-500";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section
            id="contact"
            class="py-20 relative overflow-hidden bg-white dark:bg-gray-900 text-gray-900 dark:text-white"
        >
            <Backdrop light_video="/white3.mp4" dark_video="/dark3.mp4" section=Section::Contact />
            <div class="relative z-10 max-w-6xl mx-auto px-4">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">"Me contacter"</h2>
                    <p class="text-xl text-gray-700 dark:text-gray-300">
                        "Discutons de données, de projets et d’opportunités professionnelles"
                    </p>
                </div>
                <SocialLinks />
                <div class="max-w-2xl mx-auto bg-white/80 dark:bg-gray-800/80 backdrop-blur-md rounded-2xl p-8">
                    <h3 class="text-2xl font-bold mb-6 text-center">"Envoyer un message"</h3>
                    <MessageForm />
                </div>
                <p class="text-center text-gray-400 mt-16">
                    {format!(
                        "© {} Keryl Djeukoua Tchani — Tous droits réservés",
                        env!("BUILD_YEAR"),
                    )}
                </p>
            </div>
        </section>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-16">
            {CATALOG
                .social
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.name.as_str()
                            class="bg-white dark:bg-gray-800 rounded-2xl p-6 text-center shadow-lg hover:scale-105 transition-transform"
                        >
                            <i class=format!("{} text-3xl block mx-auto mb-3", link.icon)></i>
                            <p class="font-semibold">{link.name.as_str()}</p>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = EmailJsRelay::default().submit(&message).await;
            form.update(|f| f.complete(outcome));
        });
    };

    let value = move |field: Field| move || form.with(|f| f.value(field).to_string());
    let status = move || form.with(ContactForm::status);

    view! {
        <form on:submit=on_submit class="space-y-6">
            <input
                name=Field::Name.name()
                placeholder=Field::Name.placeholder()
                required=true
                prop:value=value(Field::Name)
                on:input=move |ev| form.update(|f| f.edit(Field::Name, event_target_value(&ev)))
                class=INPUT_CLASS
            />
            <input
                name=Field::Email.name()
                type="email"
                placeholder=Field::Email.placeholder()
                required=true
                prop:value=value(Field::Email)
                on:input=move |ev| form.update(|f| f.edit(Field::Email, event_target_value(&ev)))
                class=INPUT_CLASS
            />
            <input
                name=Field::Subject.name()
                placeholder=Field::Subject.placeholder()
                required=true
                prop:value=value(Field::Subject)
                on:input=move |ev| form.update(|f| f.edit(Field::Subject, event_target_value(&ev)))
                class=INPUT_CLASS
            />
            <textarea
                name=Field::Message.name()
                rows="5"
                placeholder=Field::Message.placeholder()
                required=true
                prop:value=value(Field::Message)
                on:input=move |ev| form.update(|f| f.edit(Field::Message, event_target_value(&ev)))
                class=INPUT_CLASS
            ></textarea>
            <button
                type="submit"
                disabled=move || status() == SubmitStatus::Submitting
                class="w-full py-3 rounded-xl bg-emerald-600 text-white font-bold hover:bg-emerald-700 transition disabled:opacity-60 disabled:cursor-not-allowed"
            >
                {move || status().submit_label()}
            </button>
            {move || {
                let status = status();
                status
                    .notice()
                    .map(|text| {
                        let color = if status == SubmitStatus::Success {
                            "text-center text-green-600"
                        } else {
                            "text-center text-red-600"
                        };
                        view! { <p class=color role="status">{text}</p> }
                    })
            }}
        </form>
    }
}
