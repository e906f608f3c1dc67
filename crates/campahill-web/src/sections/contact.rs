use campahill_core::{
    ContactDetail, ContactDraft, ContactField, SectionId, catalog::CONTACT_DETAILS,
};
use leptos::{ev::SubmitEvent, prelude::*};

use crate::components::{IconBadge, SectionHeading};

const INPUT_CLASS: &str = "w-full bg-black/50 border border-gold/30 rounded-xl px-4 py-3 text-white placeholder-gold/50 focus:border-gold focus:outline-none transition-colors";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() class="py-24 bg-gradient-to-br from-black via-red-950 to-black">
            <div class="container mx-auto px-6">
                <SectionHeading
                    title="Let's Create Magic Together"
                    lead="Ready to plan an unforgettable Nepali wedding? Contact us today to discuss your vision \
                          and discover how we can bring traditional beauty to your special event."
                />

                <div class="grid lg:grid-cols-2 gap-16">
                    <div class="space-y-8 reveal-left">
                        <div class="bg-black/30 backdrop-blur-sm rounded-3xl p-8 border border-gold/20">
                            <h3 class="text-2xl font-bold text-gold mb-6">"Get in Touch"</h3>
                            <div class="space-y-6">
                                {CONTACT_DETAILS
                                    .into_iter()
                                    .map(|detail| view! { <DetailRow detail=detail /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="reveal-right">
                        <div class="bg-black/30 backdrop-blur-sm rounded-3xl p-8 border border-gold/20">
                            <h3 class="text-2xl font-bold text-gold mb-6">"Send us a Message"</h3>
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DetailRow(detail: ContactDetail) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <IconBadge glyph=detail.icon />
            <div>
                <p class="text-gold font-semibold">{detail.label}</p>
                <p class="text-gold/70">{detail.value}</p>
            </div>
        </div>
    }
}

/// Three-field form. Values stay local; submitting sends nothing.
#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::new());

    let on_submit = move |ev: SubmitEvent| {
        // Keep the page (and the typed text) where it is.
        ev.prevent_default();
        if let Err(e) = draft.with_untracked(ContactDraft::submit) {
            tracing::debug!(error = %e, "contact message left unsent");
        }
    };

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div>
                <label class="block text-gold font-semibold mb-2">{ContactField::Name.label()}</label>
                <input
                    type="text"
                    class=INPUT_CLASS
                    placeholder=ContactField::Name.placeholder()
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.set(ContactField::Name, event_target_value(&ev)))
                />
            </div>

            <div>
                <label class="block text-gold font-semibold mb-2">{ContactField::Email.label()}</label>
                <input
                    type="email"
                    class=INPUT_CLASS
                    placeholder=ContactField::Email.placeholder()
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.set(ContactField::Email, event_target_value(&ev)))
                />
            </div>

            <div>
                <label class="block text-gold font-semibold mb-2">{ContactField::Message.label()}</label>
                <textarea
                    rows="4"
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder=ContactField::Message.placeholder()
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| draft.update(|d| d.set(ContactField::Message, event_target_value(&ev)))
                />
            </div>

            <button
                type="submit"
                class="w-full bg-gradient-to-r from-red-600 to-red-800 text-white py-4 rounded-xl font-semibold hover:shadow-lg transition-all duration-300"
            >
                "Send Message"
            </button>
        </form>
    }
}
