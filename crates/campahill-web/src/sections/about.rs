use campahill_core::{
    SectionId, Stat,
    catalog::{ABOUT_IMAGE_URL, STAT_STAGGER_SECS, STATS, stagger_delay},
};
use leptos::prelude::*;

use crate::components::{Icon, SectionHeading, reveal_delay_style};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-24 bg-gradient-to-br from-black via-red-950 to-black">
            <div class="container mx-auto px-6">
                <SectionHeading
                    title="Our Heritage"
                    lead="Preserving the sacred traditions of Nepali weddings through authentic craftsmanship and timeless beauty."
                />

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-6 reveal-left">
                        <StoryCard
                            title="Traditional Craftsmanship"
                            body="Every piece in our collection is carefully curated to honor the rich cultural heritage of Nepal. \
                                  Our artisans use traditional techniques passed down through generations, ensuring each item \
                                  carries the authentic spirit of Nepali celebrations."
                        />
                        <StoryCard
                            title="Event Planning Excellence"
                            body="We understand that event planners need reliability, quality, and authenticity. \
                                  Our comprehensive collection and dedicated service ensure your clients' special \
                                  moments are celebrated with the dignity and beauty they deserve."
                        />
                    </div>

                    <div class="relative reveal-right">
                        <div class="relative overflow-hidden rounded-3xl">
                            <img
                                src=ABOUT_IMAGE_URL
                                alt="Traditional Nepali Wedding"
                                class="w-full h-96 object-cover"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent"></div>
                        </div>

                        <div class="grid grid-cols-3 gap-4 mt-8">
                            {STATS
                                .into_iter()
                                .enumerate()
                                .map(|(index, stat)| view! { <StatCard stat=stat index=index /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StoryCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="bg-black/30 backdrop-blur-sm rounded-3xl p-8 border border-gold/20">
            <h3 class="text-2xl font-bold text-gold mb-4">{title}</h3>
            <p class="text-gold/70 leading-relaxed">{body}</p>
        </div>
    }
}

#[component]
fn StatCard(stat: Stat, index: usize) -> impl IntoView {
    view! {
        <div
            class="text-center bg-black/30 backdrop-blur-sm rounded-2xl p-6 border border-gold/20 reveal"
            style=reveal_delay_style(stagger_delay(index, STAT_STAGGER_SECS))
        >
            <Icon glyph=stat.icon class="w-8 h-8 text-gold mx-auto mb-2" />
            <div class="text-2xl font-bold text-gold">{stat.number}</div>
            <div class="text-sm text-gold/70">{stat.label}</div>
        </div>
    }
}
