use campahill_core::{Glyph, SectionId, catalog::HERO_IMAGE_URL};
use leptos::prelude::*;

use crate::components::Icon;

#[component]
pub fn Hero() -> impl IntoView {
    let background = format!("background-image: url('{HERO_IMAGE_URL}')");

    view! {
        <section
            id=SectionId::Home.as_str()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-red-900 via-red-800 to-black">
                <div class="absolute inset-0 bg-black/40"></div>
                <div class="absolute inset-0 bg-cover bg-center hero-zoom" style=background></div>
            </div>

            <div class="relative z-10 text-center px-6 max-w-4xl mx-auto">
                <div class="space-y-6 reveal">
                    <h1 class="text-5xl md:text-7xl font-bold text-gold leading-tight">
                        "Sacred Traditions"
                        <br />
                        <span class="text-white">"Perfect Ceremonies"</span>
                    </h1>

                    <p class="text-xl md:text-2xl text-gold/90 max-w-2xl mx-auto leading-relaxed">
                        "Exquisite Nepali wedding accessories crafted with love and tradition. "
                        "From ceremonial thalis to decorative umbrellas, we bring authenticity to your special moments."
                    </p>

                    // Both calls to action are decorative; only the nav bar navigates.
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button class="bg-gradient-to-r from-red-600 to-red-800 text-white px-8 py-4 rounded-full font-semibold text-lg shadow-lg hover:shadow-xl transition-all duration-300">
                            "Explore Collection"
                        </button>
                        <button class="border-2 border-gold text-gold px-8 py-4 rounded-full font-semibold text-lg hover:bg-gold hover:text-black transition-all duration-300">
                            "Contact Us"
                        </button>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 text-gold bob">
                <Icon glyph=Glyph::Chevron size=32 class="rotate-90" />
            </div>
        </section>
    }
}
