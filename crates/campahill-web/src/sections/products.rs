use campahill_core::{
    Product, SectionId,
    catalog::{PRODUCT_STAGGER_SECS, PRODUCTS, stagger_delay},
};
use leptos::prelude::*;

use crate::components::{SectionHeading, reveal_delay_style};

/// Collection grid. Always the full catalog, in catalog order.
#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id=SectionId::Products.as_str() class="py-24 bg-gradient-to-br from-red-950 via-black to-red-950">
            <div class="container mx-auto px-6">
                <SectionHeading
                    title="Sacred Collection"
                    lead="Discover our curated selection of traditional Nepali wedding accessories, \
                          each piece crafted to honor sacred traditions and create unforgettable moments."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PRODUCTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, product)| view! { <ProductCard product=product index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product, index: usize) -> impl IntoView {
    view! {
        <div
            class="group reveal lift"
            style=reveal_delay_style(stagger_delay(index, PRODUCT_STAGGER_SECS))
        >
            <div class="bg-black/30 backdrop-blur-sm rounded-3xl overflow-hidden border border-gold/20 hover:border-gold/40 transition-all duration-300">
                <div class="relative overflow-hidden">
                    <img
                        src=product.image_url
                        alt=product.name
                        class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-500"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                </div>

                <div class="p-6">
                    <h3 class="text-2xl font-bold text-gold mb-3">{product.name}</h3>
                    <p class="text-gold/70 mb-4">{product.description}</p>

                    <div class="space-y-2">
                        {product
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="flex items-center space-x-2">
                                        <div class="w-2 h-2 bg-gold rounded-full"></div>
                                        <span class="text-sm text-gold/80">{*feature}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    // No product pages yet
                    <button class="w-full mt-6 bg-gradient-to-r from-red-600 to-red-800 text-white py-3 rounded-xl font-semibold hover:shadow-lg transition-all duration-300">
                        "Learn More"
                    </button>
                </div>
            </div>
        </div>
    }
}
