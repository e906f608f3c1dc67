//! UI Components

use campahill_core::Glyph;
use leptos::prelude::*;

/// Inline SVG icon
#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let size = size.to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=glyph_markup(glyph)
        ></svg>
    }
}

/// Round gradient badge holding an icon
#[component]
pub fn IconBadge(glyph: Glyph) -> impl IntoView {
    view! {
        <div class="w-12 h-12 bg-gradient-to-r from-red-600 to-red-800 rounded-full flex items-center justify-center">
            <Icon glyph=glyph class="w-6 h-6 text-white" />
        </div>
    }
}

/// Centered section heading with its lead paragraph
#[component]
pub fn SectionHeading(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16 reveal">
            <h2 class="text-4xl md:text-6xl font-bold text-gold mb-6">{title}</h2>
            <p class="text-xl text-gold/80 max-w-3xl mx-auto leading-relaxed">{lead}</p>
        </div>
    }
}

/// CSS for a staggered entrance
pub fn reveal_delay_style(delay_secs: f32) -> String {
    format!("animation-delay: {delay_secs:.1}s")
}

/// SVG children for each glyph (Lucide outlines)
pub const fn glyph_markup(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Users => concat!(
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="9" cy="7" r="4"/>"#,
            r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
            r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        ),
        Glyph::Award => concat!(
            r#"<circle cx="12" cy="8" r="6"/>"#,
            r#"<path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
        ),
        Glyph::Star => {
            r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
        }
        Glyph::Phone => {
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
        }
        Glyph::Mail => concat!(
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
            r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        Glyph::MapPin => concat!(
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
            r#"<circle cx="12" cy="10" r="3"/>"#,
        ),
        Glyph::Menu => concat!(
            r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
            r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
            r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
        ),
        Glyph::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        Glyph::Chevron => r#"<path d="m9 18 6-6-6-6"/>"#,
    }
}
