//! Static Page Content
//!
//! Navigation entries, heritage statistics, the product catalog and contact
//! details. All of it is fixed at compile time.

use crate::section::SectionId;

/// Symbolic icon reference, resolved to an SVG by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Users,
    Award,
    Star,
    Phone,
    Mail,
    MapPin,
    Menu,
    Close,
    Chevron,
}

/// A navigation bar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
}

/// A headline statistic in the about section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Display figure (e.g. "500+")
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Glyph,
}

/// A product line shown in the collection grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,

    /// Absolute remote image URL
    pub image_url: &'static str,

    /// Selling points, in display order
    pub features: &'static [&'static str],
}

/// A line in the "Get in Touch" card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Glyph,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: SectionId::Home,
        label: "Home",
    },
    NavItem {
        id: SectionId::About,
        label: "About",
    },
    NavItem {
        id: SectionId::Products,
        label: "Products",
    },
    NavItem {
        id: SectionId::Contact,
        label: "Contact",
    },
];

pub const STATS: [Stat; 3] = [
    Stat {
        number: "500+",
        label: "Weddings Served",
        icon: Glyph::Users,
    },
    Stat {
        number: "15+",
        label: "Years Experience",
        icon: Glyph::Award,
    },
    Stat {
        number: "98%",
        label: "Happy Clients",
        icon: Glyph::Star,
    },
];

pub const PRODUCTS: [Product; 6] = [
    Product {
        name: "Traditional Thali Sets",
        description: "Authentic brass and silver thali sets for sacred ceremonies",
        image_url: "https://images.pexels.com/photos/5994302/pexels-photo-5994302.jpeg",
        features: &["Handcrafted", "Multiple Sizes", "Premium Quality"],
    },
    Product {
        name: "Ceremonial Umbrellas",
        description: "Decorative umbrellas for wedding processions and celebrations",
        image_url: "https://images.unsplash.com/photo-1612170482263-b7e393c4e87f",
        features: &["Vibrant Colors", "Traditional Designs", "Durable Materials"],
    },
    Product {
        name: "Floral Arrangements",
        description: "Fresh and artificial flower sets for traditional decorations",
        image_url: "https://images.pexels.com/photos/5713647/pexels-photo-5713647.jpeg",
        features: &["Seasonal Varieties", "Custom Arrangements", "Long-lasting"],
    },
    Product {
        name: "Bridal Accessories",
        description: "Complete sets of traditional jewelry and ornaments",
        image_url: "https://images.pexels.com/photos/19168699/pexels-photo-19168699.jpeg",
        features: &["Gold Plated", "Authentic Designs", "Comfortable Fit"],
    },
    Product {
        name: "Decorative Items",
        description: "Ceremonial decorations and traditional ornaments",
        image_url: "https://images.unsplash.com/photo-1514830902516-48e20ae0ced9",
        features: &["Handmade", "Cultural Significance", "Premium Finish"],
    },
    Product {
        name: "Ritual Essentials",
        description: "Complete sets for traditional Nepali wedding rituals",
        image_url: "https://images.unsplash.com/photo-1610030468706-9a6dbad49b0a",
        features: &["Authentic Items", "Blessed Materials", "Complete Sets"],
    },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Phone",
        value: "+977 1234567890",
        icon: Glyph::Phone,
    },
    ContactDetail {
        label: "Email",
        value: "info@campahillweddings.com",
        icon: Glyph::Mail,
    },
    ContactDetail {
        label: "Location",
        value: "Kathmandu,
        Nepal",
        icon: Glyph::MapPin,
    },
];

/// Hero background image
pub const HERO_IMAGE_URL: &str =
    "https://images.pexels.com/photos/19168723/pexels-photo-19168723.jpeg";

/// Image beside the heritage story cards
pub const ABOUT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1658251367683-40189a394b40";

/// Reveal delay step between stat cards, in seconds
pub const STAT_STAGGER_SECS: f32 = 0.2;

/// Reveal delay step between product cards, in seconds
pub const PRODUCT_STAGGER_SECS: f32 = 0.1;

/// Entrance delay for the `index`-th card of a staggered grid.
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay(index: usize, step_secs: f32) -> f32 {
    index as f32 * step_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_cover_every_section_in_order() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());

        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Home", "About", "Products", "Contact"]);
    }

    #[test]
    fn test_product_catalog_order() {
        let names: Vec<_> = PRODUCTS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Traditional Thali Sets",
                "Ceremonial Umbrellas",
                "Floral Arrangements",
                "Bridal Accessories",
                "Decorative Items",
                "Ritual Essentials",
            ]
        );
    }

    #[test]
    fn test_every_product_has_three_features() {
        for product in &PRODUCTS {
            assert_eq!(product.features.len(), 3, "{}", product.name);
            assert!(product.features.iter().all(|f| !f.is_empty()));
        }
        assert_eq!(
            PRODUCTS[2].features,
            ["Seasonal Varieties", "Custom Arrangements", "Long-lasting"]
        );
    }

    #[test]
    fn test_images_are_absolute_urls() {
        let urls = PRODUCTS
            .iter()
            .map(|p| p.image_url)
            .chain([HERO_IMAGE_URL, ABOUT_IMAGE_URL]);
        for url in urls {
            assert!(url.starts_with("https://"), "{url}");
        }
    }

    #[test]
    fn test_stats() {
        assert_eq!(STATS.len(), 3);
        assert_eq!(STATS[0].number, "500+");
        assert_eq!(STATS[1].icon, Glyph::Award);
        assert_eq!(STATS[2].label, "Happy Clients");
    }

    #[test]
    fn test_stagger_delay() {
        assert!(stagger_delay(0, STAT_STAGGER_SECS).abs() < f32::EPSILON);
        assert!((stagger_delay(2, STAT_STAGGER_SECS) - 0.4).abs() < 1e-6);
        assert!((stagger_delay(5, PRODUCT_STAGGER_SECS) - 0.5).abs() < 1e-6);
    }
}
