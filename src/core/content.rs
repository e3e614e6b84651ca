//! Static content tables shown on the landing page.

use super::landing_state::UserType;

/// Maximum number of brand icons in the footer strip
pub const FOOTER_BRAND_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandLogo {
    pub name: &'static str,
    /// Font Awesome class list
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingItem {
    pub name: &'static str,
    pub category: &'static str,
    /// Font Awesome class list
    pub logo: &'static str,
    /// Tailwind gradient stops, e.g. `from-blue-600 to-indigo-900`
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessStory {
    pub title: &'static str,
    pub summary: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
    /// Classes of the "Case Study" badge
    pub badge_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static BRAND_LOGOS: [BrandLogo; 5] = [
    BrandLogo { name: "Apple", icon: "fa-brands fa-apple" },
    BrandLogo { name: "Spotify", icon: "fa-brands fa-spotify" },
    BrandLogo { name: "Google", icon: "fa-brands fa-google" },
    BrandLogo { name: "Amazon", icon: "fa-brands fa-amazon" },
    BrandLogo { name: "Microsoft", icon: "fa-brands fa-microsoft" },
];

pub static TRENDING_SPONSORS: [TrendingItem; 4] = [
    TrendingItem {
        name: "Cool Gaming",
        category: "Gaming",
        logo: "fa-solid fa-gamepad",
        gradient: "from-blue-600 to-indigo-900",
    },
    TrendingItem {
        name: "Greenify",
        category: "Eco-Tech",
        logo: "fa-solid fa-leaf",
        gradient: "from-emerald-400 to-teal-800",
    },
    TrendingItem {
        name: "BeatBox",
        category: "Music",
        logo: "fa-solid fa-music",
        gradient: "from-fuchsia-500 to-purple-900",
    },
    TrendingItem {
        name: "FinTech Pro",
        category: "Finance",
        logo: "fa-solid fa-credit-card",
        gradient: "from-slate-700 to-black",
    },
];

pub static TRENDING_EVENTS: [TrendingItem; 4] = [
    TrendingItem {
        name: "TechNova 2025",
        category: "Tech Fest",
        logo: "fa-solid fa-microchip",
        gradient: "from-blue-600 to-cyan-400",
    },
    TrendingItem {
        name: "Cultural Waves",
        category: "Arts & Culture",
        logo: "fa-solid fa-masks-theater",
        gradient: "from-pink-500 to-rose-500",
    },
    TrendingItem {
        name: "Hack Delhi",
        category: "Hackathon",
        logo: "fa-solid fa-code",
        gradient: "from-purple-600 to-indigo-600",
    },
    TrendingItem {
        name: "E-Summit",
        category: "Business",
        logo: "fa-solid fa-briefcase",
        gradient: "from-amber-500 to-orange-600",
    },
];

pub static ORGANIZER_FEATURES: [FeatureItem; 3] = [
    FeatureItem {
        icon: "fa-solid fa-bolt",
        title: "AI Matching",
        description: "Our proprietary algorithm matches your event with brands that align with your demographics and expected footfall.",
    },
    FeatureItem {
        icon: "fa-solid fa-shield-halved",
        title: "Secure Payments",
        description: "No more chasing checks. Payments are held in escrow and released upon milestone completion.",
    },
    FeatureItem {
        icon: "fa-regular fa-circle-check",
        title: "Verified Brands",
        description: "Every brand on our platform is vetted to ensuring legitimate sponsorship opportunities for your events.",
    },
];

pub static BRAND_FEATURES: [FeatureItem; 3] = [
    FeatureItem {
        icon: "fa-solid fa-arrow-trend-up",
        title: "High ROI",
        description: "Connect directly with Gen Z. Maximize your marketing budget by sponsoring high-impact student events with proven engagement.",
    },
    FeatureItem {
        icon: "fa-solid fa-bullseye",
        title: "Targeted Reach",
        description: "Filter events by demographics, location, and interest groups to ensure your brand reaches exactly the right audience.",
    },
    FeatureItem {
        icon: "fa-solid fa-bullhorn",
        title: "Brand Visibility",
        description: "Boost brand recall through physical stalls, digital mentions, and speaking slots at premier college festivals.",
    },
];

pub static SUCCESS_STORIES: [SuccessStory; 2] = [
    SuccessStory {
        title: "HackMIT 2025",
        summary: "Secured $50k in sponsorship through SponsorKiya in just 2 weeks.",
        image_url: "https://images.unsplash.com/photo-1540575467063-17e6fc8c62d8?ixlib=rb-1.2.1&auto=format&fit=crop&w=1000&q=80",
        image_alt: "Hackathon",
        badge_class: "bg-electric text-black",
    },
    SuccessStory {
        title: "Global Tech Summit",
        summary: "Connected with 15+ Enterprise partners for their annual summit.",
        image_url: "https://images.unsplash.com/photo-1515187029135-18ee286d815b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1000&q=80",
        image_alt: "Conference",
        badge_class: "bg-blue-500 text-white",
    },
];

pub static FOOTER_QUICK_LINKS: [&str; 4] = ["Organizers", "Brands", "Success Stories", "About Us"];

pub static FOOTER_SOCIAL_LINKS: [&str; 3] = ["Instagram", "Twitter", "LinkedIn"];

pub fn trending_for(user_type: UserType) -> &'static [TrendingItem] {
    match user_type {
        UserType::Organizer => &TRENDING_SPONSORS,
        UserType::Brand => &TRENDING_EVENTS,
    }
}

pub fn features_for(user_type: UserType) -> &'static [FeatureItem] {
    match user_type {
        UserType::Organizer => &ORGANIZER_FEATURES,
        UserType::Brand => &BRAND_FEATURES,
    }
}

pub fn nav_links(user_type: UserType) -> [NavLink; 4] {
    let (first, second) = match user_type {
        UserType::Organizer => ("Organizers", "Find Brands"),
        UserType::Brand => ("Find Events", "Brands"),
    };

    [
        NavLink { name: first, href: "#" },
        NavLink { name: second, href: "#" },
        NavLink { name: "Success Stories", href: "#" },
        NavLink { name: "About", href: "#" },
    ]
}

/// Brands shown in the footer strip: the first [`FOOTER_BRAND_LIMIT`] entries
pub fn footer_brands(logos: &[BrandLogo]) -> &[BrandLogo] {
    &logos[..logos.len().min(FOOTER_BRAND_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_brands_truncates() {
        let shown = footer_brands(&BRAND_LOGOS);
        assert_eq!(shown.len(), 4);
        assert_eq!(shown[0].name, "Apple");
        assert_eq!(shown[3].name, "Amazon");
    }

    #[test]
    fn test_footer_brands_short_lists() {
        for len in 0..FOOTER_BRAND_LIMIT {
            assert_eq!(footer_brands(&BRAND_LOGOS[..len]).len(), len);
        }
        assert_eq!(footer_brands(&BRAND_LOGOS[..4]).len(), 4);
    }

    #[test]
    fn test_nav_links_follow_audience() {
        let organizer: Vec<_> = nav_links(UserType::Organizer).iter().map(|l| l.name).collect();
        let brand: Vec<_> = nav_links(UserType::Brand).iter().map(|l| l.name).collect();

        assert_eq!(organizer, vec!["Organizers", "Find Brands", "Success Stories", "About"]);
        assert_eq!(brand, vec!["Find Events", "Brands", "Success Stories", "About"]);
    }

    #[test]
    fn test_tables_are_disjoint() {
        for sponsor in TRENDING_SPONSORS.iter() {
            assert!(!TRENDING_EVENTS.iter().any(|event| event.name == sponsor.name));
        }
        for feature in ORGANIZER_FEATURES.iter() {
            assert!(!BRAND_FEATURES.iter().any(|other| other.title == feature.title));
        }
    }
}
