use super::landing_state::UserType;

/// Audience-specific text of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceCopy {
    // hero headline reads "<lead> <highlight> <middle> <underlined>"
    pub hero_lead: &'static str,
    pub hero_highlight: &'static str,
    pub hero_middle: &'static str,
    pub hero_underlined: &'static str,
    pub hero_subtitle: &'static str,
    pub search_placeholder: &'static str,
    /// Tint of the bolt icon in the search bar
    pub search_icon_class: &'static str,
    pub why_subtitle: &'static str,
    pub trending_title: &'static str,
    pub trending_subtitle: &'static str,
}

impl AudienceCopy {
    pub fn headline(&self) -> String {
        format!(
            "{} {} {} {}",
            self.hero_lead, self.hero_highlight, self.hero_middle, self.hero_underlined
        )
    }
}

pub static ORGANIZER_COPY: AudienceCopy = AudienceCopy {
    hero_lead: "Get",
    hero_highlight: "Sponsored",
    hero_middle: "by World-Class",
    hero_underlined: "Brands.",
    hero_subtitle: "Stop cold emailing. Match with 500+ verified brands for campus events, hackathons, and cultural fests using our AI-driven platform.",
    search_placeholder: "Ask AI: \"Tech sponsors...\"",
    search_icon_class: "text-yellow-500",
    why_subtitle: "We bridge the gap between student organizers and corporate brands with trust and technology.",
    trending_title: "Trending Sponsors",
    trending_subtitle: "Top brands actively looking for events this week.",
};

pub static BRAND_COPY: AudienceCopy = AudienceCopy {
    hero_lead: "Reach",
    hero_highlight: "Engaged",
    hero_middle: "Student",
    hero_underlined: "Communities.",
    hero_subtitle: "Discover high-impact campus events, hackathons, and student communities to amplify your brand presence with targeted sponsorships.",
    search_placeholder: "Ask AI: \"High footfall events...\"",
    search_icon_class: "text-blue-500",
    why_subtitle: "The smartest way to discover and sponsor the next big campus event.",
    trending_title: "Trending Events",
    trending_subtitle: "High-impact events trending in the student community.",
};

pub fn copy_for(user_type: UserType) -> &'static AudienceCopy {
    match user_type {
        UserType::Organizer => &ORGANIZER_COPY,
        UserType::Brand => &BRAND_COPY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headlines() {
        assert_eq!(
            copy_for(UserType::Organizer).headline(),
            "Get Sponsored by World-Class Brands."
        );
        assert_eq!(
            copy_for(UserType::Brand).headline(),
            "Reach Engaged Student Communities."
        );
    }

    #[test]
    fn test_trending_titles() {
        assert_eq!(copy_for(UserType::Organizer).trending_title, "Trending Sponsors");
        assert_eq!(copy_for(UserType::Brand).trending_title, "Trending Events");
    }
}
