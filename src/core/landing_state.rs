use serde::{Deserialize, Serialize};

use super::content::{self, FeatureItem, TrendingItem};
use super::copy::{self, AudienceCopy};

/// Which persona the page is currently speaking to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Student or event organizer looking for sponsors
    #[default]
    Organizer,
    /// Company looking for events to sponsor
    Brand,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Organizer, UserType::Brand];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Organizer => "organizer",
            UserType::Brand => "brand",
        }
    }

    /// Label of the audience toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self {
            UserType::Organizer => "I'm an Organizer",
            UserType::Brand => "I'm a Brand",
        }
    }
}

/// Events the page sends up to the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingMsg {
    Login,
    Logout,
    SetUserType(UserType),
}

/// Root state of the landing page.
///
/// Every section derives what it shows from this value. The login flag is a
/// display mode only, nothing checks credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingState {
    pub user_type: UserType,
    pub is_logged_in: bool,
}

impl LandingState {
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            is_logged_in: false,
        }
    }

    pub fn update(&mut self, msg: LandingMsg) {
        match msg {
            LandingMsg::Login => self.login(),
            LandingMsg::Logout => self.logout(),
            LandingMsg::SetUserType(next) => self.set_user_type(next),
        }
    }

    pub fn login(&mut self) {
        self.is_logged_in = true;
        log::info!("Logged in as {}", self.user_type.as_str());
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
        log::info!("Logged out");
    }

    pub fn set_user_type(&mut self, next: UserType) {
        if self.user_type != next {
            log::info!("Audience switched: {} -> {}", self.user_type.as_str(), next.as_str());
        }
        self.user_type = next;
    }

    pub fn features(&self) -> &'static [FeatureItem] {
        content::features_for(self.user_type)
    }

    pub fn trending(&self) -> &'static [TrendingItem] {
        content::trending_for(self.user_type)
    }

    pub fn copy(&self) -> &'static AudienceCopy {
        copy::copy_for(self.user_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[TrendingItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = LandingState::default();

        assert_eq!(state.user_type, UserType::Organizer);
        assert!(!state.is_logged_in);
        assert_eq!(state.copy().hero_highlight, "Sponsored");
        assert_eq!(
            names(state.trending()),
            vec!["Cool Gaming", "Greenify", "BeatBox", "FinTech Pro"]
        );
    }

    #[test]
    fn test_login_logout_last_write_wins() {
        let sequences: [&[LandingMsg]; 5] = [
            &[LandingMsg::Login],
            &[LandingMsg::Logout],
            &[LandingMsg::Login, LandingMsg::Login],
            &[LandingMsg::Login, LandingMsg::Logout, LandingMsg::Logout],
            &[LandingMsg::Logout, LandingMsg::Login, LandingMsg::Logout, LandingMsg::Login],
        ];

        for sequence in sequences {
            let mut state = LandingState::default();
            for msg in sequence {
                state.update(*msg);
            }
            let expected = *sequence.last().unwrap() == LandingMsg::Login;
            assert_eq!(state.is_logged_in, expected, "sequence {:?}", sequence);
        }
    }

    #[test]
    fn test_switch_to_brand() {
        let mut state = LandingState::default();
        state.update(LandingMsg::SetUserType(UserType::Brand));

        assert_eq!(state.user_type, UserType::Brand);
        assert_eq!(state.copy().hero_highlight, "Engaged");
        assert_eq!(
            names(state.trending()),
            vec!["TechNova 2025", "Cultural Waves", "Hack Delhi", "E-Summit"]
        );
        let titles: Vec<_> = state.features().iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["High ROI", "Targeted Reach", "Brand Visibility"]);
    }

    #[test]
    fn test_audience_content_never_mixes() {
        let mut state = LandingState::default();
        assert_eq!(state.features(), &content::ORGANIZER_FEATURES[..]);
        assert_eq!(state.trending(), &content::TRENDING_SPONSORS[..]);
        assert_eq!(state.copy(), &copy::ORGANIZER_COPY);

        state.set_user_type(UserType::Brand);
        assert_eq!(state.features(), &content::BRAND_FEATURES[..]);
        assert_eq!(state.trending(), &content::TRENDING_EVENTS[..]);
        assert_eq!(state.copy(), &copy::BRAND_COPY);

        state.set_user_type(UserType::Organizer);
        assert_eq!(state.trending(), &content::TRENDING_SPONSORS[..]);
    }

    #[test]
    fn test_user_type_does_not_touch_login() {
        let mut state = LandingState::default();
        state.login();
        state.set_user_type(UserType::Brand);
        state.set_user_type(UserType::Organizer);

        assert!(state.is_logged_in);
    }

    #[test]
    fn test_user_type_serde() {
        assert_eq!(serde_json::to_string(&UserType::Brand).unwrap(), "\"brand\"");
        let parsed: UserType = serde_json::from_str("\"organizer\"").unwrap();
        assert_eq!(parsed, UserType::Organizer);
    }
}
