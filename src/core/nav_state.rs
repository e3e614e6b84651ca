use super::constants::avatar_url;
use super::landing_state::UserType;
use super::site_config::DemoProfile;

/// Default scroll offset (px) after which the navigation bar turns opaque
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavMsg {
    ToggleMenu,
    LinkClicked,
    /// A login, sign up or logout button inside the mobile menu was used
    AuthActionCompleted,
    Scrolled(f64),
}

/// Local state of the navigation bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn update(&mut self, msg: NavMsg, threshold: f64) {
        match msg {
            NavMsg::ToggleMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                log::debug!("Mobile menu open: {}", self.mobile_menu_open);
            }
            NavMsg::LinkClicked | NavMsg::AuthActionCompleted => {
                self.mobile_menu_open = false;
            }
            NavMsg::Scrolled(offset) => {
                let scrolled = is_scrolled(offset, threshold);
                if scrolled != self.scrolled {
                    log::debug!("Navigation scrolled: {} (offset {})", scrolled, offset);
                    self.scrolled = scrolled;
                }
            }
        }
    }

    pub fn container_class(&self) -> &'static str {
        if self.scrolled {
            "bg-white/95 backdrop-blur-md shadow-sm py-3"
        } else {
            "bg-transparent py-4 md:py-5"
        }
    }
}

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Control cluster shown on the right side of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthControls {
    /// Login and Sign up buttons
    Guest,
    /// Avatar, name, role and a Logout button
    Member {
        display_name: String,
        short_name: String,
        avatar_url: String,
        role_label: &'static str,
    },
}

pub fn auth_controls(is_logged_in: bool, user_type: UserType, profile: &DemoProfile) -> AuthControls {
    if !is_logged_in {
        return AuthControls::Guest;
    }

    AuthControls::Member {
        display_name: profile.display_name.clone(),
        short_name: profile.short_name.clone(),
        avatar_url: avatar_url(&profile.avatar_seed),
        role_label: user_type.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        for start in [false, true] {
            let mut nav = NavState { mobile_menu_open: start, scrolled: false };
            nav.update(NavMsg::ToggleMenu, SCROLL_THRESHOLD);
            assert_eq!(nav.mobile_menu_open, !start);
            nav.update(NavMsg::ToggleMenu, SCROLL_THRESHOLD);
            assert_eq!(nav.mobile_menu_open, start);
        }
    }

    #[test]
    fn test_link_and_auth_close_menu() {
        for msg in [NavMsg::LinkClicked, NavMsg::AuthActionCompleted] {
            let mut nav = NavState::default();
            nav.update(NavMsg::ToggleMenu, SCROLL_THRESHOLD);
            nav.update(msg, SCROLL_THRESHOLD);
            assert!(!nav.mobile_menu_open);

            // closing an already closed menu keeps it closed
            nav.update(msg, SCROLL_THRESHOLD);
            assert!(!nav.mobile_menu_open);
        }
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        let mut nav = NavState::default();

        nav.update(NavMsg::Scrolled(20.0), SCROLL_THRESHOLD);
        assert!(!nav.scrolled);

        nav.update(NavMsg::Scrolled(20.5), SCROLL_THRESHOLD);
        assert!(nav.scrolled);
        assert_eq!(nav.container_class(), "bg-white/95 backdrop-blur-md shadow-sm py-3");

        nav.update(NavMsg::Scrolled(3.0), SCROLL_THRESHOLD);
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut nav = NavState::default();
        nav.update(NavMsg::ToggleMenu, SCROLL_THRESHOLD);
        nav.update(NavMsg::Scrolled(400.0), SCROLL_THRESHOLD);

        assert!(nav.mobile_menu_open);
    }

    #[test]
    fn test_auth_controls_round_trip() {
        let profile = DemoProfile::default();

        assert_eq!(auth_controls(false, UserType::Organizer, &profile), AuthControls::Guest);

        match auth_controls(true, UserType::Brand, &profile) {
            AuthControls::Member { display_name, short_name, avatar_url, role_label } => {
                assert_eq!(display_name, "Aditya S.");
                assert_eq!(short_name, "Aditya");
                assert_eq!(avatar_url, "https://api.dicebear.com/7.x/avataaars/svg?seed=Aditya");
                assert_eq!(role_label, "brand");
            }
            AuthControls::Guest => panic!("expected member controls after login"),
        }

        // logging out returns exactly the guest set
        assert_eq!(auth_controls(false, UserType::Brand, &profile), AuthControls::Guest);
    }
}
