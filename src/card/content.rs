//! Card view model
//!
//! Pure mapping from view state to what the card shows. The TUI widgets
//! and the plain-text printer both render from [`CardContent`], so the
//! strings checked in tests are the strings users see.

use super::CardState;
use crate::profile::UserProfile;

/// Caption under the info grid
pub const DEFAULT_CAPTION: &str = "Life is an adventure waiting to be explored.";

/// Default birth date format (month/day/year, no zero padding)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Presentation settings that come from config
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions<'a> {
    pub date_format: &'a str,
    pub caption: &'a str,
}

impl Default for DisplayOptions<'_> {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT,
            caption: DEFAULT_CAPTION,
        }
    }
}

/// Icon in front of an info row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoIcon {
    Phone,
    Mail,
    MapPin,
    Calendar,
}

impl InfoIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            InfoIcon::Phone => "☎",
            InfoIcon::Mail => "✉",
            InfoIcon::MapPin => "⌖",
            InfoIcon::Calendar => "▦",
        }
    }

    /// Label for plain-text output
    pub fn label(&self) -> &'static str {
        match self {
            InfoIcon::Phone => "Phone",
            InfoIcon::Mail => "Email",
            InfoIcon::MapPin => "Location",
            InfoIcon::Calendar => "Born",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub icon: InfoIcon,
    pub text: String,
}

/// Decorative social buttons (no behavior attached)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Facebook,
    Twitter,
    Instagram,
}

impl SocialIcon {
    pub const ALL: [SocialIcon; 3] = [
        SocialIcon::Facebook,
        SocialIcon::Twitter,
        SocialIcon::Instagram,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SocialIcon::Facebook => "facebook",
            SocialIcon::Twitter => "twitter",
            SocialIcon::Instagram => "instagram",
        }
    }

    /// Short mark drawn inside the button
    pub fn mark(&self) -> &'static str {
        match self {
            SocialIcon::Facebook => "f",
            SocialIcon::Twitter => "t",
            SocialIcon::Instagram => "ig",
        }
    }
}

/// Everything the loaded layout displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub initials: String,
    /// Gender with the first letter capitalized
    pub badge: String,
    pub picture: String,
    pub info: [InfoRow; 4],
    pub caption: String,
    pub socials: [SocialIcon; 3],
}

impl ProfileView {
    pub fn new(profile: &UserProfile, options: &DisplayOptions) -> Self {
        Self {
            name: profile.full_name(),
            initials: initials(profile),
            badge: capitalize(profile.gender.as_str()),
            picture: profile.picture_or_placeholder().to_string(),
            info: [
                InfoRow {
                    icon: InfoIcon::Phone,
                    text: profile.phone.clone(),
                },
                InfoRow {
                    icon: InfoIcon::Mail,
                    text: profile.email.clone(),
                },
                InfoRow {
                    icon: InfoIcon::MapPin,
                    text: profile.location(),
                },
                InfoRow {
                    icon: InfoIcon::Calendar,
                    text: profile.formatted_birth_date(options.date_format),
                },
            ],
            caption: options.caption.to_string(),
            socials: SocialIcon::ALL,
        }
    }
}

/// One of the three layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    /// Centered message, nothing else
    Error(String),
    /// Placeholder shapes while loading
    Skeleton,
    Profile(Box<ProfileView>),
}

impl CardContent {
    /// Map view state to content. Error wins over everything else.
    ///
    /// An idle card renders as loading: its state is created in Loading
    /// the moment it activates.
    pub fn from_state(state: Option<&CardState>, options: &DisplayOptions) -> Self {
        match state {
            Some(CardState::Failed(message)) => CardContent::Error(message.clone()),
            Some(CardState::Loaded(profile)) => {
                CardContent::Profile(Box::new(ProfileView::new(profile, options)))
            }
            Some(CardState::Loading) | None => CardContent::Skeleton,
        }
    }

    /// Plain-text rendering for headless output
    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            CardContent::Error(message) => vec![message.clone()],
            CardContent::Skeleton => vec!["Loading…".to_string()],
            CardContent::Profile(view) => {
                let mut lines = vec![
                    view.name.clone(),
                    format!("[{}]", view.badge),
                    String::new(),
                ];
                for row in &view.info {
                    lines.push(format!("{:<9} {}", format!("{}:", row.icon.label()), row.text));
                }
                lines.push(format!("{:<9} {}", "Picture:", view.picture));
                lines.push(String::new());
                lines.push(format!("\"{}\"", view.caption));
                lines
            }
        }
    }
}

fn initials(profile: &UserProfile) -> String {
    [&profile.first_name, &profile.last_name]
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::sample_profile;

    fn loaded() -> CardState {
        CardState::Loaded(sample_profile())
    }

    #[test]
    fn test_loaded_content_fields() {
        let content = CardContent::from_state(Some(&loaded()), &DisplayOptions::default());
        let CardContent::Profile(view) = content else {
            panic!("expected profile content");
        };

        assert_eq!(view.name, "Amelia Moreau");
        assert_eq!(view.initials, "AM");
        assert_eq!(view.badge, "Female");
        assert_eq!(view.info[0].text, "04-61-20-77-35");
        assert_eq!(view.info[1].text, "amelia.moreau@example.com");
        assert_eq!(view.info[2].text, "Montpellier, France");
        assert_eq!(view.info[3].text, "3/7/1988");
        assert_eq!(view.caption, DEFAULT_CAPTION);
        assert_eq!(view.socials.map(|s| s.name()), ["facebook", "twitter", "instagram"]);
    }

    #[test]
    fn test_date_format_is_configurable() {
        let options = DisplayOptions {
            date_format: "%d.%m.%Y",
            ..Default::default()
        };
        let CardContent::Profile(view) = CardContent::from_state(Some(&loaded()), &options) else {
            panic!("expected profile content");
        };
        assert_eq!(view.info[3].text, "07.03.1988");
    }

    #[test]
    fn test_loading_and_idle_render_skeleton() {
        let options = DisplayOptions::default();
        assert_eq!(
            CardContent::from_state(Some(&CardState::Loading), &options),
            CardContent::Skeleton
        );
        assert_eq!(CardContent::from_state(None, &options), CardContent::Skeleton);
    }

    #[test]
    fn test_error_renders_message_only() {
        let state = CardState::Failed("Failed to fetch user data".to_string());
        let content = CardContent::from_state(Some(&state), &DisplayOptions::default());
        assert_eq!(content.plain_lines(), vec!["Failed to fetch user data"]);
    }

    #[test]
    fn test_plain_lines_for_profile() {
        let content = CardContent::from_state(Some(&loaded()), &DisplayOptions::default());
        let lines = content.plain_lines();
        assert_eq!(lines[0], "Amelia Moreau");
        assert_eq!(lines[1], "[Female]");
        assert!(lines.contains(&"Location: Montpellier, France".to_string()));
        assert!(lines.contains(&"Born:     3/7/1988".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "\"Life is an adventure waiting to be explored.\""
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("male"), "Male");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_unrenderable_date_format_does_not_panic() {
        let options = DisplayOptions {
            date_format: "%Q",
            ..DisplayOptions::default()
        };
        let CardContent::Profile(view) = CardContent::from_state(Some(&loaded()), &options) else {
            panic!("expected profile content");
        };
        assert_eq!(view.info[3].text, "1988-03-07");
    }
}
