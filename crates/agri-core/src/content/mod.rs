//! Static copy rendered by the site sections

pub mod about;
pub mod contact;
pub mod footer;
pub mod home;
pub mod services;

pub const COMPANY: &str = "KropKraft Innovations";
pub const PRODUCT: &str = "Krishak 2I (10L)";

/// Icon + title + description card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Row of the drone vs manual spraying table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub aspect: &'static str,
    pub drone: &'static str,
    pub manual: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingStep {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// A way to reach the company; `link` is `None` for plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
}

/// Titled block of text lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailBlock {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// Labelled dot in the "Key Impact Areas" card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactArea {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub link: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Anchor;

    #[test]
    fn test_footer_quick_links_resolve() {
        for label in footer::QUICK_LINKS {
            assert!(Anchor::from_label(label).is_some(), "{label}");
        }
    }

    #[test]
    fn test_training_steps_numbered() {
        let numbers: Vec<_> = services::TRAINING_STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
        assert!(services::TRAINING_STEPS.iter().all(|s| s.features.len() == 3));
    }

    #[test]
    fn test_contact_channels() {
        let location = contact::CHANNELS
            .iter()
            .find(|c| c.label == "Location")
            .unwrap();
        assert_eq!(location.link, None);
        assert!(contact::CHANNELS
            .iter()
            .filter(|c| c.label == "Email")
            .all(|c| c.link == Some("mailto:info@kropkraft.com")));
    }

    #[test]
    fn test_crop_options_end_with_other() {
        assert_eq!(contact::CROP_OPTIONS.last(), Some(&"Other"));
        for crop in home::CROPS {
            assert!(contact::CROP_OPTIONS.contains(&crop.name), "{}", crop.name);
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            footer::copyright_line(2025),
            "© 2025 KropKraft Innovations. All rights reserved."
        );
    }
}
