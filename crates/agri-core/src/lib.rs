//! KropKraft Site Core
//!
//! This crate holds everything on the agri-drone marketing site that has
//! decision logic: route and anchor resolution, the navigation panel state
//! machine, the banner carousel, contact-form validation and the static copy
//! the sections render. It has no browser dependency so it can be tested on
//! the host.

pub mod carousel;
pub mod content;
pub mod forms;
pub mod navigation;
pub mod routes;
pub mod theme;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use carousel::Carousel;
pub use forms::{FieldErrors, FormSchema, FormState, Submission};
pub use navigation::{NavEffect, NavEvent, NavPanel, PendingScroll, ScrollTarget};
pub use routes::{Anchor, Route};
pub use theme::Theme;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Validation failed for: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type SiteResult<T> = Result<T, SiteError>;

/// A downloadable brochure served as a direct link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brochure {
    pub label: String,
    pub path: String,
}

/// Site-wide settings shared by the shell and its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Carousel advance period (milliseconds)
    pub carousel_period_ms: u64,
    /// Viewport width at which mobile-only panels close (pixels)
    pub desktop_breakpoint_px: u32,
    /// Banner images, in display order
    pub banner_images: Vec<String>,
    pub logo: String,
    pub brochures: Vec<Brochure>,
}

impl SiteConfig {
    pub fn carousel_period(&self) -> Duration {
        Duration::from_millis(self.carousel_period_ms)
    }

    pub fn desktop_breakpoint(&self) -> f64 {
        f64::from(self.desktop_breakpoint_px)
    }

    /// Reject settings the UI cannot work with
    pub fn validate(&self) -> SiteResult<()> {
        if self.carousel_period_ms == 0 {
            return Err(SiteError::Config(
                "carousel_period_ms must be greater than zero".to_string(),
            ));
        }
        if self.desktop_breakpoint_px == 0 {
            return Err(SiteError::Config(
                "desktop_breakpoint_px must be greater than zero".to_string(),
            ));
        }
        if let Some(brochure) = self.brochures.iter().find(|b| !b.path.starts_with('/')) {
            return Err(SiteError::Config(format!(
                "brochure path must be absolute: {}",
                brochure.path
            )));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel_period_ms: 3000,
            desktop_breakpoint_px: 1024,
            banner_images: vec![
                "/banners/banner-hero.png".to_string(),
                "/banners/banner-logo-strip.png".to_string(),
                "/banners/banner-mountains.png".to_string(),
            ],
            logo: "/logo.png".to_string(),
            brochures: vec![
                Brochure {
                    label: "English Brochure (PDF)".to_string(),
                    path: "/brochures/kropkraft-brochure-en.pdf".to_string(),
                },
                Brochure {
                    label: "Hindi Brochure (PDF)".to_string(),
                    path: "/brochures/kropkraft-brochure-hi.pdf".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.carousel_period(), Duration::from_secs(3));
        assert_eq!(config.desktop_breakpoint(), 1024.0);
        assert_eq!(config.banner_images.len(), 3);
        assert_eq!(config.brochures.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "carousel_period_ms": 5000 }"#).unwrap();
        assert_eq!(config.carousel_period_ms, 5000);
        assert_eq!(config.desktop_breakpoint_px, 1024);
        assert_eq!(config.logo, "/logo.png");
    }

    #[test]
    fn test_config_rejects_zero_period() {
        let config = SiteConfig {
            carousel_period_ms: 0,
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_config_rejects_relative_brochure() {
        let mut config = SiteConfig::default();
        config.brochures[0].path = "brochures/en.pdf".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_error_message() {
        let err = SiteError::Validation(vec!["name".to_string(), "email".to_string()]);
        assert_eq!(err.to_string(), "Validation failed for: name, email");
    }
}
