//! Footer copy

use super::{ContactChannel, SocialLink, COMPANY};
use chrono::{Datelike, Local};

pub const TAGLINE: &str = "Revolutionizing Indian agriculture with cutting-edge drone technology. \
Providing complete farm automation solutions optimized for Indian farming conditions.";

/// Labels are turned into anchor ids, see [`crate::routes::slugify`]
pub const QUICK_LINKS: &[&str] = &[
    "Home",
    "Why Agri Drones",
    "Krishak 2I Drone",
    "Benefits",
    "Training & Support",
    "Contact",
];

pub const SERVICES: &[&str] = &[
    "Drone Spraying",
    "Drone Sales",
    "Pilot Training",
    "DGCA Certification",
    "Farm Automation",
    "Service & Support",
];

pub const RESOURCES: &[&str] = &[
    "Download Brochure",
    "Product Specifications",
    "Training Schedule",
    "FAQs",
    "Blog",
    "Case Studies",
];

pub const SOCIAL: &[SocialLink] = &[
    SocialLink { icon: "f", label: "Facebook", link: "#" },
    SocialLink { icon: "𝕏", label: "Twitter", link: "#" },
    SocialLink { icon: "in", label: "LinkedIn", link: "#" },
    SocialLink { icon: "◎", label: "Instagram", link: "#" },
    SocialLink { icon: "▶", label: "YouTube", link: "#" },
];

pub const CONTACT: &[ContactChannel] = &[
    ContactChannel {
        icon: "📧",
        label: "Email",
        value: "info@kropkraft.com",
        link: Some("mailto:info@kropkraft.com"),
    },
    ContactChannel {
        icon: "📞",
        label: "Phone",
        value: "+91 95734 87561",
        link: Some("tel:+919573487561"),
    },
    ContactChannel {
        icon: "🌐",
        label: "Website",
        value: "www.kropkraft.com",
        link: Some("https://www.kropkraft.com"),
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        value: "PAN-India operations",
        link: None,
    },
];

pub const LEGAL: &[&str] = &["Privacy Policy", "Terms of Service", "Cookie Policy", "Sitemap"];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {COMPANY}. All rights reserved.")
}

/// Copyright line for the current local year
pub fn current_copyright_line() -> String {
    copyright_line(Local::now().year())
}
