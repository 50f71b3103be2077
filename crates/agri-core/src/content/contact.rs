//! Contact section and contact page copy

use super::{ContactChannel, DetailBlock};

pub const CHANNELS: &[ContactChannel] = &[
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
        value: "www.kropkraftinnovations.com",
        link: Some("https://www.kropkraftinnovations.com"),
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        value: "PAN-India operations",
        link: None,
    },
];

/// Options of the crop type select; the empty placeholder is rendered separately
pub const CROP_OPTIONS: &[&str] = &[
    "Maize",
    "Paddy",
    "Red Chilli",
    "Cotton",
    "Turmeric",
    "Sugarcane",
    "Vegetables",
    "Other",
];

pub const PAGE_DETAILS: &[DetailBlock] = &[
    DetailBlock {
        title: "Venue",
        lines: &[
            "Maruthi Heavens, Shaili Gardens,",
            "Sainikpuri, Secunderabad,",
            "Hyderabad, Telangana – 500094",
        ],
    },
    DetailBlock {
        title: "Email Address",
        lines: &["info@kropkraft.com", "contact@kropkraft.com"],
    },
    DetailBlock {
        title: "Phone Number",
        lines: &["(+91) 91338 78251"],
    },
];

pub const SERVICE_CATEGORIES: &[&str] = &[
    "Drone Sales",
    "Drone Services",
    "Training & Certification",
    "Maintenance & Support",
    "Government / Institutional Inquiry",
    "Other",
];

pub const MAP_EMBED: &str = "https://share.google/5KxKoeagvzabBaW1G";

pub const FARMER_IMAGE: &str = "https://images.unsplash.com/photo-1623211269755-569fec0536d2?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

pub const DEMO_CONFIRMATION: &str = "Thank you for your inquiry! We will contact you soon.";

pub const INQUIRY_CONFIRMATION: &str = "Thank you! Your request has been received and our team will reach out shortly.";
