//! About page copy

use super::{Feature, Stat};

pub const STATS: &[Stat] = &[
    Stat { value: "20k+", label: "Pilot Hours" },
    Stat { value: "18", label: "States Covered" },
    Stat { value: "98%", label: "Avg. Uptime" },
];

pub const VALUES: &[Feature] = &[
    Feature {
        icon: "🛡️",
        title: "Reliability by Design",
        description: "Rugged build quality, tested across wet fields, uneven terrain, and long spray hours.",
    },
    Feature {
        icon: "🍃",
        title: "Precision for Crops",
        description: "Variable flow, uniform droplet sizes, and spot spraying to reduce chemical drift.",
    },
    Feature {
        icon: "👥",
        title: "Farmer-Centric Support",
        description: "PAN-India service, quick spares, AMC, and RPTO-aligned training for every operator.",
    },
];

/// Gallery tiles cycle through the banner images this many times
pub const GALLERY_REPEAT: usize = 2;
