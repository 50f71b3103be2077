//! Home page sections

use super::{Comparison, Crop, Feature, ImpactArea, Stat};

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "4 Acres", label: "Per Battery" },
    Stat { value: "80%", label: "Cost Savings" },
    Stat { value: "30-40%", label: "Less Pesticide" },
];

pub const APPLICATIONS: &[Feature] = &[
    Feature {
        icon: "💧",
        title: "Pesticide Spraying",
        description: "Precise application with zero human contact with harmful chemicals",
    },
    Feature {
        icon: "🍃",
        title: "Fertiliser Spraying",
        description: "Liquid nutrients and micro-nutrients for optimal crop growth",
    },
    Feature {
        icon: "🌱",
        title: "Growth Boosters",
        description: "Targeted application of growth-promoting formulations",
    },
    Feature {
        icon: "🍎",
        title: "Micro-Nutrients",
        description: "Uniform distribution of essential trace elements",
    },
];

pub const CROPS: &[Crop] = &[
    Crop { name: "Maize", icon: "🌽" },
    Crop { name: "Paddy", icon: "🌾" },
    Crop { name: "Red Chilli", icon: "🌶️" },
    Crop { name: "Cotton", icon: "🌸" },
    Crop { name: "Turmeric", icon: "🟡" },
    Crop { name: "Sugarcane", icon: "🎋" },
    Crop { name: "Vegetables", icon: "🥬" },
];

pub const BENEFITS: &[Feature] = &[
    Feature {
        icon: "💰",
        title: "Saves up to 80% Labour Cost",
        description: "Dramatically reduce manual labour expenses with automated operations",
    },
    Feature {
        icon: "⚡",
        title: "Covers 4 Acres per Battery",
        description: "25-30 acres per day with multiple battery cycles for maximum productivity",
    },
    Feature {
        icon: "💦",
        title: "Reduces 30-40% Pesticide",
        description: "Precision spraying minimizes waste and environmental impact",
    },
    Feature {
        icon: "☁️",
        title: "Works in All Conditions",
        description: "Operates effectively in wet, muddy, and uneven field conditions",
    },
    Feature {
        icon: "⏱️",
        title: "Faster Operations",
        description: "Complete critical spraying during peak season without delays",
    },
    Feature {
        icon: "🛡️",
        title: "Farmer Safety First",
        description: "Eliminates direct chemical exposure, protecting farmer health",
    },
    Feature {
        icon: "📈",
        title: "Increases Yield",
        description: "Better crop protection leads to improved harvest quality and quantity",
    },
];

pub const COMPARISON: &[Comparison] = &[
    Comparison { aspect: "Coverage per day", drone: "25-30 acres", manual: "1-2 acres" },
    Comparison { aspect: "Labour required", drone: "1 operator", manual: "10-15 workers" },
    Comparison { aspect: "Cost per acre", drone: "₹200-300", manual: "₹800-1200" },
    Comparison { aspect: "Pesticide usage", drone: "30-40% less", manual: "Standard amount" },
    Comparison { aspect: "Time to complete 10 acres", drone: "4-5 hours", manual: "5-7 days" },
    Comparison { aspect: "Health risk to operators", drone: "Zero contact", manual: "Direct exposure" },
];

pub const KRISHAK_FEATURES: &[Feature] = &[
    Feature {
        icon: "💧",
        title: "10-Liter Capacity",
        description: "Advanced agriculture drone with industry-leading tank capacity for extended operations",
    },
    Feature {
        icon: "📍",
        title: "Fully Autonomous",
        description: "Autonomous flying and spraying with GPS precision for consistent coverage",
    },
    Feature {
        icon: "✅",
        title: "Indian Conditions",
        description: "Specifically designed for tough Indian farm conditions and diverse terrains",
    },
];

pub const KRISHAK_HIGHLIGHTS: &[Feature] = &[
    Feature {
        icon: "🔋",
        title: "Up to 4 Acres Per Battery",
        description: "Extended flight time for maximum productivity without frequent recharging",
    },
    Feature {
        icon: "📍",
        title: "Autonomous Spot Spraying",
        description: "Target affected zones precisely with intelligent mapping technology",
    },
    Feature {
        icon: "💧",
        title: "Variable Flow Rate",
        description: "Adjustable spraying for uniform application across different crop types",
    },
    Feature {
        icon: "📱",
        title: "Mobile Controller",
        description: "Easy-to-operate interface via smartphone for complete mission control",
    },
];

pub const KRISHAK_TAGS: &[&str] = &["10L Capacity", "Fully Autonomous", "GPS Enabled", "Made for India"];

pub const SAFETY_FEATURES: &[Feature] = &[
    Feature {
        icon: "🛡️",
        title: "Crash-Resilient Build",
        description: "Robust construction designed to withstand impacts and harsh field conditions",
    },
    Feature {
        icon: "📡",
        title: "Geofenced Operations",
        description: "Virtual boundaries ensure the drone operates only in designated safe zones",
    },
    Feature {
        icon: "🏠",
        title: "Return-to-Home (RTH)",
        description: "Automatic return function when battery is low or signal is lost",
    },
    Feature {
        icon: "👁️",
        title: "Obstacle Avoidance",
        description: "Advanced sensors detect and avoid obstacles in real-time during flight",
    },
    Feature {
        icon: "⚡",
        title: "Safe Near Power Lines",
        description: "Designed to fly safely near and under high-voltage transmission lines",
    },
    Feature {
        icon: "🔒",
        title: "Secure Operations",
        description: "Encrypted communication and fail-safe mechanisms for reliable performance",
    },
];

pub const SAFETY_BADGES: &[&str] = &[
    "DGCA Compliant",
    "Multi-Layer Safety",
    "Real-Time Monitoring",
    "Fail-Safe Systems",
];

pub const WHY_DRONES: &[Feature] = &[
    Feature {
        icon: "👥",
        title: "Labour Shortage Solution",
        description: "Address critical farm labour shortages with automated drone technology",
    },
    Feature {
        icon: "💰",
        title: "Reduce Costs",
        description: "Combat rising pesticide and fertilizer costs with precise application",
    },
    Feature {
        icon: "⏱️",
        title: "Faster Operations",
        description: "Complete spraying tasks in hours, not days, with autonomous flying",
    },
    Feature {
        icon: "🛡️",
        title: "Farmer Safety",
        description: "Eliminate health hazards from manual pesticide and chemical exposure",
    },
    Feature {
        icon: "📈",
        title: "Higher Accuracy",
        description: "Uniform spraying with variable flow rates for better crop coverage",
    },
    Feature {
        icon: "🏆",
        title: "Government Support",
        description: "Access subsidies and promotion programs for drone adoption",
    },
];

pub const IMPACT_AREAS: &[ImpactArea] = &[
    ImpactArea { label: "Time Saving", color: "bg-blue-500" },
    ImpactArea { label: "Money Saving", color: "bg-green-500" },
    ImpactArea { label: "Yield Improving", color: "bg-yellow-500" },
    ImpactArea { label: "Farmer Safety", color: "bg-red-500" },
];

pub const BY_THE_NUMBERS: &[Stat] = &[
    Stat { value: "25-30 Acres", label: "Coverage Per Day" },
    Stat { value: "Up to 80%", label: "Labour Cost Reduction" },
    Stat { value: "30-40%", label: "Pesticide Savings" },
];
