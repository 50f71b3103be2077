//! Services page, training and support copy

use super::{Feature, ServiceOffering, Stat, TrainingStep};

pub const OFFERINGS: &[ServiceOffering] = &[
    ServiceOffering {
        title: "BharatAero Spray",
        description: "This service delivers cutting-edge drone spraying solutions for farms across India, \
regardless of size, crop type, or terrain.\n\n\
BharatAero Spray specializes in rapid and precise agrochemical application using advanced drones, \
helping reduce labor costs, minimize crop loss, and maximize field efficiency.\n\n\
The pan-India network enables easy access in remote and urban areas.",
    },
    ServiceOffering {
        title: "Green Wings",
        description: "Eco-focused drone operations that cut input waste, protect soil health, \
and deliver sustainable outcomes tailored to Indian farm conditions.",
    },
    ServiceOffering {
        title: "Kisan360",
        description: "A 360° farm support layer that includes mission planning, fleet utilization, \
data capture, and timely advisory services to improve yields and overall operational efficiency.",
    },
    ServiceOffering {
        title: "Kisan Suraksha",
        description: "A comprehensive reliability and safety program covering preventive maintenance, \
operator readiness, regulatory compliance, and rapid-response support to minimize downtime and \
ensure uninterrupted operations.",
    },
];

pub const TRAINING_STEPS: &[TrainingStep] = &[
    TrainingStep {
        number: "01",
        icon: "🎓",
        title: "Comprehensive Pilot Training",
        description: "Expert-led training programs covering all aspects of drone operations, safety protocols, and maintenance procedures",
        features: &["Hands-on practice", "Theory & practical sessions", "Safety protocols"],
    },
    TrainingStep {
        number: "02",
        icon: "📋",
        title: "DGCA-Approved Curriculum",
        description: "Certified training program that meets all regulatory requirements set by the Directorate General of Civil Aviation",
        features: &["Official certification", "Regulatory compliance", "Industry standards"],
    },
    TrainingStep {
        number: "03",
        icon: "👥",
        title: "RPTO Tie-ups",
        description: "Partnerships with Remote Pilot Training Organizations for comprehensive skill development and certification",
        features: &["Authorized centers", "Professional instructors", "Quality assurance"],
    },
    TrainingStep {
        number: "04",
        icon: "🏆",
        title: "On-Field Demonstrations",
        description: "Practical field demonstrations to understand real-world applications and operational best practices",
        features: &["Live operations", "Real farm conditions", "Expert guidance"],
    },
];

pub const TRAINING_IMAGE: &str = "/drone-training.jpeg";

pub const SUPPORT_SERVICES: &[Feature] = &[
    Feature {
        icon: "📍",
        title: "PAN-India Service Team",
        description: "Extensive network of service centers and technicians across all states",
    },
    Feature {
        icon: "📞",
        title: "AMC & On-Call Support",
        description: "Annual Maintenance Contracts and 24/7 helpline for immediate assistance",
    },
    Feature {
        icon: "📦",
        title: "Spare Parts Availability",
        description: "Comprehensive inventory of genuine parts for quick replacements",
    },
    Feature {
        icon: "🔧",
        title: "Quick Repair & Maintenance",
        description: "Expert technicians ensure minimal downtime with fast turnaround",
    },
    Feature {
        icon: "⚡",
        title: "Free Demo & Consultation",
        description: "On-field demonstrations and expert guidance before purchase",
    },
    Feature {
        icon: "✅",
        title: "Training & Onboarding",
        description: "Complete operator training and ongoing technical support",
    },
];

pub const REGIONS: &[&str] = &[
    "North India",
    "South India",
    "East India",
    "West India",
    "Central India",
    "Northeast India",
];

pub const SUPPORT_STATS: &[Stat] = &[
    Stat { value: "24/7", label: "Support Available" },
    Stat { value: "500+", label: "Service Centers" },
    Stat { value: "<24h", label: "Response Time" },
    Stat { value: "98%", label: "Customer Satisfaction" },
];
