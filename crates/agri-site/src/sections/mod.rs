//! Content sections composed by the pages

mod applications;
mod benefits;
mod contact;
mod hero;
mod krishak;
mod safety;
mod service_support;
mod training;
mod why_drones;

pub use applications::Applications;
pub use benefits::Benefits;
pub use contact::Contact;
pub use hero::Hero;
pub use krishak::Krishak2I;
pub use safety::SafetyTechnology;
pub use service_support::ServiceSupport;
pub use training::Training;
pub use why_drones::WhyAgriDrones;
