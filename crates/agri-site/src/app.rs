//! Main application component

use crate::components::{Footer, Navigation};
use crate::pages::*;
use crate::state::{provide_site_state, use_theme};
use agri_core::SiteConfig;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::default();
    if let Err(e) = config.validate() {
        tracing::warn!("Invalid site configuration: {}", e);
    }
    provide_site_state(config);

    let theme = use_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/agri-site.css"/>
        <Title text="KropKraft Innovations | Agricultural Drone Solutions"/>
        <Meta
            name="description"
            content="Krishak 2I agricultural drones, spraying services, DGCA-approved pilot training and PAN-India support."
        />

        <Router>
            <div class=move || theme.theme.get().root_class()>
                <div class="min-h-screen bg-white dark:bg-gray-900 transition-colors duration-300">
                    <Navigation/>
                    <main>
                        <Routes>
                            <Route path="/" view=HomePage/>
                            <Route path="/about" view=AboutPage/>
                            <Route path="/about.html" view=AboutPage/>
                            <Route path="/contact" view=ContactPage/>
                            <Route path="/services" view=ServicesPage/>
                        </Routes>
                    </main>
                    <Footer/>
                </div>
            </div>
        </Router>
    }
}
