//! Home page

use super::use_page_ready;
use crate::components::BannerCarousel;
use crate::sections::*;
use agri_core::Route;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    use_page_ready(Route::Home);

    view! {
        <div>
            <BannerCarousel/>
            <Hero/>
            <Applications/>
            <Benefits/>
            <Krishak2I/>
            <SafetyTechnology/>
            <WhyAgriDrones/>
            <Contact/>
        </div>
    }
}
