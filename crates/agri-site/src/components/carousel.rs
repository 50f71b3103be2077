//! Banner carousel and the layered banner background

use crate::state::use_config;
use agri_core::Carousel;
use leptos::*;

/// Auto-advancing banner strip with dot indicators
#[component]
pub fn BannerCarousel() -> impl IntoView {
    let config = use_config();
    let period = config.carousel_period();
    let carousel = create_rw_signal(Carousel::new(config.banner_images.clone()));

    // Effects only run in the browser, so the timer never exists during SSR
    create_effect(move |_| {
        if !carousel.with_untracked(Carousel::needs_timer) {
            return;
        }
        match set_interval_with_handle(
            move || {
                carousel.update(|c| {
                    c.tick();
                })
            },
            period,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(?err, "carousel timer not scheduled"),
        }
    });

    let images = carousel.with_untracked(|c| c.images().to_vec());
    if images.is_empty() {
        return ().into_view();
    }

    let slides = images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <img
                    src=src.clone()
                    alt=format!("KropKraft banner {}", i + 1)
                    class="w-full flex-shrink-0 h-56 md:h-80 lg:h-[28rem] object-cover"
                />
            }
        })
        .collect_view();

    let dots = (0..images.len())
        .map(|i| {
            view! {
                <span class=move || {
                    if carousel.with(|c| c.index() == i) {
                        "h-2 w-8 rounded-full bg-white transition-all duration-300"
                    } else {
                        "h-2 w-2 rounded-full bg-white/50 transition-all duration-300"
                    }
                }></span>
            }
        })
        .collect_view();

    view! {
        <section class="relative overflow-hidden" aria-label="Banners">
            <div
                class="flex transition-transform duration-700 ease-in-out"
                style:transform=move || {
                    format!("translateX(-{}%)", carousel.with(Carousel::offset_percent))
                }
            >
                {slides}
            </div>
            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">
                {dots}
            </div>
        </section>
    }
    .into_view()
}

/// Three stacked, faded copies of the banners behind a section
#[component]
pub fn BackgroundBanners() -> impl IntoView {
    let config = use_config();
    let carousel = Carousel::new(config.banner_images);

    let layers = [
        "absolute inset-0 bg-cover bg-center opacity-20",
        "absolute inset-y-0 right-0 w-1/2 bg-cover bg-center opacity-10",
        "absolute inset-x-0 bottom-0 h-1/3 bg-cover bg-bottom opacity-10",
    ]
    .into_iter()
    .enumerate()
    .filter_map(|(i, class)| {
        carousel.layer(i).map(|src| {
            view! { <div class=class style=format!("background-image: url('{src}')")></div> }
        })
    })
    .collect_view();

    view! {
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            {layers}
        </div>
    }
}
