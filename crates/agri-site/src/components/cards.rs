//! Card components shared by the sections

use agri_core::content::{ContactChannel, Feature, Stat, TrainingStep};
use leptos::*;

/// Pill label, heading and lead paragraph above a section
#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center max-w-3xl mx-auto mb-16">
            <div class="inline-block px-4 py-2 bg-green-100 dark:bg-green-900/30 rounded-full mb-4">
                <span class="text-green-700 dark:text-green-400">{badge}</span>
            </div>
            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">{title}</h2>
            {subtitle.map(|text| view! {
                <p class="text-xl text-gray-600 dark:text-gray-300">{text}</p>
            })}
        </div>
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-lg p-6 border border-gray-100 dark:border-gray-700 hover:shadow-xl transition-all duration-300">
            <div class="w-14 h-14 bg-green-100 dark:bg-green-900/30 rounded-lg flex items-center justify-center mb-4">
                <span class="text-2xl">{feature.icon}</span>
            </div>
            <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">{feature.title}</h3>
            <p class="text-gray-600 dark:text-gray-400">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn FeatureHighlight(feature: Feature) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="flex-shrink-0 w-12 h-12 bg-green-100 dark:bg-green-900/30 rounded-lg flex items-center justify-center">
                <span class="text-xl">{feature.icon}</span>
            </div>
            <div class="ml-4">
                <h3 class="font-semibold text-gray-900 dark:text-white">{feature.title}</h3>
                <p class="text-gray-600 dark:text-gray-400 text-sm mt-1">{feature.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(stat: Stat, #[prop(optional)] on_dark: bool) -> impl IntoView {
    let (value_class, label_class) = if on_dark {
        ("text-3xl md:text-4xl font-bold text-white", "text-green-100 mt-1")
    } else {
        ("text-3xl md:text-4xl font-bold text-green-700 dark:text-green-400", "text-gray-600 dark:text-gray-400 mt-1")
    };

    view! {
        <div class="text-center">
            <div class=value_class>{stat.value}</div>
            <div class=label_class>{stat.label}</div>
        </div>
    }
}

#[component]
pub fn StepCard(step: TrainingStep) -> impl IntoView {
    view! {
        <div class="relative bg-white dark:bg-gray-800 rounded-xl shadow-lg p-6 border border-gray-100 dark:border-gray-700">
            <div class="absolute -top-4 -right-4 w-12 h-12 bg-green-700 text-white rounded-full flex items-center justify-center text-lg font-bold">
                {step.number}
            </div>
            <div class="text-3xl mb-4">{step.icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">{step.title}</h3>
            <p class="text-gray-600 dark:text-gray-400 mb-4">{step.description}</p>
            <ul class="space-y-2 text-sm">
                {step.features.iter().map(|item| view! {
                    <li class="flex items-center text-gray-700 dark:text-gray-300">
                        <span class="text-green-600 mr-2">"✓"</span>
                        {*item}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn ContactChannelCard(channel: ContactChannel) -> impl IntoView {
    let value = match channel.link {
        Some(href) => view! {
            <a href=href class="text-gray-900 dark:text-white hover:text-green-700 dark:hover:text-green-400 transition-colors">
                {channel.value}
            </a>
        }
        .into_view(),
        None => view! { <div class="text-gray-900 dark:text-white">{channel.value}</div> }.into_view(),
    };

    view! {
        <div class="bg-gray-50 dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700 hover:shadow-lg transition-all duration-300">
            <div class="flex items-center space-x-4">
                <div class="bg-green-100 dark:bg-green-900/30 p-3 rounded-lg flex-shrink-0">
                    <span class="text-2xl">{channel.icon}</span>
                </div>
                <div class="flex-1">
                    <div class="text-sm text-gray-600 dark:text-gray-400 mb-1">{channel.label}</div>
                    {value}
                </div>
            </div>
        </div>
    }
}
