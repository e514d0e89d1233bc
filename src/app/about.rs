use leptos::prelude::*;

use super::components::{SectionHeading, StatGrid};
use crate::{
    content::{about_stats, HIGHLIGHTS, JOURNEY, LANGUAGES},
    scroll_spy::Section,
    theme::Theme,
};

#[component]
pub fn About(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <section
            id=Section::About.id()
            class=move || format!("py-20 {}", theme.get().section_bg(false))
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    lead="About "
                    accent="Me"
                    blurb="Passionate about creating innovative solutions and constantly learning new technologies"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center mb-16">
                    <div class="space-y-6">
                        <h3 class=move || {
                            format!("text-2xl font-semibold mb-4 {}", theme.get().heading())
                        }>"My Journey"</h3>
                        {JOURNEY
                            .iter()
                            .map(|para| {
                                view! {
                                    <p class=move || {
                                        format!("text-lg leading-relaxed {}", theme.get().body())
                                    }>{*para}</p>
                                }
                            })
                            .collect_view()}
                        <div class="pt-4">
                            <h4 class=move || {
                                format!("text-lg font-semibold mb-3 {}", theme.get().heading())
                            }>
                                <i class="extra-languages mr-2" />
                                "Languages"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {LANGUAGES
                                    .iter()
                                    .map(|lang| {
                                        view! {
                                            <span class=move || {
                                                format!(
                                                    "px-4 py-2 rounded-full text-sm font-medium {}",
                                                    if theme.get().is_dark() {
                                                        "bg-gray-700 text-gray-300"
                                                    } else {
                                                        "bg-blue-100 text-blue-800"
                                                    },
                                                )
                                            }>{*lang}</span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                        {HIGHLIGHTS
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class=move || {
                                        format!(
                                            "p-6 rounded-lg transition-all duration-300 hover:scale-105 {}",
                                            theme.get().card(),
                                        )
                                    }>
                                        <div class="w-12 h-12 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg flex items-center justify-center mb-4">
                                            <i class=format!("{} text-white text-xl", h.icon) />
                                        </div>
                                        <h4 class=move || {
                                            format!("text-lg font-semibold mb-2 {}", theme.get().heading())
                                        }>{h.title}</h4>
                                        <p class=move || {
                                            format!("text-sm {}", theme.get().body())
                                        }>{h.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <StatGrid theme stats=about_stats() />
            </div>
        </section>
    }
}
