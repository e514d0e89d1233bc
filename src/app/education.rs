use leptos::prelude::*;

use super::components::SectionHeading;
use crate::{content::EDUCATION, scroll_spy::Section, theme::Theme};

#[component]
pub fn Education(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <section
            id=Section::Education.id()
            class=move || format!("py-20 {}", theme.get().section_bg(true))
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    lead="My "
                    accent="Education"
                    blurb="Academic background and learning milestones"
                />
                <div class="space-y-8">
                    {EDUCATION
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class=move || {
                                    format!("p-8 rounded-lg transition-all duration-300 {}", theme.get().card())
                                }>
                                    <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                                        <div class="flex items-start">
                                            <div class="w-12 h-12 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg flex items-center justify-center mr-4 flex-shrink-0">
                                                <i class="extra-graduation-cap text-white text-xl" />
                                            </div>
                                            <div>
                                                <h3 class=move || {
                                                    format!("text-xl font-semibold mb-1 {}", theme.get().heading())
                                                }>{edu.degree}</h3>
                                                <p class="text-blue-600 font-medium">{edu.institution}</p>
                                            </div>
                                        </div>
                                        <div class=move || {
                                            format!("mt-4 md:mt-0 md:text-right text-sm {}", theme.get().body())
                                        }>
                                            <div class="flex items-center md:justify-end mb-1">
                                                <i class="extra-calendar mr-1" />
                                                {edu.period}
                                            </div>
                                            <div class="flex items-center md:justify-end text-green-500">
                                                <i class="extra-award mr-1" />
                                                {edu.grade}
                                            </div>
                                        </div>
                                    </div>
                                    <p class=move || format!("mb-4 {}", theme.get().body())>
                                        {edu.description}
                                    </p>
                                    <ul class="grid grid-cols-1 md:grid-cols-2 gap-2">
                                        {edu
                                            .highlights
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <li class=move || {
                                                        format!("text-sm flex items-start {}", theme.get().body())
                                                    }>
                                                        <i class="extra-book-open text-blue-600 mr-2 mt-0.5" />
                                                        {*item}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
