use leptos::prelude::*;

use super::components::SectionHeading;
use crate::{
    accordion::Accordion,
    content::{self, ACTIVITIES, EXPERIENCES},
    scroll_spy::Section,
    theme::Theme,
};

#[component]
pub fn Experience(theme: ReadSignal<Theme>) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new());

    view! {
        <section
            id=Section::Experience.id()
            class=move || format!("py-20 {}", theme.get().section_bg(true))
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    lead="Experience & "
                    accent="Activities"
                    blurb="My professional journey and involvement in technical activities"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class=move || {
                            format!("text-2xl font-semibold mb-8 {}", theme.get().heading())
                        }>
                            <i class="extra-briefcase mr-2 text-blue-600" />
                            "Professional Experience"
                        </h3>
                        <div class="space-y-6">
                            {EXPERIENCES
                                .iter()
                                .enumerate()
                                .map(|(index, exp)| {
                                    view! { <ExperienceCard exp index accordion theme /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class=move || {
                            format!("text-2xl font-semibold mb-8 {}", theme.get().heading())
                        }>"Co-curricular Activities"</h3>
                        <div class="space-y-4">
                            {ACTIVITIES
                                .iter()
                                .map(|activity| {
                                    view! {
                                        <div class=move || {
                                            format!("p-4 rounded-lg {}", theme.get().card())
                                        }>
                                            <h4 class=move || {
                                                format!("font-semibold {}", theme.get().heading())
                                            }>{activity.title}</h4>
                                            <p class="text-blue-600 text-sm font-medium">
                                                {activity.organization}
                                            </p>
                                            <div class=move || {
                                                format!("text-xs mb-2 {}", theme.get().body())
                                            }>{activity.period}</div>
                                            <p class=move || {
                                                format!("text-sm {}", theme.get().body())
                                            }>{activity.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(
    exp: &'static content::Experience,
    index: usize,
    accordion: RwSignal<Accordion>,
    theme: ReadSignal<Theme>,
) -> impl IntoView {
    let expanded = move || accordion.with(|a| a.is_expanded(index));

    view! {
        <div class=move || format!("p-6 rounded-lg transition-all duration-300 {}", theme.get().card())>
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h4 class=move || {
                        format!("text-xl font-semibold {}", theme.get().heading())
                    }>{exp.title}</h4>
                    <p class="text-blue-600 font-medium">{exp.company}</p>
                    <div class=move || {
                        format!("flex flex-wrap items-center gap-4 mt-2 text-sm {}", theme.get().body())
                    }>
                        <div class="flex items-center">
                            <i class="extra-calendar mr-1" />
                            {exp.period}
                        </div>
                        <div class="flex items-center">
                            <i class="extra-location mr-1" />
                            {exp.location}
                        </div>
                        <span class="px-2 py-1 rounded-full text-xs bg-green-100 text-green-800">
                            {exp.kind}
                        </span>
                    </div>
                </div>
                <button
                    class=move || format!("p-2 rounded-full {}", theme.get().chip())
                    aria-label="Toggle details"
                    aria-expanded=move || expanded().to_string()
                    on:click=move |_| accordion.update(|a| a.toggle(index))
                >
                    <i class=move || {
                        if expanded() { "extra-chevron-up" } else { "extra-chevron-down" }
                    } />
                </button>
            </div>
            <p class=move || theme.get().body()>{exp.description}</p>
            <Show when=expanded>
                <div class="mt-4">
                    <h5 class=move || {
                        format!("font-semibold mb-2 {}", theme.get().heading())
                    }>"Key Achievements:"</h5>
                    <ul class="space-y-2">
                        {exp
                            .achievements
                            .iter()
                            .map(|achievement| {
                                view! {
                                    <li class=move || {
                                        format!("text-sm flex items-start {}", theme.get().body())
                                    }>
                                        <div class="w-1.5 h-1.5 bg-blue-600 rounded-full mt-1.5 mr-2 flex-shrink-0"></div>
                                        {*achievement}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
