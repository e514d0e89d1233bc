use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::components::{SectionHeading, StatGrid};
use crate::{
    content::{skill_stats, Skill, SKILL_BAR_DELAY_MS, SKILL_GROUPS, SOFT_SKILLS},
    scroll_spy::Section,
    theme::Theme,
};

#[component]
pub fn Skills(theme: ReadSignal<Theme>) -> impl IntoView {
    // bars start at zero width and grow once the delay fires
    let (grown, set_grown) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_grown.set(true), SKILL_BAR_DELAY_MS as f64);
    Effect::new(move |_| start(()));

    view! {
        <section
            id=Section::Skills.id()
            class=move || format!("py-20 {}", theme.get().section_bg(false))
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    lead="Skills & "
                    accent="Expertise"
                    blurb="Technical skills and tools I use to bring ideas to life"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-16">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class=move || format!("p-6 rounded-lg {}", theme.get().card())>
                                    <div class="flex items-center mb-6">
                                        <div class="w-10 h-10 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg flex items-center justify-center mr-3">
                                            <i class=format!("{} text-white", group.icon) />
                                        </div>
                                        <h3 class=move || {
                                            format!("text-xl font-semibold {}", theme.get().heading())
                                        }>{group.title}</h3>
                                    </div>
                                    <div class="space-y-4">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <SkillBar skill grown theme /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=move || format!("p-8 rounded-lg {}", theme.get().card())>
                    <div class="text-center mb-8">
                        <h3 class=move || {
                            format!("text-2xl font-semibold mb-2 {}", theme.get().heading())
                        }>"Soft Skills"</h3>
                        <p class=move || theme.get().body()>
                            "Personal qualities that enhance my professional capabilities"
                        </p>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {SOFT_SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class=move || {
                                        format!("p-4 rounded-lg text-center {}", theme.get().chip())
                                    }>
                                        <span class="text-sm font-medium">{*skill}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <StatGrid theme stats=skill_stats() />
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, grown: ReadSignal<bool>, theme: ReadSignal<Theme>) -> impl IntoView {
    let width = move || {
        let level = if grown.get() { skill.level } else { 0 };
        format!("width: {level}%")
    };

    view! {
        <div>
            <div class="flex justify-between mb-2">
                <span class=move || {
                    format!("text-sm font-medium {}", theme.get().heading())
                }>{skill.name}</span>
                <span class=move || format!("text-sm {}", theme.get().body())>
                    {format!("{}%", skill.level)}
                </span>
            </div>
            <div class=move || {
                format!(
                    "w-full h-2 rounded-full {}",
                    if theme.get().is_dark() { "bg-gray-600" } else { "bg-gray-200" },
                )
            }>
                <div
                    class="h-2 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 transition-all duration-1000 ease-out"
                    style=width
                ></div>
            </div>
        </div>
    }
}
