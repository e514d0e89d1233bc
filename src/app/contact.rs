use leptos::prelude::*;

use super::components::SectionHeading;
use crate::{
    content::{EMAIL, GITHUB, LOCATION},
    scroll_spy::Section,
    theme::Theme,
};

struct ContactLine {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: Option<String>,
}

fn contact_lines() -> [ContactLine; 3] {
    [
        ContactLine {
            icon: "extra-email",
            label: "Email",
            value: EMAIL,
            href: Some(format!("mailto:{EMAIL}")),
        },
        ContactLine {
            icon: "devicon-github-plain",
            label: "GitHub",
            value: "FizaBegum",
            href: Some(GITHUB.to_string()),
        },
        ContactLine {
            icon: "extra-location",
            label: "Location",
            value: LOCATION,
            href: None,
        },
    ]
}

#[component]
pub fn Contact(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class=move || format!("py-20 {}", theme.get().section_bg(false))
        >
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    lead="Get In "
                    accent="Touch"
                    blurb="Open to internships, collaborations and interesting conversations"
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                    {contact_lines()
                        .into_iter()
                        .map(|line| {
                            let value = match line.href {
                                Some(href) => {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-blue-600 hover:underline break-all"
                                        >
                                            {line.value}
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => view! { <span class="break-all">{line.value}</span> }.into_any(),
                            };
                            view! {
                                <div class=move || {
                                    format!("p-6 rounded-lg text-center {}", theme.get().card())
                                }>
                                    <div class="w-12 h-12 mx-auto mb-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                                        <i class=format!("{} text-white text-xl", line.icon) />
                                    </div>
                                    <h3 class=move || {
                                        format!("font-semibold mb-1 {}", theme.get().heading())
                                    }>{line.label}</h3>
                                    <div class=move || format!("text-sm {}", theme.get().body())>
                                        {value}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="inline-flex items-center space-x-2 bg-gradient-to-r from-blue-600 to-purple-600 text-white px-8 py-4 rounded-full font-semibold text-lg shadow-lg hover:shadow-xl transform hover:scale-105 transition-all duration-300"
                    >
                        <i class="extra-email" />
                        <span>"Say Hello"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
