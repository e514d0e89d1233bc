use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    content::{EMAIL, GITHUB, INITIALS, LOCATION, NAME, SUMMARY, TAGLINES},
    scroll_spy::Section,
    theme::Theme,
    typewriter::{Typewriter, TICK_MS},
};

#[component]
pub fn Hero(theme: ReadSignal<Theme>) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(&TAGLINES));
    // paused automatically when the component is torn down
    let _ticker = use_interval_fn(move || typewriter.update(Typewriter::tick), TICK_MS);

    let scroll_to_contact = move |_| {
        if let Some(el) = document().get_element_by_id(Section::Contact.id()) {
            el.scroll_into_view();
        }
    };

    let muted = move || theme.get().body();
    let outline = move || {
        if theme.get().is_dark() {
            "border-gray-600 text-gray-300 hover:border-gray-400 hover:text-white"
        } else {
            "border-gray-300 text-gray-700 hover:border-gray-500 hover:text-gray-900"
        }
    };
    let social = move || {
        format!(
            "p-3 rounded-full transition-all duration-300 hover:scale-110 {}",
            if theme.get().is_dark() {
                "bg-gray-800 text-gray-300 hover:bg-gray-700 hover:text-white"
            } else {
                "bg-white text-gray-600 hover:bg-gray-100 hover:text-gray-900 shadow-lg"
            },
        )
    };

    view! {
        <section
            id=Section::Home.id()
            class=move || {
                format!(
                    "min-h-screen flex items-center justify-center relative overflow-hidden {}",
                    if theme.get().is_dark() {
                        "bg-gradient-to-br from-gray-900 to-gray-800"
                    } else {
                        "bg-gradient-to-br from-blue-50 to-indigo-100"
                    },
                )
            }
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10">
                <div class="space-y-8 animate-fadeInUp">
                    <div class="relative inline-block">
                        <div class="w-32 h-32 rounded-full mx-auto mb-6 bg-gradient-to-r from-blue-500 to-purple-600 p-1 shadow-2xl">
                            <div class=move || {
                                format!(
                                    "w-full h-full rounded-full flex items-center justify-center text-4xl font-bold {}",
                                    if theme.get().is_dark() {
                                        "bg-gray-800 text-white"
                                    } else {
                                        "bg-white text-gray-800"
                                    },
                                )
                            }>{INITIALS}</div>
                        </div>
                    </div>
                    <div>
                        <h1 class=move || {
                            format!("text-5xl md:text-7xl font-bold mb-4 {}", theme.get().heading())
                        }>
                            "Hi, I'm "
                            <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                {NAME}
                            </span>
                        </h1>
                        <div class=move || format!("text-2xl md:text-3xl mb-6 h-12 {}", muted())>
                            "I'm a "
                            <span class="text-blue-600 font-semibold">
                                {move || typewriter.with(|t| t.text())}
                                <span class="animate-blink">"|"</span>
                            </span>
                        </div>
                    </div>
                    <p class=move || {
                        format!("text-lg md:text-xl max-w-3xl mx-auto leading-relaxed {}", muted())
                    }>{SUMMARY}</p>
                    <div class=move || {
                        format!("flex items-center justify-center space-x-2 {}", muted())
                    }>
                        <i class="extra-location" />
                        <span>{LOCATION}</span>
                    </div>
                    <div class="flex flex-col sm:flex-row items-center justify-center space-y-4 sm:space-y-0 sm:space-x-6 pt-8">
                        <button
                            on:click=scroll_to_contact
                            class="bg-gradient-to-r from-blue-600 to-purple-600 text-white px-8 py-4 rounded-full font-semibold text-lg shadow-lg hover:shadow-xl transform hover:scale-105 transition-all duration-300 flex items-center space-x-2"
                        >
                            <i class="extra-email" />
                            <span>"Get In Touch"</span>
                        </button>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class=move || {
                                format!(
                                    "px-8 py-4 rounded-full font-semibold text-lg border-2 transition-all duration-300 flex items-center space-x-2 {}",
                                    outline(),
                                )
                            }
                        >
                            <i class="extra-download" />
                            <span>"Download CV"</span>
                        </a>
                    </div>
                    <div class="flex items-center justify-center space-x-6 pt-8">
                        <a
                            href=GITHUB
                            target="_blank"
                            rel="noopener noreferrer"
                            class=social
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain text-2xl" />
                        </a>
                        <a href=format!("mailto:{EMAIL}") class=social aria-label="Email">
                            <i class="extra-email text-2xl" />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
