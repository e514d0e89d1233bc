use leptos::prelude::*;

use crate::{content::INITIALS, scroll_spy::Section, theme::Theme};

#[component]
pub fn Navigation(
    theme: ReadSignal<Theme>,
    active: ReadSignal<Section>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 w-full z-50 backdrop-blur-md transition-colors duration-300 {}",
                if theme.get().is_dark() {
                    "bg-gray-900/90 border-b border-gray-800"
                } else {
                    "bg-white/90 border-b border-gray-200"
                },
            )
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a
                        href=Section::Home.href()
                        class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent"
                    >
                        {INITIALS}
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section active theme /> })
                            .collect_view()}
                        <ThemeToggle theme on_toggle=on_toggle_theme />
                    </div>
                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle theme on_toggle=on_toggle_theme />
                        <button
                            class="p-2 rounded-lg"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <i class=move || {
                                if menu_open.get() { "extra-close" } else { "extra-menu" }
                            } />
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class=move || {
                    format!(
                        "md:hidden px-4 pb-4 flex flex-col space-y-2 {}",
                        if theme.get().is_dark() { "bg-gray-900" } else { "bg-white" },
                    )
                }>
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let close = Callback::new(move |()| set_menu_open.set(false));
                            view! { <NavLink section active theme on_pick=close /> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(
    section: Section,
    active: ReadSignal<Section>,
    theme: ReadSignal<Theme>,
    #[prop(optional)] on_pick: Option<Callback<()>>,
) -> impl IntoView {
    let class = move || {
        let state = if active.get() == section {
            "text-blue-600 font-semibold"
        } else if theme.get().is_dark() {
            "text-gray-300 hover:text-white"
        } else {
            "text-gray-600 hover:text-gray-900"
        };
        format!("text-sm transition-colors duration-200 {state}")
    };
    view! {
        <a
            href=section.href()
            class=class
            aria-current=move || (active.get() == section).then_some("true")
            on:click=move |_| {
                if let Some(pick) = on_pick {
                    pick.run(());
                }
            }
        >
            {section.label()}
        </a>
    }
}

#[component]
fn ThemeToggle(theme: ReadSignal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class=move || {
                if theme.get().is_dark() {
                    "p-2 rounded-lg bg-gray-800 text-yellow-400 hover:bg-gray-700"
                } else {
                    "p-2 rounded-lg bg-gray-100 text-gray-700 hover:bg-gray-200"
                }
            }
            aria-label="Toggle dark mode"
            on:click=move |_| on_toggle.run(())
        >
            <i class=move || theme.get().icon() />
        </button>
    }
}
