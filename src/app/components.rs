use leptos::prelude::*;

use crate::{catalog::CategoryOption, content::Stat, theme::Theme};

const ACCENT: &str = "bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent";

/// Two-tone section title with a one line blurb under it.
#[component]
pub fn SectionHeading(
    theme: ReadSignal<Theme>,
    lead: &'static str,
    accent: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class=move || format!("text-4xl md:text-5xl font-bold mb-4 {}", theme.get().heading())>
                {lead}
                <span class=ACCENT>{accent}</span>
            </h2>
            <p class=move || format!("text-lg max-w-3xl mx-auto {}", theme.get().body())>{blurb}</p>
        </div>
    }
}

#[component]
pub fn Chip(theme: ReadSignal<Theme>, text: &'static str) -> impl IntoView {
    view! {
        <span class=move || format!("px-3 py-1 rounded-full text-xs {}", theme.get().chip())>
            {text}
        </span>
    }
}

/// Row of filter buttons. The button for `selected` is highlighted.
#[component]
pub fn CategoryTabs(
    theme: ReadSignal<Theme>,
    options: &'static [CategoryOption],
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-4 mb-12">
            {options
                .iter()
                .map(|opt| {
                    let id = opt.id;
                    let class = move || {
                        let state = if selected.with(|s| s == id) {
                            "bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg"
                        } else if theme.get().is_dark() {
                            "bg-gray-700 text-gray-300 hover:bg-gray-600"
                        } else {
                            "bg-gray-100 text-gray-600 hover:bg-gray-200"
                        };
                        format!("px-6 py-3 rounded-full font-medium transition-all duration-300 {state}")
                    };
                    view! {
                        <button class=class on:click=move |_| on_select.run(id)>
                            {opt.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Placeholder shown when a filter leaves nothing to display.
#[component]
pub fn NoItems(theme: ReadSignal<Theme>, message: &'static str) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <p class=move || format!("text-lg {}", theme.get().body())>{message}</p>
        </div>
    }
}

#[component]
pub fn StatGrid(theme: ReadSignal<Theme>, stats: Vec<Stat>) -> impl IntoView {
    let cols = match stats.len() {
        3 => "md:grid-cols-3",
        _ => "md:grid-cols-4",
    };
    view! {
        <div class=format!("mt-16 grid grid-cols-2 {cols} gap-6")>
            {stats
                .into_iter()
                .map(|stat| {
                    view! {
                        <div class=move || {
                            format!(
                                "text-center p-6 rounded-lg {}",
                                if theme.get().is_dark() { "bg-gray-800" } else { "bg-white shadow-lg" },
                            )
                        }>
                            <div class="text-3xl font-bold text-blue-600 mb-2">{stat.value}</div>
                            <div class=move || format!("text-sm {}", theme.get().body())>
                                {stat.label}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
