use leptos::prelude::*;

use super::components::{CategoryTabs, Chip, NoItems, SectionHeading};
use crate::{
    catalog::CategoryFilter,
    content::{Project, PROJECTS, PROJECT_CATEGORIES},
    scroll_spy::Section,
    theme::Theme,
};

#[component]
pub fn Projects(theme: ReadSignal<Theme>) -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::new(&PROJECTS));
    let selected = Signal::derive(move || filter.with(|f| f.selected().to_string()));
    let on_select = Callback::new(move |key: &'static str| {
        filter.update(|f| f.select_category(key));
    });

    view! {
        <section
            id=Section::Projects.id()
            class=move || format!("py-20 {}", theme.get().section_bg(false))
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    lead="My "
                    accent="Projects"
                    blurb="A showcase of my technical projects and design work"
                />
                <CategoryTabs theme options=&PROJECT_CATEGORIES selected on_select />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter
                            .with(|f| f.filtered_items())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project theme /> })
                            .collect_view()
                    }}
                </div>
                <Show when=move || filter.with(|f| f.is_empty())>
                    <NoItems theme message="No projects found in this category." />
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, theme: ReadSignal<Theme>) -> impl IntoView {
    let button = move || {
        if theme.get().is_dark() {
            "bg-gray-600 text-gray-300 hover:bg-gray-500"
        } else {
            "bg-gray-100 text-gray-700 hover:bg-gray-200"
        }
    };

    view! {
        <div class=move || {
            format!(
                "rounded-lg overflow-hidden transition-all duration-300 hover:scale-105 {}",
                theme.get().card(),
            )
        }>
            <div class="relative h-48 bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center">
                <i class=format!("{} text-white text-5xl", project.icon) />
                <div class="absolute inset-0 bg-black bg-opacity-20"></div>
            </div>
            <div class="p-6">
                <h3 class=move || {
                    format!("text-xl font-semibold mb-3 {}", theme.get().heading())
                }>{project.title}</h3>
                <p class=move || {
                    format!("text-sm mb-4 line-clamp-3 {}", theme.get().body())
                }>{project.description}</p>
                <div class="mb-4 flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <Chip theme text=*tech /> })
                        .collect_view()}
                </div>
                <div class="mb-6">
                    <h4 class=move || {
                        format!("text-sm font-semibold mb-2 {}", theme.get().heading())
                    }>"Key Features:"</h4>
                    <ul class="space-y-1">
                        // cards list only the first two features
                        {project
                            .features
                            .iter()
                            .take(2)
                            .map(|feature| {
                                view! {
                                    <li class=move || {
                                        format!("text-xs flex items-start {}", theme.get().body())
                                    }>
                                        <div class="w-1.5 h-1.5 bg-blue-600 rounded-full mt-1.5 mr-2 flex-shrink-0"></div>
                                        {*feature}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flex space-x-3">
                    <button class=move || {
                        format!(
                            "flex items-center space-x-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors {}",
                            button(),
                        )
                    }>
                        <i class="extra-eye" />
                        <span>"View"</span>
                    </button>
                    <button class="flex items-center space-x-2 px-4 py-2 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg text-sm font-medium hover:shadow-lg transition-all">
                        <i class="devicon-github-plain" />
                        <span>"Code"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
