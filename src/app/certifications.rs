use leptos::prelude::*;

use super::components::{CategoryTabs, Chip, NoItems, SectionHeading, StatGrid};
use crate::{
    catalog::CategoryFilter,
    content::{certification_stats, CertStatus, Certification, CERTIFICATIONS, CERTIFICATION_CATEGORIES},
    scroll_spy::Section,
    theme::Theme,
};

#[component]
pub fn Certifications(theme: ReadSignal<Theme>) -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::new(&CERTIFICATIONS));
    let selected = Signal::derive(move || filter.with(|f| f.selected().to_string()));
    let on_select = Callback::new(move |key: &'static str| {
        filter.update(|f| f.select_category(key));
    });

    view! {
        <section
            id=Section::Certifications.id()
            class=move || format!("py-20 {}", theme.get().section_bg(true))
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    lead="Certifications & "
                    accent="Achievements"
                    blurb="Professional certifications that validate my technical expertise"
                />
                <CategoryTabs theme options=&CERTIFICATION_CATEGORIES selected on_select />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {move || {
                        filter
                            .with(|f| f.filtered_items())
                            .into_iter()
                            .map(|cert| view! { <CertificationCard cert theme /> })
                            .collect_view()
                    }}
                </div>
                // stats describe the whole catalog, not the current filter
                <StatGrid theme stats=certification_stats(&CERTIFICATIONS) />
                <Show when=move || filter.with(|f| f.is_empty())>
                    <NoItems theme message="No certifications found in this category." />
                </Show>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification, theme: ReadSignal<Theme>) -> impl IntoView {
    let status_class = match cert.status {
        CertStatus::Active => "flex items-center text-xs text-green-500",
        CertStatus::Completed => "flex items-center text-xs text-blue-500",
    };
    let ring = if cert.featured { "ring-2 ring-blue-500" } else { "" };

    view! {
        <div class=move || {
            format!(
                "relative p-6 rounded-lg transition-all duration-300 hover:scale-105 {} {ring}",
                theme.get().card(),
            )
        }>
            {cert
                .featured
                .then(|| {
                    view! {
                        <div class="absolute -top-3 -right-3 bg-gradient-to-r from-yellow-500 to-orange-500 text-white p-2 rounded-full">
                            <i class="extra-star" />
                        </div>
                    }
                })}
            <div class="flex items-start justify-between mb-4">
                <div class="flex-1">
                    <div class="flex items-center mb-2">
                        <i class="extra-award text-blue-600 mr-2" />
                        <span class=move || {
                            format!("text-sm font-medium {}", theme.get().body())
                        }>{cert.issuer}</span>
                    </div>
                    <h3 class=move || {
                        format!("text-xl font-semibold mb-2 {}", theme.get().heading())
                    }>{cert.title}</h3>
                </div>
                <div class="text-right">
                    <div class=move || {
                        format!("flex items-center text-sm mb-2 {}", theme.get().body())
                    }>
                        <i class="extra-calendar mr-1" />
                        <span>{cert.year}</span>
                    </div>
                    <div class=status_class>
                        <i class="extra-check-circle mr-1" />
                        {cert.status.label()}
                    </div>
                </div>
            </div>
            <p class=move || format!("mb-4 text-sm {}", theme.get().body())>{cert.description}</p>
            <div class="mb-6">
                <h4 class=move || {
                    format!("text-sm font-semibold mb-3 {}", theme.get().heading())
                }>"Skills Acquired:"</h4>
                <div class="flex flex-wrap gap-2">
                    {cert.skills.iter().map(|skill| view! { <Chip theme text=*skill /> }).collect_view()}
                </div>
            </div>
            <button class=move || {
                let tone = if cert.featured {
                    "bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:shadow-lg"
                } else if theme.get().is_dark() {
                    "bg-gray-700 text-gray-300 hover:bg-gray-600"
                } else {
                    "bg-gray-100 text-gray-700 hover:bg-gray-200"
                };
                format!(
                    "w-full py-2 px-4 rounded-lg font-medium text-sm transition-all duration-300 flex items-center justify-center {tone}",
                )
            }>
                <i class="extra-external-link mr-2" />
                "View Certificate"
            </button>
        </div>
    }
}
