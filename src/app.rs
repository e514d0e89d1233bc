mod about;
mod certifications;
mod components;
mod contact;
mod education;
mod experience;
mod hero;
mod navigation;
mod projects;
mod scroll;
mod skills;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content, scroll_spy::Section, theme::Theme};

use about::About;
use certifications::Certifications;
use contact::Contact;
use education::Education;
use experience::Experience;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use scroll::use_scroll_spy;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{} - Portfolio", content::NAME) />
        <Meta name="description" content=content::SUMMARY />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The single page. Owns theme and active-section state and hands read
/// signals plus callbacks down to the sections.
#[component]
fn Portfolio() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());
    let (active, set_active) = signal(Section::default());
    use_scroll_spy(set_active);

    let toggle_theme = Callback::new(move |()| {
        set_theme.update(|t| *t = t.toggle());
        log::debug!("theme set to {:?}", theme.get_untracked());
    });

    view! {
        <div class=move || theme.get().shell_class()>
            <Navigation theme active on_toggle_theme=toggle_theme />
            <main>
                <Hero theme />
                <About theme />
                <Experience theme />
                <Projects theme />
                <Skills theme />
                <Education theme />
                <Certifications theme />
                <Contact theme />
            </main>
            <Footer theme />
        </div>
    }
}

fn build_year() -> i32 {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| chrono::Utc::now().year())
}

#[component]
fn Footer(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <footer class=move || {
            if theme.get().is_dark() {
                "py-8 text-center bg-gray-800 text-gray-300"
            } else {
                "py-8 text-center bg-gray-100 text-gray-600"
            }
        }>
            <p>{format!("© {} {}. All rights reserved.", build_year(), content::NAME)}</p>
        </footer>
    }
}
