mod about;
mod backdrop;
mod contact;
mod hero;
mod projects;
mod tech_stack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use hero::Hero;
use projects::Projects;
use tech_stack::TechStack;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Keryl Djeukoua Tchani, Data Engineer Junior et Ingénieure Data & IA"
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/keryl-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-white dark:bg-gray-900 text-gray-900 dark:text-white scroll-smooth">
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
        <Title formatter=|title| format!("Keryl Djeukoua Tchani - {title}") />
        <Router>
            <main class="flex flex-col w-full overflow-x-hidden">
                <Routes fallback=|| "Page introuvable.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The whole portfolio, one section after another.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <TechStack />
        <Projects />
        <Contact />
    }
}
