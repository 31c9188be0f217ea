use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::{
    catalog::{CategoryFilter, Project, CATALOG},
    motion::{stagger_delay, Section},
};

use super::backdrop::Backdrop;

const FILTER_ACTIVE: &str = "px-6 py-3 rounded-full font-medium transition-all duration-300 cursor-pointer select-none hover:scale-105 bg-gradient-to-r from-emerald-600 to-sky-600 text-white shadow-lg";
const FILTER_IDLE: &str = "px-6 py-3 rounded-full font-medium transition-all duration-300 cursor-pointer select-none hover:scale-105 bg-white/10 dark:bg-gray-800/10 text-gray-700 dark:text-gray-300 hover:bg-white/20 dark:hover:bg-gray-800/20 border border-gray-200/40 dark:border-gray-700/40";

#[component]
pub fn Projects() -> impl IntoView {
    let catalog = &*CATALOG;
    let query = use_query_map();
    let selected = RwSignal::new(CategoryFilter::from_query(
        query.get_untracked().get("categorie").as_deref(),
    ));

    let filters = CategoryFilter::options()
        .map(|filter| {
            view! {
                <button
                    type="button"
                    data-category=filter.to_string()
                    class=move || if selected.get() == filter { FILTER_ACTIVE } else { FILTER_IDLE }
                    on:click=move |_| selected.set(filter)
                >
                    {filter.label()}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        catalog
            .filter_projects(selected.get())
            .into_iter()
            .enumerate()
            .map(|(i, project)| view! { <ProjectCard project index=i /> })
            .collect_view()
    };

    view! {
        <section
            id="projects"
            class="py-20 relative overflow-hidden select-none bg-white dark:bg-gray-900 text-gray-900 dark:text-white"
        >
            <Backdrop light_video="/white2.mp4" dark_video="/dark2.mp4" section=Section::Projects />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"Projets"</h2>
                    <p class="text-xl text-gray-700 dark:text-gray-300 max-w-3xl mx-auto">
                        "Une sélection de projets orientés Data Engineering, IA et mise en production"
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-4 mb-12 reveal">{filters}</div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let links = project
        .links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.url.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    title=link.label.as_str()
                    class="h-11 px-4 bg-white/20 backdrop-blur-sm rounded-full flex items-center gap-2 text-white hover:bg-white/30 hover:scale-105 transition-all duration-300"
                >
                    <i class=format!("{} w-4 h-4", link.icon)></i>
                    <span class="text-sm font-semibold">{link.label.as_str()}</span>
                </a>
            }
        })
        .collect_view();

    let technologies = project
        .technologies
        .iter()
        .map(|tech| {
            view! {
                <span class="px-3 py-1 rounded-full bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-gray-200 text-xs font-medium">
                    {tech.as_str()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class="reveal group relative rounded-2xl p-6 text-center select-none bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-700 shadow-lg hover:-translate-y-2.5 transition-transform duration-300"
            style=stagger_delay(index, 100)
        >
            <div class="relative h-48 overflow-hidden rounded-xl">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    loading="lazy"
                    width="600"
                    height="400"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent"></div>
                <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="flex flex-wrap justify-center gap-3 px-4">{links}</div>
                </div>
            </div>
            <div class="mt-6">
                <h3 class="text-xl font-bold mb-2">{project.title.as_str()}</h3>
                <p class="text-gray-700 dark:text-gray-300 mb-4">{project.description.as_str()}</p>
                <div class="flex flex-wrap justify-center gap-2">{technologies}</div>
            </div>
        </div>
    }
}
