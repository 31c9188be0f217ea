use leptos::prelude::*;

use crate::{
    catalog::CATALOG,
    motion::{stagger_delay, Section},
};

use super::backdrop::Backdrop;

const TAB_ACTIVE: &str = "flex items-center gap-2 px-4 py-3 rounded-xl font-medium transition-all duration-300 cursor-pointer select-none backdrop-blur-sm bg-gradient-to-r from-emerald-500 to-sky-600 text-white shadow-lg shadow-emerald-500/25";
const TAB_IDLE: &str = "flex items-center gap-2 px-4 py-3 rounded-xl font-medium transition-all duration-300 cursor-pointer select-none backdrop-blur-sm bg-white/80 dark:bg-gray-800/80 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 border border-gray-200 dark:border-gray-700";

#[component]
pub fn TechStack() -> impl IntoView {
    let catalog = &*CATALOG;
    let (active, set_active) = signal(0usize);

    let tabs = catalog
        .tech
        .iter()
        .enumerate()
        .map(|(index, category)| {
            view! {
                <button
                    type="button"
                    class=move || if active.get() == index { TAB_ACTIVE } else { TAB_IDLE }
                    on:click=move |_| set_active.set(catalog.tech_index(index))
                >
                    <i class=format!("{} text-xl", category.icon)></i>
                    <span class="hidden sm:inline">{category.title.as_str()}</span>
                    <span class="sm:hidden">{category.short_title()}</span>
                </button>
            }
        })
        .collect_view();

    let grid = move || {
        catalog.tech_category(active.get()).map(|category| {
            category
                .items
                .iter()
                .enumerate()
                .map(|(i, tech)| {
                    view! {
                        <div
                            class="reveal group relative bg-white/90 dark:bg-gray-800/90 backdrop-blur-sm rounded-2xl p-6 border border-gray-200 dark:border-gray-700 shadow-lg hover:shadow-xl hover:-translate-y-1 hover:scale-105 transition-all duration-300 select-none"
                            style=stagger_delay(i, 80)
                        >
                            <div class="flex flex-col items-center text-center space-y-3">
                                <div
                                    class="w-16 h-16 rounded-xl flex items-center justify-center text-2xl"
                                    style=format!(
                                        "background-color: {}20; color: {}",
                                        tech.color,
                                        tech.color,
                                    )
                                >
                                    <i class=tech.icon.as_str()></i>
                                </div>
                                <h3 class="font-semibold text-sm">{tech.name.as_str()}</h3>
                            </div>
                            <div class="absolute inset-0 rounded-2xl bg-gradient-to-r from-emerald-500/10 to-sky-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let caption = move || {
        catalog.tech_category(active.get()).map(|category| {
            view! {
                <i class=format!("{} text-2xl", category.icon) style=format!("color: {}", category.color)></i>
                <span class="font-medium">{category.title.as_str()}</span>
            }
        })
    };

    view! {
        <section
            id="skills"
            class="py-20 relative overflow-hidden bg-white dark:bg-gray-900 text-gray-900 dark:text-white"
        >
            <Backdrop light_video="/tech.mp4" section=Section::TechStack wash="section-wash-alt" />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 tracking-tight">
                        "Compétences techniques"
                    </h2>
                    <p class="text-xl text-gray-700 dark:text-gray-300 max-w-3xl mx-auto">
                        "Technologies et outils que j’utilise au quotidien en Data Engineering & IA"
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mb-12 reveal">{tabs}</div>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6">
                    {grid}
                </div>
                <div class="mt-12 text-center">
                    <div class="inline-flex items-center gap-3 px-6 py-3 bg-white/80 dark:bg-gray-800/80 rounded-xl backdrop-blur-sm border border-gray-200 dark:border-gray-700">
                        {caption}
                    </div>
                </div>
            </div>
        </section>
    }
}
