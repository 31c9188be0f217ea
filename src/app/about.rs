use leptos::{prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::about::get_about;
use crate::{about::AboutPage, motion::Section};

use super::backdrop::Backdrop;

#[server(input = GetUrl)]
pub async fn get_about_server() -> Result<AboutPage, ServerFnError> {
    get_about().map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn About() -> impl IntoView {
    let page = Resource::new(|| (), |_| get_about_server());

    view! {
        <section
            id="about"
            class="py-20 relative overflow-hidden bg-white dark:bg-gray-900 text-gray-900 dark:text-white"
        >
            <Backdrop light_video="/white1.mp4" dark_video="/dark1.mp4" section=Section::About />
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <Suspense fallback=move || {
                    view! {
                        <div class="space-y-4">
                            <div class="loading-skeleton h-10 rounded w-1/3 mx-auto"></div>
                            <div class="loading-skeleton h-64 rounded"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        page.await
                            .inspect_err(|e| log::error!("couldn't load about page: {e}"))
                            .ok()
                            .map(|p| view! { <AboutContent page=p /> })
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn AboutContent(page: AboutPage) -> impl IntoView {
    let AboutPage { meta, content } = page;
    view! {
        <div class="text-center mb-16 reveal">
            <h2 class="text-4xl md:text-5xl font-bold mb-6">{meta.title}</h2>
            <div class="w-24 h-1 bg-gradient-to-r from-emerald-500 to-sky-500 mx-auto rounded-full"></div>
        </div>
        <div class="grid lg:grid-cols-2 gap-12 items-center">
            <div class="relative reveal">
                <img
                    src=meta.image
                    alt=meta.image_alt
                    loading="lazy"
                    width="600"
                    height="384"
                    class="relative w-full h-96 object-cover rounded-2xl shadow-2xl"
                />
                <div class="absolute -bottom-6 -right-6 bg-gray-900/90 backdrop-blur-md rounded-2xl px-6 py-4 shadow-xl border border-emerald-500/30">
                    <div class="text-center">
                        <div class="text-2xl font-bold text-emerald-400">{meta.badge_title}</div>
                        <div class="text-sm text-gray-300">{meta.badge_subtitle}</div>
                    </div>
                </div>
            </div>
            <div class="space-y-6 reveal">
                <h3 class="text-2xl md:text-3xl font-bold text-emerald-600 dark:text-emerald-400">
                    {meta.headline}
                </h3>
                <div
                    class="bio text-lg leading-relaxed text-gray-700 dark:text-gray-300"
                    inner_html=content
                ></div>
                <a
                    href=meta.resume
                    download=true
                    class="inline-block px-8 py-4 rounded-xl bg-gradient-to-r from-emerald-600 to-sky-600 text-white font-bold shadow-lg transition-transform hover:scale-105 hover:-translate-y-0.5"
                >
                    {meta.resume_label}
                </a>
            </div>
        </div>
    }
}
