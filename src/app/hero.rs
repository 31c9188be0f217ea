use leptos::{html, prelude::*};
use leptos_use::{
    use_element_size, use_mouse_in_element, use_window_scroll, UseElementSizeReturn,
    UseMouseInElementReturn,
};

use super::backdrop::Backdrop;
use crate::motion::{
    hero_zoom, normalized_pointer, pointer_layer_offset, stagger_delay, Section,
    HERO_LAYER_DEPTHS,
};

struct Layer {
    size: u32,
    blur: u32,
    opacity: f64,
    shadow: &'static str,
}

static LAYERS: [Layer; 3] = [
    Layer {
        size: 420,
        blur: 24,
        opacity: 0.18,
        shadow: "0 8px 32px 0 rgba(16,185,129,0.10), 0 2px 8px 0 rgba(59,130,246,0.04)",
    },
    Layer {
        size: 340,
        blur: 16,
        opacity: 0.14,
        shadow: "0 4px 16px 0 rgba(59,130,246,0.10), 0 1.5px 4px 0 rgba(16,185,129,0.03)",
    },
    Layer {
        size: 260,
        blur: 8,
        opacity: 0.10,
        shadow: "0 2px 8px 0 rgba(59,130,246,0.08)",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        ..
    } = use_mouse_in_element(section_ref);
    // Pointer tracking only measures on move; the zoom needs the height up front.
    let UseElementSizeReturn {
        height: section_height,
        ..
    } = use_element_size(section_ref);
    let (_, scroll_y) = use_window_scroll();

    let pointer = move || {
        (
            normalized_pointer(element_x.get(), element_width.get()),
            normalized_pointer(element_y.get(), element_height.get()),
        )
    };
    let zoom = move || {
        format!(
            "transform: scale({:.3}); object-position: 50% 40%",
            hero_zoom(scroll_y.get(), section_height.get())
        )
    };

    let layers = LAYERS
        .iter()
        .zip(HERO_LAYER_DEPTHS)
        .map(|(layer, depth)| {
            let style = move || {
                let (x, y) = pointer();
                format!(
                    "z-index: {z}; width: {s}px; height: {s}px; opacity: {o}; box-shadow: {sh}; \
                     backdrop-filter: blur({b}px); -webkit-backdrop-filter: blur({b}px); \
                     transform: translate(-50%, -50%) translate3d({px:.1}px, {py:.1}px, 0)",
                    z = depth as u32,
                    s = layer.size,
                    o = layer.opacity,
                    sh = layer.shadow,
                    b = layer.blur,
                    px = pointer_layer_offset(x, depth),
                    py = pointer_layer_offset(y, depth),
                )
            };
            view! { <div class="hero-disc" style=style aria-hidden="true"></div> }
        })
        .collect_view();

    view! {
        <section
            node_ref=section_ref
            id="home"
            class="relative min-h-screen flex items-start justify-center overflow-hidden pt-24 pb-32 select-none"
        >
            <Backdrop light_video="/white.mp4" dark_video="/dark.mp4" section=Section::Hero />
            {layers}
            <div class="relative z-10 flex flex-col items-center text-center max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 gap-6 mt-8">
                <div class="flex justify-center items-center w-full mb-6">
                    <img
                        src="/profile.png"
                        alt="Keryl Djeukoua Tchani"
                        loading="lazy"
                        width="320"
                        height="320"
                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover shadow-2xl ring-4 ring-emerald-500/40 will-change-transform"
                        style=zoom
                    />
                </div>
                <h1 class="reveal text-5xl md:text-7xl font-bold tracking-tight" style=stagger_delay(0, 100)>
                    "Keryl Djeukoua" <br /> "Tchani"
                </h1>
                <div
                    class="reveal text-xl md:text-2xl font-semibold text-emerald-600 dark:text-emerald-400"
                    style=stagger_delay(1, 100)
                >
                    "Data Engineer Junior · Ingénieure Data & IA"
                </div>
                <p
                    class="reveal text-lg text-gray-700 dark:text-gray-300 max-w-2xl"
                    style=stagger_delay(2, 100)
                >
                    "Pipelines ETL/ELT · Orchestration (Airflow) · Bases de données (SQL/NoSQL) · ML & IA appliquée"
                </p>
                <div class="reveal flex flex-wrap justify-center gap-4 mt-4" style=stagger_delay(3, 100)>
                    <a
                        href="/cv.pdf"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-3 rounded-xl bg-emerald-600 hover:bg-emerald-700 text-white font-semibold shadow-lg transition-transform hover:scale-105"
                    >
                        "Télécharger CV"
                    </a>
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-xl border border-emerald-600 text-emerald-700 dark:text-emerald-300 font-semibold transition-transform hover:scale-105"
                    >
                        "Voir mes projets"
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-xl bg-sky-600 hover:bg-sky-700 text-white font-semibold shadow-lg transition-transform hover:scale-105"
                    >
                        "Me contacter"
                    </a>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-10" aria-hidden="true">
                <div class="w-6 h-10 border-2 border-gray-500 dark:border-gray-300 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-gray-500 dark:bg-gray-300 rounded-full mt-2 scroll-hint"></div>
                </div>
            </div>
        </section>
    }
}
