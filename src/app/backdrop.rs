use leptos::prelude::*;
use leptos_use::{use_preferred_dark, use_window_scroll};

use crate::motion::{translate_y, Section};

/// Looping background video(s), readability overlay and, for sections with a
/// parallax range, a wash that drifts with the page scroll.
///
/// With a `dark_video` the two videos cross-fade on the OS color scheme.
#[component]
pub fn Backdrop(
    light_video: &'static str,
    #[prop(optional)] dark_video: Option<&'static str>,
    section: Section,
    #[prop(default = "section-wash")] wash: &'static str,
) -> impl IntoView {
    let is_dark = use_preferred_dark();
    let (_, scroll_y) = use_window_scroll();
    let light_opacity = move || {
        if dark_video.is_some() && is_dark.get() {
            "0"
        } else {
            "1"
        }
    };

    view! {
        <div class="absolute inset-0 w-full h-full z-0 pointer-events-none" aria-hidden="true">
            <video
                src=light_video
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                class="absolute inset-0 w-full h-full object-cover video-fade"
                style:opacity=light_opacity
            ></video>
            {dark_video
                .map(|src| {
                    view! {
                        <video
                            src=src
                            autoplay=true
                            muted=true
                            loop=true
                            playsinline=true
                            class="absolute inset-0 w-full h-full object-cover video-fade"
                            style:opacity=move || if is_dark.get() { "1" } else { "0" }
                        ></video>
                    }
                })}
            <div class="absolute inset-0 z-[1] section-overlay"></div>
        </div>
        {section
            .parallax()
            .map(|parallax| {
                let shift = move || translate_y(parallax.offset(scroll_y.get()));
                view! {
                    <div
                        class=format!("absolute inset-0 z-0 pointer-events-none will-change-transform {wash}")
                        style=shift
                        aria-hidden="true"
                    ></div>
                }
            })}
    }
}
