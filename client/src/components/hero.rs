//! Hero section with parallax background and cursor-following orbs.

use leptos::prelude::*;

use crate::site::{OWNER_NAME, TAGLINE};
use crate::state::ui::UiState;
use crate::util::effects::{orb_transform, parallax_transform};

const ORB_COUNT: usize = 3;

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let cursor = RwSignal::new((0.0_f64, 0.0_f64));

    #[cfg(feature = "hydrate")]
    {
        let _listener = window_event_listener(leptos::ev::mousemove, move |ev| {
            cursor.set((f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
    }

    // Past the hero the previous transform is kept.
    let parallax = Memo::new(move |prev: Option<&String>| {
        let (scroll_y, height) = ui.with(|u| (u.scroll_y, u.viewport_height));
        parallax_transform(scroll_y, height)
            .or_else(|| prev.cloned())
            .unwrap_or_else(|| "translateY(0px)".to_owned())
    });
    let background_style = move || format!("transform: {};", parallax.get());

    view! {
        <section id="home" class="hero">
            <div class="hero-background" style=background_style>
                {(0..ORB_COUNT)
                    .map(|i| {
                        view! {
                            <div
                                class=format!("gradient-orb gradient-orb--{i}")
                                style=move || {
                                    let (x, y) = cursor.get();
                                    format!("transform: {};", orb_transform(i, x, y))
                                }
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="hero-content">
                <h1>{OWNER_NAME}</h1>
                <p class="hero-tagline">{TAGLINE}</p>
                <a href="#contact" class="btn btn--primary">"Get in touch"</a>
            </div>
        </section>
    }
}
