//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use crate::state::nav::back_to_top_visible;
use crate::state::ui::UiState;
use crate::util::dom;

#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:visible=move || back_to_top_visible(ui.with(|u| u.scroll_y))
            on:click=move |_| dom::smooth_scroll_to(0.0)
            title="Back to top"
        >
            "↑"
        </button>
    }
}
