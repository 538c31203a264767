//! Page footer with the current year.

use leptos::prelude::*;

use crate::site::OWNER_NAME;
use crate::util::effects::footer_text;

#[component]
pub fn Footer() -> impl IntoView {
    let year = RwSignal::new(None::<i32>);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || year.set(crate::util::dom::current_year()));
    }

    let text = move || {
        year.get()
            .map_or_else(|| format!("© {OWNER_NAME}. All rights reserved."), |y| footer_text(y, OWNER_NAME))
    };

    view! {
        <footer class="footer">
            <div class="footer-bottom">
                <p>{text}</p>
            </div>
        </footer>
    }
}
