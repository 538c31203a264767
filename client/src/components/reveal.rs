//! Wrapper that fades its children in when scrolled into view.

use leptos::prelude::*;

use crate::util::effects::{REVEAL_HIDDEN_STYLE, REVEAL_SHOWN_STYLE};

#[component]
pub fn Reveal(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let shown = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::effects::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            crate::util::dom::observe_once(&el, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move || {
                shown.set(true);
            });
        });
    }

    view! {
        <div
            class=class
            node_ref=node
            style=move || if shown.get() { REVEAL_SHOWN_STYLE } else { REVEAL_HIDDEN_STYLE }
        >
            {children()}
        </div>
    }
}
