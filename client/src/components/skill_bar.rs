//! Skill progress bar that re-fills when it scrolls into view.

use leptos::prelude::*;

use crate::util::effects::skill_width;

#[component]
pub fn SkillBar(name: &'static str, percent: u8) -> impl IntoView {
    // Full width until hydrated, so the server-rendered page reads correctly.
    let filled = RwSignal::new(true);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::effects::{SKILL_FILL_DELAY_MS, SKILL_THRESHOLD};

        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            crate::util::dom::observe_once(&el, SKILL_THRESHOLD, None, move || {
                filled.set(false);
                gloo_timers::callback::Timeout::new(SKILL_FILL_DELAY_MS, move || filled.set(true)).forget();
            });
        });
    }

    view! {
        <div class="skill">
            <div class="skill__header">
                <span>{name}</span>
                <span>{format!("{percent}%")}</span>
            </div>
            <div class="skill-bar">
                <div
                    class="skill-progress"
                    node_ref=node
                    style=move || if filled.get() { skill_width(percent) } else { skill_width(0) }
                ></div>
            </div>
        </div>
    }
}
