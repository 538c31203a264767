//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared `UiState` and keeps its scroll fields in sync with
/// the window.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        use crate::site::SECTION_IDS;
        use crate::state::nav::active_section;
        use crate::util::storage::LocalStorage;
        use crate::util::{dom, theme};

        let sync_scroll = move || {
            let scroll_y = dom::scroll_y();
            let sections = dom::section_offsets(SECTION_IDS.iter().copied());
            let active = active_section(&sections, scroll_y).map(str::to_owned);
            ui.update(|u| {
                u.scroll_y = scroll_y;
                u.viewport_height = dom::viewport_height();
                u.active_section = active;
            });
        };

        Effect::new(move || {
            let saved = theme::read_preference(&LocalStorage);
            theme::apply(saved);
            ui.update(|u| u.theme = saved);
            sync_scroll();
        });

        let _scroll = window_event_listener(leptos::ev::scroll, move |_| sync_scroll());
        let _resize = window_event_listener(leptos::ev::resize, move |_| sync_scroll());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=crate::site::OWNER_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
