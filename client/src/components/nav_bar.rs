//! Fixed navigation bar with theme toggle and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads scroll-derived flags from `UiState` (kept current by the window
//! listener in `app`) and owns the menu/theme toggles.

use leptos::prelude::*;

use crate::site::NAV_LINKS;
use crate::state::nav::{self, hamburger_style};
use crate::state::ui::UiState;
use crate::util::storage::LocalStorage;
use crate::util::{dom, theme};

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let bars = move || hamburger_style(ui.with(|u| u.menu_open));
    let nav_class = move || {
        if nav::nav_scrolled(ui.with(|u| u.scroll_y)) { "nav scrolled" } else { "nav" }
    };
    let menu_class = move || if ui.with(|u| u.menu_open) { "nav-menu active" } else { "nav-menu" };

    let on_theme = move |_| {
        let next = theme::toggle(&LocalStorage, ui.with_untracked(|u| u.theme));
        ui.update(|u| u.theme = next);
    };
    let on_menu = move |_| ui.update(|u| u.menu_open = !u.menu_open);

    view! {
        <nav id="nav" class=nav_class>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{crate::site::OWNER_NAME}</a>
                <ul id="nav-menu" class=menu_class>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            let is_active = move || {
                                ui.with(|u| nav::link_is_active(href, u.active_section.as_deref()))
                            };
                            let on_link = move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                ui.update(|u| u.menu_open = false);
                                if let Some(top) = dom::offset_top(href.trim_start_matches('#')) {
                                    dom::smooth_scroll_to(nav::scroll_target(top));
                                }
                            };
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=is_active
                                        on:click=on_link
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    id="theme-toggle"
                    class="btn nav__theme-toggle"
                    on:click=on_theme
                    title="Toggle theme"
                >
                    {move || ui.with(|u| u.theme.toggle_icon())}
                </button>
                <button id="nav-toggle" class="nav-toggle" on:click=on_menu title="Menu">
                    <span style=move || format!("transform: {};", bars().top_transform)></span>
                    <span style=move || format!("opacity: {};", bars().middle_opacity)></span>
                    <span style=move || format!("transform: {};", bars().bottom_transform)></span>
                </button>
            </div>
        </nav>
    }
}
