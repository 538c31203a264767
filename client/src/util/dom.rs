//! Thin browser helpers for window geometry, scrolling, and downloads.
//!
//! Hydrate builds talk to `web_sys`; SSR builds return neutral values so
//! components can call these unconditionally.

use crate::state::nav::SectionOffset;

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Viewport height in CSS pixels.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// `offsetTop` of the element with `id`, if it exists.
pub fn offset_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Offsets for `ids`, skipping any that are not on the page.
pub fn section_offsets<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionOffset> {
    ids.into_iter()
        .filter_map(|id| offset_top(id).map(|top| SectionOffset { id: id.to_owned(), top }))
        .collect()
}

/// Start a browser download of `href` saved as `file_name`.
pub fn trigger_download(href: &str, file_name: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(el) = document.create_element("a") else {
            return;
        };
        let Ok(link) = el.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return;
        };
        link.set_href(href);
        link.set_download(file_name);
        link.click();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (href, file_name);
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> Option<i32> {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_wrap)]
        Some(js_sys::Date::new_0().get_full_year() as i32)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Call `on_enter` the first time `el` becomes `threshold` visible.
#[cfg(feature = "hydrate")]
pub fn observe_once(el: &web_sys::Element, threshold: f64, root_margin: Option<&str>, on_enter: impl Fn() + 'static) {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_enter();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) else {
        return;
    };
    observer.observe(el);
    // The observer holds the only JS reference; the callback lives as long as the page.
    callback.forget();
}
