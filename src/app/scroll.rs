use leptos::{ev, prelude::*, web_sys::HtmlElement};
use wasm_bindgen::JsCast;

use crate::scroll_spy::{Extent, ScrollSpy, Section, SectionLayout};

/// Reads section geometry from the live document.
struct DomLayout;

impl SectionLayout for DomLayout {
    fn extent(&self, section: Section) -> Option<Extent> {
        let el = document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Extent::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }
}

/// Keeps `set_active` in step with the scroll position.
///
/// The window listener is registered once here and removed exactly once
/// when the owning component is torn down.
pub fn use_scroll_spy(set_active: WriteSignal<Section>) {
    let spy = StoredValue::new(ScrollSpy::new());

    let on_scroll = move || {
        let offset = window().scroll_y().unwrap_or_default();
        let changed = spy
            .try_update_value(|spy| spy.observe(offset, &DomLayout))
            .flatten();
        if let Some(section) = changed {
            log::debug!("active section: {section}");
            set_active.set(section);
        }
    };

    // effects only run in the browser, so this is the on-mount pass
    Effect::new(move |_| on_scroll());

    let handle = window_event_listener(ev::scroll, move |_| on_scroll());
    on_cleanup(move || {
        handle.remove();
        spy.try_update_value(ScrollSpy::detach);
    });
}
