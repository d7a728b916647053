use crate::constants::{AUDIO_ERROR_ID, AUDIO_ERROR_TEXT, MUSIC_TOGGLE_ID};
use crate::controls::ControlsView;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
    // fallback for pages without a .hidden rule; other inline styles stay
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().remove_property("display");
    }
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    // fallback
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", "none");
    }
}

/// The music button and the "unable to play" notice supplied by the host page.
#[derive(Clone)]
pub struct Controls {
    pub button: web::Element,
    notice: web::Element,
}

impl Controls {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let button = dom::element_by_id(document, MUSIC_TOGGLE_ID)?;
        let notice = dom::element_by_id(document, AUDIO_ERROR_ID)?;
        notice.set_text_content(Some(AUDIO_ERROR_TEXT));
        _ = notice.set_attribute("role", "status");
        Ok(Self { button, notice })
    }

    pub fn apply(&self, view: &ControlsView) {
        self.button.set_text_content(Some(view.glyph.symbol()));
        _ = self.button.set_attribute("aria-label", view.glyph.label());
        _ = self
            .button
            .set_attribute("aria-pressed", if view.pressed { "true" } else { "false" });
        if view.pending {
            _ = self.button.set_attribute("data-pending", "1");
        } else {
            _ = self.button.remove_attribute("data-pending");
        }
        if view.show_error {
            show(&self.notice);
        } else {
            hide(&self.notice);
        }
    }
}
