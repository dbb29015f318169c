use crate::core::{pointer_offset, InteractionState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record the pointer offset from the viewport center on every move.
///
/// Only the raw offset is written here; smoothing happens in the frame loop.
pub fn wire_pointermove(interaction: Rc<RefCell<InteractionState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (w, h) = dom::viewport_size(&wnd);
        let offset = pointer_offset(ev.client_x() as f32, ev.client_y() as f32, w, h);
        interaction.borrow_mut().set_pointer(offset);
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
