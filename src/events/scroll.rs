use crate::core::InteractionState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirror the page's vertical scroll offset into the interaction state.
pub fn wire_scroll(interaction: Rc<RefCell<InteractionState>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Ok(y) = window.scroll_y() {
        interaction.borrow_mut().set_scroll(y as f32);
    }
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Ok(y) = wnd.scroll_y() {
            interaction.borrow_mut().set_scroll(y as f32);
        }
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
