use crate::constants::{CURSOR_CLASS, TYPEWRITER_ID};
use crate::core::{parse_phrases, Typewriter, TypewriterTimings};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const DEFAULT_PHRASES: [&str; 3] = [
    "Software Engineer",
    "Systems Programmer",
    "Creative Technologist",
];

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start the typewriter on `#typewriter`, if the page has one.
///
/// Phrases come from `data-phrases` (`|`-separated) when present.
pub fn start(document: &web::Document) {
    let Some(el) = document.get_element_by_id(TYPEWRITER_ID) else {
        log::info!("[typewriter] no #{} element, skipping", TYPEWRITER_ID);
        return;
    };
    let phrases = match dom::data_attribute(&el, "phrases") {
        Some(raw) => parse_phrases(&raw),
        None => DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
    };
    let Some(typewriter) = Typewriter::new(phrases, TypewriterTimings::default()) else {
        log::info!("[typewriter] empty phrase list, skipping");
        return;
    };

    let state = Rc::new(RefCell::new(typewriter));
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let step = state.borrow_mut().tick();
        render(&el, &step.text);
        schedule(&tick_clone, step.delay_ms);
    }) as Box<dyn FnMut()>));
    schedule(&tick, TypewriterTimings::default().type_ms);
}

fn schedule(tick: &Tick, delay_ms: u32) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        );
    }
}

// Replace the text, then append the blinking cursor after it.
fn render(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
    let Some(document) = el.owner_document() else {
        return;
    };
    if let Ok(cursor) = document.create_element("span") {
        cursor.set_class_name(CURSOR_CLASS);
        cursor.set_text_content(Some("|"));
        _ = el.append_child(&cursor);
    }
}
