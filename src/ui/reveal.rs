use crate::constants::{REVEAL_CLASS, REVEAL_INDEX_ATTR, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::core::RevealTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fade in every `.fade-up` element the first time it scrolls into view.
///
/// Revealed elements are unobserved immediately, so the class is added once.
pub fn start(document: &web::Document) -> anyhow::Result<()> {
    let nodes = document
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let count = nodes.length() as usize;
    if count == 0 {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(count, REVEAL_THRESHOLD)));
    let tracker_cb = tracker.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                if tracker_cb
                    .borrow_mut()
                    .on_intersection(index, entry.is_intersecting())
                {
                    _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(tracker.borrow().threshold()));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        _ = el.set_attribute(REVEAL_INDEX_ATTR, &i.to_string());
        observer.observe(&el);
    }
    callback.forget();
    log::info!("[reveal] observing {} elements", count);
    Ok(())
}
