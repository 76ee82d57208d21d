use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::state::once::OneShot;
use crate::state::scroll::{FrameGate, ScrollView};

#[derive(Clone, Debug, PartialEq)]
pub struct SightOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// Observer plus the callback it calls into; disconnects when dropped.
struct Sighting {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Sighting {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch_once(
    target: &Element,
    options: &SightOptions,
    on_sight: impl Fn() + 'static,
) -> Option<Sighting> {
    let mut gate = OneShot::default();
    let threshold = options.threshold;
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if gate.offer(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                observer.unobserve(&entry.target());
                observer.disconnect();
                on_sight();
                return;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    observer.observe(target);

    Some(Sighting {
        observer,
        _callback: callback,
    })
}

/// True from the first time `node` intersects the viewport, for good.
#[hook]
pub fn use_first_sight(node: NodeRef, options: SightOptions) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, SightOptions)| {
                let sighting = node
                    .cast::<Element>()
                    .and_then(|el| watch_once(&el, options, move || seen.set(true)));
                move || drop(sighting)
            },
            (node, options),
        );
    }

    *seen
}

fn sample() -> ScrollView {
    let config = config::site();
    dom::scroll_metrics()
        .map(|metrics| {
            ScrollView::compute(
                &metrics,
                &dom::sections(),
                config.back_to_top_offset,
                config.section_lookahead,
            )
        })
        .unwrap_or_default()
}

/// Scroll-derived view state, recomputed at most once per animation frame.
#[hook]
pub fn use_scroll_view() -> ScrollView {
    let view = use_state_eq(ScrollView::default);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let teardown = window().map(|window| {
                    let gate = Rc::new(RefCell::new(FrameGate::default()));

                    let frame = {
                        let gate = gate.clone();
                        let view = view.clone();
                        Closure::wrap(Box::new(move || {
                            gate.borrow_mut().release();
                            view.set(sample());
                        }) as Box<dyn FnMut()>)
                    };
                    let frame_fn: Function = frame.as_ref().unchecked_ref::<Function>().clone();

                    let scroll_callback = {
                        let gate = gate.clone();
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            if gate.borrow().is_pending() {
                                return;
                            }
                            if let Ok(id) = window.request_animation_frame(&frame_fn) {
                                gate.borrow_mut().hold(id);
                            }
                        }) as Box<dyn FnMut()>)
                    };

                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Could not listen for scroll events");
                    }

                    // Initial check
                    view.set(sample());

                    move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                        if let Some(id) = gate.borrow_mut().release() {
                            let _ = window.cancel_animation_frame(id);
                        }
                        drop(frame);
                    }
                });

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            (),
        );
    }

    (*view).clone()
}
