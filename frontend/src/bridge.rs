//! Entry points callable from page markup.

use std::cell::RefCell;

use log::{info, warn};
use wasm_bindgen::prelude::*;

use crate::components::toast::Toaster;

pub const VIDEO_MESSAGE: &str = "Video playback is a demo, there is no video to play yet.";

thread_local! {
    static TOASTER: RefCell<Option<Toaster>> = RefCell::new(None);
}

pub fn register(toaster: Toaster) {
    TOASTER.with(|slot| *slot.borrow_mut() = Some(toaster));
}

pub fn unregister() {
    TOASTER.with(|slot| slot.borrow_mut().take());
}

/// Shows `message` through the mounted toast host, if any.
pub fn toast(message: &str) -> bool {
    TOASTER.with(|slot| match slot.borrow().as_ref() {
        Some(toaster) => {
            toaster.show(message);
            true
        }
        None => false,
    })
}

#[wasm_bindgen(js_name = playVideo)]
pub fn play_video() {
    info!("playVideo requested");
    if !toast(VIDEO_MESSAGE) {
        warn!("playVideo called before the page mounted");
    }
}
