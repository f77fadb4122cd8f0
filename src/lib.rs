//! Decorative starfield background for the browser.
//!
//! On load, 100 `div.star` elements with randomized size, position and
//! twinkle duration are appended to the page's `.stars` container. The
//! generation logic lives in [`core`] and runs on any [`StarContainer`];
//! the DOM adapter is only built for `wasm32`.

pub mod constants;
pub mod core;
#[cfg(target_arch = "wasm32")]
mod dom;
pub mod error;

pub use crate::core::{attach_with, populate, FieldParams, Star, StarContainer};
pub use crate::error::StarfieldError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");
    create_stars()
}

/// Append a fresh batch of stars to the `.stars` container.
///
/// A missing container is returned as a JS `Error` and left unhandled. Not
/// guarded against repeat calls: each call adds another batch.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = createStars)]
pub fn create_stars() -> Result<(), JsValue> {
    attach(&FieldParams::default()).map(|_| ()).map_err(|e| {
        log::error!("createStars failed: {:#}", e);
        js_sys::Error::new(&format!("{:#}", e)).into()
    })
}

#[cfg(target_arch = "wasm32")]
fn attach(params: &FieldParams) -> anyhow::Result<usize> {
    use anyhow::Context;

    let document = dom::window_document()?;
    let appended = attach_with(
        |selector| dom::DomContainer::locate(&document, selector),
        &mut rand::thread_rng(),
        params,
    )
    .with_context(|| format!("attaching stars to {}", params.selector))?;
    log::info!("[stars] appended {} to {}", appended, params.selector);
    Ok(appended)
}
