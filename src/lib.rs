//! ASCII Heart core crate.
//!
//! Generates ASCII heart art behind a scramble-text loader and, once per
//! session after the first completed generation, runs a sequential yes/no
//! question flow whose "No" button dodges the pointer. The interaction rules
//! (generation phases, the one-shot question gate, cursor advancement, dodge
//! geometry, scramble frames) live in pure modules under `widget` and are
//! natively testable; `widget`'s browser layer is a thin web-sys shell that
//! owns the DOM, the timers and the listeners.

use wasm_bindgen::prelude::*;

pub mod heart;
pub mod rng;
pub mod widget;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Shared immutable datasets
// -----------------------------------------------------------------------------

/// Questions asked once per session, in order, after the first generation
/// completes. The flow ends after the last affirmative answer and never
/// restarts.
pub const QUESTIONS: &[&str] = &[
    "Do you smile when you see my name pop up?",
    "Have you ever imagined us on a romantic getaway?",
    "Would you let me steal your hoodie?",
    "Do you think we'd make a cute couple?",
    "Have you ever blushed because of something I said?",
];

/// Symbol alphabet the scramble loader samples from, one cell at a time.
/// ASCII only, so frames can be built byte-wise.
pub const SCRAMBLE_GLYPHS: &str = "-=*/+<>!@#$%^&()_{}[]?|";

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Mounts the widget into `document.body` and kicks off the first generation.
/// Safe to call once per page; a second call is a no-op while the widget is
/// already mounted.
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    widget::mount_app()
}
