// Browser smoke tests for the wasm entrypoint. Compiled only on wasm32;
// run with `wasm-pack test --headless --firefox` (or --chrome).

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlButtonElement;

wasm_bindgen_test_configure!(run_in_browser);

// One combined test: everything here runs in the same task as the mount, so
// no timer can fire between the assertions.
#[wasm_bindgen_test]
fn mounting_builds_the_page_and_starts_loading() {
    ascii_heart::start_app().expect("widget must mount");
    ascii_heart::start_app().expect("mounting twice must be a no-op");

    let doc = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    let ids = [
        "ah-root",
        "ah-header",
        "ah-panel",
        "ah-loader",
        "ah-scramble",
        "ah-art",
        "ah-generate",
        "ah-footer",
    ];
    for id in ids {
        assert!(doc.get_element_by_id(id).is_some(), "missing element #{}", id);
    }

    // Mounting kicks off the first generation at once: loader up, art down,
    // generate button busy.
    let loader_style = doc
        .get_element_by_id("ah-loader")
        .unwrap()
        .get_attribute("style")
        .unwrap_or_default();
    assert!(
        !loader_style.contains("display:none"),
        "loader must be visible during boot"
    );
    let art_style = doc
        .get_element_by_id("ah-art")
        .unwrap()
        .get_attribute("style")
        .unwrap_or_default();
    assert!(
        art_style.contains("display:none"),
        "art must stay hidden until the reveal"
    );

    let generate: HtmlButtonElement = doc
        .get_element_by_id("ah-generate")
        .unwrap()
        .dyn_into()
        .expect("generate control is a button");
    assert!(generate.disabled(), "generate must be disabled while loading");
    assert_eq!(generate.text_content().as_deref(), Some("Creating..."));

    let frame = doc
        .get_element_by_id("ah-scramble")
        .unwrap()
        .text_content()
        .unwrap_or_default();
    assert_eq!(frame.lines().count(), 15, "scramble frame must be 15 rows");
    assert!(
        frame.lines().all(|l| l.chars().count() == 40),
        "scramble rows must be 40 cells"
    );
}
