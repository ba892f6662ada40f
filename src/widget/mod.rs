//! Browser layer: page construction, listeners and timers.
//!
//! All mutable state lives in one thread-local cell; every timer and event
//! callback re-enters through it, one borrow at a time. Timers and listeners
//! are gloo handles that cancel themselves on drop, so ownership is the
//! teardown story: the widget state owns the page-level handles, and each
//! question's modal owns its own DOM subtree, listeners and mount timer.

use std::cell::RefCell;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement};

pub mod dodge;
pub mod flow;
pub mod scramble;
pub mod session;

use crate::QUESTIONS;
use crate::heart::{ArtSource, HeartArtist};
use crate::rng::{Lcg, entropy_seeded};
use dodge::{CardBounds, DodgePoint, OFFSCREEN, dodge_point};
use session::Session;

/// Simulated latency of one generation cycle.
const GENERATION_DELAY_MS: u32 = 750;
/// Pause between the first reveal and the question flow opening.
const FLOW_ACTIVATION_DELAY_MS: u32 = 500;
/// Refresh rate of the scramble loader.
const SCRAMBLE_FRAME_MS: u32 = 100;
/// Delay before a freshly mounted "No" button first jumps into place.
const MOUNT_DODGE_DELAY_MS: u32 = 100;
/// How long the copy button wears its acknowledgment glyph.
const COPY_NOTICE_MS: u32 = 2000;

const GENERATE_LABEL: &str = "Generate New Heart";
const GENERATE_BUSY_LABEL: &str = "Creating...";
const COPY_GLYPH: &str = "⧉";
const COPIED_GLYPH: &str = "✓";

// Base styles for elements that toggle; hiding rewrites the attribute with a
// display override appended, so the base must carry its own display value.
const LOADER_STYLE: &str = "display:flex;flex-direction:column;align-items:center;gap:12px;";
const ART_STYLE: &str = "margin:0;font-family:monospace;font-size:13px;line-height:1.25;\
    color:#f472b6;white-space:pre;text-shadow:0 0 8px rgba(236,72,153,0.35);";
const COPY_BTN_STYLE: &str = "position:absolute;top:10px;right:10px;width:34px;height:30px;\
    background:transparent;border:1px solid rgba(236,72,153,0.4);border-radius:6px;\
    color:#f9a8d4;font-size:14px;cursor:pointer;";
// Width and height match the 90x60 footprint the dodge math reserves.
const NO_BTN_STYLE: &str = "position:absolute;width:90px;height:60px;background:#374151;\
    border:1px solid #4b5563;border-radius:8px;color:#d1d5db;font-size:15px;cursor:pointer;\
    transition:top 0.3s ease, left 0.3s ease;";

/// Fixed page elements the callbacks keep poking at.
struct Ui {
    generate_btn: HtmlButtonElement,
    copy_btn: HtmlButtonElement,
    loader: Element,
    scramble_pre: Element,
    art_pre: Element,
}

/// One question's overlay. Dropping it removes the DOM subtree and, with
/// it, the listeners and the pending mount dodge.
struct Modal {
    overlay: Element,
    card: Element,
    no_btn: Element,
    _listeners: Vec<EventListener>,
    _mount_timer: Timeout,
}

impl Drop for Modal {
    fn drop(&mut self) {
        self.overlay.remove();
    }
}

struct WidgetState {
    session: Session,
    artist: HeartArtist<Lcg>,
    rng: Lcg,
    doc: Document,
    ui: Ui,
    modal: Option<Modal>,
    _listeners: Vec<EventListener>,
    _scramble_timer: Option<Interval>,
    _reveal_timer: Option<Timeout>,
    _flow_timer: Option<Timeout>,
    _copy_timer: Option<Timeout>,
}

thread_local! {
    static WIDGET_STATE: RefCell<Option<WidgetState>> = RefCell::new(None);
}

/// Builds the page inside `document.body` and starts the first generation.
/// Calling again while mounted is a no-op.
pub fn mount_app() -> Result<(), JsValue> {
    if WIDGET_STATE.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    // A leftover tree from an earlier mount (hot reload) gets replaced.
    if let Some(stale) = doc.get_element_by_id("ah-root") {
        stale.remove();
    }

    let ui = build_page(&doc, &body)?;
    let listeners = vec![
        EventListener::new(&ui.generate_btn, "click", |_| request_generation()),
        EventListener::new(&ui.copy_btn, "click", |_| copy_art()),
    ];

    let state = WidgetState {
        session: Session::new(QUESTIONS.len()),
        artist: HeartArtist::new(entropy_seeded()),
        rng: entropy_seeded(),
        doc,
        ui,
        modal: None,
        _listeners: listeners,
        _scramble_timer: None,
        _reveal_timer: None,
        _flow_timer: None,
        _copy_timer: None,
    };
    WIDGET_STATE.with(|cell| *cell.borrow_mut() = Some(state));

    request_generation();
    Ok(())
}

fn styled(doc: &Document, tag: &str, id: &str, style: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_attribute("id", id)?;
    el.set_attribute("style", style)?;
    Ok(el)
}

fn build_page(doc: &Document, body: &HtmlElement) -> Result<Ui, JsValue> {
    let root = styled(
        doc,
        "div",
        "ah-root",
        "position:relative;min-height:100vh;margin:0;padding:32px 16px;box-sizing:border-box;\
         display:flex;flex-direction:column;align-items:center;justify-content:center;gap:26px;\
         background:#111827;color:#f9a8d4;font-family:sans-serif;overflow:hidden;",
    )?;

    let glow = styled(
        doc,
        "div",
        "ah-glow",
        "position:absolute;inset:0;pointer-events:none;\
         background:radial-gradient(circle at 50% 38%,rgba(236,72,153,0.16),transparent 62%);",
    )?;
    root.append_child(&glow)?;

    let header = styled(doc, "header", "ah-header", "position:relative;text-align:center;")?;
    let title = doc.create_element("h1")?;
    title.set_attribute(
        "style",
        "margin:0;font-size:28px;font-weight:700;letter-spacing:3px;text-transform:uppercase;\
         color:#f472b6;",
    )?;
    title.set_text_content(Some("ASCII Heart Generator"));
    header.append_child(&title)?;
    let tagline = doc.create_element("p")?;
    tagline.set_attribute(
        "style",
        "margin:6px 0 0;font-size:13px;letter-spacing:1px;color:#9ca3af;",
    )?;
    tagline.set_text_content(Some("Crafted with love & code"));
    header.append_child(&tagline)?;
    root.append_child(&header)?;

    let panel = styled(
        doc,
        "div",
        "ah-panel",
        "position:relative;display:flex;align-items:center;justify-content:center;\
         min-height:300px;min-width:min(90vw,420px);padding:32px 40px;\
         background:rgba(0,0,0,0.4);border:1px solid rgba(236,72,153,0.3);border-radius:12px;",
    )?;

    let copy_btn = styled(doc, "button", "ah-copy", &style_with_display(COPY_BTN_STYLE, false))?
        .dyn_into::<HtmlButtonElement>()?;
    copy_btn.set_attribute("aria-label", "Copy to clipboard")?;
    copy_btn.set_text_content(Some(COPY_GLYPH));
    panel.append_child(&copy_btn)?;

    let loader = styled(doc, "div", "ah-loader", &style_with_display(LOADER_STYLE, false))?;
    let scramble_pre = styled(
        doc,
        "pre",
        "ah-scramble",
        "margin:0;font-family:monospace;font-size:12px;line-height:1.2;\
         color:rgba(236,72,153,0.7);white-space:pre;",
    )?;
    loader.append_child(&scramble_pre)?;
    let caption = styled(
        doc,
        "div",
        "ah-loader-caption",
        "font-size:13px;letter-spacing:1px;color:#9ca3af;",
    )?;
    caption.set_text_content(Some("Generating your heart..."));
    loader.append_child(&caption)?;
    panel.append_child(&loader)?;

    let art_pre = styled(doc, "pre", "ah-art", &style_with_display(ART_STYLE, false))?;
    panel.append_child(&art_pre)?;
    root.append_child(&panel)?;

    let generate_btn = styled(
        doc,
        "button",
        "ah-generate",
        "position:relative;padding:12px 28px;background:#ec4899;border:none;border-radius:8px;\
         color:#fff;font-size:15px;font-weight:600;letter-spacing:1px;cursor:pointer;",
    )?
    .dyn_into::<HtmlButtonElement>()?;
    generate_btn.set_text_content(Some(GENERATE_LABEL));
    root.append_child(&generate_btn)?;

    let footer = styled(
        doc,
        "footer",
        "ah-footer",
        "position:relative;font-size:12px;color:#6b7280;",
    )?;
    footer.set_text_content(Some("Find your perfect ASCII heart."));
    root.append_child(&footer)?;

    body.append_child(&root)?;

    Ok(Ui {
        generate_btn,
        copy_btn,
        loader,
        scramble_pre,
        art_pre,
    })
}

/// Starts a cycle unless one is in flight: scramble loader up immediately,
/// art revealed when the generation timer fires.
fn request_generation() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };
        if !state.session.begin_generation() {
            return;
        }

        state.ui.generate_btn.set_disabled(true);
        state.ui.generate_btn.set_text_content(Some(GENERATE_BUSY_LABEL));
        set_shown(&state.ui.art_pre, ART_STYLE, false);
        set_shown(&state.ui.copy_btn, COPY_BTN_STYLE, false);
        set_shown(&state.ui.loader, LOADER_STYLE, true);

        let frame = scramble::scramble_frame(&mut state.rng);
        state.ui.scramble_pre.set_text_content(Some(&frame));
        state._scramble_timer = Some(Interval::new(SCRAMBLE_FRAME_MS, scramble_tick));
        state._reveal_timer = Some(Timeout::new(GENERATION_DELAY_MS, finish_generation));
    });
}

fn scramble_tick() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };
        if !state.session.is_generating() {
            return;
        }
        let frame = scramble::scramble_frame(&mut state.rng);
        state.ui.scramble_pre.set_text_content(Some(&frame));
    });
}

/// Generation timer action: swap the loader for fresh art and, on the
/// session's first completion, schedule the question flow.
fn finish_generation() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };

        let art = state.artist.generate_art();
        let first = state.session.finish_generation(art);
        state._scramble_timer = None;
        state._reveal_timer = None;
        state._copy_timer = None;

        // New art goes into the DOM before the loader comes down.
        state.ui.art_pre.set_text_content(Some(state.session.art().unwrap_or("")));
        set_shown(&state.ui.loader, LOADER_STYLE, false);
        set_shown(&state.ui.art_pre, ART_STYLE, true);
        state.ui.copy_btn.set_text_content(Some(COPY_GLYPH));
        set_shown(&state.ui.copy_btn, COPY_BTN_STYLE, true);
        state.ui.generate_btn.set_disabled(false);
        state.ui.generate_btn.set_text_content(Some(GENERATE_LABEL));

        if first {
            state._flow_timer = Some(Timeout::new(FLOW_ACTIVATION_DELAY_MS, open_questions));
        }
    });
}

/// Flow timer action: open the modal on the first question.
fn open_questions() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };
        state._flow_timer = None;
        state.session.activate_questions();
        let Some(idx) = state.session.current_question() else { return };
        if let Ok(modal) = build_modal(&state.doc, idx) {
            state.modal = Some(modal);
        }
    });
}

/// One question's overlay: the card, the static Yes and the dodging No.
/// Every question gets a fresh instance, so the No button starts off-screen
/// again and jumps into place when its mount timer fires.
fn build_modal(doc: &Document, question: usize) -> Result<Modal, JsValue> {
    let overlay = styled(
        doc,
        "div",
        "ah-modal",
        "position:fixed;inset:0;display:flex;align-items:center;justify-content:center;\
         background:rgba(0,0,0,0.7);z-index:50;",
    )?;

    let card = styled(
        doc,
        "div",
        "ah-card",
        "position:relative;width:min(90vw,430px);height:240px;padding:28px;\
         box-sizing:border-box;background:#1f2937;border:1px solid rgba(236,72,153,0.5);\
         border-radius:14px;overflow:hidden;",
    )?;

    let text = doc.create_element("p")?;
    text.set_attribute(
        "style",
        "margin:0;font-size:16px;line-height:1.5;text-align:center;color:#f9a8d4;",
    )?;
    text.set_text_content(QUESTIONS.get(question).copied());
    card.append_child(&text)?;

    let yes_btn = styled(
        doc,
        "button",
        "ah-yes",
        "position:absolute;left:28px;bottom:24px;padding:10px 34px;background:#ec4899;\
         border:none;border-radius:8px;color:#fff;font-size:15px;font-weight:600;cursor:pointer;",
    )?;
    yes_btn.set_text_content(Some("Yes"));
    card.append_child(&yes_btn)?;

    let no_btn = styled(doc, "button", "ah-no", &no_btn_style(OFFSCREEN))?;
    no_btn.set_text_content(Some("No"));
    card.append_child(&no_btn)?;

    overlay.append_child(&card)?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&overlay)?;

    let listeners = vec![
        EventListener::new(&yes_btn, "click", |_| advance_questions()),
        EventListener::new(&no_btn, "mouseenter", |_| dodge_no_button()),
        // touchstart needs passive:false so the dodge can swallow the tap
        // before a click is synthesized on the old position.
        EventListener::new_with_options(
            &no_btn,
            "touchstart",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            |event: &Event| {
                event.prevent_default();
                dodge_no_button();
            },
        ),
    ];
    let mount_timer = Timeout::new(MOUNT_DODGE_DELAY_MS, dodge_no_button);

    Ok(Modal {
        overlay,
        card,
        no_btn,
        _listeners: listeners,
        _mount_timer: mount_timer,
    })
}

/// Moves the No button to a fresh random spot inside its card.
fn dodge_no_button() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };
        let Some(modal) = state.modal.as_ref() else { return };
        let bounds = CardBounds {
            width: f64::from(modal.card.client_width()),
            height: f64::from(modal.card.client_height()),
        };
        let point = dodge_point(bounds, &mut state.rng);
        let _ = modal.no_btn.set_attribute("style", &no_btn_style(point));
    });
}

/// Yes-click action: step the flow and swap in the next question's modal,
/// or take the whole thing down after the last one.
fn advance_questions() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };
        let next = state.session.answer_yes();
        state.modal = None;
        if let Some(idx) = next {
            if let Ok(modal) = build_modal(&state.doc, idx) {
                state.modal = Some(modal);
            }
        }
    });
}

/// Copy-click action: clipboard write plus the acknowledgment glyph, which
/// reverts on a timer or as soon as new art arrives.
fn copy_art() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };
        let Some(text) = state.session.note_copy().map(str::to_owned) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            // Fire and forget; a rejected write keeps the page silent.
            let _ = window.navigator().clipboard().write_text(&text);
        }
        state.ui.copy_btn.set_text_content(Some(COPIED_GLYPH));
        state._copy_timer = Some(Timeout::new(COPY_NOTICE_MS, revert_copy_notice));
    });
}

fn revert_copy_notice() {
    WIDGET_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else { return };
        state._copy_timer = None;
        state.session.clear_copy_note();
        state.ui.copy_btn.set_text_content(Some(COPY_GLYPH));
    });
}

fn set_shown(el: &Element, base: &str, shown: bool) {
    let _ = el.set_attribute("style", &style_with_display(base, shown));
}

fn style_with_display(base: &str, shown: bool) -> String {
    if shown {
        base.to_string()
    } else {
        format!("{base}display:none;")
    }
}

fn no_btn_style(point: DodgePoint) -> String {
    format!("{NO_BTN_STYLE}left:{:.1}px;top:{:.1}px;", point.left, point.top)
}
