//! Page glue: builds the DOM, owns the single game cell and routes clicks and
//! form submits into `GameState` transitions.
//!
//! Listeners are attached once to the root element and use delegation, so the
//! info and input panels can be re-rendered freely.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, window};

use crate::catalog::{self, CATALOG};
use crate::config::GameConfig;
use crate::console_log;
use crate::game::{GameState, GuessOutcome};
use crate::rng::DefaultRandom;
use crate::view::{GameView, mode_button_label, render_info, render_input};

const ROOT_ID: &str = "gmc-root";
const INFO_ID: &str = "gmc-info";
const INPUT_ID: &str = "gmc-input";
const NEW_GAME_ID: &str = "gmc-new-game";
const MODE_ID: &str = "gmc-mode";
const GUESS_INPUT_ID: &str = "guess-input";

struct App {
    state: GameState,
    rng: DefaultRandom,
    // Input panel is only replaced when its markup changes so the text field keeps focus.
    last_input: Option<String>,
}

enum Action {
    NewGame,
    ToggleMode,
    Guess(String),
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

pub fn mount(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    // Create / reuse the root container; a second mount starts over in place.
    let root: Element = match doc.get_element_by_id(ROOT_ID) {
        Some(el) => el,
        None => {
            let el = doc.create_element("div")?;
            el.set_id(ROOT_ID);
            el.set_class_name("App");
            el.set_attribute("style", "font-family:sans-serif; max-width:640px; margin:0 auto; padding:16px; text-align:center;").ok();
            body.append_child(&el)?;
            el
        }
    };
    if !root.has_attribute("data-gmc-bound") {
        attach_listeners(&root)?;
        root.set_attribute("data-gmc-bound", "")?;
    }
    root.set_inner_html(&format!(
        concat!(
            "<header class=\"App-header\"><h1>Guess My Cheese!</h1></header>",
            "<main>",
            "<div id=\"{info}\"></div>",
            "<div id=\"{input}\"></div>",
            "<button type=\"button\" id=\"{new_game}\">New Game</button>",
            "<button type=\"button\" id=\"{mode}\"></button>",
            "</main>"
        ),
        info = INFO_ID,
        input = INPUT_ID,
        new_game = NEW_GAME_ID,
        mode = MODE_ID,
    ));

    let mut app = App {
        state: GameState::new(config),
        rng: DefaultRandom::new(),
        last_input: None,
    };
    render(&mut app, &doc)?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    console_log!("[Game] mounted");
    Ok(())
}

fn attach_listeners(root: &Element) -> Result<(), JsValue> {
    // Clicks: New Game, mode toggle and easy-mode answer buttons.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let Some(button) = evt
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("button").ok().flatten())
            else {
                return;
            };
            let action = if let Some(name) = button.get_attribute("data-guess") {
                // Only catalog names are valid answer buttons.
                match catalog::find(&name) {
                    Some(item) => Action::Guess(item.name.to_string()),
                    None => return,
                }
            } else {
                match button.id().as_str() {
                    NEW_GAME_ID => Action::NewGame,
                    MODE_ID => Action::ToggleMode,
                    _ => return,
                }
            };
            dispatch(action);
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Hard-mode form submit (bubbles up to the root).
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            evt.prevent_default();
            let Some(input) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(GUESS_INPUT_ID))
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let guess = input.value();
            input.set_value("");
            dispatch(Action::Guess(guess));
            input.focus().ok();
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn dispatch(action: Action) {
    APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(app) = slot.as_mut() else {
            return;
        };
        match action {
            Action::NewGame => {
                let mode = app.state.mode();
                app.state = app.state.start_new_game(mode, &mut app.rng);
                console_log!("[Game] new game ({:?})", mode);
            }
            Action::ToggleMode => {
                app.state = app.state.toggle_mode_with(&mut app.rng);
                console_log!("[Game] mode -> {:?}", app.state.mode());
            }
            Action::Guess(raw) => {
                let (next, outcome) = app.state.submit_guess(&raw, &mut app.rng);
                app.state = next;
                match outcome {
                    GuessOutcome::NoRound => console_log!("[Game] guess ignored, no round"),
                    GuessOutcome::Correct { name, points } => {
                        console_log!("[Game] {} correct, +{} (streak {})", name, points, app.state.streak())
                    }
                    GuessOutcome::Wrong { tries_remaining } => {
                        console_log!("[Game] wrong guess {:?}, {} tries left", raw, tries_remaining)
                    }
                    GuessOutcome::OutOfTries { name } => {
                        console_log!("[Game] out of tries on {}, streak reset", name)
                    }
                }
            }
        }
        if let Some(doc) = window().and_then(|w| w.document()) {
            if let Err(e) = render(app, &doc) {
                console_log!("[Game] render failed: {:?}", e);
            }
        }
    });
}

fn render(app: &mut App, doc: &Document) -> Result<(), JsValue> {
    let view = GameView::capture(&app.state);
    set_html(doc, INFO_ID, &render_info(&view))?;
    let input = render_input(&view, &CATALOG);
    if app.last_input.as_deref() != Some(input.as_str()) {
        set_html(doc, INPUT_ID, &input)?;
        app.last_input = Some(input);
    }
    if let Some(btn) = doc.get_element_by_id(MODE_ID) {
        btn.set_text_content(Some(mode_button_label(view.mode)));
    }
    Ok(())
}

fn set_html(doc: &Document, id: &str, html: &str) -> Result<(), JsValue> {
    let el = doc
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?;
    el.set_inner_html(html);
    Ok(())
}
