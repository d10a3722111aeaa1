//! Guess My Cheese core crate.
//!
//! The game rules live in `game` as a plain value type with pure transitions;
//! `view` turns a state into markup and `dom` wires the page to the rules.
//! Only `dom` touches browser APIs, so everything else runs under native
//! `cargo test`.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
mod dom;
pub mod game;
#[doc(hidden)]
pub mod log;
pub mod rng;
pub mod view;

pub use catalog::{CATALOG, Item};
pub use config::GameConfig;
pub use game::{GameState, GuessOutcome, Mode, Round};
pub use view::GameView;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the game into the page with the classic rules.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    dom::mount(GameConfig::default())
}

/// Mount the game with JSON overrides, e.g. `{"reveal_answer": false}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("invalid game config: {e}")))?;
    dom::mount(config)
}

/// Catalog names in display order, for hosts building their own buttons.
#[wasm_bindgen]
pub fn cheese_names() -> Vec<String> {
    CATALOG.iter().map(|item| item.name.to_string()).collect()
}
