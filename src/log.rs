//! Browser console logging. Compiled out on native targets so the game logic
//! stays testable with plain `cargo test`.

#[doc(hidden)]
pub fn write(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// `console_log!("[Game] won {}", name)` -> `console.log` in the browser.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::log::write(&format!($($arg)*))
    };
}
