use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::{Event, Key, Lifecycle, LifecycleError, WindowHandle};

/// The browser page has a single canvas, so every close refers to it.
const CANVAS_WINDOW: WindowHandle = WindowHandle::new(0);

fn to_js(err: LifecycleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct DwarvenWasm {
    lifecycle: Lifecycle,
}

#[wasm_bindgen]
impl DwarvenWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DwarvenWasm, JsValue> {
        let mut lifecycle = Lifecycle::new();
        lifecycle.init().map_err(to_js)?;
        Ok(DwarvenWasm { lifecycle })
    }

    #[wasm_bindgen]
    pub fn key_down(&mut self, evt: KeyboardEvent) -> Result<(), JsValue> {
        if evt.repeat() {
            return Ok(());
        }
        let Some(key) = Key::from_dom_key(&evt.key()) else {
            return Ok(());
        };
        self.lifecycle
            .receive_event(&Event::key_down(key))
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn window_close(&mut self) -> Result<(), JsValue> {
        self.lifecycle.on_window_close(CANVAS_WINDOW).map_err(to_js)
    }

    /// `true` while the page should keep requesting animation frames.
    #[wasm_bindgen]
    pub fn update(&mut self) -> Result<bool, JsValue> {
        let result = self.lifecycle.update().map_err(to_js)?;
        Ok(!result.should_stop())
    }

    #[wasm_bindgen]
    pub fn kill(&mut self) -> Result<(), JsValue> {
        self.lifecycle.kill().map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn title(&self) -> String {
        self.lifecycle.title()
    }
}
