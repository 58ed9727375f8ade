//! WASM bindings for slot-engine.
//!
//! Exposes one [`SchedulerHandle`] per page or session to JavaScript via
//! `wasm-bindgen`. The handle owns its schedule; there is no global instance.
//! Results cross the boundary as JSON strings so the page only has to
//! `JSON.parse` and render them.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```
//!
//! ## From JavaScript
//!
//! ```js
//! const scheduler = new SchedulerHandle();            // 08:00-18:00
//! const conflicts = JSON.parse(scheduler.addEvent("Standup", "09:00", "10:00"));
//! const events = JSON.parse(scheduler.events());
//! ```

use serde::Serialize;
use slot_engine::{Event, Scheduler, SchedulerConfig, SchedulerError};
use wasm_bindgen::prelude::*;

fn to_js_error(e: SchedulerError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse an optional config JSON such as `{"working_hour_end":"17:00"}`.
///
/// Missing fields fall back to 08:00, 18:00 and a 30-minute step.
fn parse_config(config_json: Option<&str>) -> Result<SchedulerConfig, JsValue> {
    match config_json {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {}", e))),
        _ => Ok(SchedulerConfig::default()),
    }
}

/// A scheduler owned by the JavaScript caller.
#[wasm_bindgen]
pub struct SchedulerHandle {
    inner: Scheduler,
}

#[wasm_bindgen]
impl SchedulerHandle {
    /// Create an empty schedule.
    ///
    /// `config_json` may set `working_hour_start`, `working_hour_end` (both
    /// `"HH:MM"`) and `slot_step_minutes`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SchedulerHandle, JsValue> {
        let config = parse_config(config_json.as_deref())?;
        let inner = Scheduler::with_config(config).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Add an event and return every conflict in the schedule as JSON.
    ///
    /// Each conflict has `earlier`, `later`, `overlap_minutes` and up to three
    /// `suggestions` of `{start, end}`. Throws on a malformed time, a blank
    /// name, or an end time not after the start time; the schedule is left
    /// unchanged in that case.
    #[wasm_bindgen(js_name = "addEvent")]
    pub fn add_event(&mut self, name: &str, start: &str, end: &str) -> Result<String, JsValue> {
        let conflicts = self.inner.add(name, start, end).map_err(to_js_error)?;
        to_json(&conflicts)
    }

    /// The schedule as a JSON array ordered by start time.
    pub fn events(&self) -> Result<String, JsValue> {
        to_json(self.inner.events())
    }

    /// Conflicts in the current schedule as JSON, without adding anything.
    pub fn conflicts(&self) -> Result<String, JsValue> {
        to_json(&self.inner.conflicts())
    }

    /// Free slots for a prospective event as a JSON array of `{start, end}`.
    #[wasm_bindgen(js_name = "findAlternativeSlots")]
    pub fn find_alternative_slots(
        &self,
        name: &str,
        start: &str,
        end: &str,
    ) -> Result<String, JsValue> {
        let event = Event::parse(name, start, end).map_err(to_js_error)?;
        to_json(&self.inner.find_alternative_slots(&event))
    }

    /// Number of scheduled events.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }
}
