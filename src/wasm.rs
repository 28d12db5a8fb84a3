//! WebAssembly bindings.
//!
//! A thin adapter over [`Planner`] for JavaScript hosts, enabled by the
//! `wasm` cargo feature. Inputs cross the boundary as plain numbers and
//! a workload name; results come back as one structured object
//! converted with `serde-wasm-bindgen`. No decision logic lives here.

use wasm_bindgen::prelude::*;

use crate::inputs::PlannerInputs;
use crate::planner::{Planner, PlannerConfig, Recommendation};
use crate::rules::RuleExplanation;

/// The combined answer returned to JavaScript.
#[derive(serde::Serialize)]
struct PlanAnswer {
    recommendation: Recommendation,
    rules: RuleExplanation,
}

/// JavaScript-facing planner handle.
#[wasm_bindgen]
pub struct WasmPlanner {
    inner: Planner,
}

#[wasm_bindgen]
impl WasmPlanner {
    /// Creates a planner with the default thresholds and weights.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPlanner {
        WasmPlanner {
            inner: Planner::default(),
        }
    }

    /// Creates a planner from a configuration object with the same
    /// shape as the serialized `PlannerConfig`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<WasmPlanner, JsValue> {
        let config: PlannerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let inner = Planner::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmPlanner { inner })
    }

    /// Produces a recommendation for raw inputs.
    ///
    /// `workload` must be one of the display names: `"AI Training"`,
    /// `"Web Services"`, `"Storage"`, or `"Mixed"`. Invalid inputs
    /// reject with the validation message.
    pub fn recommend(
        &self,
        racks: u32,
        servers: u32,
        budget_usd: f64,
        power_kw: f64,
        workload: &str,
    ) -> Result<JsValue, JsValue> {
        let inputs = PlannerInputs::from_raw(racks, servers, budget_usd, power_kw, workload)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let (recommendation, rules) = self.inner.recommend(&inputs);
        let answer = PlanAnswer {
            recommendation,
            rules,
        };
        serde_wasm_bindgen::to_value(&answer).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmPlanner {
    fn default() -> Self {
        Self::new()
    }
}
