// WebAssembly bindings for the calculator
use crate::display::{Config, DisplayConfig};
use crate::notation;
use crate::operation::{self, Operation};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct CayleyWasm {
    display: DisplayConfig,
}

impl Default for CayleyWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CayleyWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }

    /// Build from TOML config content (same format as cayley.toml)
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<CayleyWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            display: config.display,
        })
    }

    /// Apply an operation by name ("add", "subtract", "multiply", "divide")
    /// Returns the formatted result, e.g. "5 + 1i"
    #[wasm_bindgen]
    pub fn operate(&self, name: &str, p: &str, q: &str) -> Result<String, JsValue> {
        let op = parse_operation(name)?;
        let evaluation = operation::evaluate(op, p, q, &self.display)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(evaluation.formatted)
    }

    /// Same as `operate`, returning the full evaluation as a JSON string
    #[wasm_bindgen]
    pub fn evaluate(&self, name: &str, p: &str, q: &str) -> Result<String, JsValue> {
        let op = parse_operation(name)?;
        let evaluation = operation::evaluate(op, p, q, &self.display)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&evaluation)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize evaluation: {}", e)))
    }

    /// Parse a notation string
    /// Returns JSON array of {"unit": ..., "coefficient": ...}
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<String, JsValue> {
        let number =
            notation::parse_and_build(text).map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&number)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize number: {}", e)))
    }

    /// Coefficients of a notation string in basis order
    #[wasm_bindgen]
    pub fn coefficients(&self, text: &str) -> Result<js_sys::Float64Array, JsValue> {
        let number =
            notation::parse_and_build(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(js_sys::Float64Array::from(number.coefficients().as_slice()))
    }

    /// True when the number's dimension is a power of two
    #[wasm_bindgen]
    pub fn is_valid(&self, text: &str) -> Result<bool, JsValue> {
        let number =
            notation::parse_and_build(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(number.is_valid_dimension())
    }

    /// Re-render a notation string, optionally at fixed decimals
    #[wasm_bindgen]
    pub fn format(&self, text: &str, decimals: Option<u32>) -> Result<String, JsValue> {
        let number =
            notation::parse_and_build(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(notation::format(&number, decimals.map(|d| d as usize)))
    }
}

fn parse_operation(name: &str) -> Result<Operation, JsValue> {
    name.parse::<Operation>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
