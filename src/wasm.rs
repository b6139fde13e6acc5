//! JavaScript bindings for the browser frontend.

use wasm_bindgen::prelude::*;

use crate::matrix::{DecisionMatrixEngine, DecisionMatrixWeights, Proposal};

/// Scores an array of proposals with the given weights.
///
/// `proposals` is an array of proposal objects and `weights` a weights
/// object; omitted weight fields take the built-in preset. Returns the
/// ranked result array, best first. Validation failures are thrown as
/// `Error` with a human-readable message.
#[wasm_bindgen(js_name = scoreProposals)]
pub fn score_proposals(proposals: JsValue, weights: JsValue) -> Result<JsValue, JsError> {
    let proposals: Vec<Proposal> = serde_wasm_bindgen::from_value(proposals)?;
    let weights: DecisionMatrixWeights = if weights.is_undefined() || weights.is_null() {
        DecisionMatrixWeights::default()
    } else {
        serde_wasm_bindgen::from_value(weights)?
    };

    let results = DecisionMatrixEngine::new().score(&proposals, &weights)?;
    Ok(serde_wasm_bindgen::to_value(&results)?)
}

/// The built-in weight preset as a plain object.
#[wasm_bindgen(js_name = defaultWeights)]
pub fn default_weights() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&DecisionMatrixWeights::default())?)
}
