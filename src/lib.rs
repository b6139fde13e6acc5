//! Supplier proposal ranking for procurement quotes.
//!
//! - **Decision matrix** ([`matrix`]): normalizes each proposal's price,
//!   delivery time, shipping cost, warranty, reputation, and service level
//!   to a 0–100 scale, combines them with configurable weights, and ranks
//!   the compared set deterministically.
//! - **Weight templates** ([`templates`]): named weight presets owned by
//!   a tenant or shared system-wide, with default resolution per tenant.
//!
//! # Architecture
//!
//! Scoring is a pure function over explicit inputs. Fetching proposals
//! and templates from the hosted backend is the caller's job; the
//! [`templates::TemplateStore`] trait is the seam for that adapter.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on all data types.
//! - `parallel`: per-proposal rows computed with rayon.
//! - `wasm`: `scoreProposals` / `defaultWeights` JavaScript bindings.

pub mod matrix;
pub mod templates;

#[cfg(feature = "wasm")]
pub mod wasm;
