//! FAIR-lite and SVCC risk scoring.
//!
//! Everything in this crate is a pure function of its inputs. The probability
//! matrix and the default threat map are compile-time constants.

pub mod cliff;
pub mod error;
pub mod fair;
pub mod input;
pub mod matrix;
pub mod report;
pub mod svcc;
pub mod threats;

pub use error::InputError;
pub use input::{RiskInputs, RiskPayload};
pub use matrix::{ResistanceStrength, ThreatCapability};
pub use report::{calculate, RiskReport};
pub use threats::default_threats;
