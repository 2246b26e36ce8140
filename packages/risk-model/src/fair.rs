//! FAIR-lite annualized loss model.

use crate::error::InputError;
use crate::input::RiskInputs;
use crate::matrix;

/// Secondary loss (response, fines, reputation) as a share of primary loss.
pub const SECONDARY_LOSS_RATIO: f64 = 0.5;

/// Unrounded output of the loss model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FairAnalysis {
    pub vulnerability: f64,
    /// Loss event frequency per year.
    pub lef: f64,
    pub primary_loss: f64,
    pub secondary_loss: f64,
    /// Primary plus secondary loss for a single event.
    pub single_loss_expectancy: f64,
    /// Annualized loss expectancy.
    pub ale: f64,
}

impl FairAnalysis {
    /// Fails when a finite but huge asset value or frequency pushes a loss
    /// figure past `f64::MAX`.
    pub fn compute(inputs: &RiskInputs) -> Result<Self, InputError> {
        let vulnerability = matrix::vulnerability(inputs.tcap, inputs.rs);
        let lef = inputs.tef * vulnerability;

        let primary_loss = inputs.asset_value;
        let secondary_loss = primary_loss * SECONDARY_LOSS_RATIO;
        let single_loss_expectancy = primary_loss + secondary_loss;
        if !single_loss_expectancy.is_finite() {
            return Err(InputError::LossOverflow {
                field: "asset_value",
                quantity: "single loss expectancy",
            });
        }

        let ale = lef * single_loss_expectancy;
        if !ale.is_finite() {
            return Err(InputError::LossOverflow {
                field: "tef",
                quantity: "annualized loss expectancy",
            });
        }

        Ok(Self {
            vulnerability,
            lef,
            primary_loss,
            secondary_loss,
            single_loss_expectancy,
            ale,
        })
    }
}
