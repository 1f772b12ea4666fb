/// Pallet load planning
///
/// Computes how many pallets a shipment needs when each pallet is limited both
/// by weight capacity and by how many boxes fit on it. Whichever limit asks for
/// more pallets is the binding constraint and decides the plan.
use std::fmt;
use thiserror::Error;

use crate::presets::PalletPreset;

/// Errors raised by the planner
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl PlanError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        PlanError::InvalidInput { field, reason }
    }

    /// Name of the input field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            PlanError::InvalidInput { field, .. } => field,
        }
    }
}

/// Shipment parameters for a single planning call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPlanInput {
    pub total_weight_kg: f64,
    pub boxes_per_pallet: u32,
    pub weight_per_box_kg: f64,
    pub pallet_capacity_kg: f64,
}

/// Outcome of a planning call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPlanResult {
    pub required_pallets: u64,
    pub utilization_percent: f64,
}

/// Which limit determined the pallet count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingConstraint {
    Weight,
    BoxCount,
}

impl BindingConstraint {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weight => "weight capacity",
            Self::BoxCount => "boxes per pallet",
        }
    }
}

impl fmt::Display for BindingConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intermediate figures of a planning call, kept for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanBreakdown {
    /// Pallets needed if only weight capacity mattered
    pub weight_constraint: f64,
    /// Pallets needed if only box count mattered
    pub box_constraint: f64,
    /// The larger of the two constraints
    pub binding: f64,
    /// Total boxes in the shipment, not rounded
    pub total_boxes: f64,
    pub binding_constraint: BindingConstraint,
    pub result: LoadPlanResult,
}

impl LoadPlanInput {
    pub fn new(
        total_weight_kg: f64,
        boxes_per_pallet: u32,
        weight_per_box_kg: f64,
        pallet_capacity_kg: f64,
    ) -> Self {
        Self {
            total_weight_kg,
            boxes_per_pallet,
            weight_per_box_kg,
            pallet_capacity_kg,
        }
    }

    /// Check every precondition, reporting the first field that fails
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.total_weight_kg.is_finite() {
            return Err(PlanError::invalid("total_weight_kg", "must be a finite number"));
        }
        if self.total_weight_kg < 0.0 {
            return Err(PlanError::invalid("total_weight_kg", "must not be negative"));
        }
        if self.boxes_per_pallet == 0 {
            return Err(PlanError::invalid("boxes_per_pallet", "must be greater than zero"));
        }
        if !self.weight_per_box_kg.is_finite() {
            return Err(PlanError::invalid("weight_per_box_kg", "must be a finite number"));
        }
        if self.weight_per_box_kg <= 0.0 {
            return Err(PlanError::invalid("weight_per_box_kg", "must be greater than zero"));
        }
        if !self.pallet_capacity_kg.is_finite() {
            return Err(PlanError::invalid("pallet_capacity_kg", "must be a finite number"));
        }
        if self.pallet_capacity_kg <= 0.0 {
            return Err(PlanError::invalid("pallet_capacity_kg", "must be greater than zero"));
        }
        Ok(())
    }

    /// Replace pallet capacity and boxes per pallet with the preset's values
    pub fn with_preset(self, preset: &PalletPreset) -> Self {
        Self {
            pallet_capacity_kg: preset.capacity_kg,
            boxes_per_pallet: preset.boxes_per_pallet,
            ..self
        }
    }
}

/// Compute the pallet count and utilization for a shipment
pub fn plan(input: &LoadPlanInput) -> Result<LoadPlanResult, PlanError> {
    breakdown(input).map(|b| b.result)
}

/// Compute the plan along with the constraint figures behind it
///
/// Box count is treated as a continuous quantity: partial boxes are not
/// rounded up before dividing by boxes per pallet.
pub fn breakdown(input: &LoadPlanInput) -> Result<PlanBreakdown, PlanError> {
    input.validate()?;

    let weight_constraint = input.total_weight_kg / input.pallet_capacity_kg;
    let total_boxes = input.total_weight_kg / input.weight_per_box_kg;
    let box_constraint = total_boxes / f64::from(input.boxes_per_pallet);

    let (binding, binding_constraint) = if box_constraint > weight_constraint {
        (box_constraint, BindingConstraint::BoxCount)
    } else {
        (weight_constraint, BindingConstraint::Weight)
    };

    // Finite inputs can still overflow the divisions above
    if !binding.is_finite() || binding >= u64::MAX as f64 {
        return Err(PlanError::invalid(
            "total_weight_kg",
            "plan exceeds representable pallet count",
        ));
    }
    let required_pallets = binding.ceil() as u64;
    let utilization_percent = if required_pallets > 0 {
        (binding / required_pallets as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    Ok(PlanBreakdown {
        weight_constraint,
        box_constraint,
        binding,
        total_boxes,
        binding_constraint,
        result: LoadPlanResult {
            required_pallets,
            utilization_percent,
        },
    })
}
