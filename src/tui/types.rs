/// Core type definitions used across the dashboard

/// Tab enum for main navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Planner,
    Lanes,
    Network,
}

impl Tab {
    pub fn all() -> [Self; 3] {
        [Self::Planner, Self::Lanes, Self::Network]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Planner => "Planner",
            Self::Lanes => "Lanes",
            Self::Network => "Network",
        }
    }

    /// Position in the tab bar, also the shortcut digit minus one
    pub fn index(&self) -> usize {
        match self {
            Self::Planner => 0,
            Self::Lanes => 1,
            Self::Network => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Planner => Self::Lanes,
            Self::Lanes => Self::Network,
            Self::Network => Self::Planner,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Planner => Self::Network,
            Self::Lanes => Self::Planner,
            Self::Network => Self::Lanes,
        }
    }
}

/// Editable fields of the planner form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    TotalWeight,
    BoxesPerPallet,
    WeightPerBox,
    PalletCapacity,
}

impl FormField {
    pub fn all() -> [Self; 4] {
        [
            Self::TotalWeight,
            Self::BoxesPerPallet,
            Self::WeightPerBox,
            Self::PalletCapacity,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalWeight => "Total weight (kg)",
            Self::BoxesPerPallet => "Boxes per pallet",
            Self::WeightPerBox => "Weight per box (kg)",
            Self::PalletCapacity => "Pallet capacity (kg)",
        }
    }

    /// Whether the field only accepts whole numbers
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::BoxesPerPallet)
    }

    pub fn next(&self) -> Self {
        match self {
            Self::TotalWeight => Self::BoxesPerPallet,
            Self::BoxesPerPallet => Self::WeightPerBox,
            Self::WeightPerBox => Self::PalletCapacity,
            Self::PalletCapacity => Self::TotalWeight,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::TotalWeight => Self::PalletCapacity,
            Self::BoxesPerPallet => Self::TotalWeight,
            Self::WeightPerBox => Self::BoxesPerPallet,
            Self::PalletCapacity => Self::WeightPerBox,
        }
    }
}
