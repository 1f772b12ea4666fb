/// Standard pallet types
///
/// Capacities are typical safe working loads for the pallet footprint. The
/// boxes-per-pallet figure assumes a mid-size carton and is only a starting
/// point for the planner.
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalletPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub capacity_kg: f64,
    pub boxes_per_pallet: u32,
}

static PRESETS: phf::Map<&'static str, PalletPreset> = phf_map! {
    "eur1" => PalletPreset {
        key: "eur1",
        name: "EUR 1 (1200x800)",
        capacity_kg: 1500.0,
        boxes_per_pallet: 40,
    },
    "eur2" => PalletPreset {
        key: "eur2",
        name: "EUR 2 (1200x1000)",
        capacity_kg: 1250.0,
        boxes_per_pallet: 50,
    },
    "eur6" => PalletPreset {
        key: "eur6",
        name: "EUR 6 (800x600)",
        capacity_kg: 500.0,
        boxes_per_pallet: 20,
    },
    "gma" => PalletPreset {
        key: "gma",
        name: "GMA (48x40 in)",
        capacity_kg: 1200.0,
        boxes_per_pallet: 48,
    },
    "iso" => PalletPreset {
        key: "iso",
        name: "ISO (1100x1100)",
        capacity_kg: 1000.0,
        boxes_per_pallet: 50,
    },
    "au" => PalletPreset {
        key: "au",
        name: "Australian (1165x1165)",
        capacity_kg: 2000.0,
        boxes_per_pallet: 56,
    },
};

/// Look up a preset by key, ignoring case
pub fn lookup(key: &str) -> Option<&'static PalletPreset> {
    PRESETS.get(key.trim().to_lowercase().as_str())
}

/// All presets, sorted by key
pub fn all() -> Vec<&'static PalletPreset> {
    let mut presets: Vec<_> = PRESETS.values().collect();
    presets.sort_by_key(|p| p.key);
    presets
}

/// The preset after `key` in sorted order, wrapping around
///
/// Unknown or missing keys start from the first preset.
pub fn next_after(key: Option<&str>) -> &'static PalletPreset {
    let presets = all();
    let next_index = key
        .and_then(|k| presets.iter().position(|p| p.key == k))
        .map(|i| (i + 1) % presets.len())
        .unwrap_or(0);
    presets[next_index]
}
