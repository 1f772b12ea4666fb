/// Demo fixture data for the dashboard and CLI
///
/// These figures are fixed and carry no domain meaning. They exist so the
/// lane table, trend chart and hub map have something realistic to show, and
/// so tests and benchmarks run against stable data.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Road,
    Rail,
    Sea,
    Air,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Road => "Road",
            Self::Rail => "Rail",
            Self::Sea => "Sea",
            Self::Air => "Air",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub weekly_pallets: u32,
    pub on_time_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub pallets: u64,
}

fn lane(origin: &str, destination: &str, mode: TransportMode, weekly_pallets: u32, on_time_percent: f64) -> Lane {
    Lane {
        origin: origin.to_string(),
        destination: destination.to_string(),
        mode,
        weekly_pallets,
        on_time_percent,
    }
}

fn hub(code: &str, name: &str, lat: f64, lon: f64) -> Hub {
    Hub {
        code: code.to_string(),
        name: name.to_string(),
        lat,
        lon,
    }
}

/// Lanes shown in the lane table, busiest first
pub fn demo_lanes() -> Vec<Lane> {
    vec![
        lane("Rotterdam", "Duisburg", TransportMode::Rail, 1840, 96.5),
        lane("Shanghai", "Rotterdam", TransportMode::Sea, 1525, 88.2),
        lane("Hamburg", "Warsaw", TransportMode::Road, 1210, 93.8),
        lane("Los Angeles", "Chicago", TransportMode::Rail, 1045, 91.4),
        lane("Singapore", "Sydney", TransportMode::Sea, 870, 89.9),
        lane("Chicago", "Toronto", TransportMode::Road, 655, 97.1),
        lane("Frankfurt", "New York", TransportMode::Air, 240, 98.6),
        lane("Dubai", "Mumbai", TransportMode::Air, 185, 95.0),
    ]
}

/// Hubs plotted on the network map
pub fn demo_hubs() -> Vec<Hub> {
    vec![
        hub("RTM", "Rotterdam", 51.92, 4.48),
        hub("HAM", "Hamburg", 53.55, 9.99),
        hub("SHA", "Shanghai", 31.23, 121.47),
        hub("SIN", "Singapore", 1.35, 103.82),
        hub("LAX", "Los Angeles", 34.05, -118.24),
        hub("ORD", "Chicago", 41.88, -87.63),
        hub("DXB", "Dubai", 25.20, 55.27),
        hub("SYD", "Sydney", -33.87, 151.21),
    ]
}

/// Weekly pallet volume over the last twelve weeks
pub fn demo_trend() -> Vec<TrendPoint> {
    const VOLUMES: [u64; 12] = [
        6120, 6480, 6395, 6710, 7020, 6890, 7240, 7515, 7380, 7660, 7905, 8070,
    ];
    VOLUMES
        .iter()
        .enumerate()
        .map(|(i, &pallets)| TrendPoint {
            label: format!("W{:02}", i + 1),
            pallets,
        })
        .collect()
}

/// Sum of weekly pallets across lanes
pub fn total_weekly_pallets(lanes: &[Lane]) -> u64 {
    lanes.iter().map(|l| u64::from(l.weekly_pallets)).sum()
}
