//! Heart-rate zone types

use serde::{Deserialize, Serialize};

use super::Rgb;

/// Heart-rate zone, ordered low to high intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Zone {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Zone {
    /// All zones in display order (left to right)
    pub const ALL: [Zone; 5] = [Zone::One, Zone::Two, Zone::Three, Zone::Four, Zone::Five];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire key in the zone duration map
    pub fn key(self) -> &'static str {
        match self {
            Self::One => "zone_one_milli",
            Self::Two => "zone_two_milli",
            Self::Three => "zone_three_milli",
            Self::Four => "zone_four_milli",
            Self::Five => "zone_five_milli",
        }
    }

    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "Z1",
            Self::Two => "Z2",
            Self::Three => "Z3",
            Self::Four => "Z4",
            Self::Five => "Z5",
        }
    }

    pub fn color(self) -> Rgb {
        ZONE_PALETTE[self.index()]
    }
}

/// Fixed zone palette, indexed by zone position
pub const ZONE_PALETTE: [Rgb; 5] = [
    Rgb::new(0x8b, 0x94, 0x9e), // gray: recovery
    Rgb::new(0x38, 0x8b, 0xfd), // blue
    Rgb::new(0x3f, 0xb9, 0x50), // green
    Rgb::new(0xd2, 0x99, 0x22), // amber
    Rgb::new(0xf8, 0x51, 0x49), // red: maximal
];

/// Milliseconds spent in each zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "ZoneMap")]
pub struct ZoneDurations([u64; 5]);

impl ZoneDurations {
    pub fn new(millis: [u64; 5]) -> Self {
        Self(millis)
    }

    pub fn get(&self, zone: Zone) -> u64 {
        self.0[zone.index()]
    }

    pub fn set(&mut self, zone: Zone, millis: u64) {
        self.0[zone.index()] = millis;
    }

    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, &v| acc.saturating_add(v))
    }
}

/// Wire shape: every key optional, unknown keys ignored
#[derive(Deserialize)]
struct ZoneMap {
    #[serde(default)]
    zone_one_milli: u64,
    #[serde(default)]
    zone_two_milli: u64,
    #[serde(default)]
    zone_three_milli: u64,
    #[serde(default)]
    zone_four_milli: u64,
    #[serde(default)]
    zone_five_milli: u64,
}

impl From<ZoneMap> for ZoneDurations {
    fn from(m: ZoneMap) -> Self {
        Self([
            m.zone_one_milli,
            m.zone_two_milli,
            m.zone_three_milli,
            m.zone_four_milli,
            m.zone_five_milli,
        ])
    }
}

/// A visible segment of the zone bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub zone: Zone,
    pub width_percent: f64,
    pub color: Rgb,
}
