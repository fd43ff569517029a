use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TransitMode {
    Bus,
    Train,
    Shuttle,
    MinibusTaxi,
}

impl TransitMode {
    pub fn to_str(&self) -> &str {
        match self {
            TransitMode::Bus => "bus",
            TransitMode::Train => "train",
            TransitMode::Shuttle => "shuttle",
            TransitMode::MinibusTaxi => "minibus_taxi",
        }
    }
}

/// A campus access route shown on the transport screens. Static reference
/// data, never persisted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransitRoute {
    pub id: String,
    pub name: String,
    pub mode: TransitMode,
    pub university: String,
    pub stops: Vec<String>,
    pub frequency_minutes: u32,
}
