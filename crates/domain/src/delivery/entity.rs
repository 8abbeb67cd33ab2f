use super::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Evidence that a package reached its destination. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: i32,
    pub package_id: i32,
    pub agent_id: i32,
    pub photo_path: String,
    pub coordinates: Coordinates,
    pub delivered_at: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub package_id: i32,
    pub agent_id: i32,
    pub photo_path: String,
    pub coordinates: Coordinates,
    pub notes: Option<String>,
}
