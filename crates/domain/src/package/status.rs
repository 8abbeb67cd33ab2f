use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Package delivery status
///
/// Lifecycle is `Assigned -> InTransit -> Delivered`. Only the transition
/// into `Delivered` is reachable through the delivery flow; `InTransit` is
/// a reserved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    /// Package is assigned to an agent (initial state)
    Assigned,
    /// Package is on its way
    InTransit,
    /// Delivery evidence has been recorded
    Delivered,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
        }
    }
}

impl Default for PackageStatus {
    fn default() -> Self {
        Self::Assigned
    }
}

impl FromStr for PackageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            other => Err(DomainError::Validation(format!(
                "Unknown package status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_status_as_str() {
        assert_eq!(PackageStatus::Assigned.as_str(), "assigned");
        assert_eq!(PackageStatus::InTransit.as_str(), "in_transit");
        assert_eq!(PackageStatus::Delivered.as_str(), "delivered");
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            "in_transit".parse::<PackageStatus>().unwrap(),
            PackageStatus::InTransit
        );
        assert!("lost".parse::<PackageStatus>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(PackageStatus::default(), PackageStatus::Assigned);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&PackageStatus::InTransit).unwrap();
        assert_eq!(json, "\"in_transit\"");
    }
}
