//! Service regions Enercam installs in.

use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A country the company serves. Closed set; anything else is rejected.
///
/// The wire form is the display name exactly as listed in the site's
/// location picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ServiceArea {
    #[serde(rename = "Cameroon")]
    Cameroon,
    #[serde(rename = "Chad")]
    Chad,
    #[serde(rename = "Gabon")]
    Gabon,
    #[serde(rename = "Congo")]
    Congo,
    #[serde(rename = "Equatorial Guinea")]
    EquatorialGuinea,
    #[serde(rename = "Central African Republic")]
    CentralAfricanRepublic,
}

impl ServiceArea {
    /// All regions, in picker order.
    pub const ALL: [ServiceArea; 6] = [
        ServiceArea::Cameroon,
        ServiceArea::Chad,
        ServiceArea::Gabon,
        ServiceArea::Congo,
        ServiceArea::EquatorialGuinea,
        ServiceArea::CentralAfricanRepublic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ServiceArea::Cameroon => "Cameroon",
            ServiceArea::Chad => "Chad",
            ServiceArea::Gabon => "Gabon",
            ServiceArea::Congo => "Congo",
            ServiceArea::EquatorialGuinea => "Equatorial Guinea",
            ServiceArea::CentralAfricanRepublic => "Central African Republic",
        }
    }

    /// Short form used in email footers ("CAR").
    pub fn short_name(self) -> &'static str {
        match self {
            ServiceArea::CentralAfricanRepublic => "CAR",
            other => other.name(),
        }
    }
}

impl FromStr for ServiceArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|area| area.name() == trimmed)
            .ok_or_else(|| ValidationError::UnknownServiceArea(s.to_string()))
    }
}

impl fmt::Display for ServiceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_area() {
        for area in ServiceArea::ALL {
            assert_eq!(area.name().parse::<ServiceArea>().unwrap(), area);
        }
    }

    #[test]
    fn test_unknown_area_rejected() {
        assert!("Nigeria".parse::<ServiceArea>().is_err());
        assert!("".parse::<ServiceArea>().is_err());
        // no case folding
        assert!("cameroon".parse::<ServiceArea>().is_err());
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&ServiceArea::EquatorialGuinea).unwrap();
        assert_eq!(json, "\"Equatorial Guinea\"");
        let area: ServiceArea = serde_json::from_str("\"Central African Republic\"").unwrap();
        assert_eq!(area, ServiceArea::CentralAfricanRepublic);
        assert!(serde_json::from_str::<ServiceArea>("\"Mars\"").is_err());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(ServiceArea::CentralAfricanRepublic.short_name(), "CAR");
        assert_eq!(ServiceArea::Gabon.short_name(), "Gabon");
    }
}
