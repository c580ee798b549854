//! Trade specialization of a technician.

use super::ParseSpecializationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade a technician is qualified to work in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    /// General handiwork with no single trade.
    General,
    /// Electrical installation and repair.
    Electrician,
    /// Water, drainage, and fixture work.
    Plumber,
    /// Heating, ventilation, and air conditioning.
    HvacTechnician,
    /// Household appliance diagnosis and repair.
    ApplianceRepair,
    /// Woodwork and fittings.
    Carpenter,
    /// Interior and exterior painting.
    Painter,
}

impl Specialization {
    /// Every specialization, in registration-form order.
    pub const ALL: [Self; 7] = [
        Self::General,
        Self::Electrician,
        Self::Plumber,
        Self::HvacTechnician,
        Self::ApplianceRepair,
        Self::Carpenter,
        Self::Painter,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Electrician => "electrician",
            Self::Plumber => "plumber",
            Self::HvacTechnician => "hvac_technician",
            Self::ApplianceRepair => "appliance_repair",
            Self::Carpenter => "carpenter",
            Self::Painter => "painter",
        }
    }

    /// Returns the label shown to people.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Electrician => "Electrician",
            Self::Plumber => "Plumber",
            Self::HvacTechnician => "HVAC Technician",
            Self::ApplianceRepair => "Appliance Repair",
            Self::Carpenter => "Carpenter",
            Self::Painter => "Painter",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<&str> for Specialization {
    type Error = ParseSpecializationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(' ', "_");
        match normalized.as_str() {
            "general" => Ok(Self::General),
            "electrician" => Ok(Self::Electrician),
            "plumber" => Ok(Self::Plumber),
            "hvac_technician" => Ok(Self::HvacTechnician),
            "appliance_repair" => Ok(Self::ApplianceRepair),
            "carpenter" => Ok(Self::Carpenter),
            "painter" => Ok(Self::Painter),
            _ => Err(ParseSpecializationError(value.to_owned())),
        }
    }
}
