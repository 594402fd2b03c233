use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of facility being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Office,
    Industrial,
    Retail,
    Logistics,
    Public,
    Residential,
    Other,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Office => write!(f, "office"),
            ObjectType::Industrial => write!(f, "industrial"),
            ObjectType::Retail => write!(f, "retail"),
            ObjectType::Logistics => write!(f, "logistics"),
            ObjectType::Public => write!(f, "public"),
            ObjectType::Residential => write!(f, "residential"),
            ObjectType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "office" => Ok(ObjectType::Office),
            "industrial" => Ok(ObjectType::Industrial),
            "retail" => Ok(ObjectType::Retail),
            "logistics" => Ok(ObjectType::Logistics),
            "public" => Ok(ObjectType::Public),
            "residential" => Ok(ObjectType::Residential),
            "other" => Ok(ObjectType::Other),
            _ => Err(format!("unknown object type '{}'", s)),
        }
    }
}

/// Required protection level of the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProtectionClass {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ProtectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtectionClass::Low => write!(f, "low"),
            ProtectionClass::Medium => write!(f, "medium"),
            ProtectionClass::High => write!(f, "high"),
            ProtectionClass::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for ProtectionClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(ProtectionClass::Low),
            "medium" => Ok(ProtectionClass::Medium),
            "high" => Ok(ProtectionClass::High),
            "critical" => Ok(ProtectionClass::Critical),
            _ => Err(format!("unknown protection class '{}'", s)),
        }
    }
}

/// General facts about the assessed facility.
///
/// Every field is optional; filled fields count towards the dashboard's
/// completion counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<ObjectType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_class: Option<ProtectionClass>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
}

impl FacilityProfile {
    /// Number of profile fields tracked by the completion counter.
    pub const FIELD_COUNT: usize = 6;

    /// The Munich office building the dashboard ships with.
    pub fn reference() -> Self {
        Self {
            object_name: Some("Bürogebäude Maximilianstraße".to_string()),
            location: Some("Maximilianstraße 12, 80539 München".to_string()),
            object_type: Some(ObjectType::Office),
            protection_class: Some(ProtectionClass::Medium),
            employees: Some(450),
            operating_hours: Some("Mo-Fr: 06:00-22:00".to_string()),
        }
    }

    /// Count fields holding a usable value. Blank strings do not count.
    pub fn filled_fields(&self) -> usize {
        let text = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

        [
            text(&self.object_name),
            text(&self.location),
            self.object_type.is_some(),
            self.protection_class.is_some(),
            self.employees.is_some(),
            text(&self.operating_hours),
        ]
        .iter()
        .filter(|filled| **filled)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_profile_is_complete() {
        assert_eq!(
            FacilityProfile::reference().filled_fields(),
            FacilityProfile::FIELD_COUNT
        );
    }

    #[test]
    fn test_blank_strings_do_not_count() {
        let profile = FacilityProfile {
            object_name: Some("   ".to_string()),
            employees: Some(0),
            ..Default::default()
        };
        assert_eq!(profile.filled_fields(), 1);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Office".parse::<ObjectType>(), Ok(ObjectType::Office));
        assert_eq!("HIGH".parse::<ProtectionClass>(), Ok(ProtectionClass::High));
        assert!("castle".parse::<ObjectType>().is_err());
    }
}
