/// Core data types for the AquaGuardian notice service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond field access and no I/O. Field names follow the
/// AquaGuardian REST API through serde renames, so records can be deserialized
/// straight from API responses and fixture files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::parameters::ParameterKey;

// ---------------------------------------------------------------------------
// Farm areas
// ---------------------------------------------------------------------------

/// The farm area an examination belongs to, as embedded in each record.
///
/// Examinations of a deleted farm area arrive with `farmAreaId: null`; they
/// deserialize with an empty reference rather than failing the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmAreaRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// "Oyster farming", "Cobia farming", "Mangrove forest", ...
    #[serde(rename = "type", default)]
    pub farm_type: String,
}

/// Deserializes an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Warning flags
// ---------------------------------------------------------------------------

/// Per-parameter threshold breaches, precomputed upstream.
///
/// A flag missing from the payload deserializes as `false`. `level` is the
/// number of true flags at the time the API produced the record; it is
/// classified as-is and never recomputed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningFlags {
    #[serde(rename = "isDO")]
    pub is_do: bool,
    #[serde(rename = "isTemperature")]
    pub is_temperature: bool,
    #[serde(rename = "isPH")]
    pub is_ph: bool,
    #[serde(rename = "isTemperatureRight")]
    pub is_temperature_right: bool,
    #[serde(rename = "isAmmonia")]
    pub is_ammonia: bool,
    #[serde(rename = "isBOD5")]
    pub is_bod5: bool,
    #[serde(rename = "isCOD")]
    pub is_cod: bool,
    #[serde(rename = "isColiform")]
    pub is_coliform: bool,
    #[serde(rename = "isClarity")]
    pub is_clarity: bool,
    #[serde(rename = "isPhosphat")]
    pub is_phosphat: bool,
    #[serde(rename = "isSalinity")]
    pub is_salinity: bool,
    #[serde(rename = "isAlkalinity")]
    pub is_alkalinity: bool,
    #[serde(rename = "isSuspendedSolids")]
    pub is_suspended_solids: bool,
    #[serde(rename = "isTotalCrom")]
    pub is_total_crom: bool,
    #[serde(rename = "isH2S")]
    pub is_h2s: bool,
    #[serde(rename = "isCN")]
    pub is_cn: bool,
    #[serde(rename = "isAs")]
    pub is_as: bool,
    #[serde(rename = "isCd")]
    pub is_cd: bool,
    #[serde(rename = "isPb")]
    pub is_pb: bool,
    #[serde(rename = "isCu")]
    pub is_cu: bool,
    #[serde(rename = "isHg")]
    pub is_hg: bool,
    #[serde(rename = "isMn")]
    pub is_mn: bool,
    #[serde(rename = "isFe")]
    pub is_fe: bool,
    #[serde(rename = "isZn")]
    pub is_zn: bool,
    #[serde(rename = "isCr6")]
    pub is_cr6: bool,
    #[serde(rename = "isF")]
    pub is_f: bool,
    #[serde(rename = "isTotalPH")]
    pub is_total_ph: bool,
    #[serde(rename = "isRainfall")]
    pub is_rainfall: bool,
    /// Count of true flags, as reported by the API.
    pub level: u32,
}

impl WarningFlags {
    /// Whether the flag for `key` is set.
    pub fn is_flagged(&self, key: ParameterKey) -> bool {
        match key {
            ParameterKey::DissolvedOxygen => self.is_do,
            ParameterKey::Temperature => self.is_temperature,
            ParameterKey::Ph => self.is_ph,
            ParameterKey::TemperatureRight => self.is_temperature_right,
            ParameterKey::Ammonia => self.is_ammonia,
            ParameterKey::Bod5 => self.is_bod5,
            ParameterKey::Cod => self.is_cod,
            ParameterKey::Coliform => self.is_coliform,
            ParameterKey::Clarity => self.is_clarity,
            ParameterKey::Phosphate => self.is_phosphat,
            ParameterKey::Salinity => self.is_salinity,
            ParameterKey::Alkalinity => self.is_alkalinity,
            ParameterKey::SuspendedSolids => self.is_suspended_solids,
            ParameterKey::TotalChromium => self.is_total_crom,
            ParameterKey::HydrogenSulfide => self.is_h2s,
            ParameterKey::Cyanide => self.is_cn,
            ParameterKey::Arsenic => self.is_as,
            ParameterKey::Cadmium => self.is_cd,
            ParameterKey::Lead => self.is_pb,
            ParameterKey::Copper => self.is_cu,
            ParameterKey::Mercury => self.is_hg,
            ParameterKey::Manganese => self.is_mn,
            ParameterKey::Iron => self.is_fe,
            ParameterKey::Zinc => self.is_zn,
            ParameterKey::HexavalentChromium => self.is_cr6,
            ParameterKey::Fluoride => self.is_f,
            ParameterKey::TotalPetroleumHydrocarbons => self.is_total_ph,
            ParameterKey::Rainfall => self.is_rainfall,
        }
    }
}

// ---------------------------------------------------------------------------
// Examination samples
// ---------------------------------------------------------------------------

/// One water-quality examination of a farm area.
///
/// Every measurement is optional; the API omits or nulls parameters that
/// were not measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExaminationSample {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "farmAreaId", default, deserialize_with = "null_as_default")]
    pub farm_area: FarmAreaRef,

    #[serde(rename = "DO", default)]
    pub dissolved_oxygen: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(rename = "pH", default)]
    pub ph: Option<f64>,
    /// Temperature value associated with the second temperature check.
    #[serde(rename = "temperatureRight", default)]
    pub temperature_right: Option<f64>,
    #[serde(default)]
    pub ammonia: Option<f64>,
    #[serde(rename = "BOD5", default)]
    pub bod5: Option<f64>,
    #[serde(rename = "COD", default)]
    pub cod: Option<f64>,
    #[serde(default)]
    pub coliform: Option<f64>,
    #[serde(default)]
    pub clarity: Option<f64>,
    #[serde(rename = "phosphat", default)]
    pub phosphate: Option<f64>,
    #[serde(default)]
    pub salinity: Option<f64>,
    #[serde(default)]
    pub alkalinity: Option<f64>,
    #[serde(rename = "suspendedSolids", default)]
    pub suspended_solids: Option<f64>,
    #[serde(rename = "totalCrom", default)]
    pub total_chromium: Option<f64>,
    #[serde(rename = "H2S", default)]
    pub hydrogen_sulfide: Option<f64>,
    #[serde(rename = "CN", default)]
    pub cyanide: Option<f64>,
    #[serde(rename = "As", default)]
    pub arsenic: Option<f64>,
    #[serde(rename = "Cd", default)]
    pub cadmium: Option<f64>,
    #[serde(rename = "Pb", default)]
    pub lead: Option<f64>,
    #[serde(rename = "Cu", default)]
    pub copper: Option<f64>,
    #[serde(rename = "Hg", default)]
    pub mercury: Option<f64>,
    #[serde(rename = "Mn", default)]
    pub manganese: Option<f64>,
    #[serde(rename = "Fe", default)]
    pub iron: Option<f64>,
    #[serde(rename = "Zn", default)]
    pub zinc: Option<f64>,
    #[serde(rename = "Cr6", default)]
    pub hexavalent_chromium: Option<f64>,
    #[serde(rename = "F", default)]
    pub fluoride: Option<f64>,
    #[serde(rename = "totalPH", default)]
    pub total_petroleum_hydrocarbons: Option<f64>,
    #[serde(default)]
    pub rainfall: Option<f64>,

    #[serde(rename = "numberWarning", default, deserialize_with = "null_as_default")]
    pub warning: WarningFlags,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ExaminationSample {
    /// A sample for `farm_area` with no measurements and no flags set.
    pub fn new(id: impl Into<String>, farm_area: FarmAreaRef) -> Self {
        Self {
            id: id.into(),
            farm_area,
            dissolved_oxygen: None,
            temperature: None,
            ph: None,
            temperature_right: None,
            ammonia: None,
            bod5: None,
            cod: None,
            coliform: None,
            clarity: None,
            phosphate: None,
            salinity: None,
            alkalinity: None,
            suspended_solids: None,
            total_chromium: None,
            hydrogen_sulfide: None,
            cyanide: None,
            arsenic: None,
            cadmium: None,
            lead: None,
            copper: None,
            mercury: None,
            manganese: None,
            iron: None,
            zinc: None,
            hexavalent_chromium: None,
            fluoride: None,
            total_petroleum_hydrocarbons: None,
            rainfall: None,
            warning: WarningFlags::default(),
            created_at: None,
        }
    }

    /// Measured value for `key`, if the examination recorded one.
    pub fn value(&self, key: ParameterKey) -> Option<f64> {
        match key {
            ParameterKey::DissolvedOxygen => self.dissolved_oxygen,
            ParameterKey::Temperature => self.temperature,
            ParameterKey::Ph => self.ph,
            ParameterKey::TemperatureRight => self.temperature_right,
            ParameterKey::Ammonia => self.ammonia,
            ParameterKey::Bod5 => self.bod5,
            ParameterKey::Cod => self.cod,
            ParameterKey::Coliform => self.coliform,
            ParameterKey::Clarity => self.clarity,
            ParameterKey::Phosphate => self.phosphate,
            ParameterKey::Salinity => self.salinity,
            ParameterKey::Alkalinity => self.alkalinity,
            ParameterKey::SuspendedSolids => self.suspended_solids,
            ParameterKey::TotalChromium => self.total_chromium,
            ParameterKey::HydrogenSulfide => self.hydrogen_sulfide,
            ParameterKey::Cyanide => self.cyanide,
            ParameterKey::Arsenic => self.arsenic,
            ParameterKey::Cadmium => self.cadmium,
            ParameterKey::Lead => self.lead,
            ParameterKey::Copper => self.copper,
            ParameterKey::Mercury => self.mercury,
            ParameterKey::Manganese => self.manganese,
            ParameterKey::Iron => self.iron,
            ParameterKey::Zinc => self.zinc,
            ParameterKey::HexavalentChromium => self.hexavalent_chromium,
            ParameterKey::Fluoride => self.fluoride,
            ParameterKey::TotalPetroleumHydrocarbons => self.total_petroleum_hydrocarbons,
            ParameterKey::Rainfall => self.rainfall,
        }
    }
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

/// One composed alert, ready to be submitted in a "send many notices" request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPayload {
    pub title: String,
    pub description: String,
    pub content: String,
    pub user_id: String,
    pub farm_area_id: String,
}

/// A notice previously dispatched by a manager, as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    /// Delivery channel, e.g. "email".
    #[serde(rename = "type", default)]
    pub channel: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A stakeholder following the manager's region; the people notices reach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferredUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when talking to the AquaGuardian REST API.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// Non-2xx HTTP response.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The request never produced a response (connection refused, timeout, ...).
    Transport(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::HttpError(code) => write!(f, "HTTP error: {}", code),
            ApiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
