/// Water-quality parameter registry.
///
/// Defines the canonical list of parameters an examination can flag, along
/// with the display name, unit suffix and fixed explanatory sentence used
/// when composing alert text. This is the single source of truth for
/// parameter metadata: the alert composer iterates this table once, so adding
/// a parameter is a data change here plus one field in `model`.
///
/// Rows are keyed by `ParameterKey`, never by display name. Two rows share
/// the display name "Temperature" and must both survive.

// ---------------------------------------------------------------------------
// Parameter keys
// ---------------------------------------------------------------------------

/// Identifies one measured parameter and its warning flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterKey {
    DissolvedOxygen,
    Temperature,
    Ph,
    /// Second, independent temperature check with its own value field.
    TemperatureRight,
    Ammonia,
    Bod5,
    Cod,
    Coliform,
    Clarity,
    Phosphate,
    Salinity,
    Alkalinity,
    SuspendedSolids,
    TotalChromium,
    HydrogenSulfide,
    Cyanide,
    Arsenic,
    Cadmium,
    Lead,
    Copper,
    Mercury,
    Manganese,
    Iron,
    Zinc,
    HexavalentChromium,
    Fluoride,
    TotalPetroleumHydrocarbons,
    Rainfall,
}

impl ParameterKey {
    /// Field name used by the REST API for this parameter's value.
    pub fn wire_name(self) -> &'static str {
        match self {
            ParameterKey::DissolvedOxygen => "DO",
            ParameterKey::Temperature => "temperature",
            ParameterKey::Ph => "pH",
            ParameterKey::TemperatureRight => "temperatureRight",
            ParameterKey::Ammonia => "ammonia",
            ParameterKey::Bod5 => "BOD5",
            ParameterKey::Cod => "COD",
            ParameterKey::Coliform => "coliform",
            ParameterKey::Clarity => "clarity",
            ParameterKey::Phosphate => "phosphat",
            ParameterKey::Salinity => "salinity",
            ParameterKey::Alkalinity => "alkalinity",
            ParameterKey::SuspendedSolids => "suspendedSolids",
            ParameterKey::TotalChromium => "totalCrom",
            ParameterKey::HydrogenSulfide => "H2S",
            ParameterKey::Cyanide => "CN",
            ParameterKey::Arsenic => "As",
            ParameterKey::Cadmium => "Cd",
            ParameterKey::Lead => "Pb",
            ParameterKey::Copper => "Cu",
            ParameterKey::Mercury => "Hg",
            ParameterKey::Manganese => "Mn",
            ParameterKey::Iron => "Fe",
            ParameterKey::Zinc => "Zn",
            ParameterKey::HexavalentChromium => "Cr6",
            ParameterKey::Fluoride => "F",
            ParameterKey::TotalPetroleumHydrocarbons => "totalPH",
            ParameterKey::Rainfall => "rainfall",
        }
    }
}

// ---------------------------------------------------------------------------
// Unit suffixes
// ---------------------------------------------------------------------------

pub const UNIT_MG_PER_L: &str = "mg/l";
pub const UNIT_CELSIUS: &str = "°C";
pub const UNIT_PER_MILLE: &str = "‰";
pub const UNIT_CM: &str = "cm";
pub const UNIT_MM: &str = "mm";
pub const UNIT_CFU: &str = "CFU/100ml";

// ---------------------------------------------------------------------------
// Parameter metadata
// ---------------------------------------------------------------------------

/// Metadata for a single flaggable parameter.
pub struct Parameter {
    pub key: ParameterKey,
    /// Name shown in alert text. Not unique.
    pub display_name: &'static str,
    /// Unit appended directly to the value; `None` for dimensionless values.
    pub unit: Option<&'static str>,
    /// Fixed sentence describing the ecological or health risk.
    pub explanation: &'static str,
}

/// All parameters, in the canonical order alert lines are emitted.
pub static PARAMETER_REGISTRY: &[Parameter] = &[
    Parameter {
        key: ParameterKey::DissolvedOxygen,
        display_name: "DO",
        unit: Some(UNIT_MG_PER_L),
        explanation: "Low DO levels can reduce the ability of aquatic species to survive.",
    },
    Parameter {
        key: ParameterKey::Temperature,
        display_name: "Temperature",
        unit: Some(UNIT_CELSIUS),
        explanation: "Impact on growth, health, reproductive ability of aquatic species, \
                      as well as their living environment.",
    },
    Parameter {
        key: ParameterKey::Ph,
        display_name: "pH",
        unit: None,
        explanation: "Low pH levels can reduce the ability of plants and aquatic animals \
                      to absorb nutrients.",
    },
    Parameter {
        key: ParameterKey::TemperatureRight,
        display_name: "Temperature",
        unit: Some(UNIT_CELSIUS),
        explanation: "This temperature condition disrupts the physiology, growth ability \
                      and reduces the reproductive ability of aquatic products.",
    },
    Parameter {
        key: ParameterKey::Ammonia,
        display_name: "Ammonia(NH₃)",
        unit: Some(UNIT_MG_PER_L),
        explanation: "Ammonia levels reduce the quality of aquatic and plant habitats.",
    },
    Parameter {
        key: ParameterKey::Bod5,
        display_name: "BOD₅",
        unit: Some(UNIT_MG_PER_L),
        explanation: "BOD5 levels reduce the amount of dissolved oxygen in water and are \
                      harmful to aquatic life.",
    },
    Parameter {
        key: ParameterKey::Cod,
        display_name: "COD",
        unit: Some(UNIT_MG_PER_L),
        explanation: "COD levels reduce the amount of dissolved oxygen in water and are \
                      harmful to aquatic life.",
    },
    Parameter {
        key: ParameterKey::Coliform,
        display_name: "Coliform",
        unit: Some(UNIT_CFU),
        explanation: "There is organic pollution in the aquatic environment.",
    },
    Parameter {
        key: ParameterKey::Clarity,
        display_name: "Clarity",
        unit: Some(UNIT_CM),
        explanation: "Signs of pollution, organic waste or bacteria in water, posing a risk \
                      of disease outbreak.",
    },
    Parameter {
        key: ParameterKey::Phosphate,
        display_name: "Phosphat",
        unit: Some(UNIT_MG_PER_L),
        explanation: "Pets showing signs of Phosphate toxicity and stress.",
    },
    Parameter {
        key: ParameterKey::Salinity,
        display_name: "Salinity",
        unit: Some(UNIT_PER_MILLE),
        explanation: "Low salinity aquatic environments can affect the ability of aquatic \
                      species to sustain life.",
    },
    Parameter {
        key: ParameterKey::Alkalinity,
        display_name: "Alkalinity",
        unit: Some(UNIT_MG_PER_L),
        explanation: "Risk of water acidification.",
    },
    Parameter {
        key: ParameterKey::SuspendedSolids,
        display_name: "Suspended Solids",
        unit: Some(UNIT_MG_PER_L),
        explanation: "TSS levels can reduce water filtration and degrade water quality in \
                      aquatic habitats.",
    },
    Parameter {
        key: ParameterKey::TotalChromium,
        display_name: "Total Crom",
        unit: Some(UNIT_MG_PER_L),
        explanation: "There is chromium contamination.",
    },
    Parameter {
        key: ParameterKey::HydrogenSulfide,
        display_name: "H₂S",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of H₂S can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Cyanide,
        display_name: "CN",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of CN can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Arsenic,
        display_name: "As",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of As can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Cadmium,
        display_name: "Cd",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Cd can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Lead,
        display_name: "Pb",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Pb can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Copper,
        display_name: "Cu",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Cu can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Mercury,
        display_name: "Hg",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Hg can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Manganese,
        display_name: "Mn",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Mn can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Iron,
        display_name: "Fe",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Fe can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Zinc,
        display_name: "Zn",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Zn can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::HexavalentChromium,
        display_name: "Cr6+",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of Cr6+ can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::Fluoride,
        display_name: "F-",
        unit: Some(UNIT_MG_PER_L),
        explanation: "This level of F- can lead to oxygen deficiency in the environment.",
    },
    Parameter {
        key: ParameterKey::TotalPetroleumHydrocarbons,
        display_name: "Total petroleum hydrocarbons",
        unit: None,
        explanation: "Total petroleum hydrocarbons levels can affect the ability of aquatic \
                      species to sustain life.",
    },
    Parameter {
        key: ParameterKey::Rainfall,
        display_name: "Rainfall",
        unit: Some(UNIT_MM),
        explanation: "This rainfall can reduce the vitality of species.",
    },
];

/// Looks up a parameter by key. Returns `None` only if the registry is
/// missing a row, which the tests below rule out.
pub fn find_parameter(key: ParameterKey) -> Option<&'static Parameter> {
    PARAMETER_REGISTRY.iter().find(|p| p.key == key)
}

/// Returns every registry row sharing `display_name`, in registry order.
pub fn parameters_named(display_name: &str) -> Vec<&'static Parameter> {
    PARAMETER_REGISTRY
        .iter()
        .filter(|p| p.display_name == display_name)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
