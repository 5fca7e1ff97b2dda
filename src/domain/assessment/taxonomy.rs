//! Fixed AIHE taxonomy: 8 dimensions, each with exactly 2 subdimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AssessmentError;

/// Number of top-level dimensions.
pub const DIMENSION_COUNT: usize = 8;

/// Number of subdimensions (two per dimension).
pub const SUBDIMENSION_COUNT: usize = 16;

/// One of the 8 top-level maturity axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DimensionId {
    #[serde(rename = "D1")]
    Governance,
    #[serde(rename = "D2")]
    Strategy,
    #[serde(rename = "D3")]
    Culture,
    #[serde(rename = "D4")]
    Competencies,
    #[serde(rename = "D5")]
    Data,
    #[serde(rename = "D6")]
    Technology,
    #[serde(rename = "D7")]
    Processes,
    #[serde(rename = "D8")]
    Impact,
}

impl DimensionId {
    /// All dimensions in declaration order.
    pub const ALL: [DimensionId; DIMENSION_COUNT] = [
        DimensionId::Governance,
        DimensionId::Strategy,
        DimensionId::Culture,
        DimensionId::Competencies,
        DimensionId::Data,
        DimensionId::Technology,
        DimensionId::Processes,
        DimensionId::Impact,
    ];

    /// Zero-based position in declaration order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Short code, e.g. "D3".
    pub fn code(&self) -> &'static str {
        match self {
            DimensionId::Governance => "D1",
            DimensionId::Strategy => "D2",
            DimensionId::Culture => "D3",
            DimensionId::Competencies => "D4",
            DimensionId::Data => "D5",
            DimensionId::Technology => "D6",
            DimensionId::Processes => "D7",
            DimensionId::Impact => "D8",
        }
    }

    /// Display name of the dimension.
    pub fn name(&self) -> &'static str {
        match self {
            DimensionId::Governance => "Governance & Leadership",
            DimensionId::Strategy => "Strategy & Alignment",
            DimensionId::Culture => "Culture & Change Readiness",
            DimensionId::Competencies => "Competencies & Skills",
            DimensionId::Data => "Data & Information",
            DimensionId::Technology => "Technology & Infrastructure",
            DimensionId::Processes => "Processes & Execution",
            DimensionId::Impact => "Impact & Responsibility",
        }
    }

    /// The two child subdimensions of this dimension.
    pub fn subdimensions(&self) -> [SubdimensionId; 2] {
        let first = self.index() * 2;
        [SubdimensionId::ALL[first], SubdimensionId::ALL[first + 1]]
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DimensionId {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionId::ALL
            .iter()
            .find(|d| d.code() == s.trim())
            .copied()
            .ok_or_else(|| AssessmentError::UnknownDimension {
                code: s.to_string(),
            })
    }
}

/// One of the 16 fixed subdimension codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubdimensionId {
    #[serde(rename = "D1.1")]
    GovernanceFramework,
    #[serde(rename = "D1.2")]
    LeadershipCommitment,
    #[serde(rename = "D2.1")]
    AiStrategy,
    #[serde(rename = "D2.2")]
    StrategicAlignment,
    #[serde(rename = "D3.1")]
    ChangeReadiness,
    #[serde(rename = "D3.2")]
    ExperimentationCulture,
    #[serde(rename = "D4.1")]
    AiLiteracy,
    #[serde(rename = "D4.2")]
    SpecialistCapabilities,
    #[serde(rename = "D5.1")]
    DataQuality,
    #[serde(rename = "D5.2")]
    DataGovernance,
    #[serde(rename = "D6.1")]
    Infrastructure,
    #[serde(rename = "D6.2")]
    ToolingIntegration,
    #[serde(rename = "D7.1")]
    ProcessIntegration,
    #[serde(rename = "D7.2")]
    OperatingModel,
    #[serde(rename = "D8.1")]
    ValueMeasurement,
    #[serde(rename = "D8.2")]
    ResponsibleAi,
}

impl SubdimensionId {
    /// All subdimensions in declaration order (grouped by parent).
    pub const ALL: [SubdimensionId; SUBDIMENSION_COUNT] = [
        SubdimensionId::GovernanceFramework,
        SubdimensionId::LeadershipCommitment,
        SubdimensionId::AiStrategy,
        SubdimensionId::StrategicAlignment,
        SubdimensionId::ChangeReadiness,
        SubdimensionId::ExperimentationCulture,
        SubdimensionId::AiLiteracy,
        SubdimensionId::SpecialistCapabilities,
        SubdimensionId::DataQuality,
        SubdimensionId::DataGovernance,
        SubdimensionId::Infrastructure,
        SubdimensionId::ToolingIntegration,
        SubdimensionId::ProcessIntegration,
        SubdimensionId::OperatingModel,
        SubdimensionId::ValueMeasurement,
        SubdimensionId::ResponsibleAi,
    ];

    /// Zero-based position in declaration order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The parent dimension.
    pub fn parent(&self) -> DimensionId {
        DimensionId::ALL[self.index() / 2]
    }

    /// Code such as "D3.2".
    pub fn code(&self) -> &'static str {
        const CODES: [&str; SUBDIMENSION_COUNT] = [
            "D1.1", "D1.2", "D2.1", "D2.2", "D3.1", "D3.2", "D4.1", "D4.2", "D5.1", "D5.2",
            "D6.1", "D6.2", "D7.1", "D7.2", "D8.1", "D8.2",
        ];
        CODES[self.index()]
    }

    /// Display name of the subdimension.
    pub fn name(&self) -> &'static str {
        match self {
            SubdimensionId::GovernanceFramework => "AI Governance Framework",
            SubdimensionId::LeadershipCommitment => "Leadership Commitment",
            SubdimensionId::AiStrategy => "AI Strategy",
            SubdimensionId::StrategicAlignment => "Strategic Alignment",
            SubdimensionId::ChangeReadiness => "Change Readiness",
            SubdimensionId::ExperimentationCulture => "Experimentation Culture",
            SubdimensionId::AiLiteracy => "AI Literacy",
            SubdimensionId::SpecialistCapabilities => "Specialist Capabilities",
            SubdimensionId::DataQuality => "Data Quality",
            SubdimensionId::DataGovernance => "Data Governance",
            SubdimensionId::Infrastructure => "Technology Infrastructure",
            SubdimensionId::ToolingIntegration => "AI Tooling Integration",
            SubdimensionId::ProcessIntegration => "Process Integration",
            SubdimensionId::OperatingModel => "Operating Model",
            SubdimensionId::ValueMeasurement => "Value Measurement",
            SubdimensionId::ResponsibleAi => "Responsible AI & Ethics",
        }
    }
}

impl fmt::Display for SubdimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SubdimensionId {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubdimensionId::ALL
            .iter()
            .find(|sd| sd.code() == s.trim())
            .copied()
            .ok_or_else(|| AssessmentError::UnknownSubdimension {
                code: s.to_string(),
            })
    }
}
