use serde::{Deserialize, Serialize};

/// One row of the recruitment sheet.
///
/// Values are kept verbatim; classification into [`Gender`] and
/// [`FitnessStatus`] is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub branch: String,
    pub gender: String,
    pub status: String,
}

impl CandidateRecord {
    pub fn new(
        branch: impl Into<String>,
        gender: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            gender: gender.into(),
            status: status.into(),
        }
    }

    /// Builds a record from raw sheet cells, dropping rows that miss any field.
    /// The status code is upper-cased so `fit` and `FIT` land in the same bucket.
    pub fn from_fields(branch: &str, gender: &str, status: &str) -> Option<Self> {
        if branch.is_empty() || gender.is_empty() || status.is_empty() {
            return None;
        }

        Some(Self::new(branch, gender, status.to_uppercase()))
    }

    pub fn gender_bucket(&self) -> Gender {
        Gender::classify(&self.gender)
    }

    pub fn fitness(&self) -> FitnessStatus {
        FitnessStatus::classify(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Unrecognized,
}

impl Gender {
    pub fn classify(value: &str) -> Self {
        match value {
            "Male" => Self::Male,
            "Female" => Self::Female,
            _ => Self::Unrecognized,
        }
    }

    pub const fn ordered() -> [Self; 2] {
        [Self::Male, Self::Female]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessStatus {
    Fit,
    TemporarilyRejected,
    Pending,
    Unrecognized,
}

impl FitnessStatus {
    pub fn classify(code: &str) -> Self {
        match code {
            "FIT" => Self::Fit,
            "TR" => Self::TemporarilyRejected,
            "PENDING" => Self::Pending,
            _ => Self::Unrecognized,
        }
    }

    pub const fn ordered() -> [Self; 3] {
        [Self::Fit, Self::TemporarilyRejected, Self::Pending]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fit => "Fit",
            Self::TemporarilyRejected => "Temporarily Rejected",
            Self::Pending => "Pending",
            Self::Unrecognized => "Unrecognized",
        }
    }

    pub const fn is_fit(self) -> bool {
        matches!(self, Self::Fit)
    }
}
