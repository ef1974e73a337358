//! Request and response types for CV ranking.
//!
//! All list fields default to empty and `null` optionals are skipped, so a
//! candidate with only a `cv_id` is valid (and ranks on an empty text).

use std::fmt;

use serde::{Deserialize, Serialize};


/// Opaque candidate identifier, echoed back in the shape it arrived in.
///
/// Any JSON number or string is accepted. Integers that fit `i64` stay
/// `Int`, larger unsigned ones become `UInt`, everything else numeric is
/// `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CvId {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvId::Int(id) => write!(f, "{}", id),
            CvId::UInt(id) => write!(f, "{}", id),
            CvId::Float(id) => write!(f, "{}", id),
            CvId::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for CvId {
    fn from(value: &str) -> Self {
        CvId::Text(value.to_string())
    }
}

impl From<String> for CvId {
    fn from(value: String) -> Self {
        CvId::Text(value)
    }
}

impl From<i64> for CvId {
    fn from(value: i64) -> Self {
        CvId::Int(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub job_title: String,
    #[serde(default)]
    pub job_desc: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub title: String,
    #[serde(default)]
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    #[serde(default)]
    pub issuer: Option<String>,
}

/// A single candidate as submitted for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateCv {
    pub cv_id: CvId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub basic_info: BasicInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certification: Vec<Certification>,
}

impl CandidateCv {
    /// Creates a candidate with no text fields.
    pub fn new(cv_id: impl Into<CvId>) -> Self {
        Self {
            cv_id: cv_id.into(),
            basic_info: BasicInfo::default(),
            work_experience: Vec::new(),
            education: Vec::new(),
            languages: Vec::new(),
            skills: Vec::new(),
            certification: Vec::new(),
        }
    }

    /// Text fields in ranking order.
    ///
    /// Location, then each job title with its descriptions, each education
    /// title with its descriptions, languages, skills, and finally each
    /// certification title with its issuer.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();

        if let Some(ref location) = self.basic_info.location {
            fields.push(location.as_str());
        }

        for work in &self.work_experience {
            fields.push(work.job_title.as_str());
            if let Some(ref desc) = work.job_desc {
                fields.extend(desc.iter().map(String::as_str));
            }
        }

        for edu in &self.education {
            fields.push(edu.title.as_str());
            if let Some(ref desc) = edu.description {
                fields.extend(desc.iter().map(String::as_str));
            }
        }

        fields.extend(self.languages.iter().map(String::as_str));
        fields.extend(self.skills.iter().map(String::as_str));

        for cert in &self.certification {
            fields.push(cert.title.as_str());
            if let Some(ref issuer) = cert.issuer {
                fields.push(issuer.as_str());
            }
        }

        fields
    }
}

/// Body of a ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRequest {
    pub job_requirements: String,
    pub cvs: Vec<CandidateCv>,
}

/// One entry of the ranking response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub cv_id: CvId,
    /// Cosine similarity scaled to `[-100, 100]`.
    pub similarity: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
