//! Lookup tables: goods, sectors, regions, and advancement levels.

use serde::{Deserialize, Serialize};

use super::{flag::nullable, Resource};

/// A produced good that may involve child or forced labor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Good {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Sector the good belongs to; `0` when unset.
    #[serde(default, deserialize_with = "nullable")]
    pub sector_id: i64,
}

impl Resource for Good {
    const URI: &'static str = "childlabor_goo";
}

/// An economic sector (agriculture, industry, services).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

impl Resource for Sector {
    const URI: &'static str = "childlabor_sec";
}

/// A geographic region grouping countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

impl Resource for Region {
    const URI: &'static str = "childlabor_reg";
}

/// Assessment level describing a country's progress against child labor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancementLevel {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(rename = "advancement_name", default, deserialize_with = "nullable")]
    pub name: String,
}

impl Resource for AdvancementLevel {
    const URI: &'static str = "childlabor_advlvl";
}
