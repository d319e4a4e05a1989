//! Government actions suggested in each country profile.

use serde::{Deserialize, Serialize};

use super::{flag::nullable, Resource};

/// Category a suggested action falls under (e.g. legal framework, enforcement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedActionArea {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

impl Resource for SuggestedActionArea {
    const URI: &'static str = "childlabor_actionarea";
}

/// A suggested government action for one country profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedAction {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub country_profile_id: i64,

    /// Id of the [`SuggestedActionArea`] this action belongs to.
    #[serde(rename = "area_id", default, deserialize_with = "nullable")]
    pub action_area_id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Year (or year range) the action was suggested.
    #[serde(default, deserialize_with = "nullable")]
    pub year: String,
}

impl Resource for SuggestedAction {
    const URI: &'static str = "childlabor_action";
}
