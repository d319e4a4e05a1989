//! Country-level datasets: countries, their yearly profiles, and the
//! statistics, legal data, and goods attached to each profile.

use serde::{Deserialize, Serialize};

use super::{
    flag::{as_labor_flag, labor_flag, nullable},
    Resource,
};

/// A country covered by the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub region_id: i64,

    /// Two-letter ISO 3166 code.
    #[serde(default, deserialize_with = "nullable")]
    pub iso2: String,

    /// Three-letter ISO 3166 code.
    #[serde(default, deserialize_with = "nullable")]
    pub iso3: String,
}

impl Resource for Country {
    const URI: &'static str = "childlabor_cty";
}

/// One yearly assessment of a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    #[serde(default, deserialize_with = "nullable")]
    pub id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub country_id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub profile_year: i64,

    /// Id of the [`super::AdvancementLevel`] assigned for the year.
    #[serde(rename = "advancement_id", default, deserialize_with = "nullable")]
    pub advancement_level_id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

impl Resource for CountryProfile {
    const URI: &'static str = "childlabor_pro";
}

/// Working children, school attendance, and primary completion statistics
/// for a country profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryStat {
    #[serde(default, deserialize_with = "nullable")]
    pub country_profile_id: i64,

    /// Age range covered by the working children figures (e.g. `5-14`).
    #[serde(rename = "cws_age_range", default, deserialize_with = "nullable")]
    pub working_age_range: String,

    #[serde(
        rename = "cws_total_percentage_of_workin",
        default,
        deserialize_with = "nullable"
    )]
    pub working_percent: f64,

    #[serde(
        rename = "cws_total_working_population",
        default,
        deserialize_with = "nullable"
    )]
    pub working_population: i64,

    #[serde(rename = "cws_agriculture", default, deserialize_with = "nullable")]
    pub working_agriculture: f64,

    #[serde(rename = "cws_services", default, deserialize_with = "nullable")]
    pub working_services: f64,

    #[serde(rename = "cws_industry", default, deserialize_with = "nullable")]
    pub working_industry: f64,

    #[serde(rename = "esas_year", default, deserialize_with = "nullable")]
    pub school_attendance_year: String,

    #[serde(rename = "esas_age_range", default, deserialize_with = "nullable")]
    pub school_attendance_age_range: String,

    #[serde(rename = "esas_percentage", default, deserialize_with = "nullable")]
    pub school_attendance_percent: f64,

    /// Children combining work and school.
    #[serde(rename = "cwas_year", default, deserialize_with = "nullable")]
    pub work_and_school_year: String,

    #[serde(rename = "cwas_age_range", default, deserialize_with = "nullable")]
    pub work_and_school_age_range: String,

    #[serde(rename = "cwas_total", default, deserialize_with = "nullable")]
    pub work_and_school_percent: f64,

    /// Unadjusted primary completion rate.
    #[serde(rename = "upcr_year", default, deserialize_with = "nullable")]
    pub primary_completion_year: String,

    #[serde(rename = "upcr_rate", default, deserialize_with = "nullable")]
    pub primary_completion_rate: f64,
}

impl Resource for CountryStat {
    const URI: &'static str = "childlabor_sta";
}

/// Ratification status of international conventions and minimum age laws
/// for a country profile.
///
/// Values are reported as free text (`Yes`, `No`, or an age).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryData {
    #[serde(default, deserialize_with = "nullable")]
    pub country_profile_id: i64,

    #[serde(rename = "c_138_ratified", default, deserialize_with = "nullable")]
    pub c138_ratified: String,

    #[serde(rename = "c_182_ratified", default, deserialize_with = "nullable")]
    pub c182_ratified: String,

    /// Convention on the Rights of the Child.
    #[serde(
        rename = "convention_on_the_rights_of_th",
        default,
        deserialize_with = "nullable"
    )]
    pub crc_ratified: String,

    /// CRC optional protocol on the sale of children and child prostitution.
    #[serde(
        rename = "crc_commercial_sexual_exploita",
        default,
        deserialize_with = "nullable"
    )]
    pub crc_commercial_sexual_exploitation_ratified: String,

    /// CRC optional protocol on children in armed conflict.
    #[serde(
        rename = "crc_armed_conflict_ratified",
        default,
        deserialize_with = "nullable"
    )]
    pub crc_armed_conflict_ratified: String,

    #[serde(rename = "palermo_ratified", default, deserialize_with = "nullable")]
    pub palermo_ratified: String,

    #[serde(
        rename = "minimum_age_for_work_establish",
        default,
        deserialize_with = "nullable"
    )]
    pub min_work_age_established: String,

    #[serde(rename = "minimum_age_for_work", default, deserialize_with = "nullable")]
    pub min_work_age: String,

    #[serde(
        rename = "minimum_age_for_hazardous_work_established",
        default,
        deserialize_with = "nullable"
    )]
    pub min_hazardous_work_age_established: String,

    #[serde(
        rename = "minimum_age_for_hazardous_work",
        default,
        deserialize_with = "nullable"
    )]
    pub min_hazardous_work_age: String,

    #[serde(
        rename = "compulsory_education_age_estab",
        default,
        deserialize_with = "nullable"
    )]
    pub compulsory_education_age_established: String,

    #[serde(
        rename = "minimum_age_for_compulsory_edu",
        default,
        deserialize_with = "nullable"
    )]
    pub compulsory_education_age: String,

    #[serde(
        rename = "free_public_education_establis",
        default,
        deserialize_with = "nullable"
    )]
    pub free_public_education_established: String,
}

impl Resource for CountryData {
    const URI: &'static str = "childlabor_mas";
}

/// Links a good to a country profile with the kinds of labor found in its
/// production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryGood {
    #[serde(default, deserialize_with = "nullable")]
    pub country_profile_id: i64,

    #[serde(default, deserialize_with = "nullable")]
    pub good_id: i64,

    #[serde(
        rename = "child_Labor",
        default,
        deserialize_with = "labor_flag",
        serialize_with = "as_labor_flag"
    )]
    pub child_labor: bool,

    #[serde(
        default,
        deserialize_with = "labor_flag",
        serialize_with = "as_labor_flag"
    )]
    pub forced_labor: bool,

    #[serde(
        default,
        deserialize_with = "labor_flag",
        serialize_with = "as_labor_flag"
    )]
    pub forced_child_labor: bool,
}

impl Resource for CountryGood {
    const URI: &'static str = "childlabor_cty_goo";
}
