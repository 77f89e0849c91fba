//! Wire schema for the legacy namespaced time-data feed.
//!
//! The legacy endpoint wraps everything in a `Vaktor.`-prefixed envelope and
//! nests the day list as a JSON-encoded string under `Vaktor.dager`. The
//! double encoding is a deliberate artifact of the upstream schema: consumers
//! parse `dager` as a string field and decode it separately, so the mock must
//! emit it exactly that way.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::EmployeeProfile;
use crate::error::{MockError, MockResult};
use crate::models::{
    DaySheet, DayType, Punch, APPROVAL_STATUS_APPROVED, NO_ABSENCE_CODE, NO_ABSENCE_LABEL,
};

/// Scheduled hours per day in the legacy schema.
pub const SKJEMA_TID: u32 = 7;

/// Shift template label emitted on every day.
pub const SKJEMA_NAVN: &str = "Heltid 0800-1500 (2018)";

// Fixed supplement rate percentages carried on every position.
const RATE_K170: u32 = 35;
const RATE_K171: u32 = 10;
const RATE_K172: u32 = 20;
const RATE_K160: u32 = 15;
const RATE_K161: u32 = 55;

/// Outer envelope of the legacy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiddataResponse {
    /// The single namespaced body object.
    #[serde(rename = "Vaktor.Vaktor_TiddataResponse")]
    pub response: TiddataResponseBody,
}

/// Body of the legacy envelope, holding the one-element result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiddataResponseBody {
    /// Always exactly one result per request.
    #[serde(rename = "Vaktor.Vaktor_TiddataResult")]
    pub result: Vec<TiddataResult>,
}

/// Employee/manager metadata plus the JSON-string-encoded day list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiddataResult {
    /// The employee's NAV id.
    #[serde(rename = "Vaktor.nav_id")]
    pub nav_id: String,
    /// The `ident` query parameter, echoed verbatim.
    #[serde(rename = "Vaktor.resource_id")]
    pub resource_id: String,
    /// The manager's resource id.
    #[serde(rename = "Vaktor.leder_resource_id")]
    pub leder_resource_id: String,
    /// The manager's NAV id.
    #[serde(rename = "Vaktor.leder_nav_id")]
    pub leder_nav_id: String,
    /// The manager's display name.
    #[serde(rename = "Vaktor.leder_navn")]
    pub leder_navn: String,
    /// The manager's email address.
    #[serde(rename = "Vaktor.leder_epost")]
    pub leder_epost: String,
    /// The day list, serialized to a JSON string.
    #[serde(rename = "Vaktor.dager")]
    pub dager: String,
}

/// One day of the legacy `dager` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyDay {
    /// The calendar date, midnight time component included.
    pub dato: NaiveDateTime,
    /// Scheduled hours for the day.
    pub skjema_tid: u32,
    /// Shift template label.
    pub skjema_navn: String,
    /// Approval status code (5 = approved).
    pub godkjent: u8,
    /// Who approved the sheet.
    pub ansatt_dato_godkjent_av: String,
    /// When the sheet was approved.
    pub godkjent_dato: NaiveDateTime,
    /// Working-day classification label.
    pub virkedag: DayType,
    /// The day's punches, In then Out.
    #[serde(rename = "Stemplinger")]
    pub stemplinger: Vec<LegacyPunch>,
    /// The day's single position allocation.
    #[serde(rename = "Stillinger")]
    pub stillinger: Vec<LegacyPosition>,
}

/// One punch of the legacy `Stemplinger` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyPunch {
    /// When the punch was registered.
    #[serde(rename = "Stempling_Tid")]
    pub stempling_tid: NaiveDateTime,
    /// Punch direction label (`"Inn"`/`"Ut"`).
    #[serde(rename = "Navn")]
    pub navn: String,
    /// Punch type code (`"B1"`/`"B2"`).
    #[serde(rename = "Type")]
    pub type_code: String,
    /// Absence code, zero when no absence is registered.
    #[serde(rename = "Fravar_kode")]
    pub fravar_kode: u32,
    /// Absence label.
    #[serde(rename = "Fravar_kode_navn")]
    pub fravar_kode_navn: String,
}

/// One position of the legacy `Stillinger` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyPosition {
    /// Cost center code.
    pub koststed: String,
    /// Purpose code.
    pub formal: String,
    /// Activity code.
    pub aktivitet: String,
    /// Annual salary in NOK, randomized per day in this schema.
    #[serde(rename = "RATE_K001")]
    pub rate_k001: u32,
    /// Saturday/Sunday supplement percentage.
    #[serde(rename = "RATE_K170")]
    pub rate_k170: u32,
    /// Day supplement percentage.
    #[serde(rename = "RATE_K171")]
    pub rate_k171: u32,
    /// Night supplement percentage.
    #[serde(rename = "RATE_K172")]
    pub rate_k172: u32,
    /// Extended-hours supplement percentage.
    #[serde(rename = "RATE_K160")]
    pub rate_k160: u32,
    /// Weekend supplement percentage.
    #[serde(rename = "RATE_K161")]
    pub rate_k161: u32,
}

impl TiddataResponse {
    /// Builds the full legacy response for a generated day list.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Serialization`] if the day list cannot be encoded
    /// to the `dager` string.
    pub fn build(
        ident: &str,
        days: &[DaySheet],
        profile: &EmployeeProfile,
    ) -> MockResult<Self> {
        let dager = encode_dager(days, profile)?;
        Ok(Self {
            response: TiddataResponseBody {
                result: vec![TiddataResult {
                    nav_id: profile.nav_id.clone(),
                    resource_id: ident.to_string(),
                    leder_resource_id: profile.manager_resource_id.clone(),
                    leder_nav_id: profile.manager_nav_id.clone(),
                    leder_navn: profile.manager_name.clone(),
                    leder_epost: profile.manager_email.clone(),
                    dager,
                }],
            },
        })
    }
}

fn encode_dager(days: &[DaySheet], profile: &EmployeeProfile) -> MockResult<String> {
    let wire: Vec<LegacyDay> = days
        .iter()
        .map(|day| LegacyDay::from_sheet(day, profile))
        .collect();
    serde_json::to_string(&wire).map_err(|err| MockError::Serialization {
        message: err.to_string(),
    })
}

impl LegacyDay {
    /// Maps a generated day onto the legacy wire shape.
    pub fn from_sheet(sheet: &DaySheet, profile: &EmployeeProfile) -> Self {
        Self {
            dato: sheet.date.and_hms_opt(0, 0, 0).unwrap(),
            skjema_tid: SKJEMA_TID,
            skjema_navn: SKJEMA_NAVN.to_string(),
            godkjent: APPROVAL_STATUS_APPROVED,
            ansatt_dato_godkjent_av: profile.approved_by.clone(),
            godkjent_dato: sheet.approved_date,
            virkedag: sheet.day_type,
            stemplinger: sheet.punches.iter().map(LegacyPunch::from).collect(),
            stillinger: vec![LegacyPosition {
                koststed: sheet.position.cost_center.clone(),
                formal: sheet.position.purpose.clone(),
                aktivitet: sheet.position.activity.clone(),
                rate_k001: sheet.position.annual_salary,
                rate_k170: RATE_K170,
                rate_k171: RATE_K171,
                rate_k172: RATE_K172,
                rate_k160: RATE_K160,
                rate_k161: RATE_K161,
            }],
        }
    }
}

impl From<&Punch> for LegacyPunch {
    fn from(punch: &Punch) -> Self {
        Self {
            stempling_tid: punch.time,
            navn: punch.direction.label().to_string(),
            type_code: punch.direction.type_code().to_string(),
            fravar_kode: NO_ABSENCE_CODE,
            fravar_kode_navn: NO_ABSENCE_LABEL.to_string(),
        }
    }
}
