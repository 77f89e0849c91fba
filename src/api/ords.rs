//! Wire schema for the ORDS time-data feed and the OAuth token stub.
//!
//! The ORDS endpoint returns a flat object with lower-cased field names, a
//! half-hour longer scheduled day (7.5 hours), and position records extended
//! with `post_id` and `parttime_pct`. The salary is drawn once per request
//! and held constant across every day. `dager` is still a JSON-encoded
//! string, same as the legacy feed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::EmployeeProfile;
use crate::error::{MockError, MockResult};
use crate::models::{
    DaySheet, DayType, Punch, APPROVAL_STATUS_APPROVED, NO_ABSENCE_CODE, NO_ABSENCE_LABEL,
};

/// Scheduled hours per day in the ORDS schema.
pub const SKJEMA_TID: f64 = 7.5;

/// Shift template label emitted on every day.
pub const SKJEMA_NAVN: &str = "Heltid 0800-1530 (2018)";

/// Position id emitted on every allocation.
pub const POST_ID: &str = "1";

/// Employment fraction percentage emitted on every allocation.
pub const PARTTIME_PCT: u32 = 100;

/// The fixed bearer token the stub hands out.
pub const ACCESS_TOKEN: &str = "ZHVtbXktdG9rZW4=";

/// Flat ORDS time-data response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdsTiddataResponse {
    /// The employee's NAV id.
    pub nav_id: String,
    /// The `ident` query parameter, echoed verbatim.
    pub resource_id: String,
    /// The manager's resource id.
    pub leder_resource_id: String,
    /// The manager's NAV id.
    pub leder_nav_id: String,
    /// The manager's display name.
    pub leder_navn: String,
    /// The manager's email address.
    pub leder_epost: String,
    /// The day list, serialized to a JSON string.
    pub dager: String,
}

/// One day of the ORDS `dager` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdsDay {
    /// The calendar date, midnight time component included.
    pub dato: NaiveDateTime,
    /// Scheduled hours for the day.
    pub skjema_tid: f64,
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
    pub stemplinger: Vec<OrdsPunch>,
    /// The day's single position allocation.
    pub stillinger: Vec<OrdsPosition>,
}

/// One punch of the ORDS `stemplinger` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdsPunch {
    /// When the punch was registered.
    pub stempling_tid: NaiveDateTime,
    /// Punch direction label (`"Inn"`/`"Ut"`).
    pub navn: String,
    /// Punch type code (`"B1"`/`"B2"`).
    #[serde(rename = "type")]
    pub type_code: String,
    /// Absence code, zero when no absence is registered.
    pub fravar_kode: u32,
    /// Absence label.
    pub fravar_kode_navn: String,
    /// Overtime justification; the mock never registers overtime.
    pub overtid_begrunnelse: Option<String>,
}

/// One position of the ORDS `stillinger` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdsPosition {
    /// Position id.
    pub post_id: String,
    /// Employment fraction percentage.
    pub parttime_pct: u32,
    /// Cost center code.
    pub koststed: String,
    /// Purpose code.
    pub formal: String,
    /// Activity code.
    pub aktivitet: String,
    /// Annual salary in NOK, drawn once per request in this schema.
    pub rate_k001: u32,
}

/// Bearer token payload returned by the OAuth stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The opaque access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u32,
}

impl TokenResponse {
    /// The fixed payload the stub returns for every request.
    pub fn stub() -> Self {
        Self {
            access_token: ACCESS_TOKEN.to_string(),
            token_type: "bearer".to_string(),
            expires_in: 1,
        }
    }
}

impl OrdsTiddataResponse {
    /// Builds the full ORDS response for a generated day list.
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
            nav_id: profile.nav_id.clone(),
            resource_id: ident.to_string(),
            leder_resource_id: profile.manager_resource_id.clone(),
            leder_nav_id: profile.manager_nav_id.clone(),
            leder_navn: profile.manager_name.clone(),
            leder_epost: profile.manager_email.clone(),
            dager,
        })
    }
}

fn encode_dager(days: &[DaySheet], profile: &EmployeeProfile) -> MockResult<String> {
    let wire: Vec<OrdsDay> = days
        .iter()
        .map(|day| OrdsDay::from_sheet(day, profile))
        .collect();
    serde_json::to_string(&wire).map_err(|err| MockError::Serialization {
        message: err.to_string(),
    })
}

impl OrdsDay {
    /// Maps a generated day onto the ORDS wire shape.
    pub fn from_sheet(sheet: &DaySheet, profile: &EmployeeProfile) -> Self {
        Self {
            dato: sheet.date.and_hms_opt(0, 0, 0).unwrap(),
            skjema_tid: SKJEMA_TID,
            skjema_navn: SKJEMA_NAVN.to_string(),
            godkjent: APPROVAL_STATUS_APPROVED,
            ansatt_dato_godkjent_av: profile.approved_by.clone(),
            godkjent_dato: sheet.approved_date,
            virkedag: sheet.day_type,
            stemplinger: sheet.punches.iter().map(OrdsPunch::from).collect(),
            stillinger: vec![OrdsPosition {
                post_id: POST_ID.to_string(),
                parttime_pct: PARTTIME_PCT,
                koststed: sheet.position.cost_center.clone(),
                formal: sheet.position.purpose.clone(),
                aktivitet: sheet.position.activity.clone(),
                rate_k001: sheet.position.annual_salary,
            }],
        }
    }
}

impl From<&Punch> for OrdsPunch {
    fn from(punch: &Punch) -> Self {
        Self {
            stempling_tid: punch.time,
            navn: punch.direction.label().to_string(),
            type_code: punch.direction.type_code().to_string(),
            fravar_kode: NO_ABSENCE_CODE,
            fravar_kode_navn: NO_ABSENCE_LABEL.to_string(),
            overtid_begrunnelse: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::Value;

    use crate::generator::{generate_timesheet, SalaryPolicy};
    use crate::models::DateRange;

    fn build_response(from: &str, to: &str) -> OrdsTiddataResponse {
        let range = DateRange::parse(from, to).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let policy = SalaryPolicy::per_request(&mut rng);
        let days = generate_timesheet(&range, policy, &mut rng);
        OrdsTiddataResponse::build("E152435", &days, &EmployeeProfile::default()).unwrap()
    }

    #[test]
    fn test_response_is_flat_with_lowercase_keys() {
        let response = build_response("2024-01-01", "2024-01-03");
        let json: Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["resource_id"], "E152435");
        assert_eq!(json["nav_id"], "123456");
        assert_eq!(json["leder_epost"], "Bran.Kalpana@nav.no");
        assert!(json["dager"].is_string());
    }

    #[test]
    fn test_dager_round_trips_to_day_list() {
        let response = build_response("2024-01-01", "2024-01-07");
        let days: Vec<OrdsDay> = serde_json::from_str(&response.dager).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].skjema_tid, SKJEMA_TID);
        assert_eq!(days[0].stemplinger.len(), 2);
        assert_eq!(days[0].stillinger.len(), 1);
    }

    #[test]
    fn test_salary_is_constant_across_all_days() {
        let response = build_response("2024-01-01", "2024-01-31");
        let days: Vec<OrdsDay> = serde_json::from_str(&response.dager).unwrap();
        let first = days[0].stillinger[0].rate_k001;
        assert!((400_000..=800_000).contains(&first));
        assert!(days.iter().all(|d| d.stillinger[0].rate_k001 == first));
    }

    #[test]
    fn test_punch_type_key_is_type() {
        let response = build_response("2024-01-01", "2024-01-01");
        let raw: Vec<Value> = serde_json::from_str(&response.dager).unwrap();
        let punch = &raw[0]["stemplinger"][0];
        assert_eq!(punch["type"], "B1");
        assert_eq!(punch["navn"], "Inn");
        assert!(punch["overtid_begrunnelse"].is_null());
    }

    #[test]
    fn test_position_carries_ords_extensions() {
        let response = build_response("2024-01-01", "2024-01-01");
        let days: Vec<OrdsDay> = serde_json::from_str(&response.dager).unwrap();
        let position = &days[0].stillinger[0];
        assert_eq!(position.post_id, POST_ID);
        assert_eq!(position.parttime_pct, PARTTIME_PCT);
        assert_eq!(position.koststed, "855210");
    }

    #[test]
    fn test_token_stub_payload() {
        let token = TokenResponse::stub();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 1);
        assert_eq!(token.access_token, ACCESS_TOKEN);
    }
}
