//! Request types for the MinWinTid mock API.
//!
//! Both time-data routes take the same three query parameters; `ident` is
//! echoed verbatim into the response, the two dates bound the generated
//! range.

use serde::{Deserialize, Serialize};

use crate::error::MockResult;
use crate::models::DateRange;

/// Query parameters for the time-data endpoints.
///
/// All three parameters are required; axum's `Query` extractor rejects a
/// request that omits any of them, which the handlers surface as a 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiddataParams {
    /// Employee identifier, passed through without validation.
    pub ident: String,
    /// First date of the requested range, `YYYY-MM-DD`.
    pub fra_dato: String,
    /// Last date of the requested range, `YYYY-MM-DD`.
    pub til_dato: String,
}

impl TiddataParams {
    /// Parses the date parameters into a [`DateRange`].
    ///
    /// # Errors
    ///
    /// Returns [`MockError::MalformedDate`](crate::error::MockError) when
    /// either date does not match `YYYY-MM-DD`.
    pub fn date_range(&self) -> MockResult<DateRange> {
        DateRange::parse(&self.fra_dato, &self.til_dato)
    }
}
