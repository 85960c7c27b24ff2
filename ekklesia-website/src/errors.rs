/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use http::status::StatusCode;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl SiteError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NotFound => StatusCode::NOT_FOUND,
            SiteError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_http_status() {
        assert_eq!(SiteError::NotFound.status_code(), StatusCode::NOT_FOUND);
        let error = SiteError::InternalServerError("disk".into());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Internal Server Error: disk");
    }
}
