use axum::extract::multipart::MultipartError;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Debug;

// Codes 1..=99 are infrastructure failures, everything above is a
// client-visible condition with its own HTTP status.
#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        io_error(err)
    }
}

impl From<oso::OsoError> for Error {
    fn from(err: oso::OsoError) -> Self {
        policy_error(err)
    }
}

impl From<MultipartError> for Error {
    fn from(_: MultipartError) -> Self {
        invalid_input_error()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            101 => (StatusCode::UNPROCESSABLE_ENTITY, self.message.as_str()),
            102 => (StatusCode::NOT_FOUND, self.message.as_str()),
            103 => (StatusCode::UNAUTHORIZED, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 102,
        message: "resource not found".into(),
    }
}

pub fn unauthorized_error() -> Error {
    Error {
        code: 103,
        message: "unauthorized".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn io_error(_: std::io::Error) -> Error {
    Error {
        code: 5,
        message: "io error".into(),
    }
}

pub fn policy_error(_: oso::OsoError) -> Error {
    Error {
        code: 6,
        message: "policy error".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_codes_map_to_500() {
        let response = database_error("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = upstream_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_codes_map_to_their_statuses() {
        let response = invalid_input_error().into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = not_found_error().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = unauthorized_error().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
