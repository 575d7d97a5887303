//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status a real API would answer with for this code
    ///
    /// Duplicate email maps to 400, not 409: the simulated REST contract
    /// reports registration conflicts as plain bad requests.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            Self::NoActiveSession | Self::InvalidCredentials | Self::SessionExpired => {
                StatusCode::UNAUTHORIZED
            }

            // 403 Forbidden
            Self::AdminRequired => StatusCode::FORBIDDEN,

            // 404 Not Found
            Self::NotFound | Self::HotelNotFound | Self::RoomNotFound | Self::UserNotFound => {
                StatusCode::NOT_FOUND
            }

            // 500 Internal Server Error
            Self::Unknown | Self::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
