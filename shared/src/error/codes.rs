//! Unified error codes
//!
//! Codes are organized by category:
//! - 0xxx: General / validation errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 6xxx: Domain (hotel/room/user) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values for efficient serialization and
/// cross-language compatibility with the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing or blank
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// No active session
    NoActiveSession = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1005,
    /// Email already registered
    EmailAlreadyRegistered = 1008,

    // ==================== 2xxx: Permission ====================
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 6xxx: Domain ====================
    /// Hotel not found
    HotelNotFound = 6001,
    /// Room not found
    RoomNotFound = 6002,
    /// User not found
    UserNotFound = 6003,

    // ==================== 9xxx: System ====================
    /// Underlying key-value store rejected an operation
    StorageFailure = 9001,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::NoActiveSession => "No active session",
            Self::InvalidCredentials => "Invalid credentials",
            Self::SessionExpired => "Session expired",
            Self::EmailAlreadyRegistered => "Email already registered",
            Self::AdminRequired => "Unauthorized - Admin only",
            Self::HotelNotFound => "Hotel not found",
            Self::RoomNotFound => "Room not found",
            Self::UserNotFound => "User not found",
            Self::StorageFailure => "Storage operation failed",
        }
    }

    /// Numeric code value
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,
            1001 => Self::NoActiveSession,
            1002 => Self::InvalidCredentials,
            1005 => Self::SessionExpired,
            1008 => Self::EmailAlreadyRegistered,
            2003 => Self::AdminRequired,
            6001 => Self::HotelNotFound,
            6002 => Self::RoomNotFound,
            6003 => Self::UserNotFound,
            9001 => Self::StorageFailure,
            other => return Err(format!("unknown error code: {}", other)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_u16() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::NoActiveSession,
            ErrorCode::AdminRequired,
            ErrorCode::HotelNotFound,
            ErrorCode::StorageFailure,
        ] {
            assert_eq!(ErrorCode::try_from(code.as_u16()), Ok(code));
        }
    }

    #[test]
    fn rejects_unknown_value() {
        assert!(ErrorCode::try_from(4242).is_err());
    }
}
