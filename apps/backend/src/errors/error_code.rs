//! Error codes for the dice-duel backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Round limit outside the accepted range
    InvalidRoundLimit,
    /// Operation not legal in the current match phase
    PhaseMismatch,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Match not found
    MatchNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Business logic conflicts
    /// Match already has two participants
    CapacityExceeded,
    /// Participant already rolled this round
    DuplicateTurn,
    /// General conflict error
    Conflict,

    // Infrastructure
    /// Player store unavailable
    StoreUnavailable,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRoundLimit => "INVALID_ROUND_LIMIT",
            ErrorCode::PhaseMismatch => "PHASE_MISMATCH",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::MatchNotFound => "MATCH_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::CapacityExceeded => "CAPACITY_EXCEEDED",
            ErrorCode::DuplicateTurn => "DUPLICATE_TURN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every defined code, for exhaustiveness checks in tests.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::InvalidRoundLimit,
        ErrorCode::PhaseMismatch,
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::MatchNotFound,
        ErrorCode::PlayerNotFound,
        ErrorCode::NotFound,
        ErrorCode::CapacityExceeded,
        ErrorCode::DuplicateTurn,
        ErrorCode::Conflict,
        ErrorCode::StoreUnavailable,
        ErrorCode::InternalError,
        ErrorCode::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
