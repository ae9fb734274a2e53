// Unit tests for error mapping - pure domain logic without HTTP dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::Other("VALIDATION_ERROR".into()), "bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);

    let phase = DomainError::validation(ValidationKind::PhaseMismatch, "not in progress");
    let app: AppError = phase.into();
    assert_eq!(app.code().as_str(), "PHASE_MISMATCH");
    assert_eq!(app.status().as_u16(), 422);

    let rounds = DomainError::validation(ValidationKind::InvalidRoundLimit, "zero rounds");
    let app: AppError = rounds.into();
    assert_eq!(app.code(), ErrorCode::InvalidRoundLimit);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let capacity = DomainError::conflict(ConflictKind::CapacityExceeded, "full");
    let app: AppError = capacity.into();
    assert_eq!(app.code().as_str(), "CAPACITY_EXCEEDED");
    assert_eq!(app.status().as_u16(), 409);

    let duplicate = DomainError::conflict(ConflictKind::DuplicateTurn, "already rolled");
    let app: AppError = duplicate.into();
    assert_eq!(app.code().as_str(), "DUPLICATE_TURN");
    assert_eq!(app.status().as_u16(), 409);

    // Generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("some conflict".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Match, "no match");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "MATCH_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Player, "no player");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::StoreUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "STORE_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn domain_purity_check() {
    // Domain errors are constructible without HTTP imports; conversion to
    // AppError is the only place HTTP status enters the picture.
    let validation = DomainError::validation(ValidationKind::PhaseMismatch, "test");
    let conflict = DomainError::conflict(ConflictKind::DuplicateTurn, "test");
    let not_found = DomainError::not_found(NotFoundKind::Match, "test");
    let infra = DomainError::infra(InfraErrorKind::StoreUnavailable, "test");

    let _: AppError = validation.into();
    let _: AppError = conflict.into();
    let _: AppError = not_found.into();
    let _: AppError = infra.into();
}
