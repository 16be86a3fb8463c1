//! # flag-service
//!
//! Application layer containing the flagging business logic, DTOs, and the
//! service dependency container.

pub mod dto;
pub mod services;

pub use dto::{
    FlagResponse, HealthChecks, HealthResponse, ReadinessResponse, ReportCountResponse,
    RequesterContext,
};
pub use services::{
    DuplicateFlagDetector, FlagDecision, FlagOutcome, FlagService, ModerationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
