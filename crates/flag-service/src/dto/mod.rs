//! Data transfer objects

pub mod requester;
pub mod responses;

pub use requester::RequesterContext;
pub use responses::{
    FlagResponse, HealthChecks, HealthResponse, ReadinessResponse, ReportCountResponse,
};
