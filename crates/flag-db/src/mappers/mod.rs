//! Entity <-> model mappers

pub mod comment;
