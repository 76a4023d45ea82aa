//! Thin wrapper over the GitHub REST contributors endpoint.

pub mod index;
