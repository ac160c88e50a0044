//! Core Kernel - Foundational types for the ID lookup system
//!
//! This crate provides the building blocks shared by all domain modules:
//! - Port/adapter infrastructure for external collaborators
//! - The unified `PortError` taxonomy
//! - Operation metadata for tracing across systems

pub mod ports;

pub use ports::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};
