#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the marketplace service.
///
/// This module contains the data structures that represent the domain
/// entities, their write payloads, and the validation that turns one into the
/// other. The models are primarily data structures with minimal business
/// logic, keeping domain entities separate from their persistence and
/// transport representations.
pub mod models;

/// Interface traits for the marketplace service.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain logic and external
/// adapters (such as databases or HTTP servers) without specifying
/// implementation details, so infrastructure can be swapped without touching
/// the core behavior.
pub mod ports;
