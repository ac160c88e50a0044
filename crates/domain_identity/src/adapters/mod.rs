//! Adapters for the identity domain ports

mod rest;

pub use rest::{RestLookupAdapter, RestLookupConfig};
