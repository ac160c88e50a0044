//! Identity Number Domain
//!
//! This crate owns the South African ID number decode/validate pipeline and
//! the orchestration of the downstream profile lookup.
//!
//! # Components
//!
//! - **Decoder/Validator** ([`validation::IdValidator`]): a pure function over
//!   a candidate string. Structural checks, embedded birth-date extraction,
//!   and a modulus-10 check digit, evaluated in strict precedence order.
//! - **Lookup port** ([`ports::IdLookupPort`]): the contract with the external
//!   processing service that resolves a validated ID number into a profile
//!   (date of birth, gender, citizenship, and the birth year's public
//!   holidays). Adapters: REST ([`adapters::RestLookupAdapter`]) and an
//!   in-memory mock for tests.
//! - **Orchestrator** ([`search::SearchOrchestrator`]): one service call per
//!   user-initiated search, verbatim response mapping, and failure-message
//!   folding.
//! - **Session** ([`session::SearchSession`]): the explicit state struct the
//!   presentation layer owns - candidate text, gating, and stale-response
//!   discard. The validator and orchestrator stay pure.
//!
//! # Examples
//!
//! ```rust
//! use domain_identity::validation::IdValidator;
//!
//! let outcome = IdValidator::validate("8001015009087");
//! assert!(outcome.is_valid());
//!
//! let outcome = IdValidator::validate("123");
//! assert!(!outcome.is_valid());
//! ```

pub mod adapters;
pub mod error;
pub mod id_number;
pub mod ports;
pub mod search;
pub mod session;
pub mod validation;

pub use adapters::{RestLookupAdapter, RestLookupConfig};
pub use error::{SearchError, DEFAULT_SEARCH_FAILURE_MESSAGE};
pub use id_number::{CitizenshipHint, GenderHint, ParsedId};
pub use ports::{HolidayRecord, IdLookupPort, LookupRequest, LookupResponse};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockLookupPort;
pub use search::{Holiday, LookupResult, SearchOrchestrator};
pub use session::{SearchSession, SearchSignal, SearchTicket};
pub use validation::{IdValidator, InvalidReason, ValidationOutcome};
