//! # bizid-core — Business Identifier Validation
//!
//! Validates business identifiers of the form `NNNNNNN-N` (seven digits,
//! a `-` separator, one check digit) and reports every distinct reason a
//! candidate fails.
//!
//! ## Key Design Principles
//!
//! 1. **Reasons, not errors.** [`validate`] never fails. A non-text input,
//!    a short string and a bad check digit are all reported the same way,
//!    as [`FailureReason`]s in a [`ValidationResult`].
//!
//! 2. **Closed reason taxonomy.** [`FailureReason`] is a single enum with a
//!    fixed label per variant; exhaustive `match` keeps renderers in sync.
//!
//! 3. **Fresh result per call.** The validator holds no state. Each call
//!    builds and returns its own reason list, so [`BusinessIdValidator`] is
//!    `Send + Sync` and shareable without locks.
//!
//! 4. **Validated newtype.** [`BusinessId`] can only hold a value that
//!    passed every check, including through `Deserialize`.
//!
//! ## Example
//!
//! ```
//! use bizid_core::{validate, ReasonKind};
//!
//! assert!(validate("2471384-9").is_valid());
//!
//! let result = validate("1001000-9");
//! assert_eq!(
//!     result.kinds(),
//!     vec![ReasonKind::CheckNumBaseInvalid, ReasonKind::CheckNumMismatch]
//! );
//! ```
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod candidate;
pub mod checksum;
pub mod error;
pub mod identity;
pub mod reason;
pub mod result;
pub mod specification;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use candidate::{Candidate, ValueKind};
pub use checksum::check_digit;
pub use error::IdentifierError;
pub use identity::BusinessId;
pub use reason::{FailureReason, ReasonKind};
pub use result::ValidationResult;
pub use specification::Specification;
pub use validator::{validate, BusinessIdValidator};
