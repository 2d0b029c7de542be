//! Form text-field coordination.
//!
//! `formchain` chains keyboard focus between the text fields of a form,
//! assigns each field a validation rule by type tag, and aggregates
//! validation failures into a single report. It is headless: rendering and
//! platform keyboard mechanics stay with the host, which plugs in via the
//! [`TextField`] widget capability and the [`CoordinatorDelegate`]
//! collaborator contract.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use formchain::{FieldCoordinator, FinishAction, TextField, TextInput, ValidationType};
//!
//! let delegate = Arc::new(SignupDelegate::new());
//! let mut coordinator = FieldCoordinator::new(delegate);
//!
//! let name = Arc::new(TextInput::new());
//! let email = Arc::new(TextInput::new());
//! let fields: Vec<Arc<dyn TextField>> = vec![name.clone(), email.clone()];
//!
//! coordinator.chain(&fields, FinishAction::submit(|| { /* submit the form */ }));
//!
//! let ok = coordinator.validate_all(|fields, errors| {
//!     // present the aggregate failure
//! });
//! ```

pub mod coordinator;
pub mod delegate;
pub mod error;
pub mod field;
pub mod input;
pub mod rules;

pub use coordinator::FieldCoordinator;
pub use delegate::CoordinatorDelegate;
pub use error::{CombineError, ValidationError};
pub use field::{FinishAction, ReturnKind, SubmitAction, TextField};
pub use input::{TextInput, TextInputId};
pub use rules::ValidationType;
