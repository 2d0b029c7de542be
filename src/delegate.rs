//! Collaborator contract supplying per-field typing and error objects.

use crate::error::ValidationError;
use crate::field::TextField;
use crate::rules::ValidationType;

/// External owner of a chained form.
///
/// The coordinator queries typing at validation and lookup time rather
/// than caching it, so a delegate may retype fields between passes. The
/// error object is requested only for fields whose rule actually failed.
pub trait CoordinatorDelegate: Send + Sync {
    /// The validation type currently assigned to `field`.
    fn validation_type(&self, field: &dyn TextField, index: usize) -> ValidationType;

    /// The error to report when `field` fails its rule for `ty`. Must
    /// produce a usable error for any (field, type) pair that can fail.
    fn validation_error(
        &self,
        field: &dyn TextField,
        ty: ValidationType,
        index: usize,
    ) -> ValidationError;

    /// Notification that `field` failed validation. Fired once per failing
    /// field, in chain order, strictly before the aggregate callback.
    fn on_validation_failed(&self, field: &dyn TextField, index: usize, error: &ValidationError) {
        let _ = (field, index, error);
    }
}
