//! Field chaining, lookup, and whole-form validation.

use std::sync::{Arc, Weak};

use crate::delegate::CoordinatorDelegate;
use crate::error::ValidationError;
use crate::field::{FinishAction, ReturnKind, TextField};
use crate::rules::ValidationType;

/// One chained field: a weak widget handle plus its chain position.
struct TrackedField {
    widget: Weak<dyn TextField>,
    index: usize,
}

impl TrackedField {
    /// Resolve the widget. A dropped widget leaves the entry inert.
    fn upgrade(&self) -> Option<Arc<dyn TextField>> {
        self.widget.upgrade()
    }
}

/// Coordinates focus chaining and validation across a form's text fields.
///
/// The coordinator owns an ordered list of tracked fields, each held as a
/// weak handle so widget lifetimes stay with the host. [`chain`] wires the
/// submit gesture of every field but the last to advance focus; the last
/// field gets the caller's [`FinishAction`]. [`validate_all`] evaluates
/// each non-exempt field's built-in rule and reports all failures through
/// one aggregate callback.
///
/// All operations are synchronous and run to completion on the calling
/// thread; callbacks fire inline.
///
/// [`chain`]: FieldCoordinator::chain
/// [`validate_all`]: FieldCoordinator::validate_all
pub struct FieldCoordinator {
    delegate: Arc<dyn CoordinatorDelegate>,
    fields: Vec<TrackedField>,
}

impl FieldCoordinator {
    /// Create a coordinator with the given collaborator.
    pub fn new(delegate: Arc<dyn CoordinatorDelegate>) -> Self {
        Self {
            delegate,
            fields: Vec::new(),
        }
    }

    /// Number of tracked fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    // -------------------------------------------------------------------------
    // Registration & chaining
    // -------------------------------------------------------------------------

    /// Replace the tracked-field list with `widgets`, in order, and wire
    /// focus chaining.
    ///
    /// Every field except the last gets [`ReturnKind::Next`] and a submit
    /// action that moves focus to the field after it; the last field gets
    /// the `finish` behavior instead. Wiring does not itself change the
    /// current focus. An empty sequence just clears the list; duplicate
    /// widgets are tracked independently, by position.
    pub fn chain(&mut self, widgets: &[Arc<dyn TextField>], finish: FinishAction) {
        self.fields = widgets
            .iter()
            .enumerate()
            .map(|(index, widget)| TrackedField {
                widget: Arc::downgrade(widget),
                index,
            })
            .collect();
        log::debug!("[chain] tracking {} fields", self.fields.len());

        let Some(last) = widgets.len().checked_sub(1) else {
            return;
        };

        for (index, widget) in widgets.iter().enumerate() {
            if index == last {
                break;
            }
            let current = Arc::downgrade(widget);
            let next = Arc::downgrade(&widgets[index + 1]);
            widget.set_return_kind(ReturnKind::Next);
            widget.set_submit_action(Arc::new(move || {
                if let Some(current) = current.upgrade() {
                    current.blur();
                }
                if let Some(next) = next.upgrade() {
                    next.focus();
                }
            }));
        }

        let last_widget = &widgets[last];
        match finish {
            FinishAction::Dismiss => {
                let handle = Arc::downgrade(last_widget);
                last_widget.set_return_kind(ReturnKind::Done);
                last_widget.set_submit_action(Arc::new(move || {
                    if let Some(widget) = handle.upgrade() {
                        widget.blur();
                    }
                }));
            }
            FinishAction::Submit(action) => {
                last_widget.set_return_kind(ReturnKind::Send);
                last_widget.set_submit_action(action);
            }
        }
    }

    /// Move focus to the field after `field` in chain order.
    ///
    /// Matches by widget ID; duplicates resolve to their first occurrence.
    /// An unknown field or the last field in the chain is a no-op.
    pub fn advance_focus_after(&self, field: &dyn TextField) {
        let id = field.id();
        let position = self
            .fields
            .iter()
            .position(|entry| entry.upgrade().is_some_and(|widget| widget.id() == id));
        let Some(position) = position else {
            log::debug!("[focus] field {id} is not tracked, ignoring");
            return;
        };

        if let Some(next) = self.fields.get(position + 1).and_then(TrackedField::upgrade) {
            field.blur();
            next.focus();
            log::debug!("[focus] advanced from position {position} to {}", position + 1);
        }
    }

    /// Assign text to tracked fields by position: `values[i]` goes to
    /// field `i`. A shorter value list leaves trailing fields untouched;
    /// excess values are ignored.
    pub fn populate<S: AsRef<str>>(&self, values: &[S]) {
        for (entry, value) in self.fields.iter().zip(values) {
            if let Some(widget) = entry.upgrade() {
                widget.set_text(value.as_ref());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Lookup & enumeration
    // -------------------------------------------------------------------------

    /// The single tracked field whose delegate-assigned type is `ty`.
    ///
    /// Returns `None` when no field matches, and also when more than one
    /// does: the lookup is meant for unique types, so an ambiguous match
    /// is not resolved arbitrarily.
    pub fn field_for_type(&self, ty: ValidationType) -> Option<Arc<dyn TextField>> {
        let mut found = None;
        for entry in &self.fields {
            let Some(widget) = entry.upgrade() else {
                continue;
            };
            if self.delegate.validation_type(widget.as_ref(), entry.index) == ty {
                if found.is_some() {
                    log::debug!("[lookup] type {ty:?} is ambiguous");
                    return None;
                }
                found = Some(widget);
            }
        }
        found
    }

    /// The current text of the unique field typed `ty`, via
    /// [`field_for_type`](FieldCoordinator::field_for_type).
    pub fn value_for_type(&self, ty: ValidationType) -> Option<String> {
        self.field_for_type(ty).map(|widget| widget.text())
    }

    /// Visit every live tracked field in chain order with its widget,
    /// current text, and validation type.
    pub fn enumerate(&self, mut visitor: impl FnMut(&dyn TextField, &str, ValidationType)) {
        for entry in &self.fields {
            let Some(widget) = entry.upgrade() else {
                continue;
            };
            let text = widget.text();
            let ty = self.delegate.validation_type(widget.as_ref(), entry.index);
            visitor(widget.as_ref(), &text, ty);
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate every tracked field and report failures in one pass.
    ///
    /// Fields are processed in chain order. The delegate is asked for each
    /// field's type on every call, exempt (`None`) fields are skipped, and
    /// each failing field triggers one `on_validation_failed` notification
    /// immediately. After the pass, `on_invalid` fires exactly once with
    /// the parallel failing-field and error lists - but only if at least
    /// one field failed. Absence of the callback is the success signal;
    /// there is no explicit valid callback. Returns `true` when every
    /// non-exempt field passed.
    pub fn validate_all(
        &self,
        on_invalid: impl FnOnce(&[Arc<dyn TextField>], &[ValidationError]),
    ) -> bool {
        let mut failed = Vec::new();
        let mut errors = Vec::new();

        for entry in &self.fields {
            let Some(widget) = entry.upgrade() else {
                continue;
            };
            let ty = self.delegate.validation_type(widget.as_ref(), entry.index);
            if ty.is_exempt() {
                continue;
            }

            let text = widget.text();
            // Confirmation resolves the primary email field fresh on every
            // pass; zero or multiple email fields yield None and fail it.
            let primary_email = if ty == ValidationType::EmailConfirmation {
                self.value_for_type(ValidationType::Email)
            } else {
                None
            };
            if ty.accepts(&text, primary_email.as_deref()) {
                continue;
            }

            let error = self.delegate.validation_error(widget.as_ref(), ty, entry.index);
            log::debug!(
                "[validate] field {} at position {} failed {ty:?}",
                widget.id(),
                entry.index
            );
            self.delegate
                .on_validation_failed(widget.as_ref(), entry.index, &error);
            failed.push(widget);
            errors.push(error);
        }

        if errors.is_empty() {
            true
        } else {
            log::debug!("[validate] {} of {} fields failed", errors.len(), self.fields.len());
            on_invalid(&failed, &errors);
            false
        }
    }

    /// Blur every live tracked field that currently holds focus.
    /// Idempotent.
    pub fn resign_all(&self) {
        for entry in &self.fields {
            if let Some(widget) = entry.upgrade()
                && widget.is_focused()
            {
                widget.blur();
            }
        }
    }
}
