//! The widget capability the coordinator drives.

use std::sync::Arc;

/// Action run when the user triggers the submit/next gesture on a field.
pub type SubmitAction = Arc<dyn Fn() + Send + Sync>;

/// Semantic kind of a field's return/submit gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnKind {
    /// Advance to the next field in the chain.
    #[default]
    Next,
    /// Finish input, dismissing focus.
    Done,
    /// Finish input by submitting the form.
    Send,
}

/// What the last field in a chain does on its submit gesture.
pub enum FinishAction {
    /// Blur the last field (plain keyboard dismissal).
    Dismiss,
    /// Run a custom action, e.g. form submission.
    Submit(SubmitAction),
}

impl FinishAction {
    /// Convenience constructor for [`FinishAction::Submit`].
    pub fn submit(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Submit(Arc::new(action))
    }
}

/// Capability a platform text widget exposes to be coordinated.
///
/// Implementations are expected to be cheap handles over shared interior
/// state: the coordinator holds them weakly, reads text on demand, and
/// never extends a widget's lifetime.
pub trait TextField: Send + Sync {
    /// Stable identifier for this widget instance.
    fn id(&self) -> String;

    /// Current text value.
    fn text(&self) -> String;

    /// Replace the text value.
    fn set_text(&self, text: &str);

    /// Whether this field currently holds focus.
    fn is_focused(&self) -> bool;

    /// Request focus for this field.
    fn focus(&self);

    /// Give up focus if held.
    fn blur(&self);

    /// Install the action run on the user's submit/next gesture.
    fn set_submit_action(&self, action: SubmitAction);

    /// Configure the semantic return kind presented for this field.
    fn set_return_kind(&self, kind: ReturnKind);
}
