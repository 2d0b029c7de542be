//! Headless text input: a reference [`TextField`] implementation.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::field::{ReturnKind, SubmitAction, TextField};

/// Unique identifier for a `TextInput` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextInputId(usize);

impl TextInputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TextInputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Internal state for a `TextInput`.
#[derive(Default)]
struct TextInputInner {
    /// Current text value
    value: String,
    /// Action installed by the coordinator for the submit gesture
    submit_action: Option<SubmitAction>,
    /// Semantic return kind for this field
    return_kind: ReturnKind,
}

/// A text input with shared interior state and no rendering.
///
/// `TextInput` carries the value, focus flag, and the submit wiring a
/// [`FieldCoordinator`] installs. Hosts without a platform widget embed it
/// directly; hosts with one adapt their widget to [`TextField`] instead.
/// [`TextInput::trigger_submit`] models the user's return-key gesture.
///
/// [`FieldCoordinator`]: crate::FieldCoordinator
pub struct TextInput {
    id: TextInputId,
    inner: Arc<RwLock<TextInputInner>>,
    focused: Arc<AtomicBool>,
}

impl TextInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self {
            id: TextInputId::new(),
            inner: Arc::new(RwLock::new(TextInputInner::default())),
            focused: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        input.set_value(value);
        input
    }

    /// Get the unique ID for this input.
    pub fn input_id(&self) -> TextInputId {
        self.id
    }

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Replace the text value.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Clear the text value.
    pub fn clear(&self) {
        self.set_value("");
    }

    /// The semantic return kind currently configured.
    pub fn return_kind(&self) -> ReturnKind {
        self.inner
            .read()
            .map(|guard| guard.return_kind)
            .unwrap_or_default()
    }

    /// Run the installed submit action, modelling the user's return-key
    /// gesture. No-op when nothing is wired.
    pub fn trigger_submit(&self) {
        // Clone the action out first so it may re-enter this input.
        let action = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.submit_action.clone());
        if let Some(action) = action {
            action();
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextField for TextInput {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn text(&self) -> String {
        self.value()
    }

    fn set_text(&self, text: &str) {
        self.set_value(text);
    }

    fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    fn focus(&self) {
        self.focused.store(true, Ordering::SeqCst);
    }

    fn blur(&self) {
        self.focused.store(false, Ordering::SeqCst);
    }

    fn set_submit_action(&self, action: SubmitAction) {
        if let Ok(mut guard) = self.inner.write() {
            guard.submit_action = Some(action);
        }
    }

    fn set_return_kind(&self, kind: ReturnKind) {
        if let Ok(mut guard) = self.inner.write() {
            guard.return_kind = kind;
        }
    }
}
