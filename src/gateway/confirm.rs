/// Confirmation seam supplied by the caller.
///
/// Some deployed variants ask before every mutating request, some never do.
/// The core stays headless by delegating the dialog to this trait and
/// gating it behind `FeatureFlags::confirm_on_mutate`.
pub trait ConfirmPolicy: Send + Sync {
    /// Return `false` to decline; nothing is sent.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<T: ConfirmPolicy + ?Sized> ConfirmPolicy for std::sync::Arc<T> {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Confirms everything. The default for variants without dialogs, and for
/// headless tests.
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl ConfirmPolicy for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
