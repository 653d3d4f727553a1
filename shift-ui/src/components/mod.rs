pub mod bindings;
pub mod dialogs;
pub mod hooks;
pub mod render_sync;

pub use bindings::{ActionBindings, Subscription, WizardAction};
pub use dialogs::{
    ConfirmRow, ConfirmationView, INCOMPLETE_CARD_MESSAGE, SUBMITTED_MESSAGE, SubmissionGate,
    SubmitReceipt,
};
pub use hooks::{AlertSink, BlockingAlert, NoopHooks, WizardHooks};
pub use render_sync::RenderSync;
