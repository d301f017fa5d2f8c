//! Contact form: validation, submission state, and the send seam.

mod form;
mod transport;

pub use form::{ContactField, ContactForm, FormStatus, SubmissionPhase, StatusKind, SubmitStart};
pub use transport::{ContactMessage, ContactService, ContactTransport, SendError, SimulatedTransport};
