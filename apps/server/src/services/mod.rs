pub mod alert;
pub mod notification;
pub mod screenshot;
pub mod transport;

pub use alert::{escape_code_span, format_callback, format_fields, format_message};
pub use notification::SlackNotifier;
pub use screenshot::ScreenshotRelay;
pub use transport::{FilePart, HttpTransport, ReqwestTransport, TransportResponse};
