pub mod alert;
pub mod record;
pub mod upload;

pub use alert::{AlertText, DispatchOutcome, SlackMessage};
pub use record::{CallbackRecord, HeaderSet};
pub use upload::{ImgbbResponse, UploadResult};
