pub mod notification;
pub mod record;
pub mod response;

pub use notification::Notification;
pub use record::ResizeRecord;
pub use response::HandlerResponse;
