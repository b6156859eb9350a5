//! UI Components for qrdrop.

mod upload_card;

pub use upload_card::UploadCard;
