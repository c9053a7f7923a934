mod analyze;
mod chat;
mod health;
mod upload;

pub use analyze::analyze_handler;
pub use chat::chat_handler;
pub use health::{health_handler, root_handler};
pub use upload::upload_handler;
