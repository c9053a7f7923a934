mod chat_turn;
mod document;
mod document_id;

pub use chat_turn::{ChatTurn, TurnRole};
pub use document::{ContentType, Document, StoredDocument};
pub use document_id::DocumentId;
