mod chat_turn_test;
mod document_test;
