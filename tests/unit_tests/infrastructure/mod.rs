mod retry_test;
mod text_sanitizer_test;
