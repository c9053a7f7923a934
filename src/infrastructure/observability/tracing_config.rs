/// Options for tracing initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConfig {
    pub json_format: bool,
}
