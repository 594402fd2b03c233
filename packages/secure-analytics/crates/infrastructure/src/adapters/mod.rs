pub mod json_store;
pub mod tracing_notifier;
