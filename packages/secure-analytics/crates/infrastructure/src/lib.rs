pub mod adapters;

pub use adapters::json_store::JsonFileSnapshotStore;
pub use adapters::tracing_notifier::TracingNotifier;
