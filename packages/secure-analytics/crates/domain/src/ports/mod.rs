pub mod notifier;
pub mod presenter;
pub mod snapshot_store;

pub use notifier::{Notifier, Severity};
pub use presenter::ScorePresenter;
pub use snapshot_store::{SnapshotStore, StoreError};
