//! In-memory mock collection store.
//!
//! - [`MockCollectionStore`]: owns mocks and groups, validates mutations, keeps
//!   group membership consistent with each mock's `group_id`
//! - [`events`]: observer registration and the notifications emitted on mutation

pub mod collection;
pub mod events;

pub use collection::MockCollectionStore;
pub use events::{EventKind, StoreEvent, SubscriptionId};
