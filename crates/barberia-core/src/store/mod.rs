// ── Snapshot data store ──
//
// Whole-collection storage with push-based change notification.

mod collection;
mod data_store;
mod refresh;

pub use data_store::{DataStore, LoadState};
pub use refresh::{ReloadTicket, StoreSnapshot};
