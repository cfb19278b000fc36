//! Core functionality: the history list, its persistence, and the
//! interaction controller.

pub mod history;
pub mod session;
pub mod store;

pub use history::{History, HistoryRecord, IdMatch};
pub use session::{Session, SessionError};
pub use store::{HistoryStore, StoreError};
