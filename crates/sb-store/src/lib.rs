pub mod board_store;
pub mod error;
pub mod event;
pub mod observer;

pub use board_store::BoardStore;
pub use error::{Result, StoreError};
pub use event::BoardEvent;
pub use observer::BoardObserver;
