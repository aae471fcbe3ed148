//! I/O modules for background document loading.

pub mod loading_state;
pub mod async_loader;

pub use loading_state::LoadingState;
pub use async_loader::{AsyncLoader, LoadResult};
