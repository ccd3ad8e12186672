//! Processing of acquired samples in the main loop.

mod buffer;
pub mod pot;
pub mod snapshot;
pub mod store;
