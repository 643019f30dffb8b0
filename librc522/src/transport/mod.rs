// librc522/src/transport/mod.rs

/// Register-level chip model for tests
pub mod mock;
#[cfg(feature = "hal")]
pub mod spi;
/// Simulated NTAG tag for the chip model
pub mod tag_model;
/// The `Transport` trait
pub mod traits;

pub use mock::{MockTransport, Reply};
#[cfg(feature = "hal")]
pub use spi::SpiTransport;
pub use tag_model::SimulatedTag;
pub use traits::Transport;
