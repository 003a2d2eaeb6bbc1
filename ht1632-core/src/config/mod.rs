//! Configuration types
//!
//! Board-agnostic panel configuration, optionally stored as postcard
//! binary data.

pub mod intensity;
pub mod panel;

pub use intensity::*;
pub use panel::*;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Panel size is not a whole number of chip blocks, or needs too many chips
    InvalidGeometry,
    /// Two signals assigned to the same pin
    PinConflict,
    /// Output buffer too small for the encoded config
    Serialize,
    /// Stored bytes are not a valid config
    Deserialize,
    /// Stored config has a different version
    VersionMismatch,
}
