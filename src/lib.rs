//! Material definitions for the Radiance lighting simulation suite.
//!
//! Materials render to the positional primitive syntax read by the Radiance tools
//! and convert to and from JSON records for storage.

pub mod error;
pub mod library;
pub mod material;
pub mod number;
pub mod record;

pub use error::MaterialError;
pub use library::{LoaderError, MaterialLibrary};
pub use material::{white_glow, GlowMaterial, Modifier, RadianceMaterial};
pub use number::{AsNumber, NumberConfig, RadianceNumber};
