//! Divination core: piece catalog, pattern matching and reading text.
//! Keep this crate free of IO and platform concerns.

pub mod analysis;
pub mod board;
pub mod catalog;
pub mod codec;
pub mod error;
pub mod patterns;
pub mod pieces;
pub mod reading;
pub mod rng;
pub mod selection;
pub mod suggestions;
pub mod texts;

pub use analysis::*;
pub use board::*;
pub use catalog::*;
pub use codec::*;
pub use error::*;
pub use patterns::*;
pub use pieces::*;
pub use reading::*;
pub use rng::*;
pub use selection::*;
pub use suggestions::*;
