//! Intent Types - shared vocabulary for the gateway intents calculator
//!
//! An intent is a named capability flag a gateway client declares when it
//! connects. Each intent owns one bit of the declared bitmask and unlocks a set
//! of gateway events. Some intents are privileged and stay locked until an
//! out-of-band approval flag is switched on.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod bitmask;
mod errors;
mod intent;
mod theme;

pub use bitmask::*;
pub use errors::*;
pub use intent::*;
pub use theme::*;

/// Highest bit position an intent may occupy.
///
/// Keeps every catalog mask within 32 bits on the wire.
pub const MAX_BIT_POSITION: u8 = 31;
