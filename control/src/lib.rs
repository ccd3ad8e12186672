//! Acquisition of multiplexed analog controls and their processing.
//!
//! It is mainly targetted to run in a firmware where a conversion-complete
//! interrupt fills a buffer of samples while the main loop consumes it.
//! However, all of it is hardware independent and can be exercised on host
//! through fake implementations of the hardware traits.
//!
//! Following is the flow of data in the firmware:
//!
//! ```text
//!     [ Multiplexers ] --(select lines)-- [ ChannelSelector ]
//!            |                                   A
//!            V                                   |
//!     [ ConverterControl ] --(interrupt)--> [ Acquisition {Sample buffer} ]
//!                                                |
//!                                                | (value per channel)
//!                                                V
//!                                          [ Snapshot ] --> [ Store {Pots} ]
//!                                                                  |
//!                                                                  | (changed channels)
//!                                                                  V
//!                                                            [ MIDI mapping ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod acquisition;
pub mod input;
mod log;

pub use acquisition::{Acquisition, ChannelId, ChannelSelector, ConverterControl, Sample};
pub use input::snapshot::Snapshot;
pub use input::store::Store;
