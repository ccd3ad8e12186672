//! Abstraction of all multiplexed analog inputs.
//!
//! Pots and faders are spread over two 16 channel multiplexers sharing
//! their address lines. Common line of each multiplexer is connected to a
//! pin of ADC1, so a single converter reads all of them, one at a time.

mod converter;
mod multiplexer;

pub use converter::{Converter, Pins as ConverterPins};
pub use multiplexer::{Multiplexer, Pins as MultiplexerPins};

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::pac::ADC1;

pub const MUXES: usize = 2;
pub const INPUTS_PER_MUX: usize = 16;
pub const CHANNELS: usize = MUXES * INPUTS_PER_MUX;

pub type Acquisition =
    deck_control::Acquisition<Multiplexer, Converter, CHANNELS, INPUTS_PER_MUX>;
pub type Snapshot = deck_control::Snapshot<CHANNELS>;
pub type Store = deck_control::Store<CHANNELS>;

pub struct Config {
    pub multiplexer: MultiplexerPins,
    pub converter: ConverterPins,
    pub adc: Adc<ADC1, Enabled>,
}

/// Build acquisition and the store processing its samples.
///
/// The acquisition is not initialized yet, that is left for the caller to
/// do right before the completion interrupt gets unmasked.
#[must_use]
pub fn build(config: Config) -> (Acquisition, Store) {
    let multiplexer = Multiplexer::new(config.multiplexer);
    let converter = Converter::new(config.adc, config.converter);
    let store = Store::from_slope(converter.slope());
    (Acquisition::new(multiplexer, converter), store)
}
