use deck_control::{ConverterControl, Sample};
use nb::block;

use crate::system::hal::adc::{Adc, AdcSampleTime, Enabled, Resolution};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

// 2 ms on 480 MHz core, for the reference to stabilize after configuration.
const STARTUP_CYCLES: u32 = 960_000;

/// ADC1 reading common lines of both multiplexers.
pub struct Converter {
    adc: Adc<ADC1, Enabled>,
    pins: Pins,
    mux: u8,
}

pub struct Pins {
    pub multiplexer_1: Multiplexer1Pin,
    pub multiplexer_2: Multiplexer2Pin,
}

pub type Multiplexer1Pin = gpio::gpioa::PA7<gpio::Analog>;
pub type Multiplexer2Pin = gpio::gpioa::PA6<gpio::Analog>;

impl Converter {
    #[must_use]
    pub fn new(adc: Adc<ADC1, Enabled>, pins: Pins) -> Self {
        Self { adc, pins, mux: 0 }
    }

    /// Number of distinct readings in the configured resolution.
    #[must_use]
    pub fn slope(&self) -> u32 {
        self.adc.slope()
    }

    /// Whether there is a finished conversion waiting to be read.
    ///
    /// Useful to drive the acquisition by polling while the interrupt is
    /// masked.
    #[must_use]
    pub fn conversion_finished(&self) -> bool {
        self.adc.inner().isr.read().eoc().bit_is_set()
    }
}

impl ConverterControl for Converter {
    fn disable_digital_buffers(&mut self) {
        // Pins are handed over in analog mode, which already keeps their
        // Schmitt triggers disconnected.
        defmt::debug!("Converter pins are in analog mode");
    }

    fn configure(&mut self) {
        self.adc.set_resolution(Resolution::SIXTEENBIT);
        self.adc.set_sample_time(AdcSampleTime::T_16);
        cortex_m::asm::delay(STARTUP_CYCLES);
    }

    fn route(&mut self, mux: u8) {
        match mux {
            0 | 1 => self.mux = mux,
            _ => defmt::warn!("Ignoring route to unknown multiplexer={}", mux),
        }
    }

    fn start(&mut self) {
        // The HAL writes the channel selection with every start, routing
        // here only picks which pin it is.
        if self.mux == 0 {
            self.adc.start_conversion(&mut self.pins.multiplexer_1);
        } else {
            self.adc.start_conversion(&mut self.pins.multiplexer_2);
        }
    }

    fn read(&mut self) -> Sample {
        let sample: u32 = block!(self.adc.read_sample()).unwrap_or_default();
        sample as Sample
    }

    fn discard(&mut self) {
        // Reading the data register clears EOC.
        let _ = self.adc.inner().dr.read().bits();
    }

    fn enable_interrupt(&mut self) {
        self.adc.inner().ier.modify(|_, w| w.eocie().set_bit());
    }
}
