//! Interrupt-driven acquisition of multiplexed analog inputs.
//!
//! A single converter is fanned out through multiplexers sharing their
//! select lines. Every conversion-complete interrupt stores one sample and
//! moves to the next input, until all `N` channels were sampled. Then the
//! acquisition stops and waits until the main loop reads every channel.
//! Reading the last one starts a new cycle.
//!
//! The acquisition alternates between two phases. While `Filling`, only the
//! interrupt handler writes the buffer and the cursor. Once `Ready`, the
//! handler refuses to touch them and only the consumer may move the
//! acquisition back to `Filling`. The firmware is expected to share the
//! acquisition through a lock masking the completion interrupt, so the
//! transition from `Ready` to `Filling` cannot interleave with the handler.

mod address;
mod consumption;
mod cursor;
mod hardware;

#[cfg(test)]
pub(crate) mod fake;

pub use address::{ChannelId, Coordinate};
pub use hardware::{ChannelSelector, ConverterControl, Sample, WARM_UP_CONVERSIONS};

use self::consumption::Consumption;
use self::cursor::Cursor;
use crate::log;

/// Which context owns the sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Conversions are running, buffer is being written by the interrupt.
    Filling,
    /// Full cycle is available and waits to be drained by the consumer.
    Ready,
}

/// Acquisition of `N` channels, `INPUTS` on each multiplexer.
///
/// The number of multiplexers is `N / INPUTS`. Layouts where `N` is not a
/// multiple of `INPUTS`, or with more than 64 channels, are rejected at
/// compile time.
#[derive(Debug)]
pub struct Acquisition<S, C, const N: usize, const INPUTS: usize> {
    selector: S,
    converter: C,
    buffer: [Sample; N],
    cursor: Cursor<N, INPUTS>,
    phase: Phase,
    consumption: Consumption<N>,
}

impl<S, C, const N: usize, const INPUTS: usize> Acquisition<S, C, N, INPUTS>
where
    S: ChannelSelector,
    C: ConverterControl,
{
    const LAYOUT: () = {
        assert!(INPUTS > 0 && INPUTS <= u8::MAX as usize);
        assert!(N > 0 && N % INPUTS == 0, "channels must fill all multiplexers");
        assert!(N <= 64, "consumption mask holds up to 64 channels");
        assert!(N / INPUTS <= u8::MAX as usize);
    };

    #[must_use]
    pub fn new(selector: S, converter: C) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT;
        Self {
            selector,
            converter,
            buffer: [0; N],
            cursor: Cursor::default(),
            phase: Phase::Filling,
            consumption: Consumption::default(),
        }
    }

    /// Prepare the hardware and start the first conversion.
    ///
    /// This must be called exactly once, before the completion interrupt
    /// is unmasked.
    pub fn initialize(&mut self) {
        log::info!("Initializing acquisition of {} channels", N);

        self.converter.disable_digital_buffers();
        self.converter.configure();

        let coordinate = self.cursor.coordinate();
        self.selector.select(coordinate.input);
        self.converter.route(coordinate.mux);

        for _ in 0..WARM_UP_CONVERSIONS {
            self.converter.start();
            let _ = self.converter.read();
        }
        log::info!("Converter warmed up");

        self.converter.enable_interrupt();
        self.converter.start();
    }

    /// Handle a finished conversion.
    ///
    /// Meant to be called from the conversion-complete interrupt.
    pub fn on_conversion_complete(&mut self) {
        if self.phase == Phase::Ready {
            self.converter.discard();
            log::warning!("Conversion completed while waiting for drain");
            return;
        }

        self.buffer[self.cursor.id()] = self.converter.read();

        let step = self.cursor.advance();
        let coordinate = self.cursor.coordinate();

        if step.mux_switched {
            log::trace!("Switching to multiplexer={}", coordinate.mux);
            self.converter.route(coordinate.mux);
        }

        if step.cycle_completed {
            log::trace!("Acquisition cycle completed");
            self.phase = Phase::Ready;
        }

        // Select lines must be ready for the next conversion, even if it
        // is to be started only after the drain.
        self.selector.select(coordinate.input);

        if self.phase == Phase::Filling {
            self.converter.start();
        }
    }

    /// Whether a full cycle of samples waits to be read.
    #[must_use]
    pub fn is_data_available(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Return the latest sample of the channel and mark it as consumed.
    ///
    /// Every channel must be read once per cycle, otherwise the acquisition
    /// never resumes. Reading while the cycle is still being filled returns
    /// the value of the previous cycle and does not count towards the drain.
    ///
    /// # Panics
    ///
    /// The `id` must be lower than `N`.
    pub fn value(&mut self, id: ChannelId) -> Sample {
        let value = self.buffer[id];
        self.mark_consumed(id);
        value
    }

    /// Record that the consumer retrieved given channel.
    ///
    /// Once all channels of a ready cycle were retrieved, conversion of the
    /// next cycle starts.
    pub fn mark_consumed(&mut self, id: ChannelId) {
        if self.phase != Phase::Ready {
            return;
        }

        if self.consumption.mark(id) {
            self.consumption.clear();
            self.phase = Phase::Filling;
            self.converter.start();
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Coordinate the next conversion result will be stored under.
    #[must_use]
    pub fn cursor(&self) -> Coordinate {
        self.cursor.coordinate()
    }

    #[must_use]
    pub fn converter(&self) -> &C {
        &self.converter
    }
}
