//! Pot abstraction tracking its state over time.

#[allow(unused_imports)]
use micromath::F32Ext;

use super::buffer::Buffer;

// Smaller movement of the averaged value is considered noise.
const NOISE_THRESHOLD: f32 = 0.002;

const SNAP_MARGIN: f32 = 0.0001;

/// Abstraction of a potentiometer or a fader.
///
/// Use it to smoothen the value received from the converter and to detect
/// intentional movement.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pot {
    buffer: Buffer<8>,
    pub last_value_above_noise: f32,
    pub moved: bool,
}

impl Pot {
    pub fn update(&mut self, value: f32) {
        self.buffer.write(value);

        let previous = self.last_value_above_noise;
        let value = self.buffer.read();
        if (previous - value).abs() > NOISE_THRESHOLD {
            self.last_value_above_noise = value;
        } else if value < SNAP_MARGIN {
            self.last_value_above_noise = 0.0;
        } else if value > 1.0 - SNAP_MARGIN {
            self.last_value_above_noise = 1.0;
        }

        #[allow(clippy::float_cmp)]
        let moved = self.last_value_above_noise != previous;
        self.moved = moved;
    }

    /// Smoothened value, including noise.
    pub fn value(&self) -> f32 {
        self.buffer.read()
    }

    /// Forget history, next update is treated as the very first one.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.last_value_above_noise = 0.0;
        self.moved = false;
    }
}
