//! Smoothening of pot values.

/// Ring buffer of the last `N` normalized values of a single channel.
///
/// This is not optimized for large buffers, but is fine for smoothening
/// over a handful of acquisition cycles.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Buffer<const N: usize> {
    buffer: [f32; N],
    pointer: usize,
    filled: bool,
}

impl<const N: usize> Default for Buffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Buffer<N> {
    pub fn new() -> Self {
        Self {
            buffer: [0.0; N],
            pointer: 0,
            filled: false,
        }
    }

    /// Store the value. The very first write after a reset fills the whole
    /// buffer, so the average does not crawl up from zero.
    pub fn write(&mut self, value: f32) {
        if !self.filled {
            self.buffer = [value; N];
            self.filled = true;
        }
        self.buffer[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
    }

    pub fn read(&self) -> f32 {
        let sum: f32 = self.buffer.iter().sum();
        sum / N as f32
    }

    pub fn reset(&mut self) {
        self.buffer = [0.0; N];
        self.pointer = 0;
        self.filled = false;
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_reads_it_returns_average() {
        let mut buffer: Buffer<4> = Buffer::new();
        buffer.write(4.0);
        buffer.write(8.0);
        buffer.write(16.0);
        buffer.write(32.0);
        assert_relative_eq!(buffer.read(), 15.0);
    }

    #[test]
    fn when_first_written_it_returns_the_value_right_away() {
        let mut buffer: Buffer<4> = Buffer::new();
        buffer.write(0.5);
        assert_relative_eq!(buffer.read(), 0.5);
    }

    #[test]
    fn when_reset_next_write_fills_it_again() {
        let mut buffer: Buffer<4> = Buffer::new();
        buffer.write(1.0);
        buffer.reset();
        assert_relative_eq!(buffer.read(), 0.0);
        buffer.write(0.25);
        assert_relative_eq!(buffer.read(), 0.25);
    }
}
