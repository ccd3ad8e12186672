//! Capabilities the acquisition needs from the hardware.
//!
//! Implementors are expected to be thin wrappers around pins and converter
//! registers. The acquisition itself decides when each of these is called.

/// Raw reading of the converter in its native resolution.
pub type Sample = u16;

/// Number of conversions discarded before the interrupt gets armed.
///
/// The sampling capacitor of the converter needs a couple of rounds to
/// stabilize after the input was routed.
pub const WARM_UP_CONVERSIONS: usize = 5;

/// Drives select lines shared by all multiplexers.
pub trait ChannelSelector {
    /// Route the given input of every multiplexer to its common line.
    ///
    /// It must not return before the common line settled. Starting a
    /// conversion sooner would capture crosstalk from the previous input.
    fn select(&mut self, input: u8);
}

/// Control over a single analog-to-digital converter.
pub trait ConverterControl {
    /// Disconnect digital input buffers on all pins shared with the
    /// converter to avoid leakage and noise.
    fn disable_digital_buffers(&mut self);

    /// Set reference, resolution and timing.
    fn configure(&mut self);

    /// Point the converter input to the common line of the given multiplexer.
    fn route(&mut self, mux: u8);

    /// Begin a single conversion of the routed input.
    fn start(&mut self);

    /// Obtain the result of the last conversion.
    ///
    /// Outside of the completion interrupt this may wait until the
    /// conversion is finished.
    fn read(&mut self) -> Sample;

    /// Drop the result of a finished conversion, clearing its completion
    /// flag. Must not wait.
    fn discard(&mut self);

    /// Arm the conversion-complete interrupt.
    fn enable_interrupt(&mut self);
}
