//! Translation between flat channel ids and multiplexer coordinates.

/// Flat index of one physical analog input across all multiplexers.
pub type ChannelId = usize;

/// Position of an input within the bank of multiplexers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinate {
    pub mux: u8,
    pub input: u8,
}

impl Coordinate {
    #[must_use]
    pub fn new(mux: u8, input: u8) -> Self {
        Self { mux, input }
    }

    #[must_use]
    pub fn from_id<const INPUTS: usize>(id: ChannelId) -> Self {
        Self {
            mux: (id / INPUTS) as u8,
            input: (id % INPUTS) as u8,
        }
    }

    #[must_use]
    pub fn id<const INPUTS: usize>(self) -> ChannelId {
        self.mux as usize * INPUTS + self.input as usize
    }
}
