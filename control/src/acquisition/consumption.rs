//! Bookkeeping of channels the consumer already retrieved.

use super::address::ChannelId;

/// One bit per channel, set once its value was read in the current cycle.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Consumption<const N: usize> {
    mask: u64,
}

impl<const N: usize> Consumption<N> {
    const FULL: u64 = if N == 64 { u64::MAX } else { (1 << N) - 1 };

    /// Mark the channel as retrieved, returning true once all were.
    pub fn mark(&mut self, id: ChannelId) -> bool {
        debug_assert!(id < N, "channel id out of range");
        self.mask |= 1 << id;
        self.mask == Self::FULL
    }

    pub fn clear(&mut self) {
        self.mask = 0;
    }

    #[cfg(test)]
    pub fn is_consumed(&self, id: ChannelId) -> bool {
        self.mask & (1 << id) != 0
    }
}
