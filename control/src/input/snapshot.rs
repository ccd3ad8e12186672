//! Raw samples of one complete acquisition cycle.

use crate::acquisition::{Acquisition, ChannelSelector, ConverterControl, Sample};

/// Samples of all `N` channels taken during a single cycle.
///
/// `Snapshot` is meant to be taken out of the acquisition in one go while
/// the completion interrupt is masked, and processed later outside of it.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot<const N: usize> {
    pub raw: [Sample; N],
}

impl<const N: usize> Default for Snapshot<N> {
    fn default() -> Self {
        Self { raw: [0; N] }
    }
}

impl<const N: usize> Snapshot<N> {
    /// Read every channel of a completed cycle.
    ///
    /// Returns `None` if the cycle is not complete yet. Otherwise all the
    /// channels get consumed, which starts acquisition of the next cycle.
    pub fn drain<S, C, const INPUTS: usize>(
        acquisition: &mut Acquisition<S, C, N, INPUTS>,
    ) -> Option<Self>
    where
        S: ChannelSelector,
        C: ConverterControl,
    {
        if !acquisition.is_data_available() {
            return None;
        }

        let mut snapshot = Self::default();
        for (id, raw) in snapshot.raw.iter_mut().enumerate() {
            *raw = acquisition.value(id);
        }
        Some(snapshot)
    }
}
