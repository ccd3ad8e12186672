//! Process snapshots of raw samples over time.

use heapless::Vec;

use super::pot::Pot;
use super::snapshot::Snapshot;
use crate::acquisition::{ChannelId, Sample};
use crate::log;

/// Channels whose filtered value changed during the last update.
pub type Changed<const N: usize> = Vec<ChannelId, N>;

/// Stateful store of all acquired channels.
///
/// This turns raw snapshots into a set of smoothened pots and reports
/// which of them moved above noise, so they can be mapped to MIDI
/// messages.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store<const N: usize> {
    pots: [Pot; N],
    full_scale: Sample,
}

impl<const N: usize> Store<N> {
    /// Raw samples get normalized against `full_scale`, the reading of the
    /// converter at its reference voltage.
    #[must_use]
    pub fn new(full_scale: Sample) -> Self {
        debug_assert!(full_scale > 0, "full scale must be above zero");
        Self {
            pots: core::array::from_fn(|_| Pot::default()),
            full_scale,
        }
    }

    /// Build the store for a converter whose slope is `slope`, the number of
    /// distinct readings it produces. The highest one is the full scale.
    #[must_use]
    pub fn from_slope(slope: u32) -> Self {
        let full_scale = slope.saturating_sub(1).min(Sample::MAX as u32);
        Self::new(full_scale as Sample)
    }

    pub fn update(&mut self, snapshot: &Snapshot<N>) -> Changed<N> {
        let mut changed = Changed::new();
        for (id, (pot, raw)) in self.pots.iter_mut().zip(snapshot.raw).enumerate() {
            pot.update(normalize(raw, self.full_scale));
            if pot.moved {
                // Capacity equals the number of pots.
                changed.push(id).ok();
            }
        }
        changed
    }

    /// Filtered value of the channel in range between 0.0 and 1.0.
    #[must_use]
    pub fn value(&self, id: ChannelId) -> f32 {
        self.pots[id].last_value_above_noise
    }

    /// Drop filter history of the channel.
    ///
    /// Call this when the meaning of the input changes, so the previous
    /// readings do not leak into its new role.
    pub fn reset(&mut self, id: ChannelId) {
        log::info!("Resetting filter of channel={}", id);
        self.pots[id].reset();
    }
}

fn normalize(raw: Sample, full_scale: Sample) -> f32 {
    (raw as f32 / full_scale as f32).clamp(0.0, 1.0)
}
