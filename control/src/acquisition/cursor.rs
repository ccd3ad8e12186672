//! Position of the input the next conversion result belongs to.

use super::address::{ChannelId, Coordinate};

/// Walks through all `N` channels, `INPUTS` at a time per multiplexer.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Cursor<const N: usize, const INPUTS: usize> {
    coordinate: Coordinate,
}

/// What happened while the cursor moved by one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub mux_switched: bool,
    pub cycle_completed: bool,
}

impl<const N: usize, const INPUTS: usize> Cursor<N, INPUTS> {
    const MUXES: usize = N / INPUTS;

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn id(&self) -> ChannelId {
        self.coordinate.id::<INPUTS>()
    }

    pub fn advance(&mut self) -> Step {
        let mut step = Step {
            mux_switched: false,
            cycle_completed: false,
        };

        self.coordinate.input += 1;
        if self.coordinate.input as usize == INPUTS {
            self.coordinate.input = 0;
            self.coordinate.mux += 1;
            step.mux_switched = Self::MUXES > 1;

            if self.coordinate.mux as usize == Self::MUXES {
                self.coordinate.mux = 0;
                step.cycle_completed = true;
            }
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_advancing_within_mux_it_only_moves_input() {
        let mut cursor = Cursor::<32, 16>::default();
        let step = cursor.advance();
        assert_eq!(cursor.coordinate(), Coordinate::new(0, 1));
        assert!(!step.mux_switched);
        assert!(!step.cycle_completed);
    }

    #[test]
    fn when_last_input_of_mux_is_passed_it_switches_to_next_mux() {
        let mut cursor = Cursor::<32, 16>::default();
        for _ in 0..15 {
            cursor.advance();
        }
        assert_eq!(cursor.coordinate(), Coordinate::new(0, 15));

        let step = cursor.advance();
        assert_eq!(cursor.coordinate(), Coordinate::new(1, 0));
        assert_eq!(cursor.id(), 16);
        assert!(step.mux_switched);
        assert!(!step.cycle_completed);
    }

    #[test]
    fn when_last_mux_is_passed_it_wraps_and_completes_cycle() {
        let mut cursor = Cursor::<32, 16>::default();
        let completed = (0..32).filter(|_| cursor.advance().cycle_completed).count();
        assert_eq!(completed, 1);
        assert_eq!(cursor.coordinate(), Coordinate::new(0, 0));
    }

    #[test]
    fn when_there_is_a_single_mux_every_wrap_completes_cycle_without_switching() {
        let mut cursor = Cursor::<8, 8>::default();
        for _ in 0..7 {
            assert!(!cursor.advance().cycle_completed);
        }
        let step = cursor.advance();
        assert!(!step.mux_switched);
        assert!(step.cycle_completed);
    }
}
