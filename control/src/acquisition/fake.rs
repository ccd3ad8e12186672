//! Hardware double recording every call on a shared bench.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Acquisition, ChannelSelector, ConverterControl, Coordinate, Sample};

/// Minimal time between select-line change and start of a conversion.
pub const SETTLE_TICKS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    DisableDigitalBuffers,
    Configure,
    Select(u8),
    Route(u8),
    Start,
    Read,
    Discard,
    EnableInterrupt,
}

#[derive(Debug, Default)]
pub struct Bench {
    pub events: Vec<Event>,
    pub clock: u32,
    pub last_select: u32,
    pub selected: u8,
    pub routed: u8,
    pub pending: bool,
    pub converting: Coordinate,
    pub sampled: Vec<Coordinate>,
}

pub type Shared = Rc<RefCell<Bench>>;

pub struct Selector {
    bench: Shared,
    settle_ticks: u32,
}

impl ChannelSelector for Selector {
    fn select(&mut self, input: u8) {
        let mut bench = self.bench.borrow_mut();
        bench.events.push(Event::Select(input));
        bench.selected = input;
        bench.last_select = bench.clock;
        bench.clock += self.settle_ticks;
    }
}

pub struct Converter {
    bench: Shared,
}

impl ConverterControl for Converter {
    fn disable_digital_buffers(&mut self) {
        self.bench
            .borrow_mut()
            .events
            .push(Event::DisableDigitalBuffers);
    }

    fn configure(&mut self) {
        self.bench.borrow_mut().events.push(Event::Configure);
    }

    fn route(&mut self, mux: u8) {
        let mut bench = self.bench.borrow_mut();
        bench.events.push(Event::Route(mux));
        bench.routed = mux;
    }

    fn start(&mut self) {
        let mut bench = self.bench.borrow_mut();
        assert!(
            bench.clock - bench.last_select >= SETTLE_TICKS,
            "conversion started before the multiplexer settled"
        );
        assert!(!bench.pending, "conversion started while another was running");
        bench.events.push(Event::Start);
        bench.pending = true;
        bench.converting = Coordinate::new(bench.routed, bench.selected);
        bench.clock += 1;
    }

    fn read(&mut self) -> Sample {
        let mut bench = self.bench.borrow_mut();
        assert!(bench.pending, "result read without a conversion");
        bench.events.push(Event::Read);
        bench.pending = false;
        let converting = bench.converting;
        bench.sampled.push(converting);
        bench.sampled.len() as Sample
    }

    fn discard(&mut self) {
        let mut bench = self.bench.borrow_mut();
        assert!(bench.pending, "result discarded without a conversion");
        bench.events.push(Event::Discard);
        bench.pending = false;
    }

    fn enable_interrupt(&mut self) {
        self.bench.borrow_mut().events.push(Event::EnableInterrupt);
    }
}

pub type FakeAcquisition<const N: usize, const INPUTS: usize> =
    Acquisition<Selector, Converter, N, INPUTS>;

/// Build an initialized acquisition, with a multiplexer settling in given
/// number of ticks.
pub fn initialized<const N: usize, const INPUTS: usize>(
    settle_ticks: u32,
) -> (FakeAcquisition<N, INPUTS>, Shared) {
    let bench = Shared::default();
    let selector = Selector {
        bench: Rc::clone(&bench),
        settle_ticks: SETTLE_TICKS,
    };
    let converter = Converter {
        bench: Rc::clone(&bench),
    };
    let mut acquisition = Acquisition::new(selector, converter);
    acquisition.initialize();
    acquisition.selector.settle_ticks = settle_ticks;
    (acquisition, bench)
}

/// Fire the completion interrupt if there is a conversion running.
pub fn complete<const N: usize, const INPUTS: usize>(
    acquisition: &mut FakeAcquisition<N, INPUTS>,
    bench: &Shared,
) -> bool {
    let pending = bench.borrow().pending;
    if pending {
        acquisition.on_conversion_complete();
    }
    pending
}

/// Keep firing completion interrupts until the conversion stalls.
pub fn complete_cycle<const N: usize, const INPUTS: usize>(
    acquisition: &mut FakeAcquisition<N, INPUTS>,
    bench: &Shared,
) {
    while complete(acquisition, bench) {}
}

pub fn drain<const N: usize, const INPUTS: usize>(acquisition: &mut FakeAcquisition<N, INPUTS>) {
    for id in 0..N {
        let _ = acquisition.value(id);
    }
}
