use crate::system::inputs::{Acquisition, Snapshot};

const CYCLES_PER_SECOND: u32 = 480_000_000;

/// Run conversions by polling until a full cycle gets drained.
///
/// Tests run without the completion interrupt, so this stands in for it.
pub fn sample_until_drained(acquisition: &mut Acquisition) -> Snapshot {
    loop {
        if let Some(snapshot) = Snapshot::drain(acquisition) {
            return snapshot;
        }
        if acquisition.converter().conversion_finished() {
            acquisition.on_conversion_complete();
        }
    }
}

/// Run conversions by polling until the cycle is complete, without draining it.
pub fn sample_until_available(acquisition: &mut Acquisition) {
    while !acquisition.is_data_available() {
        if acquisition.converter().conversion_finished() {
            acquisition.on_conversion_complete();
        }
    }
}

/// Give the user some time to act on instructions.
pub fn wait_seconds(seconds: u32) {
    for _ in 0..seconds {
        cortex_m::asm::delay(CYCLES_PER_SECOND);
    }
}
