#![no_std]
#![no_main]

use deck_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use deck_firmware::system::inputs::{Acquisition, CHANNELS};
    use deck_firmware::system::System;
    use deck_firmware::testlib::{sample_until_available, sample_until_drained};

    #[init]
    fn init() -> Acquisition {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        let mut acquisition = System::init(cp, dp).acquisition;
        acquisition.initialize();
        acquisition
    }

    #[test]
    fn data_is_not_available_before_first_cycle_completes(acquisition: &mut Acquisition) {
        defmt::assert!(!acquisition.is_data_available());
    }

    #[test]
    fn completed_cycle_stalls_conversion_until_drained(acquisition: &mut Acquisition) {
        sample_until_available(acquisition);
        defmt::assert!(acquisition.is_data_available());

        cortex_m::asm::delay(480_000);
        defmt::assert!(!acquisition.converter().conversion_finished());

        for id in 0..CHANNELS - 1 {
            let _ = acquisition.value(id);
        }
        cortex_m::asm::delay(480_000);
        defmt::assert!(!acquisition.converter().conversion_finished());
        defmt::assert!(acquisition.is_data_available());

        let _ = acquisition.value(CHANNELS - 1);
        defmt::assert!(!acquisition.is_data_available());
        cortex_m::asm::delay(480_000);
        defmt::assert!(acquisition.converter().conversion_finished());
    }

    #[test]
    fn cycles_keep_coming_after_drain(acquisition: &mut Acquisition) {
        for _ in 0..100 {
            let snapshot = sample_until_drained(acquisition);
            defmt::assert_eq!(snapshot.raw.len(), CHANNELS);
            defmt::assert!(!acquisition.is_data_available());
        }
    }
}
