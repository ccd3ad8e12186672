pub mod inputs;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::adc::Adc;
use hal::delay::DelayFromCountDownTimer;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use inputs::{Acquisition, Config as InputsConfig, ConverterPins, MultiplexerPins, Store};

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub acquisition: Acquisition,
    pub store: Store,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        // Resolution and sample time are set once the acquisition gets
        // initialized.
        let adc = Adc::adc1(dp.ADC1, &mut delay, ccdr.peripheral.ADC12, &ccdr.clocks).enable();

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;
        let (acquisition, store) = inputs::build(InputsConfig {
            multiplexer: MultiplexerPins {
                address_a: pins.GPIO.PIN_A3.into_push_pull_output(),
                address_b: pins.GPIO.PIN_A8.into_push_pull_output(),
                address_c: pins.GPIO.PIN_A9.into_push_pull_output(),
                address_d: pins.GPIO.PIN_A2.into_push_pull_output(),
            },
            converter: ConverterPins {
                multiplexer_1: pins.GPIO.PIN_C4.into_analog(),
                multiplexer_2: pins.GPIO.PIN_C2.into_analog(),
            },
            adc,
        });

        Self {
            mono,
            status_led,
            acquisition,
            store,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
