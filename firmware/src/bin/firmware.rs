#![no_main]
#![no_std]

use deck_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use deck_firmware::system::inputs::{Acquisition, Snapshot, Store};
    use deck_firmware::system::System;

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {
        acquisition: Acquisition,
    }

    #[local]
    struct Local {
        status_led: LedUser,
        store: Store,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let store = system.store;

        // Interrupts get unmasked only after init returns, the first
        // completion is handled by the task below.
        let mut acquisition = system.acquisition;
        acquisition.initialize();

        blink::spawn(true, BLINKS).unwrap();

        (
            Shared { acquisition },
            Local { status_led, store },
            init::Monotonics(mono),
        )
    }

    #[idle(shared = [acquisition], local = [store])]
    fn idle(mut cx: idle::Context) -> ! {
        let store = cx.local.store;

        loop {
            // Draining restarts the conversion, the lock keeps it from
            // interleaving with the completion handler.
            let snapshot = cx
                .shared
                .acquisition
                .lock(|acquisition| Snapshot::drain(acquisition));

            if let Some(snapshot) = snapshot {
                let changed = store.update(&snapshot);
                for id in changed.iter() {
                    defmt::debug!("Channel={} moved to value={}", id, store.value(*id));
                }
            }
        }
    }

    #[task(binds = ADC, shared = [acquisition], priority = 3)]
    fn conversion_complete(mut cx: conversion_complete::Context) {
        cx.shared.acquisition.lock(|acquisition| {
            acquisition.on_conversion_complete();
        });
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
