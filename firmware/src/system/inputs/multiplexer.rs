use deck_control::ChannelSelector;

use crate::system::hal::gpio;

// Roughly 1 us on 480 MHz core. That is plenty for the common line of
// CD74HC4067 to settle after address change.
const SETTLE_CYCLES: u32 = 480;

// Inputs are wired to the panel in a different order than their addresses.
// Logical input N is reached through address ADDRESS[N].
const ADDRESS: [u8; 16] = [8, 9, 10, 11, 12, 13, 14, 15, 7, 6, 5, 4, 3, 2, 1, 0];

/// Address lines shared by all multiplexers on the board.
pub struct Multiplexer {
    pins: Pins,
}

pub struct Pins {
    pub address_a: AddressAPin,
    pub address_b: AddressBPin,
    pub address_c: AddressCPin,
    pub address_d: AddressDPin,
}

pub type AddressAPin = gpio::gpioa::PA0<gpio::Output>;
pub type AddressBPin = gpio::gpiob::PB14<gpio::Output>;
pub type AddressCPin = gpio::gpiob::PB15<gpio::Output>;
pub type AddressDPin = gpio::gpioa::PA1<gpio::Output>;

impl Multiplexer {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        Self { pins }
    }
}

impl ChannelSelector for Multiplexer {
    fn select(&mut self, input: u8) {
        let address = ADDRESS[input as usize];

        let first_bit = (address & 0b1 != 0).into();
        self.pins.address_a.set_state(first_bit);

        let second_bit = (address & 0b10 != 0).into();
        self.pins.address_b.set_state(second_bit);

        let third_bit = (address & 0b100 != 0).into();
        self.pins.address_c.set_state(third_bit);

        let fourth_bit = (address & 0b1000 != 0).into();
        self.pins.address_d.set_state(fourth_bit);

        cortex_m::asm::delay(SETTLE_CYCLES);
    }
}
