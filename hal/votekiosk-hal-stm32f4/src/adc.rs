//! ADC1 register access for STM32F4
//!
//! Single conversion, software trigger, right-aligned 12-bit result.

use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals::Moder;
use embassy_stm32::peripherals::{ADC1, PA1};
use embassy_stm32::Peri;
use votekiosk_hal::adc::AdcRegisters;

/// SMPx code for 84 cycles
const SAMPLE_TIME_84_CYCLES: u32 = 0b100;

/// ADC1 with PA1 in analog mode
pub struct Adc1Registers<'d> {
    _adc: Peri<'d, ADC1>,
    _pin: Peri<'d, PA1>,
}

impl<'d> Adc1Registers<'d> {
    /// Claim ADC1 and PA1, enable the converter clock
    pub fn new(adc: Peri<'d, ADC1>, pin: Peri<'d, PA1>) -> Self {
        pac::RCC.apb2enr().modify(|w| w.set_adc1en(true));
        pac::GPIOA.moder().modify(|w| w.set_moder(1, Moder::ANALOG));
        Self {
            _adc: adc,
            _pin: pin,
        }
    }
}

impl AdcRegisters for Adc1Registers<'_> {
    fn power_on(&mut self) {
        let adc = pac::ADC1;
        adc.cr2().modify(|w| {
            w.set_adon(false);
            w.set_cont(false);
        });
        adc.sqr1().write(|w| w.set_l(0));
        adc.cr2().modify(|w| w.set_adon(true));
    }

    fn is_powered(&self) -> bool {
        pac::ADC1.cr2().read().adon()
    }

    fn select_channel(&mut self, channel: u8) {
        let adc = pac::ADC1;
        let shift = 3 * u32::from(channel % 10);
        let sample = |bits: u32| (bits & !(0b111 << shift)) | (SAMPLE_TIME_84_CYCLES << shift);
        if channel < 10 {
            adc.smpr2().modify(|w| w.0 = sample(w.0));
        } else {
            adc.smpr1().modify(|w| w.0 = sample(w.0));
        }
        adc.sqr3().write(|w| w.set_sq(0, channel));
    }

    fn start_conversion(&mut self) {
        pac::ADC1.cr2().modify(|w| w.set_swstart(true));
    }

    fn conversion_complete(&self) -> bool {
        pac::ADC1.sr().read().eoc()
    }

    fn read_data(&mut self) -> u16 {
        pac::ADC1.dr().read().0 as u16
    }
}
