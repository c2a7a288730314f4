//! Potentiometer sampler
//!
//! One software-triggered conversion per read on a fixed channel.

use votekiosk_core::config::{POLL_BUDGET, POT_ADC_CHANNEL};
use votekiosk_core::traits::AnalogInput;
use votekiosk_core::warn;
use votekiosk_hal::adc::{AdcRegisters, ADC_MAX};
use votekiosk_hal::poll::poll_until;

/// Converter startup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Converter never reported itself powered
    EnableTimeout,
}

/// Single-channel ADC reader
pub struct AnalogSampler<R> {
    regs: R,
    channel: u8,
    budget: u32,
}

impl<R: AdcRegisters> AnalogSampler<R> {
    /// Sample the potentiometer channel
    pub fn new(regs: R) -> Self {
        Self::with_channel(regs, POT_ADC_CHANNEL)
    }

    /// Sample `channel`
    pub fn with_channel(regs: R, channel: u8) -> Self {
        Self {
            regs,
            channel,
            budget: POLL_BUDGET,
        }
    }

    /// Override the per-wait poll budget
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }
}

impl<R: AdcRegisters> AnalogInput for AnalogSampler<R> {
    type Error = AdcError;

    fn init(&mut self) -> Result<(), AdcError> {
        self.regs.power_on();
        poll_until(self.budget, || self.regs.is_powered()).map_err(|_| AdcError::EnableTimeout)
    }

    /// Returns 0 if the conversion never completes
    fn read_raw(&mut self) -> u16 {
        self.regs.select_channel(self.channel);
        self.regs.start_conversion();
        match poll_until(self.budget, || self.regs.conversion_complete()) {
            Ok(()) => self.regs.read_data() & ADC_MAX,
            Err(_) => {
                warn!("ADC channel {} conversion timed out", self.channel);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAdc {
        powered: bool,
        powers_up: bool,
        channel: Option<u8>,
        started: u32,
        completes: bool,
        data: u16,
    }

    impl MockAdc {
        fn new(data: u16) -> Self {
            Self {
                powered: false,
                powers_up: true,
                channel: None,
                started: 0,
                completes: true,
                data,
            }
        }
    }

    impl AdcRegisters for MockAdc {
        fn power_on(&mut self) {
            self.powered = self.powers_up;
        }

        fn is_powered(&self) -> bool {
            self.powered
        }

        fn select_channel(&mut self, channel: u8) {
            self.channel = Some(channel);
        }

        fn start_conversion(&mut self) {
            self.started += 1;
        }

        fn conversion_complete(&self) -> bool {
            self.completes && self.started > 0
        }

        fn read_data(&mut self) -> u16 {
            self.data
        }
    }

    #[test]
    fn test_init_powers_converter() {
        let mut adc = AnalogSampler::new(MockAdc::new(0));
        assert_eq!(adc.init(), Ok(()));
        assert!(adc.regs.powered);
    }

    #[test]
    fn test_init_timeout() {
        let mut mock = MockAdc::new(0);
        mock.powers_up = false;
        let mut adc = AnalogSampler::new(mock).with_budget(8);
        assert_eq!(adc.init(), Err(AdcError::EnableTimeout));
    }

    #[test]
    fn test_read_selects_channel_and_triggers() {
        let mut adc = AnalogSampler::new(MockAdc::new(2000));
        assert_eq!(adc.read_raw(), 2000);
        assert_eq!(adc.regs.channel, Some(POT_ADC_CHANNEL));
        assert_eq!(adc.regs.started, 1);
    }

    #[test]
    fn test_read_masks_to_twelve_bits() {
        let mut adc = AnalogSampler::new(MockAdc::new(0xF123));
        assert_eq!(adc.read_raw(), 0x0123);
    }

    #[test]
    fn test_conversion_timeout_reads_zero() {
        let mut mock = MockAdc::new(3500);
        mock.completes = false;
        let mut adc = AnalogSampler::with_channel(mock, 4).with_budget(8);
        assert_eq!(adc.read_raw(), 0);
        assert_eq!(adc.regs.channel, Some(4));
    }
}
