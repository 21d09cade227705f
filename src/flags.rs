//! # Status Register
//!
//! The 6502 processor status register (SR, sometimes called P) packs eight
//! single-bit flags into one byte, laid out as `NV-BDIZC`.

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use retro6502::StatusFlags;
    ///
    /// let mut sr = StatusFlags::empty();
    /// sr.set(StatusFlags::CARRY, true);
    /// sr.insert(StatusFlags::UNUSED);
    /// assert_eq!(sr.bits(), 0b0010_0001);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatusFlags: u8 {
        /// Carry: set on unsigned overflow, or no borrow on subtraction.
        const CARRY = 0b0000_0001;
        /// Zero: set if the last result was zero.
        const ZERO = 0b0000_0010;
        /// Interrupt disable: masks IRQ while set.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode. Stored and stacked, but arithmetic stays binary.
        const DECIMAL = 0b0000_1000;
        /// Break: only meaningful in a status byte pushed by BRK or PHP.
        const BREAK = 0b0001_0000;
        /// Unused bit 5, forced to 1 around every dispatch.
        const UNUSED = 0b0010_0000;
        /// Overflow: set on signed overflow.
        const OVERFLOW = 0b0100_0000;
        /// Negative: copy of bit 7 of the last result.
        const NEGATIVE = 0b1000_0000;
    }
}

impl StatusFlags {
    /// Renders the flags as `NVUBDIZC`, uppercase when set.
    pub fn to_letters(self) -> String {
        const LETTERS: [(StatusFlags, char); 8] = [
            (StatusFlags::NEGATIVE, 'N'),
            (StatusFlags::OVERFLOW, 'V'),
            (StatusFlags::UNUSED, 'U'),
            (StatusFlags::BREAK, 'B'),
            (StatusFlags::DECIMAL, 'D'),
            (StatusFlags::INTERRUPT_DISABLE, 'I'),
            (StatusFlags::ZERO, 'Z'),
            (StatusFlags::CARRY, 'C'),
        ];

        LETTERS
            .iter()
            .map(|&(flag, letter)| {
                if self.contains(flag) {
                    letter
                } else {
                    letter.to_ascii_lowercase()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bit_positions() {
        assert_eq!(StatusFlags::NEGATIVE.bits(), 0x80);
        assert_eq!(StatusFlags::OVERFLOW.bits(), 0x40);
        assert_eq!(StatusFlags::UNUSED.bits(), 0x20);
        assert_eq!(StatusFlags::BREAK.bits(), 0x10);
        assert_eq!(StatusFlags::DECIMAL.bits(), 0x08);
        assert_eq!(StatusFlags::INTERRUPT_DISABLE.bits(), 0x04);
        assert_eq!(StatusFlags::ZERO.bits(), 0x02);
        assert_eq!(StatusFlags::CARRY.bits(), 0x01);
    }

    #[test]
    fn test_to_letters() {
        let sr = StatusFlags::NEGATIVE | StatusFlags::UNUSED | StatusFlags::CARRY;
        assert_eq!(sr.to_letters(), "NvUbdizC");
        assert_eq!(StatusFlags::empty().to_letters(), "nvubdizc");
    }
}
