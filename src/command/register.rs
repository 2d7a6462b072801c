//! Instruction encoding of the PCD8544 registers
//!
//! Every register is a zero-sized type implementing [`Register`]:
//! `command = INSTRUCTION | (operand & OPERAND_MASK)`.
//! Encoding never fails, an operand wider than the mask is truncated.

/// A controller register, reachable through one instruction byte
pub trait Register {
    /// Fixed instruction prefix
    const INSTRUCTION: u8;
    /// Bits of the instruction byte that carry the operand
    const OPERAND_MASK: u8;
    /// Power-on / bring-up value
    const DEFAULT: u8;

    /// Adjust a requested value into a legal operand
    fn operand(value: u8) -> u8 {
        value
    }

    /// Build the instruction byte
    fn command(operand: u8) -> u8 {
        Self::INSTRUCTION | (operand & Self::OPERAND_MASK)
    }

    /// [`Register::operand`] followed by [`Register::command`]
    fn encode(value: u8) -> u8 {
        Self::command(Self::operand(value))
    }
}

/// No operation
pub struct Nop;

impl Register for Nop {
    const INSTRUCTION: u8 = 0b0000_0000;
    const OPERAND_MASK: u8 = 0b0000_0000;
    const DEFAULT: u8 = 0b0000_0000;
}

/// Function set: instruction set, addressing direction, power-down
///
/// The flags are combined with bitwise OR before encoding.
pub struct FunctionSet;

#[allow(missing_docs)]
impl FunctionSet {
    pub const STD_INST_SET: u8 = 0b0000_0000;
    pub const EXT_INST_SET: u8 = 0b0000_0001;
    pub const H_ADDRESSING: u8 = 0b0000_0000;
    pub const V_ADDRESSING: u8 = 0b0000_0010;
    pub const POWER_DOWN: u8 = 0b0000_0100;
}

impl Register for FunctionSet {
    const INSTRUCTION: u8 = 0b0010_0000;
    const OPERAND_MASK: u8 = 0b0000_0111;
    const DEFAULT: u8 = 0b0000_0000;
}

/// Display control: blank, all segments black, normal, inverse
pub struct DisplayControl;

#[allow(missing_docs)]
impl DisplayControl {
    pub const BLANK_MODE: u8 = 0b0000_0000;
    pub const BLACK_MODE: u8 = 0b0000_0001;
    pub const NORMAL_MODE: u8 = 0b0000_0100;
    pub const INVERSE_MODE: u8 = 0b0000_0101;
}

impl Register for DisplayControl {
    const INSTRUCTION: u8 = 0b0000_1000;
    const OPERAND_MASK: u8 = 0b0000_0101;
    const DEFAULT: u8 = Self::NORMAL_MODE;
}

/// Y address of RAM (row bank, 0..=5)
pub struct RowAddress;

#[allow(missing_docs)]
impl RowAddress {
    pub const MIN_ROW: u8 = 0;
    pub const MAX_ROW: u8 = crate::MAX_ROWS - 1;
}

impl Register for RowAddress {
    const INSTRUCTION: u8 = 0b0100_0000;
    const OPERAND_MASK: u8 = 0b0000_0111;
    const DEFAULT: u8 = 0b0000_0000;

    /// Out of range rows wrap around
    fn operand(value: u8) -> u8 {
        value % (Self::MAX_ROW + 1)
    }
}

/// X address of RAM (pixel column, 0..=83)
pub struct ColumnAddress;

#[allow(missing_docs)]
impl ColumnAddress {
    pub const MIN_COL: u8 = 0;
    pub const MAX_COL: u8 = crate::MAX_COLS - 1;
}

impl Register for ColumnAddress {
    const INSTRUCTION: u8 = 0b1000_0000;
    const OPERAND_MASK: u8 = 0b0111_1111;
    const DEFAULT: u8 = 0b0000_0000;

    /// Out of range columns wrap around
    fn operand(value: u8) -> u8 {
        value % (Self::MAX_COL + 1)
    }
}

/// Temperature coefficient of the operating voltage (extended instruction set only)
pub struct TemperatureControl;

#[allow(missing_docs)]
impl TemperatureControl {
    pub const TC0: u8 = 0b0000_0000;
    pub const TC1: u8 = 0b0000_0001;
    pub const TC2: u8 = 0b0000_0010;
    pub const TC3: u8 = 0b0000_0011;
}

impl Register for TemperatureControl {
    const INSTRUCTION: u8 = 0b0000_0100;
    const OPERAND_MASK: u8 = 0b0000_0011;
    const DEFAULT: u8 = Self::TC0;
}

/// Bias system (extended instruction set only)
///
/// `N0` is the 1:100 multiplex bias, `N7` the 1:10 one.
pub struct BiasSystem;

#[allow(missing_docs)]
impl BiasSystem {
    pub const N0: u8 = 0b0000_0111;
    pub const N1: u8 = 0b0000_0110;
    pub const N2: u8 = 0b0000_0101;
    pub const N3: u8 = 0b0000_0100;
    pub const N4: u8 = 0b0000_0011;
    pub const N5: u8 = 0b0000_0010;
    pub const N6: u8 = 0b0000_0001;
    pub const N7: u8 = 0b0000_0000;
}

impl Register for BiasSystem {
    const INSTRUCTION: u8 = 0b0001_0000;
    const OPERAND_MASK: u8 = 0b0000_0111;
    const DEFAULT: u8 = Self::N4;
}

/// Operating voltage, i.e. contrast (extended instruction set only)
pub struct OperatingVoltage;

impl Register for OperatingVoltage {
    const INSTRUCTION: u8 = 0b1000_0000;
    const OPERAND_MASK: u8 = 0b0111_1111;
    const DEFAULT: u8 = 0b0100_0010;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_match_the_bring_up_values() {
        assert_eq!(TemperatureControl::encode(TemperatureControl::DEFAULT), 0x04);
        assert_eq!(BiasSystem::encode(BiasSystem::DEFAULT), 0x13);
        assert_eq!(OperatingVoltage::encode(OperatingVoltage::DEFAULT), 0xC2);
        assert_eq!(DisplayControl::encode(DisplayControl::DEFAULT), 0x0C);
        assert_eq!(Nop::encode(0xFF), 0x00);
    }

    #[test]
    fn function_set_flags_combine() {
        assert_eq!(FunctionSet::encode(FunctionSet::STD_INST_SET), 0x20);
        assert_eq!(FunctionSet::encode(FunctionSet::EXT_INST_SET), 0x21);
        assert_eq!(FunctionSet::encode(FunctionSet::POWER_DOWN), 0x24);
        assert_eq!(
            FunctionSet::encode(FunctionSet::EXT_INST_SET | FunctionSet::V_ADDRESSING),
            0x23
        );
    }

    #[test]
    fn display_modes() {
        assert_eq!(DisplayControl::encode(DisplayControl::BLANK_MODE), 0x08);
        assert_eq!(DisplayControl::encode(DisplayControl::BLACK_MODE), 0x09);
        assert_eq!(DisplayControl::encode(DisplayControl::NORMAL_MODE), 0x0C);
        assert_eq!(DisplayControl::encode(DisplayControl::INVERSE_MODE), 0x0D);
    }

    #[test]
    fn addresses_wrap_instead_of_failing() {
        assert_eq!(RowAddress::encode(5), 0x45);
        assert_eq!(RowAddress::encode(6), 0x40);
        assert_eq!(RowAddress::encode(7), 0x41);
        assert_eq!(ColumnAddress::encode(83), 0x80 | 83);
        assert_eq!(ColumnAddress::encode(84), 0x80);
        assert_eq!(ColumnAddress::encode(85), 0x81);
    }

    #[test]
    fn extended_registers_truncate_wide_operands() {
        assert_eq!(TemperatureControl::encode(5), 0x05);
        assert_eq!(BiasSystem::encode(9), 0x11);
        assert_eq!(OperatingVoltage::encode(0xFF), 0xFF);
        assert_eq!(OperatingVoltage::encode(0x80), 0x80);
    }

    proptest! {
        #[test]
        fn row_operand_is_value_mod_6(value in any::<u8>()) {
            prop_assert_eq!(RowAddress::encode(value), 0x40 | (value % 6));
        }

        #[test]
        fn column_operand_is_value_mod_84(value in any::<u8>()) {
            prop_assert_eq!(ColumnAddress::encode(value), 0x80 | (value % 84));
        }

        #[test]
        fn masked_registers_keep_their_prefix(value in any::<u8>()) {
            prop_assert_eq!(FunctionSet::encode(value) & !FunctionSet::OPERAND_MASK, 0x20);
            prop_assert_eq!(TemperatureControl::encode(value) & !0b11, 0x04);
            prop_assert_eq!(BiasSystem::encode(value), 0x10 | (value & 0b111));
            prop_assert_eq!(OperatingVoltage::encode(value), 0x80 | (value & 0x7F));
        }
    }
}
