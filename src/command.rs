//! Controller instructions and the byte that carries each of them

use crate::utils::{BitOps, BitState};

pub mod register;

use register::{
    BiasSystem, ColumnAddress, DisplayControl, FunctionSet, Nop, OperatingVoltage, Register,
    RowAddress, TemperatureControl,
};

/// Everything that can be sent to the controller
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// No operation
    Nop,
    /// Function set
    FunctionSet(PowerMode, Addressing, InstructionSet),
    /// Display control (standard instruction set)
    DisplayControl(DisplayMode),
    /// Y address of RAM, wraps modulo 6 (standard instruction set)
    SetRowAddress(u8),
    /// X address of RAM, wraps modulo 84 (standard instruction set)
    SetColumnAddress(u8),
    /// Temperature coefficient (extended instruction set)
    TemperatureControl(u8),
    /// Bias system (extended instruction set)
    BiasSystem(u8),
    /// Operating voltage (extended instruction set)
    OperatingVoltage(u8),
    /// One byte of display RAM, 8 vertical pixels, LSB on top
    WriteData(u8),
}

/// Which instruction set the controller decodes
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InstructionSet {
    #[default]
    #[allow(missing_docs)]
    Standard,
    #[allow(missing_docs)]
    Extended,
}

/// RAM address auto-increment direction
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Addressing {
    /// Column first, then row (the text cursor relies on this)
    #[default]
    Horizontal,
    /// Row first, then column
    Vertical,
}

/// Chip power state
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    #[default]
    #[allow(missing_docs)]
    Active,
    #[allow(missing_docs)]
    PowerDown,
}

/// Display configuration
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// All pixels off
    Blank,
    /// All pixels on
    Black,
    /// RAM content as is
    #[default]
    Normal,
    /// RAM content inverted
    Inverse,
}

impl DisplayMode {
    fn operand(self) -> u8 {
        match self {
            DisplayMode::Blank => DisplayControl::BLANK_MODE,
            DisplayMode::Black => DisplayControl::BLACK_MODE,
            DisplayMode::Normal => DisplayControl::NORMAL_MODE,
            DisplayMode::Inverse => DisplayControl::INVERSE_MODE,
        }
    }
}

/// Which channel a byte goes to, selected by the mode (D/C) line
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// Mode line low
    Command,
    /// Mode line high
    Data,
}

/// One encoded transfer: channel plus byte
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    rs: RegisterSelection,
    bits: u8,
}

impl Command {
    /// A byte on the instruction channel
    pub fn instruction(bits: u8) -> Self {
        Self {
            rs: RegisterSelection::Command,
            bits,
        }
    }

    /// A byte on the data channel
    pub fn data(bits: u8) -> Self {
        Self {
            rs: RegisterSelection::Data,
            bits,
        }
    }

    #[allow(missing_docs)]
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    #[allow(missing_docs)]
    pub fn get_bits(&self) -> u8 {
        self.bits
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::Nop => Self::instruction(Nop::encode(Nop::DEFAULT)),

            CommandSet::FunctionSet(power, addressing, set) => {
                let mut operand = FunctionSet::DEFAULT;

                operand.put_bit(
                    2,
                    match power {
                        PowerMode::Active => BitState::Clear,
                        PowerMode::PowerDown => BitState::Set,
                    },
                );

                operand.put_bit(
                    1,
                    match addressing {
                        Addressing::Horizontal => BitState::Clear,
                        Addressing::Vertical => BitState::Set,
                    },
                );

                operand.put_bit(
                    0,
                    match set {
                        InstructionSet::Standard => BitState::Clear,
                        InstructionSet::Extended => BitState::Set,
                    },
                );

                Self::instruction(FunctionSet::encode(operand))
            }

            CommandSet::DisplayControl(mode) => {
                Self::instruction(DisplayControl::encode(mode.operand()))
            }

            CommandSet::SetRowAddress(row) => Self::instruction(RowAddress::encode(row)),

            CommandSet::SetColumnAddress(col) => Self::instruction(ColumnAddress::encode(col)),

            CommandSet::TemperatureControl(tc) => {
                Self::instruction(TemperatureControl::encode(tc))
            }

            CommandSet::BiasSystem(bias) => Self::instruction(BiasSystem::encode(bias)),

            CommandSet::OperatingVoltage(vop) => Self::instruction(OperatingVoltage::encode(vop)),

            CommandSet::WriteData(byte) => Self::data(byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(command: CommandSet) -> u8 {
        Command::from(command).get_bits()
    }

    #[test]
    fn function_set_variants_match_register_flags() {
        use Addressing::*;
        use InstructionSet::*;
        use PowerMode::*;

        assert_eq!(bits(CommandSet::FunctionSet(Active, Horizontal, Standard)), 0x20);
        assert_eq!(bits(CommandSet::FunctionSet(Active, Horizontal, Extended)), 0x21);
        assert_eq!(bits(CommandSet::FunctionSet(Active, Vertical, Standard)), 0x22);
        assert_eq!(bits(CommandSet::FunctionSet(PowerDown, Horizontal, Standard)), 0x24);
        assert_eq!(bits(CommandSet::FunctionSet(PowerDown, Vertical, Extended)), 0x27);
    }

    #[test]
    fn display_mode_variants() {
        assert_eq!(bits(CommandSet::DisplayControl(DisplayMode::Blank)), 0x08);
        assert_eq!(bits(CommandSet::DisplayControl(DisplayMode::Black)), 0x09);
        assert_eq!(bits(CommandSet::DisplayControl(DisplayMode::Normal)), 0x0C);
        assert_eq!(bits(CommandSet::DisplayControl(DisplayMode::Inverse)), 0x0D);
    }

    #[test]
    fn only_write_data_uses_the_data_channel() {
        let data = Command::from(CommandSet::WriteData(0xA5));
        assert_eq!(data.get_register_selection(), RegisterSelection::Data);
        assert_eq!(data.get_bits(), 0xA5);

        for command in [
            CommandSet::Nop,
            CommandSet::SetRowAddress(9),
            CommandSet::SetColumnAddress(200),
            CommandSet::TemperatureControl(1),
            CommandSet::BiasSystem(3),
            CommandSet::OperatingVoltage(0x42),
        ] {
            assert_eq!(
                Command::from(command).get_register_selection(),
                RegisterSelection::Command
            );
        }
    }

    #[test]
    fn addresses_wrap() {
        assert_eq!(bits(CommandSet::SetRowAddress(9)), 0x43);
        assert_eq!(bits(CommandSet::SetColumnAddress(200)), 0x80 | (200 % 84));
    }
}
