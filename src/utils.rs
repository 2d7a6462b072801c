//! Common tools

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

/// Simple bit ops
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> BitState;

    /// Set or clear a bit, depending on `state`
    fn put_bit(&mut self, pos: u8, state: BitState) -> Self
    where
        Self: Sized,
    {
        match state {
            BitState::Set => self.set_bit(pos),
            BitState::Clear => self.clear_bit(pos),
        }
    }
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        *self |= 1u8 << (pos & 0b111);
        *self
    }

    fn clear_bit(&mut self, pos: u8) -> Self {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        *self &= !(1u8 << (pos & 0b111));
        *self
    }

    fn check_bit(&self, pos: u8) -> BitState {
        debug_assert!(pos <= 7, "bit offset larger than 7");

        match (*self >> (pos & 0b111)) & 1 == 1 {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }
}
