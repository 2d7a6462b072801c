/*!
# PCD8544 Driver

Driver for the PCD8544 dot-matrix controller (Nokia 5110 / LCD4884 panels, 84x48 pixels),
with a small character terminal on top of it.

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include 2 drvier:
    * bit-banged serial driver over plain GPIO [`sender::BitBangSender`]
    * hardware SPI driver [`sender::SpiSender`]

    You can choose either of it, or you can use any driver implemented [`sender::SendCommand`].
<br/>
<br/>
2. Use [`pcd8544::Pcd8544::new()`] to create a [`pcd8544::Pcd8544`], then call
   [`pcd8544::Pcd8544::begin()`] to bring the controller up
<br/>
<br/>
3. use any methods provide by [`pcd8544::Pcd8544`] to control the panel, or `write!` text to it
*/

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod font;
pub mod pcd8544;
pub mod sender;
pub mod state;
pub mod utils;

#[cfg(test)]
mod mock;

/// Number of 8-pixel row banks
pub const MAX_ROWS: u8 = 48 / 8;

/// Number of pixel columns
pub const MAX_COLS: u8 = 84;

/// Size of the display RAM, in bytes
pub const BYTE_COUNT: usize = MAX_ROWS as usize * MAX_COLS as usize;

/// Width of one glyph in columns, spacer included
pub const GLYPH_WIDTH: usize = 6;
