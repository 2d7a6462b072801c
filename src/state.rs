//! Text cursor bookkeeping

use crate::{MAX_COLS, MAX_ROWS};

/// Where the next glyph column lands, and how the cursor got there
///
/// `row` is a RAM bank (8 pixels high), `column` a single pixel column.
/// The wrap flags are only set when streaming glyph bytes overflowed a line,
/// an explicit address change clears them.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    prev_chr: u8,
    row: u8,
    col: u8,
    wrapped_row: bool,
    wrapped_col: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            prev_chr: b'\0',
            row: 0,
            col: 0,
            wrapped_row: false,
            wrapped_col: false,
        }
    }
}

impl Cursor {
    /// Last character code handed to the text writer
    pub fn get_previous_character(&self) -> u8 {
        self.prev_chr
    }

    pub(crate) fn set_previous_character(&mut self, chr: u8) {
        self.prev_chr = chr;
    }

    /// Current row bank, `0..MAX_ROWS`
    pub fn get_row(&self) -> u8 {
        self.row
    }

    /// Current pixel column, `0..MAX_COLS`
    pub fn get_column(&self) -> u8 {
        self.col
    }

    /// `(row, column)`
    pub fn get_pos(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// The last glyph byte ran past the bottom row and restarted at row 0
    pub fn is_row_wrapped(&self) -> bool {
        self.wrapped_row
    }

    /// The last glyph byte ran past the last column and restarted at column 0
    pub fn is_column_wrapped(&self) -> bool {
        self.wrapped_col
    }

    pub(crate) fn set_row(&mut self, row: u8) -> u8 {
        self.row = row % MAX_ROWS;
        self.wrapped_row = false;
        self.row
    }

    pub(crate) fn set_column(&mut self, col: u8) -> u8 {
        self.col = col % MAX_COLS;
        self.wrapped_col = false;
        self.col
    }

    pub(crate) fn clear_wrap_flags(&mut self) {
        self.wrapped_row = false;
        self.wrapped_col = false;
    }

    /// Mimic the controller's address counter after one data byte (horizontal addressing)
    pub(crate) fn advance(&mut self) {
        self.col += 1;
        if self.col >= MAX_COLS {
            self.col = 0;
            self.wrapped_col = true;

            self.row += 1;
            if self.row >= MAX_ROWS {
                self.row = 0;
                self.wrapped_row = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home_without_wraps() {
        let cursor = Cursor::default();
        assert_eq!(cursor.get_pos(), (0, 0));
        assert_eq!(cursor.get_previous_character(), 0);
        assert!(!cursor.is_row_wrapped());
        assert!(!cursor.is_column_wrapped());
    }

    #[test]
    fn advance_wraps_column_then_row() {
        let mut cursor = Cursor::default();
        cursor.set_row(MAX_ROWS - 1);
        cursor.set_column(MAX_COLS - 2);

        cursor.advance();
        assert_eq!(cursor.get_pos(), (MAX_ROWS - 1, MAX_COLS - 1));
        assert!(!cursor.is_column_wrapped());

        cursor.advance();
        assert_eq!(cursor.get_pos(), (0, 0));
        assert!(cursor.is_column_wrapped());
        assert!(cursor.is_row_wrapped());
    }

    #[test]
    fn explicit_moves_clear_the_matching_flag() {
        let mut cursor = Cursor::default();
        cursor.set_row(MAX_ROWS - 1);
        cursor.set_column(MAX_COLS - 1);
        cursor.advance();

        assert_eq!(cursor.set_column(90), 6);
        assert!(!cursor.is_column_wrapped());
        assert!(cursor.is_row_wrapped());

        assert_eq!(cursor.set_row(13), 1);
        assert!(!cursor.is_row_wrapped());
    }
}
