//! Arithmetic primitives shared by the execution engine.
//!
//! Pure functions over fixed-width integers. All of them operate in a wider
//! integer so that carry/borrow out of the top bit stays observable.

/// Result of an 8-bit addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Add8 {
    pub value: u8,
    /// Carry out of bit 7.
    pub carry: bool,
    /// Carry out of bit 3 (nibble boundary).
    pub half_carry: bool,
}

/// Result of a 16-bit addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Add16 {
    pub value: u16,
    /// Carry out of bit 15.
    pub carry: bool,
    /// Carry out of bit 11.
    pub half_carry: bool,
}

/// Result of an 8-bit subtraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sub8 {
    /// Wrapping (two's-complement) difference.
    pub value: u8,
    /// True when the raw difference went negative.
    pub borrow: bool,
    /// Borrow from bit 4 into the low nibble.
    pub half_borrow: bool,
}

/// Result of a 16-bit subtraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sub16 {
    pub value: u16,
    pub borrow: bool,
    /// Borrow from bit 12.
    pub half_borrow: bool,
}

#[inline]
pub fn add8(a: u8, b: u8, carry_in: bool) -> Add8 {
    let carry = carry_in as u16;
    let full = a as u16 + b as u16 + carry;
    Add8 {
        value: full as u8,
        carry: full > 0xFF,
        half_carry: (a & 0x0F) as u16 + (b & 0x0F) as u16 + carry > 0x0F,
    }
}

#[inline]
pub fn add16(a: u16, b: u16) -> Add16 {
    let full = a as u32 + b as u32;
    Add16 {
        value: full as u16,
        carry: full > 0xFFFF,
        half_carry: (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF,
    }
}

#[inline]
pub fn sub8(a: u8, b: u8, borrow_in: bool) -> Sub8 {
    let borrow = borrow_in as i16;
    let full = a as i16 - b as i16 - borrow;
    Sub8 {
        value: full as u8,
        borrow: full < 0,
        half_borrow: ((a & 0x0F) as i16) < (b & 0x0F) as i16 + borrow,
    }
}

#[inline]
pub fn sub16(a: u16, b: u16) -> Sub16 {
    let full = a as i32 - b as i32;
    Sub16 {
        value: full as u16,
        borrow: full < 0,
        half_borrow: (a & 0x0FFF) < (b & 0x0FFF),
    }
}

/// Addition of a signed 8-bit displacement to a 16-bit base, as used by
/// `ADD SP,e8` and `LD HL,SP+e8`.
///
/// The result takes the signed interpretation of `imm8`, but carry and
/// half-carry come from the *unsigned* low-byte addition. This mismatch is
/// hardware behaviour and must not be "fixed".
#[inline]
pub fn add_signed16(base: u16, imm8: u8) -> Add16 {
    let offset = imm8 as i8 as i16 as u16;
    Add16 {
        value: base.wrapping_add(offset),
        carry: (base & 0x00FF) + imm8 as u16 > 0x00FF,
        half_carry: (base & 0x000F) + (imm8 & 0x0F) as u16 > 0x000F,
    }
}
