/// Register file for the SM83.
///
/// Eight 8-bit cells plus the 16-bit stack pointer and program counter.
/// The BC/DE/HL/AF pairs are derived views, packed high-byte-first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0-3 are always zero.
#[derive(Clone, Copy, Debug)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

/// Decoded view of the F register.
///
/// `from_byte` and `to_byte` are a bijection on the 4-bit flag subspace;
/// `to_byte` always leaves bits 0-3 clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
}

impl Flags {
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        Self {
            zero: byte & (1 << Flag::Z as u8) != 0,
            subtract: byte & (1 << Flag::N as u8) != 0,
            half_carry: byte & (1 << Flag::H as u8) != 0,
            carry: byte & (1 << Flag::C as u8) != 0,
        }
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        (u8::from(self.zero) << Flag::Z as u8)
            | (u8::from(self.subtract) << Flag::N as u8)
            | (u8::from(self.half_carry) << Flag::H as u8)
            | (u8::from(self.carry) << Flag::C as u8)
    }
}
