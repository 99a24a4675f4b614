//! Opcode tables.
//!
//! `decode` maps a raw opcode byte (plus the 0xCB-prefix flag) to a
//! structured [`Instruction`]. Regular regions of the table are decoded by
//! bit-field extraction (register selection in bits 2-0 or 5-3, pair
//! selection in bits 5-4, operation group in bits 7-6); the irregular
//! opcodes are matched exactly. `None` marks an illegal opcode.

/// 8-bit register names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// 16-bit register pairs (SP included; AF only for PUSH/POP).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

/// Addressing modes shared by the load/ALU instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Reg8(Reg8),
    Reg16(Reg16),
    /// 8-bit immediate in the byte following the opcode.
    D8,
    /// 16-bit immediate in the two bytes following the opcode.
    D16,
    /// Memory at the address in HL.
    MemHl,
    /// Memory at the address in a register pair (BC or DE).
    MemReg16(Reg16),
    /// Memory at the 16-bit immediate address.
    MemD16,
    /// High memory at 0xFF00 + 8-bit immediate.
    HighD8,
    /// High memory at 0xFF00 + C.
    HighC,
}

/// Flag condition of the conditional jumps/calls/returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpCondition {
    Always,
    Zero,
    NotZero,
    Carry,
    NotCarry,
}

/// Bit position for BIT/RES/SET, validated to 0-7 at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitIndex(u8);

impl BitIndex {
    pub fn new(index: u8) -> Option<Self> {
        (index <= 7).then_some(Self(index))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// One decoded SM83 instruction.
///
/// Constructed fresh by [`decode`] for every step and consumed immediately
/// by the executor; variants carry only the operand metadata they need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Add(Operand),
    /// 16-bit add of a register pair into HL.
    AddHl(Reg16),
    Adc(Operand),
    Sub(Operand),
    Sbc(Operand),
    And(Operand),
    Or(Operand),
    Xor(Operand),
    /// Compare: subtract and discard the result, keeping only the flags.
    Cp(Operand),
    /// Increment. An 8-bit target preserves carry; a 16-bit target
    /// preserves all flags.
    Inc(Operand),
    Dec(Operand),
    Ccf,
    Scf,
    /// Rotate A right through carry. Only the carry flag changes.
    Rra,
    /// Rotate A left through carry. Only the carry flag changes.
    Rla,
    /// Rotate A right circularly. Only the carry flag changes.
    Rrca,
    /// Rotate A left circularly. Only the carry flag changes.
    Rlca,
    /// Rotate right through carry; Z from result.
    Rr(Operand),
    Rl(Operand),
    /// Rotate right circularly; Z from result.
    Rrc(Operand),
    Rlc(Operand),
    /// Complement A.
    Cpl,
    Bit(BitIndex, Operand),
    Res(BitIndex, Operand),
    Set(BitIndex, Operand),
    /// Logical shift right.
    Srl(Operand),
    /// Arithmetic shift right (sign bit copied).
    Sra(Operand),
    /// Shift left.
    Sla(Operand),
    /// Exchange nibbles.
    Swap(Operand),
    Nop,
    Jp(JumpCondition),
    JpHl,
    Jr(JumpCondition),
    Ld { dst: Operand, src: Operand },
    /// LD (HL+),A
    LdHlIncA,
    /// LD A,(HL+)
    LdAHlInc,
    /// LD (HL-),A
    LdHlDecA,
    /// LD A,(HL-)
    LdAHlDec,
    Pop(Reg16),
    Push(Reg16),
    Call(JumpCondition),
    Ret(JumpCondition),
    RetI,
    /// Call to one of the fixed reset vectors 0x00..0x38.
    Rst(u8),
    Daa,
    Halt,
    Stop,
    /// DI: clear IME immediately.
    Di,
    /// EI: enable IME after the next instruction completes.
    Ei,
    /// ADD SP,e8
    AddSp,
    /// LD HL,SP+e8
    LdHlSpOffset,
    /// LD SP,HL
    LdSpHl,
    /// LD (a16),SP
    LdMemD16Sp,
}

/// Decode one opcode byte. `prefixed` selects the 0xCB table.
pub fn decode(opcode: u8, prefixed: bool) -> Option<Instruction> {
    if prefixed {
        decode_prefixed(opcode)
    } else {
        decode_unprefixed(opcode)
    }
}

/// 8-bit operand selection used across both tables:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
fn operand_r(bits: u8) -> Operand {
    match bits & 0x07 {
        0 => Operand::Reg8(Reg8::B),
        1 => Operand::Reg8(Reg8::C),
        2 => Operand::Reg8(Reg8::D),
        3 => Operand::Reg8(Reg8::E),
        4 => Operand::Reg8(Reg8::H),
        5 => Operand::Reg8(Reg8::L),
        6 => Operand::MemHl,
        _ => Operand::Reg8(Reg8::A),
    }
}

/// Register-pair selection for the `rp` table: 0=BC, 1=DE, 2=HL, 3=SP.
fn pair_rp(bits: u8) -> Reg16 {
    match bits & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::SP,
    }
}

/// Register-pair selection for PUSH/POP: 0=BC, 1=DE, 2=HL, 3=AF.
fn pair_rp2(bits: u8) -> Reg16 {
    match bits & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::AF,
    }
}

/// Condition selection: 0=NZ, 1=Z, 2=NC, 3=C.
fn condition_cc(bits: u8) -> JumpCondition {
    match bits & 0x03 {
        0 => JumpCondition::NotZero,
        1 => JumpCondition::Zero,
        2 => JumpCondition::NotCarry,
        _ => JumpCondition::Carry,
    }
}

fn decode_unprefixed(opcode: u8) -> Option<Instruction> {
    use Instruction::*;

    let instruction = match opcode {
        0x00 => Nop,
        0x10 => Stop,
        // 0x76 sits inside the LD r,r block but is HALT, not LD (HL),(HL).
        0x76 => Halt,
        0xF3 => Di,
        0xFB => Ei,

        0x27 => Daa,
        0x2F => Cpl,
        0x37 => Scf,
        0x3F => Ccf,

        0x07 => Rlca,
        0x0F => Rrca,
        0x17 => Rla,
        0x1F => Rra,

        // LD rr,d16
        0x01 | 0x11 | 0x21 | 0x31 => Ld {
            dst: Operand::Reg16(pair_rp(opcode >> 4)),
            src: Operand::D16,
        },

        // LD (BC/DE),A and the HL+/- quartet.
        0x02 => Ld {
            dst: Operand::MemReg16(Reg16::BC),
            src: Operand::Reg8(Reg8::A),
        },
        0x12 => Ld {
            dst: Operand::MemReg16(Reg16::DE),
            src: Operand::Reg8(Reg8::A),
        },
        0x22 => LdHlIncA,
        0x32 => LdHlDecA,
        0x0A => Ld {
            dst: Operand::Reg8(Reg8::A),
            src: Operand::MemReg16(Reg16::BC),
        },
        0x1A => Ld {
            dst: Operand::Reg8(Reg8::A),
            src: Operand::MemReg16(Reg16::DE),
        },
        0x2A => LdAHlInc,
        0x3A => LdAHlDec,

        0x08 => LdMemD16Sp,

        // 16-bit INC/DEC.
        0x03 | 0x13 | 0x23 | 0x33 => Inc(Operand::Reg16(pair_rp(opcode >> 4))),
        0x0B | 0x1B | 0x2B | 0x3B => Dec(Operand::Reg16(pair_rp(opcode >> 4))),

        // 8-bit INC/DEC, register in bits 5-3.
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Inc(operand_r(opcode >> 3)),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Dec(operand_r(opcode >> 3)),

        // LD r,d8 (including LD (HL),d8).
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Ld {
            dst: operand_r(opcode >> 3),
            src: Operand::D8,
        },

        0x09 | 0x19 | 0x29 | 0x39 => AddHl(pair_rp(opcode >> 4)),

        0x18 => Jr(JumpCondition::Always),
        0x20 | 0x28 | 0x30 | 0x38 => Jr(condition_cc(opcode >> 3)),

        // LD r,r block: destination in bits 5-3, source in bits 2-0.
        0x40..=0x7F => Ld {
            dst: operand_r(opcode >> 3),
            src: operand_r(opcode),
        },

        // ALU group: operation in bits 5-3, operand in bits 2-0.
        0x80..=0xBF => {
            let operand = operand_r(opcode);
            match (opcode >> 3) & 0x07 {
                0 => Add(operand),
                1 => Adc(operand),
                2 => Sub(operand),
                3 => Sbc(operand),
                4 => And(operand),
                5 => Xor(operand),
                6 => Or(operand),
                _ => Cp(operand),
            }
        }

        // ALU immediate forms.
        0xC6 => Add(Operand::D8),
        0xCE => Adc(Operand::D8),
        0xD6 => Sub(Operand::D8),
        0xDE => Sbc(Operand::D8),
        0xE6 => And(Operand::D8),
        0xEE => Xor(Operand::D8),
        0xF6 => Or(Operand::D8),
        0xFE => Cp(Operand::D8),

        0xC0 | 0xC8 | 0xD0 | 0xD8 => Ret(condition_cc(opcode >> 3)),
        0xC9 => Ret(JumpCondition::Always),
        0xD9 => RetI,

        0xC1 | 0xD1 | 0xE1 | 0xF1 => Pop(pair_rp2(opcode >> 4)),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Push(pair_rp2(opcode >> 4)),

        0xC2 | 0xCA | 0xD2 | 0xDA => Jp(condition_cc(opcode >> 3)),
        0xC3 => Jp(JumpCondition::Always),
        0xE9 => JpHl,

        0xC4 | 0xCC | 0xD4 | 0xDC => Call(condition_cc(opcode >> 3)),
        0xCD => Call(JumpCondition::Always),

        // RST: vector in bits 5-3, times 8.
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Rst(opcode & 0x38),

        // High-memory and absolute accumulator loads.
        0xE0 => Ld {
            dst: Operand::HighD8,
            src: Operand::Reg8(Reg8::A),
        },
        0xF0 => Ld {
            dst: Operand::Reg8(Reg8::A),
            src: Operand::HighD8,
        },
        0xE2 => Ld {
            dst: Operand::HighC,
            src: Operand::Reg8(Reg8::A),
        },
        0xF2 => Ld {
            dst: Operand::Reg8(Reg8::A),
            src: Operand::HighC,
        },
        0xEA => Ld {
            dst: Operand::MemD16,
            src: Operand::Reg8(Reg8::A),
        },
        0xFA => Ld {
            dst: Operand::Reg8(Reg8::A),
            src: Operand::MemD16,
        },

        0xE8 => AddSp,
        0xF8 => LdHlSpOffset,
        0xF9 => LdSpHl,

        // 0xCB is a prefix, not an instruction, and the remaining holes
        // (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD) are illegal.
        _ => return None,
    };

    Some(instruction)
}

fn decode_prefixed(opcode: u8) -> Option<Instruction> {
    use Instruction::*;

    let operand = operand_r(opcode);
    let y = (opcode >> 3) & 0x07;

    let instruction = match opcode >> 6 {
        // Rotates and shifts, selected by bits 5-3.
        0 => match y {
            0 => Rlc(operand),
            1 => Rrc(operand),
            2 => Rl(operand),
            3 => Rr(operand),
            4 => Sla(operand),
            5 => Sra(operand),
            6 => Swap(operand),
            _ => Srl(operand),
        },
        // Bit operations carry the literal bit index in bits 5-3.
        1 => Bit(BitIndex::new(y)?, operand),
        2 => Res(BitIndex::new(y)?, operand),
        _ => Set(BitIndex::new(y)?, operand),
    };

    Some(instruction)
}
