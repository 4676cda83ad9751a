use serde::{Deserialize, Serialize};

/// 6502 addressing modes, in the order they are declared in generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressingMode {
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Accumulator,
    Immediate,
    Implied,
    Indirect,
    Relative,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    /// `(zp),Y`: post-indexed indirect.
    IndirectPlusY,
    /// `(zp,X)`: pre-indexed indirect.
    IndirectX,
    /// `(zp,Y)`; not a real 6502 mode but kept for tables that use it.
    IndirectY,
}

impl AddressingMode {
    pub const ALL: [AddressingMode; 14] = [
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::Implied,
        AddressingMode::Indirect,
        AddressingMode::Relative,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::IndirectPlusY,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Label used for this mode in the instruction list.
    pub fn label(self) -> &'static str {
        match self {
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "Absolute,X",
            AddressingMode::AbsoluteY => "Absolute,Y",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::Implied => "Implied",
            AddressingMode::Indirect => "Indirect",
            AddressingMode::Relative => "Relative",
            AddressingMode::ZeroPage => "Zero Page",
            AddressingMode::ZeroPageX => "Zero Page,X",
            AddressingMode::ZeroPageY => "Zero Page,Y",
            AddressingMode::IndirectPlusY => "(Indirect),Y",
            AddressingMode::IndirectX => "(Indirect,X)",
            AddressingMode::IndirectY => "(Indirect,Y)",
        }
    }

    /// Symbolic name emitted into generated source.
    pub fn symbol(self) -> &'static str {
        match self {
            AddressingMode::Absolute => "AddressingMode_Absolute",
            AddressingMode::AbsoluteX => "AddressingMode_AbsoluteX",
            AddressingMode::AbsoluteY => "AddressingMode_AbsoluteY",
            AddressingMode::Accumulator => "AddressingMode_Accumulator",
            AddressingMode::Immediate => "AddressingMode_Immediate",
            AddressingMode::Implied => "AddressingMode_Implied",
            AddressingMode::Indirect => "AddressingMode_Indirect",
            AddressingMode::Relative => "AddressingMode_Relative",
            AddressingMode::ZeroPage => "AddressingMode_ZeroPage",
            AddressingMode::ZeroPageX => "AddressingMode_ZeroPageX",
            AddressingMode::ZeroPageY => "AddressingMode_ZeroPageY",
            AddressingMode::IndirectPlusY => "AddressingMode_IndirectPlusY",
            AddressingMode::IndirectX => "AddressingMode_IndirectX",
            AddressingMode::IndirectY => "AddressingMode_IndirectY",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Operand bytes following the opcode.
    pub fn operand_len(self) -> u8 {
        use AddressingMode::*;
        match self {
            Accumulator | Implied => 0,
            Immediate | Relative | ZeroPage | ZeroPageX | ZeroPageY | IndirectPlusY | IndirectX
            | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }
}

impl std::fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
