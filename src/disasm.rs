use std::fmt::Write as _;

use crate::mode::AddressingMode;
use crate::table::Catalog;

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub addr: u16,
    pub bytes: Vec<u8>,
    pub mnemonic: String,
    pub mode: AddressingMode,
}

impl Decoded {
    pub fn len(&self) -> u16 {
        self.bytes.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn word(&self) -> u16 {
        u16::from_le_bytes([self.bytes[1], self.bytes[2]])
    }

    /// Operand in assembler syntax, empty for implied instructions.
    pub fn operand(&self) -> String {
        use AddressingMode::*;
        // rows whose length disagrees with the mode print no operand
        if self.bytes.len() != 1 + self.mode.operand_len() as usize {
            return String::new();
        }
        match self.mode {
            Implied => String::new(),
            Accumulator => "A".to_string(),
            Immediate => format!("#${:02X}", self.bytes[1]),
            ZeroPage => format!("${:02X}", self.bytes[1]),
            ZeroPageX => format!("${:02X},X", self.bytes[1]),
            ZeroPageY => format!("${:02X},Y", self.bytes[1]),
            IndirectPlusY => format!("(${:02X}),Y", self.bytes[1]),
            IndirectX => format!("(${:02X},X)", self.bytes[1]),
            IndirectY => format!("(${:02X},Y)", self.bytes[1]),
            Relative => {
                let target = self.addr.wrapping_add(2).wrapping_add(self.bytes[1] as i8 as u16);
                format!("${target:04X}")
            }
            Absolute => format!("${:04X}", self.word()),
            AbsoluteX => format!("${:04X},X", self.word()),
            AbsoluteY => format!("${:04X},Y", self.word()),
            Indirect => format!("(${:04X})", self.word()),
        }
    }
}

impl std::fmt::Display for Decoded {
    /// `A9 10     LDA #$10`: raw bytes padded to three columns, then the instruction.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        for (i, b) in self.bytes.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            let _ = write!(s, "{b:02X}");
        }
        for _ in self.bytes.len()..3 {
            s.push_str("   ");
        }
        let _ = write!(s, "  {} {}", self.mnemonic, self.operand());
        f.write_str(s.trim_end())
    }
}

/// Decode the instruction at `pc`, where `bytes[0]` is the byte at `pc`.
/// Returns `None` when `bytes` is shorter than the instruction.
pub fn decode(catalog: &Catalog, pc: u16, bytes: &[u8]) -> Option<Decoded> {
    let opcode = *bytes.first()?;
    let entry = catalog.table.get(opcode);
    let bytes = bytes.get(..entry.length as usize)?;
    Some(Decoded {
        addr: pc,
        bytes: bytes.to_vec(),
        mnemonic: catalog.mnemonic(opcode).to_string(),
        mode: entry.mode,
    })
}

/// Linear sweep over `bytes` loaded at `base`. A trailing partial instruction
/// is emitted as `.byte` data by the caller; here it simply ends the sweep.
pub fn sweep(catalog: &Catalog, base: u16, bytes: &[u8]) -> Vec<Decoded> {
    let mut out = Vec::new();
    let mut off = 0usize;
    while off < bytes.len() {
        let pc = base.wrapping_add(off as u16);
        let Some(d) = decode(catalog, pc, &bytes[off..]) else { break };
        off += d.bytes.len();
        out.push(d);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cat() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn line(pc: u16, bytes: &[u8]) -> String {
        decode(&cat(), pc, bytes).unwrap().to_string()
    }

    #[test]
    fn formats_each_operand_shape() {
        assert_eq!(line(0, &[0xA9, 0x10]), "A9 10     LDA #$10");
        assert_eq!(line(0, &[0x8D, 0x00, 0x20]), "8D 00 20  STA $2000");
        assert_eq!(line(0, &[0xBD, 0x34, 0x12]), "BD 34 12  LDA $1234,X");
        assert_eq!(line(0, &[0x6C, 0xFC, 0xFF]), "6C FC FF  JMP ($FFFC)");
        assert_eq!(line(0, &[0xB1, 0x80]), "B1 80     LDA ($80),Y");
        assert_eq!(line(0, &[0xA1, 0x80]), "A1 80     LDA ($80,X)");
        assert_eq!(line(0, &[0x96, 0x10]), "96 10     STX $10,Y");
        assert_eq!(line(0, &[0x0A]), "0A        ASL A");
        assert_eq!(line(0, &[0x00]), "00        BRK");
    }

    #[test]
    fn relative_branch_targets() {
        assert_eq!(line(0xC000, &[0xD0, 0xFE]), "D0 FE     BNE $C000");
        assert_eq!(line(0xC000, &[0xF0, 0x10]), "F0 10     BEQ $C012");
    }

    #[test]
    fn truncated_instruction_is_none() {
        assert!(decode(&cat(), 0, &[0x4C, 0x00]).is_none());
        assert!(decode(&cat(), 0, &[]).is_none());
    }

    #[test]
    fn sweep_walks_by_length() {
        let prog = [0xA2, 0x00, 0xE8, 0xD0, 0xFD, 0x4C];
        let lines: Vec<String> = sweep(&cat(), 0x0600, &prog).iter().map(|d| d.to_string()).collect();
        assert_eq!(lines, vec!["A2 00     LDX #$00", "E8        INX", "D0 FD     BNE $0602"]);
    }

    #[test]
    fn fallback_rows_decode_as_unk() {
        let c = Catalog::from_text("Implied|NOP|EA|1", crate::table::DuplicatePolicy::Error).unwrap();
        assert_eq!(decode(&c, 0, &[0x03, 0xEA]).unwrap().to_string(), "03        UNK");
    }
}
