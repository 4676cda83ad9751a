use serde::Serialize;

use mos6502_opgen::disasm::decode;
use mos6502_opgen::Catalog;

use crate::model::{read_bytes, Image};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOut {
    pub addr: u16,
    pub bytes: Vec<u8>,
    pub text: String,
}

/// Disassemble `[start, end)`. Bytes that do not form a whole instruction
/// become `.byte` lines; unmapped addresses stop the listing.
pub fn render_range(catalog: &Catalog, img: &Image, start: u16, end: u32, show_bytes: bool) -> Vec<LineOut> {
    let mut out = Vec::new();
    let mut pc = start as u32;
    while pc < end && pc <= 0xFFFF {
        let addr = pc as u16;
        let window = read_bytes(img, addr, 3);
        if window.is_empty() {
            break;
        }
        match decode(catalog, addr, &window) {
            Some(d) => {
                let text = if show_bytes {
                    d.to_string()
                } else {
                    format!("{} {}", d.mnemonic, d.operand()).trim_end().to_string()
                };
                pc += d.bytes.len() as u32;
                out.push(LineOut { addr, bytes: d.bytes, text });
            }
            None => {
                out.push(LineOut { addr, bytes: vec![window[0]], text: format!(".byte ${:02X}", window[0]) });
                pc += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;
    use pretty_assertions::assert_eq;

    fn img(base: u16, bytes: &[u8]) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base, bytes: bytes.to_vec(), perms: "r-x", kind: "raw" }] }
    }

    #[test]
    fn lists_without_bytes() {
        let cat = Catalog::embedded().unwrap();
        let lines = render_range(&cat, &img(0x0600, &[0xA9, 0x01, 0x8D, 0x00, 0x02, 0x00]), 0x0600, 0x0606, false);
        let text: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(text, vec!["LDA #$01", "STA $0200", "BRK"]);
        assert_eq!(lines[1].addr, 0x0602);
    }

    #[test]
    fn truncated_tail_becomes_data() {
        let cat = Catalog::embedded().unwrap();
        let lines = render_range(&cat, &img(0x1000, &[0xEA, 0x4C, 0x20]), 0x1000, 0x2000, true);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "EA        NOP");
        assert_eq!(lines[1].text, ".byte $4C");
        assert_eq!(lines[2].text, ".byte $20");
    }
}
