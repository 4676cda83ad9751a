use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u16,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    /// One past the last mapped address, as u32 so a segment may end at 0x10000.
    pub fn end(&self) -> u32 {
        self.base as u32 + self.bytes.len() as u32
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

pub fn load_raw_bin(path: &Path, base: u16, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    anyhow::ensure!(
        base as usize + payload.len() <= 0x1_0000,
        "image does not fit in the 64K address space at base {base:#06x}"
    );
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}

pub fn read_u8(img: &Image, addr: u16) -> Option<u8> {
    for s in &img.segments {
        if addr >= s.base && (addr as u32) < s.end() {
            return Some(s.bytes[(addr - s.base) as usize]);
        }
    }
    None
}

/// Up to `n` contiguous mapped bytes starting at `addr`.
pub fn read_bytes(img: &Image, addr: u16, n: usize) -> Vec<u8> {
    (0..n)
        .map_while(|i| addr.checked_add(i as u16).and_then(|a| read_u8(img, a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_maps_skip_and_len() {
        let path = std::env::temp_dir().join(format!("mos6502_disasm_{}_skip_len.bin", std::process::id()));
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
        let img = load_raw_bin(&path, 0x8000, 2, Some(3)).unwrap();
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x8000);
        assert_eq!(s.bytes, vec![2, 3, 4]);
        assert_eq!(read_u8(&img, 0x8002), Some(4));
        assert!(read_u8(&img, 0x8003).is_none());
        assert_eq!(read_bytes(&img, 0x8001, 3), vec![3, 4]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn segment_may_end_at_top_of_memory() {
        let seg = Segment { name: "s".into(), base: 0xFFFE, bytes: vec![0xEA, 0x60], perms: "r-x", kind: "raw" };
        let img = Image { segments: vec![seg] };
        assert_eq!(read_u8(&img, 0xFFFF), Some(0x60));
        assert_eq!(read_bytes(&img, 0xFFFF, 3), vec![0x60]);
    }
}
