use mos6502_disasm::{load_raw_bin, render_range};
use mos6502_opgen::Catalog;

fn scratch_path(test: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mos6502_listing_{}_{test}.bin", std::process::id()))
}

#[test]
fn listing_from_raw_file() {
    let path = scratch_path("raw_file");
    // header byte skipped, then: LDY #$00; loop: DEY; BNE loop; RTS
    std::fs::write(&path, [0xFF, 0xA0, 0x00, 0x88, 0xD0, 0xFD, 0x60]).unwrap();
    let img = load_raw_bin(&path, 0xC000, 1, None).unwrap();
    let _ = std::fs::remove_file(&path);

    let cat = Catalog::embedded().unwrap();
    let lines = render_range(&cat, &img, 0xC000, 0x1_0000, false);
    let text: Vec<String> = lines.iter().map(|l| format!("{:04X}: {}", l.addr, l.text)).collect();
    assert_eq!(text, vec!["C000: LDY #$00", "C002: DEY", "C003: BNE $C002", "C005: RTS"]);
}

#[test]
fn listing_serializes_to_json() {
    let path = scratch_path("json");
    std::fs::write(&path, [0xEA]).unwrap();
    let img = load_raw_bin(&path, 0, 0, None).unwrap();
    let _ = std::fs::remove_file(&path);

    let cat = Catalog::embedded().unwrap();
    let lines = render_range(&cat, &img, 0, 1, true);
    let v = serde_json::to_value(&lines).unwrap();
    assert_eq!(v, serde_json::json!([{ "addr": 0, "bytes": [0xEA], "text": "EA        NOP" }]));
}
