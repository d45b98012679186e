//! Offset / hex / ASCII dump of a packet, 16 bytes per row.

const ROW: usize = 16;

pub fn format_packet(packet: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in packet.chunks(ROW).enumerate() {
        out.push_str(&format!("0x{:04x}:", row * ROW));
        for i in 0..ROW {
            match chunk.get(i) {
                Some(b) => out.push_str(&format!(" {:02x}", b)),
                None => out.push_str("   "),
            }
        }
        out.push(' ');
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push('\n');
    }
    out
}
