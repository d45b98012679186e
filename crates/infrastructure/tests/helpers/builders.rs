#![allow(dead_code)]

/// Hand-assembles response messages byte by byte, so tests can produce
/// exactly the wire layouts (pointers, bad lengths, short buffers) they need.
pub struct PacketBuilder {
    buf: Vec<u8>,
}

impl PacketBuilder {
    /// Header with QR and RD/RA set, given rcode and section counts.
    pub fn response(id: u16, rcode: u8, counts: [u16; 4]) -> Self {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.push(0x81);
        buf.push(0x80 | (rcode & 0x0F));
        for count in counts {
            buf.extend_from_slice(&count.to_be_bytes());
        }
        Self { buf }
    }

    pub fn flags(mut self, high: u8, low: u8) -> Self {
        self.buf[2] = high;
        self.buf[3] = low;
        self
    }

    /// Uncompressed name from a dotted string.
    pub fn name(mut self, dotted: &str) -> Self {
        for label in dotted.split('.').filter(|l| !l.is_empty()) {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.buf.push(0);
        self
    }

    /// Labels followed by a compression pointer instead of a terminator.
    pub fn name_then_pointer(mut self, dotted: &str, offset: u16) -> Self {
        for label in dotted.split('.').filter(|l| !l.is_empty()) {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.pointer(offset)
    }

    pub fn pointer(mut self, offset: u16) -> Self {
        self.buf.push(0xC0 | ((offset >> 8) as u8 & 0x3F));
        self.buf.push(offset as u8);
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// QTYPE and QCLASS after a question name.
    pub fn question_tail(self, qtype: u16, qclass: u16) -> Self {
        self.u16(qtype).u16(qclass)
    }

    /// TYPE, CLASS, TTL, RDLENGTH and the rdata itself after an owner name.
    pub fn record_tail(self, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.u16(rtype)
            .u16(1)
            .u32(ttl)
            .u16(rdata.len() as u16)
            .bytes(rdata)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
