//! TLV parameter unit and the multi-parameter scanner.
//!
//! A parameter is tag(2, BE) | length(2, BE) | value | zero padding to the
//! next multiple of 4. The length field counts the 4-byte header plus the
//! value and never the padding. Padding is written as zeros but not
//! validated on read (strict write, permissive read).

use byteorder::{BigEndian, ByteOrder};

use crate::error::Error;
use crate::tag::Tag;

/// Parameter header size: tag (2) + length (2).
pub const PARAM_HEADER_LEN: usize = 4;

/// Traffic mode values carried by a traffic mode type parameter.
pub const TRAFFIC_MODE_OVERRIDE: u32 = 1;
pub const TRAFFIC_MODE_LOADSHARE: u32 = 2;
pub const TRAFFIC_MODE_BROADCAST: u32 = 3;

/// One tag-length-value unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    tag: Tag,
    data: Vec<u8>,
}

impl Param {
    /// Build a parameter from a tag and raw value bytes.
    pub fn new(tag: Tag, data: Vec<u8>) -> Self {
        Param { tag, data }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Raw value bytes, without header or padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Value of the wire length field: header + value, padding excluded.
    pub fn wire_len(&self) -> u16 {
        (PARAM_HEADER_LEN + self.data.len()) as u16
    }

    /// Bytes this parameter occupies on the wire, padding included.
    pub fn padded_len(&self) -> usize {
        pad4(PARAM_HEADER_LEN + self.data.len())
    }

    /// Append the wire representation to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let mut hdr = [0u8; PARAM_HEADER_LEN];
        BigEndian::write_u16(&mut hdr[0..2], self.tag.code());
        BigEndian::write_u16(&mut hdr[2..4], self.wire_len());
        out.extend_from_slice(&hdr);
        out.extend_from_slice(&self.data);
        out.resize(out.len() + self.padded_len() - self.wire_len() as usize, 0);
    }

    /// Wire bytes of this parameter alone.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.padded_len());
        self.write_to(&mut out);
        out
    }

    /// Decode one parameter from the front of `b`.
    ///
    /// Returns the parameter and the bytes consumed including padding, so
    /// the caller can advance past this unit and find the next one.
    pub fn parse(b: &[u8]) -> Result<(Param, usize), Error> {
        if b.len() < PARAM_HEADER_LEN {
            return Err(Error::TooShortToParse(format!(
                "parameter header needs {} bytes, have {}",
                PARAM_HEADER_LEN,
                b.len()
            )));
        }
        let tag = Tag::from_code(BigEndian::read_u16(&b[0..2]))?;
        let len = BigEndian::read_u16(&b[2..4]) as usize;
        if len < PARAM_HEADER_LEN {
            return Err(Error::InvalidLength(format!(
                "parameter length field {} below header size",
                len
            )));
        }
        if len > b.len() {
            return Err(Error::TooShortToParse(format!(
                "parameter declares {} bytes, have {}",
                len,
                b.len()
            )));
        }
        let data = b[PARAM_HEADER_LEN..len].to_vec();
        Ok((Param { tag, data }, pad4(len)))
    }

    /// Decode one parameter from the front of `b`.
    #[deprecated(since = "0.2.0", note = "use `Param::parse`")]
    pub fn decode(b: &[u8]) -> Result<(Param, usize), Error> {
        Param::parse(b)
    }

    // --- typed constructors, one per registry tag ---

    pub fn info_string(s: &str) -> Param {
        Param::new(Tag::InfoString, s.as_bytes().to_vec())
    }

    /// One or more routing contexts.
    pub fn routing_context(contexts: &[u32]) -> Param {
        u32_list_param(Tag::RoutingContext, contexts)
    }

    pub fn diagnostic_information(info: &[u8]) -> Param {
        Param::new(Tag::DiagnosticInformation, info.to_vec())
    }

    pub fn heartbeat_data(data: &[u8]) -> Param {
        Param::new(Tag::HeartbeatData, data.to_vec())
    }

    /// See the `TRAFFIC_MODE_*` constants for defined modes.
    pub fn traffic_mode_type(mode: u32) -> Param {
        u32_param(Tag::TrafficModeType, mode)
    }

    pub fn error_code(code: u32) -> Param {
        u32_param(Tag::ErrorCode, code)
    }

    /// Status type in the high half, status information in the low half.
    pub fn status(status_type: u16, status_info: u16) -> Param {
        let mut data = vec![0u8; 4];
        BigEndian::write_u16(&mut data[0..2], status_type);
        BigEndian::write_u16(&mut data[2..4], status_info);
        Param::new(Tag::Status, data)
    }

    pub fn asp_identifier(id: u32) -> Param {
        u32_param(Tag::AspIdentifier, id)
    }

    pub fn affected_point_code(pcs: &[u32]) -> Param {
        u32_list_param(Tag::AffectedPointCode, pcs)
    }

    pub fn correlation_id(id: u32) -> Param {
        u32_param(Tag::CorrelationId, id)
    }

    pub fn network_appearance(appearance: u32) -> Param {
        u32_param(Tag::NetworkAppearance, appearance)
    }

    pub fn local_routing_key_identifier(id: u32) -> Param {
        u32_param(Tag::LocalRoutingKeyIdentifier, id)
    }

    /// Mask octet in the top byte, point code in the low three.
    pub fn destination_point_code(pc: u32) -> Param {
        u32_param(Tag::DestinationPointCode, pc)
    }

    /// Service indicator octets; the TLV padding aligns the list.
    pub fn service_indicators(indicators: &[u8]) -> Param {
        Param::new(Tag::ServiceIndicators, indicators.to_vec())
    }

    pub fn originating_point_code_list(pcs: &[u32]) -> Param {
        u32_list_param(Tag::OriginatingPointCodeList, pcs)
    }

    // --- value accessors ---

    /// Value as a single 32-bit integer.
    pub fn as_u32(&self) -> Result<u32, Error> {
        if self.data.len() != 4 {
            return Err(Error::InvalidLength(format!(
                "{:?} value is {} bytes, expected 4",
                self.tag,
                self.data.len()
            )));
        }
        Ok(BigEndian::read_u32(&self.data))
    }

    /// Value as a sequence of 32-bit integers.
    pub fn as_u32_list(&self) -> Result<Vec<u32>, Error> {
        if self.data.len() % 4 != 0 {
            return Err(Error::InvalidLength(format!(
                "{:?} value is {} bytes, expected a multiple of 4",
                self.tag,
                self.data.len()
            )));
        }
        Ok(self.data.chunks(4).map(BigEndian::read_u32).collect())
    }

    /// Value as text.
    pub fn as_str(&self) -> Result<&str, Error> {
        std::str::from_utf8(&self.data)
            .map_err(|_| Error::InvalidType(format!("{:?} value is not valid UTF-8", self.tag)))
    }

    /// Status value as (status type, status information).
    pub fn as_status(&self) -> Result<(u16, u16), Error> {
        if self.data.len() != 4 {
            return Err(Error::InvalidLength(format!(
                "{:?} value is {} bytes, expected 4",
                self.tag,
                self.data.len()
            )));
        }
        Ok((
            BigEndian::read_u16(&self.data[0..2]),
            BigEndian::read_u16(&self.data[2..4]),
        ))
    }
}

fn u32_param(tag: Tag, v: u32) -> Param {
    let mut data = vec![0u8; 4];
    BigEndian::write_u32(&mut data, v);
    Param::new(tag, data)
}

fn u32_list_param(tag: Tag, vs: &[u32]) -> Param {
    let mut data = vec![0u8; 4 * vs.len()];
    for (chunk, v) in data.chunks_mut(4).zip(vs) {
        BigEndian::write_u32(chunk, *v);
    }
    Param::new(tag, data)
}

/// Round up to the next multiple of 4.
fn pad4(n: usize) -> usize {
    (n + 3) & !3
}

/// Scan `b` into an ordered parameter sequence, consuming the whole buffer.
///
/// An empty input yields an empty sequence. A trailing fragment too small to
/// hold a parameter fails with `TooShortToParse`. A final parameter whose
/// padding was not transmitted is accepted.
pub fn parse_params(b: &[u8]) -> Result<Vec<Param>, Error> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < b.len() {
        let (p, consumed) = Param::parse(&b[offset..])?;
        out.push(p);
        offset += consumed;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::pad4;

    #[test]
    fn pad4_rounds_up() {
        assert_eq!(pad4(0), 0);
        assert_eq!(pad4(4), 4);
        assert_eq!(pad4(5), 8);
        assert_eq!(pad4(9), 12);
        assert_eq!(pad4(12), 12);
    }
}
