//! Message envelope: common header plus ordered parameter slots.
//!
//! Each kind declares a (class, type) pair and a fixed canonical slot order.
//! Encoding emits the present slots in that order, padding included, and
//! writes a length field equal to the actual byte count. Decoding validates
//! the header against the expected kind, scans the rest of the buffer, and
//! assigns each parameter to its slot by tag. Every call is stateless; the
//! only "state" is which slots of a given object are populated.

use crate::aspsm::{AspDown, AspDownAck, AspUp, AspUpAck, Heartbeat, HeartbeatAck};
use crate::asptm::{AspActive, AspActiveAck, AspInactive, AspInactiveAck};
use crate::error::Error;
use crate::header::{Header, HEADER_LEN};
use crate::mgmt::{ErrorMessage, Notify};
use crate::param::{parse_params, Param};
use crate::rkm::{DeregistrationRequest, RegistrationRequest};

/// Message class codes (RFC 4666 section 3.1.3).
pub mod class {
    pub const MGMT: u8 = 0;
    pub const ASPSM: u8 = 3;
    pub const ASPTM: u8 = 4;
    pub const RKM: u8 = 9;
}

/// One concrete message kind.
pub trait Message: Sized {
    const CLASS: u8;
    const MESSAGE_TYPE: u8;

    /// Decode a single complete message buffer into this kind.
    fn from_bytes(b: &[u8]) -> Result<Self, Error>;

    /// Serialize to wire bytes.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Serialize a header and the present slots, in the order given.
pub(crate) fn encode_envelope(class: u8, message_type: u8, slots: &[Option<&Param>]) -> Vec<u8> {
    let body_len: usize = slots
        .iter()
        .copied()
        .flatten()
        .map(Param::padded_len)
        .sum();
    let mut out = Vec::with_capacity(HEADER_LEN + body_len);
    Header::new(class, message_type, (HEADER_LEN + body_len) as u32).write_to(&mut out);
    for p in slots.iter().copied().flatten() {
        p.write_to(&mut out);
    }
    out
}

/// Validate the header against the expected kind and scan the body.
///
/// Parameters are taken from the full remainder of the buffer; the declared
/// length is not required to agree with it (see [`Header::parse`]).
pub(crate) fn decode_envelope(
    class: u8,
    message_type: u8,
    b: &[u8],
) -> Result<Vec<Param>, Error> {
    let h = Header::parse(b)?;
    if h.class != class || h.message_type != message_type {
        return Err(Error::InvalidType(format!(
            "expected message class/type {}/{}, got {}/{}",
            class, message_type, h.class, h.message_type
        )));
    }
    parse_params(&b[HEADER_LEN..])
}

/// Any message kind this crate can decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyMessage {
    Error(ErrorMessage),
    Notify(Notify),
    AspUp(AspUp),
    AspDown(AspDown),
    Heartbeat(Heartbeat),
    AspUpAck(AspUpAck),
    AspDownAck(AspDownAck),
    HeartbeatAck(HeartbeatAck),
    AspActive(AspActive),
    AspInactive(AspInactive),
    AspActiveAck(AspActiveAck),
    AspInactiveAck(AspInactiveAck),
    RegistrationRequest(RegistrationRequest),
    DeregistrationRequest(DeregistrationRequest),
}

impl AnyMessage {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            AnyMessage::Error(m) => m.to_bytes(),
            AnyMessage::Notify(m) => m.to_bytes(),
            AnyMessage::AspUp(m) => m.to_bytes(),
            AnyMessage::AspDown(m) => m.to_bytes(),
            AnyMessage::Heartbeat(m) => m.to_bytes(),
            AnyMessage::AspUpAck(m) => m.to_bytes(),
            AnyMessage::AspDownAck(m) => m.to_bytes(),
            AnyMessage::HeartbeatAck(m) => m.to_bytes(),
            AnyMessage::AspActive(m) => m.to_bytes(),
            AnyMessage::AspInactive(m) => m.to_bytes(),
            AnyMessage::AspActiveAck(m) => m.to_bytes(),
            AnyMessage::AspInactiveAck(m) => m.to_bytes(),
            AnyMessage::RegistrationRequest(m) => m.to_bytes(),
            AnyMessage::DeregistrationRequest(m) => m.to_bytes(),
        }
    }
}

/// Decode a complete message buffer into whichever kind its header names.
///
/// The dispatch set is closed: a (class, type) pair outside it fails with
/// `InvalidType`.
pub fn parse(b: &[u8]) -> Result<AnyMessage, Error> {
    let h = Header::parse(b)?;
    match (h.class, h.message_type) {
        (class::MGMT, 0) => ErrorMessage::from_bytes(b).map(AnyMessage::Error),
        (class::MGMT, 1) => Notify::from_bytes(b).map(AnyMessage::Notify),
        (class::ASPSM, 1) => AspUp::from_bytes(b).map(AnyMessage::AspUp),
        (class::ASPSM, 2) => AspDown::from_bytes(b).map(AnyMessage::AspDown),
        (class::ASPSM, 3) => Heartbeat::from_bytes(b).map(AnyMessage::Heartbeat),
        (class::ASPSM, 4) => AspUpAck::from_bytes(b).map(AnyMessage::AspUpAck),
        (class::ASPSM, 5) => AspDownAck::from_bytes(b).map(AnyMessage::AspDownAck),
        (class::ASPSM, 6) => HeartbeatAck::from_bytes(b).map(AnyMessage::HeartbeatAck),
        (class::ASPTM, 1) => AspActive::from_bytes(b).map(AnyMessage::AspActive),
        (class::ASPTM, 2) => AspInactive::from_bytes(b).map(AnyMessage::AspInactive),
        (class::ASPTM, 3) => AspActiveAck::from_bytes(b).map(AnyMessage::AspActiveAck),
        (class::ASPTM, 4) => AspInactiveAck::from_bytes(b).map(AnyMessage::AspInactiveAck),
        (class::RKM, 1) => {
            RegistrationRequest::from_bytes(b).map(AnyMessage::RegistrationRequest)
        }
        (class::RKM, 3) => {
            DeregistrationRequest::from_bytes(b).map(AnyMessage::DeregistrationRequest)
        }
        (c, t) => Err(Error::InvalidType(format!(
            "unknown message class/type {}/{}",
            c, t
        ))),
    }
}

/// Decode a complete message buffer.
#[deprecated(since = "0.2.0", note = "use `parse`")]
pub fn decode(b: &[u8]) -> Result<AnyMessage, Error> {
    parse(b)
}
