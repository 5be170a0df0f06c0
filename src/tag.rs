//! Parameter tag registry (RFC 4666 section 3.2).
//!
//! The tag set is closed: a 16-bit code outside this registry fails with
//! `Error::InvalidType` wherever a tag is read off the wire. There is no
//! forward-compatible skipping of unrecognized parameters.

use crate::error::Error;

/// 16-bit parameter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Tag {
    InfoString = 0x0004,
    RoutingContext = 0x0006,
    DiagnosticInformation = 0x0007,
    HeartbeatData = 0x0009,
    TrafficModeType = 0x000b,
    ErrorCode = 0x000c,
    Status = 0x000d,
    AspIdentifier = 0x0011,
    AffectedPointCode = 0x0012,
    CorrelationId = 0x0013,
    NetworkAppearance = 0x0200,
    RoutingKey = 0x0207,
    LocalRoutingKeyIdentifier = 0x020a,
    DestinationPointCode = 0x020b,
    ServiceIndicators = 0x020c,
    OriginatingPointCodeList = 0x020e,
}

impl Tag {
    /// Look a wire code up in the registry.
    pub fn from_code(code: u16) -> Result<Tag, Error> {
        match code {
            0x0004 => Ok(Tag::InfoString),
            0x0006 => Ok(Tag::RoutingContext),
            0x0007 => Ok(Tag::DiagnosticInformation),
            0x0009 => Ok(Tag::HeartbeatData),
            0x000b => Ok(Tag::TrafficModeType),
            0x000c => Ok(Tag::ErrorCode),
            0x000d => Ok(Tag::Status),
            0x0011 => Ok(Tag::AspIdentifier),
            0x0012 => Ok(Tag::AffectedPointCode),
            0x0013 => Ok(Tag::CorrelationId),
            0x0200 => Ok(Tag::NetworkAppearance),
            0x0207 => Ok(Tag::RoutingKey),
            0x020a => Ok(Tag::LocalRoutingKeyIdentifier),
            0x020b => Ok(Tag::DestinationPointCode),
            0x020c => Ok(Tag::ServiceIndicators),
            0x020e => Ok(Tag::OriginatingPointCodeList),
            other => Err(Error::InvalidType(format!(
                "unknown parameter tag 0x{:04x}",
                other
            ))),
        }
    }

    /// Wire code of this tag.
    pub fn code(self) -> u16 {
        self as u16
    }
}
