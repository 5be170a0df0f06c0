//! Management (MGMT) class messages: ERR and NTFY.

use crate::error::Error;
use crate::message::{class, decode_envelope, encode_envelope, Message};
use crate::param::Param;
use crate::tag::Tag;

/// ERR: reports a protocol error to the peer. The error code is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub error_code: Param,
    pub routing_context: Option<Param>,
    pub network_appearance: Option<Param>,
    pub affected_point_code: Option<Param>,
    pub diagnostic_information: Option<Param>,
}

impl ErrorMessage {
    pub fn new(
        error_code: Param,
        routing_context: Option<Param>,
        network_appearance: Option<Param>,
        affected_point_code: Option<Param>,
        diagnostic_information: Option<Param>,
    ) -> Self {
        ErrorMessage {
            error_code,
            routing_context,
            network_appearance,
            affected_point_code,
            diagnostic_information,
        }
    }
}

impl Message for ErrorMessage {
    const CLASS: u8 = class::MGMT;
    const MESSAGE_TYPE: u8 = 0;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let mut error_code = None;
        let mut routing_context = None;
        let mut network_appearance = None;
        let mut affected_point_code = None;
        let mut diagnostic_information = None;
        for p in decode_envelope(Self::CLASS, Self::MESSAGE_TYPE, b)? {
            match p.tag() {
                Tag::ErrorCode => error_code = Some(p),
                Tag::RoutingContext => routing_context = Some(p),
                Tag::NetworkAppearance => network_appearance = Some(p),
                Tag::AffectedPointCode => affected_point_code = Some(p),
                Tag::DiagnosticInformation => diagnostic_information = Some(p),
                t => {
                    return Err(Error::InvalidType(format!(
                        "parameter {:?} not allowed in ERR",
                        t
                    )))
                }
            }
        }
        Ok(ErrorMessage {
            error_code: error_code.ok_or_else(|| {
                Error::InvalidLength("ERR requires an error code parameter".to_string())
            })?,
            routing_context,
            network_appearance,
            affected_point_code,
            diagnostic_information,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[
                Some(&self.error_code),
                self.routing_context.as_ref(),
                self.network_appearance.as_ref(),
                self.affected_point_code.as_ref(),
                self.diagnostic_information.as_ref(),
            ],
        )
    }
}

/// NTFY: notifies the peer of an ASP state change. The status is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notify {
    pub status: Param,
    pub asp_identifier: Option<Param>,
    pub routing_context: Option<Param>,
    pub info_string: Option<Param>,
}

impl Notify {
    pub fn new(
        status: Param,
        asp_identifier: Option<Param>,
        routing_context: Option<Param>,
        info_string: Option<Param>,
    ) -> Self {
        Notify {
            status,
            asp_identifier,
            routing_context,
            info_string,
        }
    }
}

impl Message for Notify {
    const CLASS: u8 = class::MGMT;
    const MESSAGE_TYPE: u8 = 1;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let mut status = None;
        let mut asp_identifier = None;
        let mut routing_context = None;
        let mut info_string = None;
        for p in decode_envelope(Self::CLASS, Self::MESSAGE_TYPE, b)? {
            match p.tag() {
                Tag::Status => status = Some(p),
                Tag::AspIdentifier => asp_identifier = Some(p),
                Tag::RoutingContext => routing_context = Some(p),
                Tag::InfoString => info_string = Some(p),
                t => {
                    return Err(Error::InvalidType(format!(
                        "parameter {:?} not allowed in NTFY",
                        t
                    )))
                }
            }
        }
        Ok(Notify {
            status: status.ok_or_else(|| {
                Error::InvalidLength("NTFY requires a status parameter".to_string())
            })?,
            asp_identifier,
            routing_context,
            info_string,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[
                Some(&self.status),
                self.asp_identifier.as_ref(),
                self.routing_context.as_ref(),
                self.info_string.as_ref(),
            ],
        )
    }
}
