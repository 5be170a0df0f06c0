//! Routing key management (RKM) class messages: REG REQ and DEREG REQ.
//!
//! REG REQ carries the routing key container parameter; this is where the
//! nested parameter mechanism is exercised end to end.

use crate::error::Error;
use crate::message::{class, decode_envelope, encode_envelope, Message};
use crate::param::Param;
use crate::routing_key::RoutingKey;
use crate::tag::Tag;

/// REG REQ: requests registration of a routing key. The routing key
/// parameter is mandatory; its inner structure is validated by
/// [`RoutingKey::from_param`] on access, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub routing_key: Param,
}

impl RegistrationRequest {
    pub fn new(routing_key: Param) -> Self {
        RegistrationRequest { routing_key }
    }

    /// Decode the nested routing key structure.
    pub fn routing_key(&self) -> Result<RoutingKey, Error> {
        RoutingKey::from_param(&self.routing_key)
    }
}

impl Message for RegistrationRequest {
    const CLASS: u8 = class::RKM;
    const MESSAGE_TYPE: u8 = 1;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let mut routing_key = None;
        for p in decode_envelope(Self::CLASS, Self::MESSAGE_TYPE, b)? {
            match p.tag() {
                Tag::RoutingKey => routing_key = Some(p),
                t => {
                    return Err(Error::InvalidType(format!(
                        "parameter {:?} not allowed in REG REQ",
                        t
                    )))
                }
            }
        }
        Ok(RegistrationRequest {
            routing_key: routing_key.ok_or_else(|| {
                Error::InvalidLength("REG REQ requires a routing key parameter".to_string())
            })?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[Some(&self.routing_key)],
        )
    }
}

/// DEREG REQ: requests deregistration of the given routing contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeregistrationRequest {
    pub routing_context: Param,
}

impl DeregistrationRequest {
    pub fn new(routing_context: Param) -> Self {
        DeregistrationRequest { routing_context }
    }
}

impl Message for DeregistrationRequest {
    const CLASS: u8 = class::RKM;
    const MESSAGE_TYPE: u8 = 3;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let mut routing_context = None;
        for p in decode_envelope(Self::CLASS, Self::MESSAGE_TYPE, b)? {
            match p.tag() {
                Tag::RoutingContext => routing_context = Some(p),
                t => {
                    return Err(Error::InvalidType(format!(
                        "parameter {:?} not allowed in DEREG REQ",
                        t
                    )))
                }
            }
        }
        Ok(DeregistrationRequest {
            routing_context: routing_context.ok_or_else(|| {
                Error::InvalidLength("DEREG REQ requires a routing context parameter".to_string())
            })?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[Some(&self.routing_context)],
        )
    }
}
