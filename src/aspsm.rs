//! ASP state maintenance (ASPSM) class messages: ASPUP, ASPDN, BEAT and
//! their acks. All slots are optional; a header-only message is legal.

use crate::error::Error;
use crate::message::{class, decode_envelope, encode_envelope, Message};
use crate::param::Param;
use crate::tag::Tag;

/// ASPUP: ASP up. Slots: ASP identifier, info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspUp {
    pub asp_identifier: Option<Param>,
    pub info_string: Option<Param>,
}

impl AspUp {
    pub fn new(asp_identifier: Option<Param>, info_string: Option<Param>) -> Self {
        AspUp {
            asp_identifier,
            info_string,
        }
    }
}

/// ASPUP ACK. Slots: ASP identifier, info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspUpAck {
    pub asp_identifier: Option<Param>,
    pub info_string: Option<Param>,
}

impl AspUpAck {
    pub fn new(asp_identifier: Option<Param>, info_string: Option<Param>) -> Self {
        AspUpAck {
            asp_identifier,
            info_string,
        }
    }
}

/// ASPDN: ASP down. Slot: info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspDown {
    pub info_string: Option<Param>,
}

impl AspDown {
    pub fn new(info_string: Option<Param>) -> Self {
        AspDown { info_string }
    }
}

/// ASPDN ACK. Slot: info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspDownAck {
    pub info_string: Option<Param>,
}

impl AspDownAck {
    pub fn new(info_string: Option<Param>) -> Self {
        AspDownAck { info_string }
    }
}

/// BEAT: heartbeat. Slot: heartbeat data, echoed verbatim by the ack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heartbeat {
    pub heartbeat_data: Option<Param>,
}

impl Heartbeat {
    pub fn new(heartbeat_data: Option<Param>) -> Self {
        Heartbeat { heartbeat_data }
    }
}

/// BEAT ACK. Slot: heartbeat data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeartbeatAck {
    pub heartbeat_data: Option<Param>,
}

impl HeartbeatAck {
    pub fn new(heartbeat_data: Option<Param>) -> Self {
        HeartbeatAck { heartbeat_data }
    }
}

fn up_slots(b: &[u8], class: u8, mtype: u8) -> Result<(Option<Param>, Option<Param>), Error> {
    let mut asp_identifier = None;
    let mut info_string = None;
    for p in decode_envelope(class, mtype, b)? {
        match p.tag() {
            Tag::AspIdentifier => asp_identifier = Some(p),
            Tag::InfoString => info_string = Some(p),
            t => {
                return Err(Error::InvalidType(format!(
                    "parameter {:?} not allowed in ASPUP/ASPUP ACK",
                    t
                )))
            }
        }
    }
    Ok((asp_identifier, info_string))
}

fn info_slot(b: &[u8], class: u8, mtype: u8, kind: &str) -> Result<Option<Param>, Error> {
    let mut info_string = None;
    for p in decode_envelope(class, mtype, b)? {
        match p.tag() {
            Tag::InfoString => info_string = Some(p),
            t => {
                return Err(Error::InvalidType(format!(
                    "parameter {:?} not allowed in {}",
                    t, kind
                )))
            }
        }
    }
    Ok(info_string)
}

fn beat_slot(b: &[u8], class: u8, mtype: u8, kind: &str) -> Result<Option<Param>, Error> {
    let mut heartbeat_data = None;
    for p in decode_envelope(class, mtype, b)? {
        match p.tag() {
            Tag::HeartbeatData => heartbeat_data = Some(p),
            t => {
                return Err(Error::InvalidType(format!(
                    "parameter {:?} not allowed in {}",
                    t, kind
                )))
            }
        }
    }
    Ok(heartbeat_data)
}

impl Message for AspUp {
    const CLASS: u8 = class::ASPSM;
    const MESSAGE_TYPE: u8 = 1;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let (asp_identifier, info_string) = up_slots(b, Self::CLASS, Self::MESSAGE_TYPE)?;
        Ok(AspUp {
            asp_identifier,
            info_string,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.asp_identifier.as_ref(), self.info_string.as_ref()],
        )
    }
}

impl Message for AspUpAck {
    const CLASS: u8 = class::ASPSM;
    const MESSAGE_TYPE: u8 = 4;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let (asp_identifier, info_string) = up_slots(b, Self::CLASS, Self::MESSAGE_TYPE)?;
        Ok(AspUpAck {
            asp_identifier,
            info_string,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.asp_identifier.as_ref(), self.info_string.as_ref()],
        )
    }
}

impl Message for AspDown {
    const CLASS: u8 = class::ASPSM;
    const MESSAGE_TYPE: u8 = 2;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        Ok(AspDown {
            info_string: info_slot(b, Self::CLASS, Self::MESSAGE_TYPE, "ASPDN")?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.info_string.as_ref()],
        )
    }
}

impl Message for AspDownAck {
    const CLASS: u8 = class::ASPSM;
    const MESSAGE_TYPE: u8 = 5;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        Ok(AspDownAck {
            info_string: info_slot(b, Self::CLASS, Self::MESSAGE_TYPE, "ASPDN ACK")?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.info_string.as_ref()],
        )
    }
}

impl Message for Heartbeat {
    const CLASS: u8 = class::ASPSM;
    const MESSAGE_TYPE: u8 = 3;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        Ok(Heartbeat {
            heartbeat_data: beat_slot(b, Self::CLASS, Self::MESSAGE_TYPE, "BEAT")?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.heartbeat_data.as_ref()],
        )
    }
}

impl Message for HeartbeatAck {
    const CLASS: u8 = class::ASPSM;
    const MESSAGE_TYPE: u8 = 6;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        Ok(HeartbeatAck {
            heartbeat_data: beat_slot(b, Self::CLASS, Self::MESSAGE_TYPE, "BEAT ACK")?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.heartbeat_data.as_ref()],
        )
    }
}
