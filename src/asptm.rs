//! ASP traffic maintenance (ASPTM) class messages: ASPAC, ASPIA and their
//! acks. All slots are optional; slot emission order is fixed regardless of
//! which subset is present.

use crate::error::Error;
use crate::message::{class, decode_envelope, encode_envelope, Message};
use crate::param::Param;
use crate::tag::Tag;

/// ASPAC: ASP active. Slots: traffic mode type, routing context, info
/// string, in that canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspActive {
    pub traffic_mode_type: Option<Param>,
    pub routing_context: Option<Param>,
    pub info_string: Option<Param>,
}

impl AspActive {
    pub fn new(
        traffic_mode_type: Option<Param>,
        routing_context: Option<Param>,
        info_string: Option<Param>,
    ) -> Self {
        AspActive {
            traffic_mode_type,
            routing_context,
            info_string,
        }
    }
}

/// ASPAC ACK. Same slots as ASPAC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspActiveAck {
    pub traffic_mode_type: Option<Param>,
    pub routing_context: Option<Param>,
    pub info_string: Option<Param>,
}

impl AspActiveAck {
    pub fn new(
        traffic_mode_type: Option<Param>,
        routing_context: Option<Param>,
        info_string: Option<Param>,
    ) -> Self {
        AspActiveAck {
            traffic_mode_type,
            routing_context,
            info_string,
        }
    }
}

/// ASPIA: ASP inactive. Slots: routing context, info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspInactive {
    pub routing_context: Option<Param>,
    pub info_string: Option<Param>,
}

impl AspInactive {
    pub fn new(routing_context: Option<Param>, info_string: Option<Param>) -> Self {
        AspInactive {
            routing_context,
            info_string,
        }
    }
}

/// ASPIA ACK. Same slots as ASPIA.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspInactiveAck {
    pub routing_context: Option<Param>,
    pub info_string: Option<Param>,
}

impl AspInactiveAck {
    pub fn new(routing_context: Option<Param>, info_string: Option<Param>) -> Self {
        AspInactiveAck {
            routing_context,
            info_string,
        }
    }
}

type ActiveSlots = (Option<Param>, Option<Param>, Option<Param>);

fn active_slots(b: &[u8], class: u8, mtype: u8, kind: &str) -> Result<ActiveSlots, Error> {
    let mut traffic_mode_type = None;
    let mut routing_context = None;
    let mut info_string = None;
    for p in decode_envelope(class, mtype, b)? {
        match p.tag() {
            Tag::TrafficModeType => traffic_mode_type = Some(p),
            Tag::RoutingContext => routing_context = Some(p),
            Tag::InfoString => info_string = Some(p),
            t => {
                return Err(Error::InvalidType(format!(
                    "parameter {:?} not allowed in {}",
                    t, kind
                )))
            }
        }
    }
    Ok((traffic_mode_type, routing_context, info_string))
}

fn inactive_slots(
    b: &[u8],
    class: u8,
    mtype: u8,
    kind: &str,
) -> Result<(Option<Param>, Option<Param>), Error> {
    let mut routing_context = None;
    let mut info_string = None;
    for p in decode_envelope(class, mtype, b)? {
        match p.tag() {
            Tag::RoutingContext => routing_context = Some(p),
            Tag::InfoString => info_string = Some(p),
            t => {
                return Err(Error::InvalidType(format!(
                    "parameter {:?} not allowed in {}",
                    t, kind
                )))
            }
        }
    }
    Ok((routing_context, info_string))
}

impl Message for AspActive {
    const CLASS: u8 = class::ASPTM;
    const MESSAGE_TYPE: u8 = 1;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let (traffic_mode_type, routing_context, info_string) =
            active_slots(b, Self::CLASS, Self::MESSAGE_TYPE, "ASPAC")?;
        Ok(AspActive {
            traffic_mode_type,
            routing_context,
            info_string,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[
                self.traffic_mode_type.as_ref(),
                self.routing_context.as_ref(),
                self.info_string.as_ref(),
            ],
        )
    }
}

impl Message for AspActiveAck {
    const CLASS: u8 = class::ASPTM;
    const MESSAGE_TYPE: u8 = 3;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let (traffic_mode_type, routing_context, info_string) =
            active_slots(b, Self::CLASS, Self::MESSAGE_TYPE, "ASPAC ACK")?;
        Ok(AspActiveAck {
            traffic_mode_type,
            routing_context,
            info_string,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[
                self.traffic_mode_type.as_ref(),
                self.routing_context.as_ref(),
                self.info_string.as_ref(),
            ],
        )
    }
}

impl Message for AspInactive {
    const CLASS: u8 = class::ASPTM;
    const MESSAGE_TYPE: u8 = 2;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let (routing_context, info_string) =
            inactive_slots(b, Self::CLASS, Self::MESSAGE_TYPE, "ASPIA")?;
        Ok(AspInactive {
            routing_context,
            info_string,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.routing_context.as_ref(), self.info_string.as_ref()],
        )
    }
}

impl Message for AspInactiveAck {
    const CLASS: u8 = class::ASPTM;
    const MESSAGE_TYPE: u8 = 4;

    fn from_bytes(b: &[u8]) -> Result<Self, Error> {
        let (routing_context, info_string) =
            inactive_slots(b, Self::CLASS, Self::MESSAGE_TYPE, "ASPIA ACK")?;
        Ok(AspInactiveAck {
            routing_context,
            info_string,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_envelope(
            Self::CLASS,
            Self::MESSAGE_TYPE,
            &[self.routing_context.as_ref(), self.info_string.as_ref()],
        )
    }
}
