//! Message envelope behaviour across the implemented kinds.
//!
//! | Area | Expectation |
//! |------|-------------|
//! | ASPAC subsets | every subset of the three optional slots encodes to the documented bytes and round-trips with the same slots present |
//! | Length field | a freshly encoded message's length field equals the emitted byte count, padding included |
//! | Peer tolerance | captures from stacks that over-declare the length field by a constant still decode |
//! | Kind checks | class/type mismatch and unknown (class, type) pairs fail with `InvalidType` |
//! | Slot tags | a parameter not belonging to the kind fails with `InvalidType`, registered or not |
//! | Mandatory slots | a missing mandatory parameter fails with `InvalidLength` |
//! | Nesting | REG REQ carries a routing key container decodable via `routing_key()` |

use m3ua_codec::aspsm::{AspDown, AspDownAck, AspUp, AspUpAck, Heartbeat, HeartbeatAck};
use m3ua_codec::asptm::{AspActive, AspActiveAck, AspInactive, AspInactiveAck};
use m3ua_codec::mgmt::{ErrorMessage, Notify};
use m3ua_codec::rkm::{DeregistrationRequest, RegistrationRequest};
use m3ua_codec::{parse, AnyMessage, Error, Message, Param, RoutingKey};

const TMT_BYTES: [u8; 8] = [0x00, 0x0b, 0x00, 0x08, 0x00, 0x00, 0x00, 0x02];
const RC_BYTES: [u8; 8] = [0x00, 0x06, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01];
const INFO_BYTES: [u8; 12] = [
    0x00, 0x04, 0x00, 0x0c, 0x64, 0x65, 0x61, 0x64, 0x62, 0x65, 0x65, 0x66,
];

fn tmt() -> Param {
    Param::traffic_mode_type(2)
}

fn rc() -> Param {
    Param::routing_context(&[1])
}

fn info() -> Param {
    Param::info_string("deadbeef")
}

/// Header for an ASPAC message with the given length field value.
fn aspac_header(length: u32) -> Vec<u8> {
    let mut h = vec![0x01, 0x00, 0x04, 0x01];
    h.extend(length.to_be_bytes());
    h
}

fn aspac_bytes(length: u32, parts: &[&[u8]]) -> Vec<u8> {
    let mut b = aspac_header(length);
    for part in parts {
        b.extend_from_slice(part);
    }
    b
}

fn length_field(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[4], b[5], b[6], b[7]])
}

/// All 2^3 subsets of the ASPAC optional slots: exact bytes out, the same
/// subset back in, no slot invented or dropped.
#[test]
fn aspac_presence_subsets_encode_and_round_trip() {
    struct Case {
        name: &'static str,
        msg: AspActive,
        want: Vec<u8>,
    }
    let cases = [
        Case {
            name: "has-all",
            msg: AspActive::new(Some(tmt()), Some(rc()), Some(info())),
            want: aspac_bytes(0x24, &[&TMT_BYTES, &RC_BYTES, &INFO_BYTES]),
        },
        Case {
            name: "has-tmt-rc",
            msg: AspActive::new(Some(tmt()), Some(rc()), None),
            want: aspac_bytes(0x18, &[&TMT_BYTES, &RC_BYTES]),
        },
        Case {
            name: "has-tmt-info",
            msg: AspActive::new(Some(tmt()), None, Some(info())),
            want: aspac_bytes(0x1c, &[&TMT_BYTES, &INFO_BYTES]),
        },
        Case {
            name: "has-rc-info",
            msg: AspActive::new(None, Some(rc()), Some(info())),
            want: aspac_bytes(0x1c, &[&RC_BYTES, &INFO_BYTES]),
        },
        Case {
            name: "has-tmt",
            msg: AspActive::new(Some(tmt()), None, None),
            want: aspac_bytes(0x10, &[&TMT_BYTES]),
        },
        Case {
            name: "has-rc",
            msg: AspActive::new(None, Some(rc()), None),
            want: aspac_bytes(0x10, &[&RC_BYTES]),
        },
        Case {
            name: "has-info",
            msg: AspActive::new(None, None, Some(info())),
            want: aspac_bytes(0x14, &[&INFO_BYTES]),
        },
        Case {
            name: "has-none",
            msg: AspActive::new(None, None, None),
            want: aspac_bytes(0x08, &[]),
        },
    ];

    for c in &cases {
        let got = c.msg.to_bytes();
        assert_eq!(got, c.want, "{}: encoded bytes", c.name);
        assert_eq!(
            length_field(&got) as usize,
            got.len(),
            "{}: length field vs emitted size",
            c.name
        );
        let back = AspActive::from_bytes(&got).expect(c.name);
        assert_eq!(back, c.msg, "{}: round trip", c.name);
    }
}

/// Captures from the wild where the length field exceeds the real size by a
/// constant 8 still decode; parameters come from the buffer remainder, not
/// the declared length.
#[test]
fn aspac_decode_tolerates_over_declared_length() {
    let over_all = aspac_bytes(0x2c, &[&TMT_BYTES, &RC_BYTES, &INFO_BYTES]);
    let m = AspActive::from_bytes(&over_all).expect("decode");
    assert_eq!(m, AspActive::new(Some(tmt()), Some(rc()), Some(info())));

    let over_empty = aspac_bytes(0x10, &[]);
    let m = AspActive::from_bytes(&over_empty).expect("decode");
    assert_eq!(m, AspActive::new(None, None, None));
}

#[test]
fn header_shorter_than_eight_bytes_is_rejected() {
    let err = AspActive::from_bytes(&[0x01, 0x00, 0x04, 0x01, 0x00, 0x00, 0x00]).unwrap_err();
    assert!(matches!(err, Error::TooShortToParse(_)), "got {:?}", err);
}

#[test]
fn length_field_below_header_size_is_rejected() {
    let err = AspActive::from_bytes(&aspac_bytes(0x04, &[])).unwrap_err();
    assert!(matches!(err, Error::InvalidLength(_)), "got {:?}", err);
}

#[test]
fn class_type_mismatch_is_rejected() {
    let up = AspUp::new(None, None).to_bytes();
    let err = AspActive::from_bytes(&up).unwrap_err();
    assert!(matches!(err, Error::InvalidType(_)), "got {:?}", err);
}

#[test]
fn parse_rejects_unknown_class_or_type() {
    let unknown_class = [0x01, 0x00, 0x07, 0x01, 0x00, 0x00, 0x00, 0x08];
    assert!(matches!(
        parse(&unknown_class).unwrap_err(),
        Error::InvalidType(_)
    ));

    let unknown_type = [0x01, 0x00, 0x04, 0x09, 0x00, 0x00, 0x00, 0x08];
    assert!(matches!(
        parse(&unknown_type).unwrap_err(),
        Error::InvalidType(_)
    ));
}

#[test]
fn unknown_tag_in_body_is_rejected() {
    let b = aspac_bytes(0x0c, &[&[0xbe, 0xef, 0x00, 0x04]]);
    let err = parse(&b).unwrap_err();
    assert!(matches!(err, Error::InvalidType(_)), "got {:?}", err);
}

/// Heartbeat data is a registered tag, but it has no slot in ASPAC.
#[test]
fn registered_tag_without_slot_is_rejected() {
    let beat = Param::heartbeat_data(&[0x01]).to_bytes();
    let b = aspac_bytes(0x10, &[&beat]);
    let err = AspActive::from_bytes(&b).unwrap_err();
    assert!(matches!(err, Error::InvalidType(_)), "got {:?}", err);
}

#[test]
fn missing_mandatory_parameter_is_rejected() {
    let err_header_only = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08];
    assert!(matches!(
        ErrorMessage::from_bytes(&err_header_only).unwrap_err(),
        Error::InvalidLength(_)
    ));

    let ntfy_header_only = [0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x08];
    assert!(matches!(
        Notify::from_bytes(&ntfy_header_only).unwrap_err(),
        Error::InvalidLength(_)
    ));

    let reg_header_only = [0x01, 0x00, 0x09, 0x01, 0x00, 0x00, 0x00, 0x08];
    assert!(matches!(
        RegistrationRequest::from_bytes(&reg_header_only).unwrap_err(),
        Error::InvalidLength(_)
    ));

    let dereg_header_only = [0x01, 0x00, 0x09, 0x03, 0x00, 0x00, 0x00, 0x08];
    assert!(matches!(
        DeregistrationRequest::from_bytes(&dereg_header_only).unwrap_err(),
        Error::InvalidLength(_)
    ));
}

/// One of each kind through the top-level dispatch: the variant comes back
/// unchanged and the length field matches the emitted size.
#[test]
fn every_kind_dispatches_and_round_trips() {
    let rk = RoutingKey::new(
        None,
        Some(rc()),
        Some(tmt()),
        Some(Param::destination_point_code(0x11aa)),
        None,
        None,
        None,
    );
    let kinds = vec![
        AnyMessage::Error(ErrorMessage::new(
            Param::error_code(7),
            Some(rc()),
            None,
            Some(Param::affected_point_code(&[0x11, 0x22])),
            Some(Param::diagnostic_information(&[0xca, 0xfe])),
        )),
        AnyMessage::Notify(Notify::new(Param::status(1, 2), None, None, Some(info()))),
        AnyMessage::AspUp(AspUp::new(Some(Param::asp_identifier(3)), None)),
        AnyMessage::AspDown(AspDown::new(Some(info()))),
        AnyMessage::Heartbeat(Heartbeat::new(Some(Param::heartbeat_data(&[
            0xde, 0xad, 0xbe, 0xef, 0x00,
        ])))),
        AnyMessage::AspUpAck(AspUpAck::new(None, None)),
        AnyMessage::AspDownAck(AspDownAck::new(None)),
        AnyMessage::HeartbeatAck(HeartbeatAck::new(Some(Param::heartbeat_data(&[0x01])))),
        AnyMessage::AspActive(AspActive::new(Some(tmt()), Some(rc()), None)),
        AnyMessage::AspInactive(AspInactive::new(Some(rc()), None)),
        AnyMessage::AspActiveAck(AspActiveAck::new(Some(tmt()), None, None)),
        AnyMessage::AspInactiveAck(AspInactiveAck::new(None, Some(info()))),
        AnyMessage::RegistrationRequest(RegistrationRequest::new(rk.to_param())),
        AnyMessage::DeregistrationRequest(DeregistrationRequest::new(Param::routing_context(&[
            1, 2,
        ]))),
    ];
    for m in kinds {
        let b = m.to_bytes();
        assert_eq!(length_field(&b) as usize, b.len());
        assert_eq!(parse(&b).expect("parse"), m);
    }
}

#[test]
fn reg_req_nested_routing_key_round_trips() {
    let rk = RoutingKey::new(
        Some(Param::local_routing_key_identifier(0x99)),
        Some(rc()),
        Some(tmt()),
        None,
        None,
        None,
        None,
    );
    let req = RegistrationRequest::new(rk.to_param());
    let b = req.to_bytes();
    let back = RegistrationRequest::from_bytes(&b).expect("decode");
    let nested = back.routing_key().expect("routing key");
    assert_eq!(nested, rk);
    assert_eq!(
        nested
            .local_routing_key_identifier
            .unwrap()
            .as_u32()
            .unwrap(),
        0x99
    );
}

/// The envelope does not look inside the container: an under-populated
/// routing key passes message decode and fails only at the accessor.
#[test]
fn reg_req_defers_routing_key_validation_to_accessor() {
    let rk = RoutingKey::new(None, Some(rc()), None, None, None, None, None);
    let req = RegistrationRequest::new(rk.to_param());
    let back = RegistrationRequest::from_bytes(&req.to_bytes()).expect("decode");
    assert!(matches!(
        back.routing_key().unwrap_err(),
        Error::InvalidLength(_)
    ));
}

#[test]
fn heartbeat_carries_opaque_bytes() {
    let payload = [0xff, 0x00, 0x7f, 0x80, 0x01];
    let beat = Heartbeat::new(Some(Param::heartbeat_data(&payload)));
    let b = beat.to_bytes();
    assert_eq!(length_field(&b) as usize, b.len());
    let back = Heartbeat::from_bytes(&b).expect("decode");
    assert_eq!(back.heartbeat_data.unwrap().data(), payload);
}
