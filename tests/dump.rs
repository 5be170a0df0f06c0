//! Text dump rendering and the CLI input helper.

use std::io::Write;

use m3ua_codec::asptm::AspActive;
use m3ua_codec::dump::{message_to_dump, read_input};
use m3ua_codec::rkm::RegistrationRequest;
use m3ua_codec::{parse, Message, Param, RoutingKey};

#[test]
fn read_input_raw_bytes() {
    let bytes = AspActive::new(Some(Param::traffic_mode_type(2)), None, None).to_bytes();
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(&bytes).expect("write");
    let got = read_input(f.path(), false).expect("read");
    assert_eq!(got, bytes);
}

#[test]
fn read_input_hex_text_ignores_whitespace() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(b"00 0b 00 08\n00 00 00 02\n").expect("write");
    let got = read_input(f.path(), true).expect("read");
    assert_eq!(got, vec![0x00, 0x0b, 0x00, 0x08, 0x00, 0x00, 0x00, 0x02]);
}

#[test]
fn read_input_rejects_bad_hex() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(b"00 zz").expect("write");
    let err = read_input(f.path(), true).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(b"00 0").expect("write");
    let err = read_input(f.path(), true).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn dump_shows_present_slots_only() {
    let msg = AspActive::new(
        Some(Param::traffic_mode_type(2)),
        Some(Param::routing_context(&[1])),
        None,
    );
    let text = message_to_dump(&parse(&msg.to_bytes()).expect("parse"));
    assert!(text.starts_with("ASPAC {"), "got: {}", text);
    assert!(text.contains("TrafficModeType: 2"), "got: {}", text);
    assert!(text.contains("RoutingContext: [1]"), "got: {}", text);
    assert!(!text.contains("InfoString"), "got: {}", text);
}

#[test]
fn dump_renders_nested_routing_key() {
    let rk = RoutingKey::new(
        None,
        Some(Param::routing_context(&[1])),
        Some(Param::traffic_mode_type(2)),
        Some(Param::destination_point_code(0x11aa)),
        None,
        None,
        None,
    );
    let req = RegistrationRequest::new(rk.to_param());
    let text = message_to_dump(&parse(&req.to_bytes()).expect("parse"));
    assert!(text.contains("REG REQ {"), "got: {}", text);
    assert!(text.contains("RoutingKey {"), "got: {}", text);
    assert!(text.contains("DestinationPointCode: 4522"), "got: {}", text);
}

#[test]
fn dump_renders_info_string_as_text() {
    let msg = AspActive::new(None, None, Some(Param::info_string("deadbeef")));
    let text = message_to_dump(&parse(&msg.to_bytes()).expect("parse"));
    assert!(text.contains("InfoString: \"deadbeef\""), "got: {}", text);
}
