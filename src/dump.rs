//! Format decoded messages for display (text dump), plus file input for the
//! CLI decoder.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::message::AnyMessage;
use crate::param::Param;
use crate::routing_key::RoutingKey;
use crate::tag::Tag;

fn hex_string(b: &[u8]) -> String {
    b.iter()
        .map(|x| format!("{:02x}", x))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line describing a parameter: tag name, then the decoded value when it
/// has a natural shape, raw hex otherwise. Routing keys render as a nested
/// block.
pub fn param_to_dump(p: &Param, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let rendered = match p.tag() {
        Tag::InfoString => match p.as_str() {
            Ok(s) => format!("\"{}\"", s),
            Err(_) => format!("hex({})", hex_string(p.data())),
        },
        Tag::RoutingContext | Tag::AffectedPointCode | Tag::OriginatingPointCodeList => {
            match p.as_u32_list() {
                Ok(vs) => format!("{:?}", vs),
                Err(_) => format!("hex({})", hex_string(p.data())),
            }
        }
        Tag::TrafficModeType
        | Tag::ErrorCode
        | Tag::AspIdentifier
        | Tag::CorrelationId
        | Tag::NetworkAppearance
        | Tag::LocalRoutingKeyIdentifier
        | Tag::DestinationPointCode => match p.as_u32() {
            Ok(v) => format!("{}", v),
            Err(_) => format!("hex({})", hex_string(p.data())),
        },
        Tag::Status => match p.as_status() {
            Ok((t, i)) => format!("type {} info {}", t, i),
            Err(_) => format!("hex({})", hex_string(p.data())),
        },
        Tag::RoutingKey => return routing_key_to_dump(p, indent),
        Tag::DiagnosticInformation | Tag::HeartbeatData | Tag::ServiceIndicators => {
            format!("hex({})", hex_string(p.data()))
        }
    };
    format!("{}{:?}: {}", pad, p.tag(), rendered)
}

fn routing_key_to_dump(p: &Param, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match RoutingKey::from_param(p) {
        Ok(rk) => {
            let mut lines = vec![format!("{}RoutingKey {{", pad)];
            for sub in [
                &rk.local_routing_key_identifier,
                &rk.routing_context,
                &rk.traffic_mode_type,
                &rk.destination_point_code,
                &rk.network_appearance,
                &rk.service_indicators,
                &rk.originating_point_code_list,
            ]
            .into_iter()
            .flatten()
            {
                lines.push(param_to_dump(sub, indent + 1));
            }
            lines.push(format!("{}}}", pad));
            lines.join("\n")
        }
        Err(e) => format!("{}RoutingKey: undecodable ({})", pad, e),
    }
}

/// Multi-line rendering of a decoded message: one line for the kind, then
/// one per present parameter in canonical slot order. Absent slots are
/// skipped.
pub fn message_to_dump(m: &AnyMessage) -> String {
    let (name, slots): (&str, Vec<Option<&Param>>) = match m {
        AnyMessage::Error(v) => (
            "ERR",
            vec![
                Some(&v.error_code),
                v.routing_context.as_ref(),
                v.network_appearance.as_ref(),
                v.affected_point_code.as_ref(),
                v.diagnostic_information.as_ref(),
            ],
        ),
        AnyMessage::Notify(v) => (
            "NTFY",
            vec![
                Some(&v.status),
                v.asp_identifier.as_ref(),
                v.routing_context.as_ref(),
                v.info_string.as_ref(),
            ],
        ),
        AnyMessage::AspUp(v) => (
            "ASPUP",
            vec![v.asp_identifier.as_ref(), v.info_string.as_ref()],
        ),
        AnyMessage::AspUpAck(v) => (
            "ASPUP ACK",
            vec![v.asp_identifier.as_ref(), v.info_string.as_ref()],
        ),
        AnyMessage::AspDown(v) => ("ASPDN", vec![v.info_string.as_ref()]),
        AnyMessage::AspDownAck(v) => ("ASPDN ACK", vec![v.info_string.as_ref()]),
        AnyMessage::Heartbeat(v) => ("BEAT", vec![v.heartbeat_data.as_ref()]),
        AnyMessage::HeartbeatAck(v) => ("BEAT ACK", vec![v.heartbeat_data.as_ref()]),
        AnyMessage::AspActive(v) => (
            "ASPAC",
            vec![
                v.traffic_mode_type.as_ref(),
                v.routing_context.as_ref(),
                v.info_string.as_ref(),
            ],
        ),
        AnyMessage::AspActiveAck(v) => (
            "ASPAC ACK",
            vec![
                v.traffic_mode_type.as_ref(),
                v.routing_context.as_ref(),
                v.info_string.as_ref(),
            ],
        ),
        AnyMessage::AspInactive(v) => (
            "ASPIA",
            vec![v.routing_context.as_ref(), v.info_string.as_ref()],
        ),
        AnyMessage::AspInactiveAck(v) => (
            "ASPIA ACK",
            vec![v.routing_context.as_ref(), v.info_string.as_ref()],
        ),
        AnyMessage::RegistrationRequest(v) => ("REG REQ", vec![Some(&v.routing_key)]),
        AnyMessage::DeregistrationRequest(v) => ("DEREG REQ", vec![Some(&v.routing_context)]),
    };
    let mut lines = vec![format!("{} {{", name)];
    for p in slots.into_iter().flatten() {
        lines.push(param_to_dump(p, 1));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// Read message bytes from `path`; `-` means stdin. With `hex`, the input is
/// hex text (whitespace ignored) instead of raw bytes.
pub fn read_input(path: &Path, hex: bool) -> io::Result<Vec<u8>> {
    let mut raw = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_end(&mut raw)?;
    } else {
        File::open(path)?.read_to_end(&mut raw)?;
    }
    if hex {
        decode_hex_text(&String::from_utf8_lossy(&raw))
    } else {
        Ok(raw)
    }
}

fn decode_hex_text(s: &str) -> io::Result<Vec<u8>> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "odd number of hex digits",
        ));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("bad hex digit pair at offset {}", i),
                )
            })
        })
        .collect()
}
