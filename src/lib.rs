//! # m3ua-codec — M3UA (RFC 4666) message encoding/decoding
//!
//! Pure codec for the MTP3 User Adaptation layer: typed message kinds over a
//! TLV parameter framework, with byte-exact round trips for every legal
//! combination of optional parameters. No I/O, no state machine, no
//! transport; every call is a synchronous function of its input buffer or
//! object, so concurrent use on independent inputs needs no locking.
//!
//! ## Wire format
//!
//! - Common header (8 bytes): version(1) | reserved(1) | class(1) | type(1)
//!   | length(4, big-endian).
//! - Parameter: tag(2, BE) | length(2, BE, = 4 + value size) | value | zero
//!   padding to the next multiple of 4. The length field never counts the
//!   padding.
//! - A message body is the concatenation of its present parameters in the
//!   kind's canonical slot order. A routing key parameter nests a further
//!   parameter sequence inside its value.
//!
//! ## Usage
//!
//! ```
//! use m3ua_codec::asptm::AspActive;
//! use m3ua_codec::{parse, AnyMessage, Message, Param};
//!
//! let msg = AspActive::new(
//!     Some(Param::traffic_mode_type(m3ua_codec::param::TRAFFIC_MODE_LOADSHARE)),
//!     Some(Param::routing_context(&[1])),
//!     None,
//! );
//! let bytes = msg.to_bytes();
//! match parse(&bytes).unwrap() {
//!     AnyMessage::AspActive(back) => assert_eq!(back, msg),
//!     other => panic!("unexpected kind: {:?}", other),
//! }
//! ```

pub mod aspsm;
pub mod asptm;
pub mod dump;
pub mod error;
pub mod header;
pub mod message;
pub mod mgmt;
pub mod param;
pub mod rkm;
pub mod routing_key;
pub mod tag;

pub use error::Error;
pub use header::{Header, HEADER_LEN, VERSION};
pub use message::{parse, AnyMessage, Message};
pub use param::{parse_params, Param, PARAM_HEADER_LEN};
pub use routing_key::{RoutingKey, MIN_ROUTING_KEY_FIELDS};
pub use tag::Tag;
