//! Routing key: the container parameter.
//!
//! A routing key is a parameter whose value is itself a parameter sequence.
//! Decoding scans that sequence and dispatches each sub-parameter into a
//! named field; at least [`MIN_ROUTING_KEY_FIELDS`] recognized sub-fields
//! must be present, in any combination. Encoding emits populated fields in
//! canonical order and deliberately skips the minimum check: an
//! under-populated routing key serializes fine and is rejected only when the
//! bytes are decoded again.

use crate::error::Error;
use crate::param::{parse_params, Param};
use crate::tag::Tag;

/// Fewest sub-fields a decoded routing key may carry.
pub const MIN_ROUTING_KEY_FIELDS: usize = 3;

/// Named sub-fields of a routing key, each present or absent.
///
/// Canonical emission order is the field declaration order below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingKey {
    pub local_routing_key_identifier: Option<Param>,
    pub routing_context: Option<Param>,
    pub traffic_mode_type: Option<Param>,
    pub destination_point_code: Option<Param>,
    pub network_appearance: Option<Param>,
    pub service_indicators: Option<Param>,
    pub originating_point_code_list: Option<Param>,
}

impl RoutingKey {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        local_routing_key_identifier: Option<Param>,
        routing_context: Option<Param>,
        traffic_mode_type: Option<Param>,
        destination_point_code: Option<Param>,
        network_appearance: Option<Param>,
        service_indicators: Option<Param>,
        originating_point_code_list: Option<Param>,
    ) -> Self {
        RoutingKey {
            local_routing_key_identifier,
            routing_context,
            traffic_mode_type,
            destination_point_code,
            network_appearance,
            service_indicators,
            originating_point_code_list,
        }
    }

    /// Decode a routing key value (the container's inner byte sequence).
    ///
    /// Sub-parameters may arrive in any order. A tag outside the sub-field
    /// set fails with `InvalidType`; fewer than
    /// [`MIN_ROUTING_KEY_FIELDS`] parsed sub-parameters fail with
    /// `InvalidLength`.
    pub fn parse(b: &[u8]) -> Result<Self, Error> {
        let mut rk = RoutingKey::default();
        let params = parse_params(b)?;
        let count = params.len();
        for p in params {
            match p.tag() {
                Tag::LocalRoutingKeyIdentifier => rk.local_routing_key_identifier = Some(p),
                Tag::RoutingContext => rk.routing_context = Some(p),
                Tag::TrafficModeType => rk.traffic_mode_type = Some(p),
                Tag::DestinationPointCode => rk.destination_point_code = Some(p),
                Tag::NetworkAppearance => rk.network_appearance = Some(p),
                Tag::ServiceIndicators => rk.service_indicators = Some(p),
                Tag::OriginatingPointCodeList => rk.originating_point_code_list = Some(p),
                t => {
                    return Err(Error::InvalidType(format!(
                        "parameter {:?} not allowed in a routing key",
                        t
                    )))
                }
            }
        }
        if count < MIN_ROUTING_KEY_FIELDS {
            return Err(Error::InvalidLength(format!(
                "routing key carries {} sub-fields, minimum is {}",
                count, MIN_ROUTING_KEY_FIELDS
            )));
        }
        Ok(rk)
    }

    /// Decode a routing key value.
    #[deprecated(since = "0.2.0", note = "use `RoutingKey::parse`")]
    pub fn decode(b: &[u8]) -> Result<Self, Error> {
        RoutingKey::parse(b)
    }

    /// Wrap into the container parameter, emitting populated sub-fields in
    /// canonical order. No minimum check here.
    pub fn to_param(&self) -> Param {
        let mut data = Vec::new();
        for p in self.fields_in_order().into_iter().flatten() {
            p.write_to(&mut data);
        }
        Param::new(Tag::RoutingKey, data)
    }

    /// Unwrap from a container parameter.
    pub fn from_param(p: &Param) -> Result<Self, Error> {
        if p.tag() != Tag::RoutingKey {
            return Err(Error::InvalidType(format!(
                "expected a routing key parameter, got {:?}",
                p.tag()
            )));
        }
        RoutingKey::parse(p.data())
    }

    fn fields_in_order(&self) -> [Option<&Param>; 7] {
        [
            self.local_routing_key_identifier.as_ref(),
            self.routing_context.as_ref(),
            self.traffic_mode_type.as_ref(),
            self.destination_point_code.as_ref(),
            self.network_appearance.as_ref(),
            self.service_indicators.as_ref(),
            self.originating_point_code_list.as_ref(),
        ]
    }
}
