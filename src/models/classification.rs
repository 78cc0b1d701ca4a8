//! Result of classifying a single IPv4 address.

use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Classful address category, decided by the first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Experimental.
    E,
    Loopback,
}

impl AddressClass {
    /// Classful default mask, `None` for multicast and experimental space.
    pub fn default_mask(&self) -> Option<Ipv4Addr> {
        match self {
            AddressClass::A | AddressClass::Loopback => Some(Ipv4Addr::new(255, 0, 0, 0)),
            AddressClass::B => Some(Ipv4Addr::new(255, 255, 0, 0)),
            AddressClass::C => Some(Ipv4Addr::new(255, 255, 255, 0)),
            AddressClass::D | AddressClass::E => None,
        }
    }

    /// Canonical textual range shown next to the class.
    pub fn range(&self) -> Option<&'static str> {
        match self {
            AddressClass::A => Some("1.0.0.0 - 126.255.255.255"),
            AddressClass::B => Some("128.0.0.0 - 191.255.255.255"),
            AddressClass::C => Some("192.0.0.0 - 223.255.255.255"),
            AddressClass::D | AddressClass::E | AddressClass::Loopback => None,
        }
    }

    /// Short description used in the result panel.
    pub fn description(&self) -> &'static str {
        match self {
            AddressClass::A => "large networks",
            AddressClass::B => "medium networks",
            AddressClass::C => "small networks",
            AddressClass::D => "multicast",
            AddressClass::E => "experimental",
            AddressClass::Loopback => "local host",
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
            AddressClass::Loopback => "Loopback",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AddressType {
    Public,
    Private,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressType::Public => f.write_str("Public"),
            AddressType::Private => f.write_str("Private"),
        }
    }
}

/// Everything the classifier panel shows for one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// The validated input address.
    pub address: Ipv4Addr,
    pub address_class: AddressClass,
    /// `None` is rendered as `"N/A"`.
    #[serde(serialize_with = "serialize_mask")]
    pub default_mask: Option<Ipv4Addr>,
    pub range: Option<&'static str>,
    pub address_type: AddressType,
}

impl ClassificationResult {
    /// Default mask as displayed: dotted decimal or `"N/A"`.
    pub fn default_mask_text(&self) -> String {
        match self.default_mask {
            Some(mask) => mask.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn is_private(&self) -> bool {
        self.address_type == AddressType::Private
    }
}

fn serialize_mask<S>(mask: &Option<Ipv4Addr>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match mask {
        Some(mask) => serializer.collect_str(mask),
        None => serializer.serialize_str("N/A"),
    }
}
