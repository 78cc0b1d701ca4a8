//! Classful address classification.

use crate::error::ClassificationError;
use crate::models::{parse_dotted_quad, AddressClass, AddressType, ClassificationResult};
use std::net::Ipv4Addr;

/// Classify a dotted-decimal IPv4 address.
///
/// All four octets are validated before the first octet is looked at, so
/// `"10.999.-5.abc"` is rejected rather than reported as a private class A.
///
/// # Examples
/// ```
/// use uniguru_netcalc::{classify, models::{AddressClass, AddressType}};
/// let result = classify("192.168.1.1").unwrap();
/// assert_eq!(result.address_class, AddressClass::C);
/// assert_eq!(result.address_type, AddressType::Private);
/// ```
pub fn classify(ip: &str) -> Result<ClassificationResult, ClassificationError> {
    let address =
        parse_dotted_quad(ip).map_err(|fault| ClassificationError::MalformedAddress {
            input: ip.to_string(),
            fault,
        })?;

    let address_class = class_of(address);
    let result = ClassificationResult {
        address,
        address_class,
        default_mask: address_class.default_mask(),
        range: range_of(address, address_class),
        address_type: address_type_of(address, address_class),
    };

    log::debug!(
        "classify({ip}) -> class {} mask {} {}",
        result.address_class,
        result.default_mask_text(),
        result.address_type
    );
    Ok(result)
}

/// First octet decides the class; loopback is checked ahead of class A.
fn class_of(address: Ipv4Addr) -> AddressClass {
    match address.octets()[0] {
        127 => AddressClass::Loopback,
        // 0.x.x.x has a leading 0 bit, so it sits in class A space.
        0..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=255 => AddressClass::E,
    }
}

/// The canonical class A range starts at 1.0.0.0, so 0.x.x.x gets none.
fn range_of(address: Ipv4Addr, class: AddressClass) -> Option<&'static str> {
    if address.octets()[0] == 0 {
        None
    } else {
        class.range()
    }
}

fn address_type_of(address: Ipv4Addr, class: AddressClass) -> AddressType {
    let is_private = match (class, address.octets()) {
        (AddressClass::A, [10, _, _, _]) => true,
        (AddressClass::B, [172, o2, _, _]) => (16..=31).contains(&o2),
        (AddressClass::C, [192, 168, _, _]) => true,
        _ => false,
    };
    if is_private {
        AddressType::Private
    } else {
        AddressType::Public
    }
}
