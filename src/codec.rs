//! Conversion between address literals and their integer values.
//!
//! IPv4 literals are up to four decimal octets. IPv6 literals are eight
//! hexadecimal groups, optionally shortened with a `::` elision, optionally
//! wrapped in square brackets, and optionally ending in an embedded dotted
//! IPv4 address which takes the place of the last two groups.

use tracing::trace;

use crate::error::FormatError;
use crate::family::{AddressFamily, FamilyParams};

/// An IPv6 value with nothing set above this many low bits is written with
/// an embedded IPv4 tail (covers `::/96` and `::ffff:0:0/96`).
const EMBEDDED_V4_LIMIT: u32 = 48;

/// Hexadecimal groups in front of an embedded IPv4 tail.
const EMBEDDED_V6_GROUPS: usize = 6;

const IPV4_MASK: u128 = 0xffff_ffff;

fn is_embedded_v4(value: u128) -> bool {
    value >> EMBEDDED_V4_LIMIT == 0
}

/// Removes an enclosing `[...]` pair from a literal.
///
/// Returns the inner literal and whether brackets were present. A literal
/// with only one of the two brackets is rejected.
pub fn strip_brackets(literal: &str) -> Result<(&str, bool), FormatError> {
    match (literal.strip_prefix('['), literal.ends_with(']')) {
        (Some(inner), true) => Ok((&inner[..inner.len() - 1], true)),
        (None, false) => Ok((literal, false)),
        _ => Err(FormatError::UnbalancedBrackets(literal.to_string())),
    }
}

/// Expands IPv6 shorthand into the full colon-separated form.
///
/// The result has eight groups, or seven when the last one is an embedded
/// dotted IPv4 address. Group text is kept as written (no case folding, no
/// leading zero removal); only elided and empty groups become `0`.
///
/// # Errors
///
/// Fails when the literal has more groups than fit, or fewer groups and no
/// `::` elision to make up the difference.
pub fn expand_shorthand(literal: &str) -> Result<String, FormatError> {
    Ok(expand_groups(literal)?.join(":"))
}

fn expand_groups(literal: &str) -> Result<Vec<&str>, FormatError> {
    let (literal, _) = strip_brackets(literal)?;
    if literal.is_empty() {
        return Err(FormatError::InvalidGroup(String::new()));
    }

    let mut parts: Vec<&str> = literal.split(':').collect();
    // A leading `::` splits into two empty parts; the first one is a real
    // zero group, the second marks the elision.
    if literal.starts_with("::") {
        parts[0] = "0";
    }

    let target = match parts.last() {
        Some(last) if last.contains('.') => EMBEDDED_V6_GROUPS + 1,
        _ => AddressFamily::Ipv6.params().groups(),
    };
    if parts.len() > target {
        return Err(FormatError::TooManyGroups {
            found: parts.len(),
            max: target,
        });
    }

    let missing = target - parts.len();
    let mut groups = Vec::with_capacity(target);
    let mut elided = false;
    for part in parts {
        if part.is_empty() {
            // Only the first empty part is the elision point, any later ones
            // stand for a single zero group.
            if !elided {
                groups.extend(std::iter::repeat("0").take(missing));
                elided = true;
            }
            groups.push("0");
        } else {
            groups.push(part);
        }
    }

    if groups.len() < target {
        return Err(FormatError::TooFewGroups {
            found: groups.len(),
            expected: target,
        });
    }
    Ok(groups)
}

/// Converts an address literal (without mask suffix) to its integer value.
///
/// IPv4 octets are placed from the most significant end, so a short literal
/// such as `10.1` means `10.1.0.0`. IPv6 literals may carry brackets.
///
/// # Arguments
///
/// * `literal` - The address literal
/// * `family` - The family the literal is written in
///
/// # Errors
///
/// Returns a [`FormatError`] if the literal has the wrong number of groups or
/// a group that does not parse in its radix or fit in its width.
pub fn literal_to_int(literal: &str, family: AddressFamily) -> Result<u128, FormatError> {
    match family {
        AddressFamily::Ipv4 => parse_ipv4(literal),
        AddressFamily::Ipv6 => parse_ipv6(literal),
    }
}

fn parse_group(group: &str, params: &FamilyParams) -> Result<u128, FormatError> {
    u32::from_str_radix(group, params.radix)
        .ok()
        .filter(|&value| value <= params.group_max())
        .map(u128::from)
        .ok_or_else(|| FormatError::InvalidGroup(group.to_string()))
}

/// Left shift that places group `index` at its position counted from the
/// most significant end of the address.
fn group_shift(index: usize, params: &FamilyParams) -> u32 {
    (params.groups() - index - 1) as u32 * u32::from(params.group_bits)
}

fn parse_groups(groups: &[&str], params: &FamilyParams) -> Result<u128, FormatError> {
    groups
        .iter()
        .enumerate()
        .try_fold(0u128, |acc, (i, group)| -> Result<u128, FormatError> {
            Ok(acc | parse_group(group, params)? << group_shift(i, params))
        })
}

fn parse_ipv4(literal: &str) -> Result<u128, FormatError> {
    let params = AddressFamily::Ipv4.params();
    let octets: Vec<&str> = literal.split(params.separator).collect();
    if octets.len() > params.groups() {
        return Err(FormatError::TooManyOctets {
            found: octets.len(),
        });
    }
    parse_groups(&octets, params)
}

fn parse_ipv6(literal: &str) -> Result<u128, FormatError> {
    let params = AddressFamily::Ipv6.params();
    let groups = expand_groups(literal)?;

    if groups.len() != EMBEDDED_V6_GROUPS + 1 {
        return parse_groups(&groups, params);
    }

    let tail = groups[EMBEDDED_V6_GROUPS];
    let value = parse_groups(&groups[..EMBEDDED_V6_GROUPS], params)?;
    if !is_embedded_v4(value) {
        trace!(
            "rejecting dotted tail {:?} in {:?}: leading groups are not an embedding prefix",
            tail,
            literal
        );
        return Err(FormatError::InvalidGroup(tail.to_string()));
    }
    Ok(value | parse_ipv4(tail)?)
}

/// Converts an integer to the normalized literal of the given family.
///
/// IPv4 values are written as four decimal octets. IPv6 values are written
/// as lowercase hexadecimal groups without leading zeros, with the first run
/// of zero groups compressed to `::`. An IPv6 value with only its low 48
/// bits set is written with an embedded IPv4 tail, e.g. `::ffff:192.0.2.1`.
/// Bits above the family width are ignored.
///
/// # Arguments
///
/// * `value` - The address as an integer
/// * `family` - The family to render it in
///
/// # Returns
///
/// The normalized address literal
pub fn int_to_literal(value: u128, family: AddressFamily) -> String {
    let params = family.params();
    match family {
        AddressFamily::Ipv4 => format_groups(value, params, params.groups()).join("."),
        AddressFamily::Ipv6 => {
            let groups = if is_embedded_v4(value) {
                let mut groups = format_groups(value >> 32, params, EMBEDDED_V6_GROUPS);
                groups.push(int_to_literal(value & IPV4_MASK, AddressFamily::Ipv4));
                groups
            } else {
                format_groups(value, params, params.groups())
            };
            compress_zero_run(&groups)
        }
    }
}

/// Formats the low `count` groups of `value`, most significant first.
fn format_groups(value: u128, params: &FamilyParams, count: usize) -> Vec<String> {
    let mask = u128::from(params.group_max());
    (0..count)
        .rev()
        .map(|i| {
            let group = (value >> (i as u32 * u32::from(params.group_bits))) & mask;
            match params.radix {
                16 => format!("{group:x}"),
                _ => group.to_string(),
            }
        })
        .collect()
}

/// Replaces the first run of zero groups with `::`.
///
/// Only the leftmost run is compressed, whatever its length; later runs stay
/// written out. A run must be followed by another group, so the last group
/// is never absorbed, and a run at the very start needs at least two zero
/// groups.
fn compress_zero_run(groups: &[String]) -> String {
    let is_zero = |i: usize| groups[i] == "0";
    let last = groups.len() - 1;

    let start = if is_zero(0) && is_zero(1) {
        Some(0)
    } else {
        (1..last).find(|&i| is_zero(i))
    };
    let Some(start) = start else {
        return groups.join(":");
    };

    let mut end = start;
    while end + 1 < last && is_zero(end + 1) {
        end += 1;
    }
    format!(
        "{}::{}",
        groups[..start].join(":"),
        groups[end + 1..].join(":")
    )
}
