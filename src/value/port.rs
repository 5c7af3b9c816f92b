//! Port lists: numbers, ranges, service names and top-N selections.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{FlagValue, PORT_TABLE, ValueError, ValueKind};
use crate::tokenize::{Policy, tokenize};

/// Highest valid port number.
pub const MAX_PORT: u16 = u16::MAX;

/// `<start>-` or `<start>-<end>`.
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(\d*)$").expect("range pattern is valid"));

/// Transport prefix accepted in front of a port (`tcp:443`).
///
/// The prefix is validated and then ignored; only the port part is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// `tcp:`
    Tcp,
    /// `udp:`
    Udp,
}

impl FromStr for Protocol {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            other => Err(ValueError::malformed(s, format!("unknown protocol '{other}'"))),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => f.write_str("tcp"),
            Self::Udp => f.write_str("udp"),
        }
    }
}

/// A set of ports in `1..=65535`.
///
/// Each comma separated segment may be:
///
/// - a port: `80`
/// - a range: `21-25`, or open ended `1024-`
/// - `full` or `*` for every port
/// - `top-N` for the `N` most common ports
/// - a service name from [`PORT_TABLE`]: `http`
/// - a protocol-qualified port: `tcp:443`, `udp:53`
/// - a service prefix wildcard: `ftp*`
///
/// A value naming an existing file is read one segment per line.
///
/// ```
/// use flagstack::value::{FlagValue, Port};
///
/// let mut port = Port::default();
/// port.set("21-25,80,TCP:443").unwrap();
/// assert_eq!(port.as_ports(), [21, 22, 23, 24, 25, 80, 443]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Port {
    ports: BTreeSet<u16>,
}

impl Port {
    /// Ports in ascending order.
    #[must_use]
    pub fn as_ports(&self) -> Vec<u16> {
        self.ports.iter().copied().collect()
    }

    /// Returns true if `port` is in the set.
    #[must_use]
    pub fn contains(&self, port: u16) -> bool {
        self.ports.contains(&port)
    }

    /// Number of ports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Returns true when no port is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl FlagValue for Port {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let mut parsed = BTreeSet::new();
        for segment in tokenize(raw, &Policy::FILE_NORMALIZED)? {
            parsed.extend(expand(&segment)?);
        }
        self.ports.extend(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        let mut parts = Vec::new();
        let mut ports = self.ports.iter().copied().peekable();

        while let Some(start) = ports.next() {
            let mut end = start;
            while let Some(&next) = ports.peek() {
                if end.checked_add(1) != Some(next) {
                    break;
                }
                end = next;
                ports.next();
            }
            parts.push(if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            });
        }

        parts.join(",")
    }

    fn kind(&self) -> ValueKind {
        ValueKind::List("port")
    }

    fn reset(&mut self) {
        self.ports.clear();
    }
}

/// Expands one lowercase segment into ports.
fn expand(segment: &str) -> Result<Vec<u16>, ValueError> {
    if segment == "full" || segment == "*" {
        return Ok((1..=MAX_PORT).collect());
    }

    if let Some(count) = segment.strip_prefix("top-") {
        let count: usize = count
            .parse()
            .map_err(|_| ValueError::malformed(segment, "expected top-<number>"))?;
        return Ok(PORT_TABLE.iter().take(count).map(|&(port, _)| port).collect());
    }

    let target = match segment.split_once(':') {
        Some((protocol, rest)) => {
            protocol.parse::<Protocol>()?;
            rest.trim()
        }
        None => segment,
    };

    if let Some(prefix) = target.strip_suffix('*') {
        return by_service(segment, |name| name.starts_with(prefix));
    }

    if let Some(captures) = RANGE.captures(target) {
        let start = number(segment, &captures[1])?;
        let end = match &captures[2] {
            "" => MAX_PORT,
            end => number(segment, end)?,
        };
        if start > end {
            return Err(ValueError::out_of_range(segment, "range start exceeds end"));
        }
        return Ok((start..=end).collect());
    }

    if !target.is_empty() && target.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(vec![number(segment, target)?]);
    }

    by_service(segment, |name| name == target)
}

fn number(segment: &str, digits: &str) -> Result<u16, ValueError> {
    digits
        .parse::<u16>()
        .ok()
        .filter(|&port| port != 0)
        .ok_or_else(|| ValueError::out_of_range(segment, format!("port must be in 1-{MAX_PORT}")))
}

fn by_service(segment: &str, matches: impl Fn(&str) -> bool) -> Result<Vec<u16>, ValueError> {
    let ports: Vec<u16> = PORT_TABLE
        .iter()
        .filter(|(_, name)| matches(name))
        .map(|&(port, _)| port)
        .collect();
    if ports.is_empty() {
        return Err(ValueError::malformed(segment, "unknown port or service"));
    }
    Ok(ports)
}

#[cfg(test)]
#[path = "port_tests.rs"]
mod tests;
