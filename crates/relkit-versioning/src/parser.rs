//! Version string parser
//!
//! Accepts the notations found in iOS and Android project files:
//! - `1.2`, `1.2.3`, `v1.2.3`
//! - four-part builds: `1.2.3.4`
//! - release candidates: `1.2-rc-4`, `1.2.rc.4`, `1.2rc4`, `1.2.3-rc-4`

use tracing::trace;

use relkit_core::error::ParseError;

use crate::version::Version;

const RC_MARKER: &str = "rc";

/// Parse a free-form version string into a [`Version`]
pub fn parse(input: &str) -> Result<Version, ParseError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let mut components = normalize(body);
    trace!(input, ?components, "normalized version components");

    if components.len() < 2 {
        return Err(ParseError::TooFewComponents(input.to_string()));
    }

    if components.last().is_some_and(|c| c.contains(RC_MARKER)) {
        let rc_component = components.pop().unwrap_or_default();
        components = recombine(input, components, rc_segment(&rc_component))?;
    }

    let numbers = components
        .iter()
        .map(|c| parse_number(input, c))
        .collect::<Result<Vec<u64>, ParseError>>()?;

    match numbers.as_slice() {
        [major, minor] => Ok(Version::new(*major, *minor, 0)),
        [major, minor, patch] => Ok(Version::new(*major, *minor, *patch)),
        [major, minor, patch, rc] => Ok(Version::release_candidate(*major, *minor, *patch, *rc)),
        _ => Err(ParseError::invalid(
            input,
            format!("expected 2 to 4 components, found {}", numbers.len()),
        )),
    }
}

/// Split on `.` and drop `-` characters, then attach release candidate
/// markers to their number so that `1.2-rc-4`, `1.2-rc.4` and `1.2rc4` all
/// give `["1", "2rc4"]`, and `1.2.rc.4` gives `["1", "2", "rc4"]`.
///
/// A standalone `rc` token is carried forward onto the next component; with
/// nothing after it (`1.2.rc`) it is removed. A marker attached to a number
/// (`2rc`) is kept, so it still goes through the release candidate rules.
fn normalize(body: &str) -> Vec<String> {
    let mut components: Vec<String> = Vec::new();
    let mut standalone_marker = false;

    for raw in body.split('.') {
        let component: String = raw.chars().filter(|c| *c != '-').collect();

        if component == RC_MARKER {
            standalone_marker = true;
            continue;
        }

        if std::mem::take(&mut standalone_marker) {
            components.push(format!("{}{}", RC_MARKER, component));
            continue;
        }

        match components.last_mut() {
            Some(last) if last.ends_with(RC_MARKER) => last.push_str(&component),
            _ => components.push(component),
        }
    }

    components
}

/// Numeric segments carried by the release candidate component: every
/// maximal run of digits (`5rc1` gives `["5", "1"]`, `0rc0` gives `["0", "0"]`).
fn rc_segment(component: &str) -> Vec<String> {
    component
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect()
}

fn recombine(
    input: &str,
    mut components: Vec<String>,
    rc: Vec<String>,
) -> Result<Vec<String>, ParseError> {
    match (components.len(), rc.len()) {
        // (c0, r0, 0, r1)
        (1, 2) => {
            let mut rc = rc.into_iter();
            components.extend(rc.next());
            components.push("0".to_string());
            components.extend(rc.next());
        }
        // (c0, c1, 0, r0)
        (2, 1) => {
            components.push("0".to_string());
            components.extend(rc);
        }
        // (c0, c1, r0, r1) and (c0, c1, c2, r0)
        (2, 2) | (3, 1) => components.extend(rc),
        (n, r) => {
            return Err(ParseError::invalid(
                input,
                format!(
                    "unsupported release candidate layout ({} components, {} rc segments)",
                    n, r
                ),
            ))
        }
    }
    Ok(components)
}

fn parse_number(input: &str, component: &str) -> Result<u64, ParseError> {
    if component.is_empty() || !component.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::invalid(
            input,
            format!("component '{}' is not a number", component),
        ));
    }

    component.parse::<u64>().map_err(|_| {
        ParseError::invalid(input, format!("component '{}' is out of range", component))
    })
}
