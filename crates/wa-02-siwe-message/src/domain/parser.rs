//! # EIP-4361 Parser
//!
//! Line-oriented rather than one large regular expression, so a multi-line
//! statement and the trailing resource list are isolated reliably.
//!
//! ```text
//! {domain} wants you to sign in with your Ethereum account:
//! {address}
//!
//! {statement}
//!
//! URI: {uri}
//! Version: {version}
//! Chain ID: {chain-id}
//! Nonce: {nonce}
//! Issued At: {issued-at}
//! Expiration Time: {expiration-time}
//! Not Before: {not-before}
//! Request ID: {request-id}
//! Resources:
//! - {resources[0]}
//! - {resources[1]}
//! ```
//!
//! `\r\n` line endings are accepted; trailing blank lines are ignored.

use super::entities::{
    SiweField, SiweMessage, HEADER_SUFFIX, RESOURCES_HEADER, RESOURCE_PREFIX,
};
use super::errors::SiweError;
use std::collections::HashMap;

const URI_PREFIX: &str = "URI: ";

/// Parse raw message text into a [`SiweMessage`].
pub fn parse(input: &str) -> Result<SiweMessage, SiweError> {
    let mut lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let header = lines
        .first()
        .ok_or(SiweError::MissingField(SiweField::Domain))?;
    let domain = header
        .strip_suffix(HEADER_SUFFIX)
        .ok_or_else(|| SiweError::InvalidField {
            field: SiweField::Domain,
            reason: format!("first line must end with '{}'", HEADER_SUFFIX.trim_start()),
        })?;

    let address = lines
        .get(1)
        .ok_or(SiweError::MissingField(SiweField::Address))?;
    check_address(address)?;

    let uri_index = lines
        .iter()
        .skip(2)
        .position(|line| line.starts_with(URI_PREFIX))
        .map(|offset| offset + 2)
        .ok_or(SiweError::MissingField(SiweField::Uri))?;

    let statement = extract_statement(&lines[2..uri_index]);
    let (mut fields, resources) = parse_fields(&lines[uri_index..])?;

    let mut required =
        |field: SiweField| fields.remove(&field).ok_or(SiweError::MissingField(field));
    let uri = required(SiweField::Uri)?;
    let version = required(SiweField::Version)?;
    let chain_id = required(SiweField::ChainId)?;
    let nonce = required(SiweField::Nonce)?;
    let issued_at = required(SiweField::IssuedAt)?;

    Ok(SiweMessage {
        domain: domain.to_string(),
        address: address.to_string(),
        statement,
        uri,
        version,
        chain_id,
        nonce,
        issued_at,
        expiration_time: fields.remove(&SiweField::ExpirationTime),
        not_before: fields.remove(&SiweField::NotBefore),
        request_id: fields.remove(&SiweField::RequestId),
        resources: resources.unwrap_or_default(),
    })
}

/// `0x` followed by exactly 40 hex digits, either case.
fn check_address(address: &str) -> Result<(), SiweError> {
    let invalid = |reason: &str| SiweError::InvalidField {
        field: SiweField::Address,
        reason: reason.to_string(),
    };

    let digits = address
        .strip_prefix("0x")
        .ok_or_else(|| invalid("must start with 0x"))?;
    if digits.len() != 40 {
        return Err(invalid("must contain 40 hex digits"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("contains non-hex characters"));
    }
    Ok(())
}

/// Lines between the address and `URI:`, blank edges trimmed.
fn extract_statement(lines: &[&str]) -> Option<String> {
    let start = lines.iter().position(|line| !line.trim().is_empty())?;
    let end = lines.iter().rposition(|line| !line.trim().is_empty())?;
    Some(lines[start..=end].join("\n"))
}

type Fields = HashMap<SiweField, String>;

/// Tagged `Label: value` lines and the optional resource block.
fn parse_fields(lines: &[&str]) -> Result<(Fields, Option<Vec<String>>), SiweError> {
    let mut fields = Fields::new();
    let mut resources: Option<Vec<String>> = None;
    let mut in_resources = false;

    for line in lines {
        if in_resources {
            if let Some(resource) = line.strip_prefix(RESOURCE_PREFIX) {
                if let Some(list) = resources.as_mut() {
                    list.push(resource.to_string());
                }
                continue;
            }
            in_resources = false;
        }

        if *line == RESOURCES_HEADER {
            if resources.is_some() {
                return Err(SiweError::DuplicateField(SiweField::Resources));
            }
            resources = Some(Vec::new());
            in_resources = true;
            continue;
        }

        let (label, value) = line
            .split_once(": ")
            .ok_or_else(|| SiweError::UnknownField(line.to_string()))?;
        let field =
            SiweField::from_label(label).ok_or_else(|| SiweError::UnknownField(line.to_string()))?;

        if value.trim().is_empty() {
            return Err(SiweError::InvalidField {
                field,
                reason: "value is empty".to_string(),
            });
        }
        if fields.insert(field, value.to_string()).is_some() {
            return Err(SiweError::DuplicateField(field));
        }
    }

    Ok((fields, resources))
}
