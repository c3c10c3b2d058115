//! # Canonical Rendering
//!
//! Rebuilds the exact EIP-4361 text of a message: fixed field order, absent
//! optional fields omitted, `\n` separators, no trailing newline. Without a
//! statement the address is followed by two blank lines.

use super::entities::{
    SiweField, SiweMessage, HEADER_SUFFIX, RESOURCES_HEADER, RESOURCE_PREFIX,
};
use super::errors::SiweError;
use super::parser::parse;
use std::fmt;

impl fmt::Display for SiweMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\n{}\n\n", self.domain, HEADER_SUFFIX, self.address)?;
        if let Some(statement) = &self.statement {
            writeln!(f, "{statement}")?;
        }

        for field in SiweField::TAGGED {
            if let Some(value) = self.tagged_value(field) {
                write!(f, "\n{}: {value}", field.label())?;
            }
        }

        if !self.resources.is_empty() {
            write!(f, "\n{RESOURCES_HEADER}")?;
            for resource in &self.resources {
                write!(f, "\n{RESOURCE_PREFIX}{resource}")?;
            }
        }
        Ok(())
    }
}

impl SiweMessage {
    /// The canonical EIP-4361 text of this message.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

/// Parse `raw` and require it to be byte-for-byte canonical.
///
/// A signature over `raw` is then a signature over exactly the fields that
/// were parsed, with no room for alternative line endings or whitespace.
pub fn parse_canonical(raw: &str) -> Result<SiweMessage, SiweError> {
    let message = parse(raw)?;
    if message.to_canonical_string() != raw {
        return Err(SiweError::NonCanonical);
    }
    Ok(message)
}
