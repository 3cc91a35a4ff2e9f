//! Module format templates.
//!
//! A template is literal text around exactly one `%s` placeholder.
//! `%%` renders as a literal `%`; any other `%` sequence is rejected.

use std::fmt;

use anyhow::{Result, bail};
use serde::Deserialize;

const PLACEHOLDER: &str = "%s";

/// A parsed format template with a single substitution point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    /// Builds a template from the literal text around the placeholder.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Parses a template, requiring exactly one `%s`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut seen_placeholder = false;

        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            let out = if seen_placeholder {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => out.push('%'),
                Some('s') if !seen_placeholder => seen_placeholder = true,
                Some('s') => bail!("template {raw:?} has more than one {PLACEHOLDER}"),
                Some(other) => bail!("template {raw:?} has unsupported sequence %{other}"),
                None => bail!("template {raw:?} ends with a lone %"),
            }
        }

        if !seen_placeholder {
            bail!("template {raw:?} has no {PLACEHOLDER} placeholder");
        }
        Ok(Self { prefix, suffix })
    }

    /// Substitutes `value` into the placeholder.
    pub fn render(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + value.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(value);
        out.push_str(&self.suffix);
        out
    }
}

impl TryFrom<String> for Template {
    type Error = anyhow::Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escape = |s: &str| s.replace('%', "%%");
        write!(f, "{}{PLACEHOLDER}{}", escape(&self.prefix), escape(&self.suffix))
    }
}
