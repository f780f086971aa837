//! Value filtering for -e expressions
//!
//! Sprint 5: Filter which values are tallied
//! Supports:
//! - Literal lists: -e only=a,b,c or -e drop=na,null
//! - Regex patterns: -e only=/^[0-9]+$/ or -e drop=/^#/

use anyhow::{bail, Result};
use regex::Regex;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Rule {
    /// No filtering, every value is tallied
    All,
    /// Tally only the listed values
    Only(HashSet<String>),
    /// Tally everything except the listed values
    Drop(HashSet<String>),
    /// Tally only values matching the pattern
    OnlyPattern(Regex),
    /// Tally everything except values matching the pattern
    DropPattern(Regex),
}

/// Value filter that determines which values are tallied
#[derive(Debug, Clone)]
pub struct ValueFilter {
    rule: Rule,
}

impl ValueFilter {
    /// Create a filter that tallies all values
    pub fn all() -> Self {
        Self { rule: Rule::All }
    }

    /// Parse a filter expression like "only=a,b,c", "drop=x" or "only=/^[0-9]+$/"
    pub fn from_expr(expr: &str) -> Result<Self> {
        if let Some(spec) = expr.strip_prefix("only=") {
            Self::from_spec(spec, true)
        } else if let Some(spec) = expr.strip_prefix("drop=") {
            Self::from_spec(spec, false)
        } else {
            bail!(
                "Invalid filter expression: {}. Expected format: only=SPEC or drop=SPEC",
                expr
            );
        }
    }

    /// Parse a specification (the part after "only=" or "drop=")
    fn from_spec(spec: &str, keep: bool) -> Result<Self> {
        // /PATTERN/ selects the regex form
        if let Some(pattern) = spec
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
        {
            let regex = Regex::new(pattern)
                .map_err(|e| anyhow::anyhow!("Invalid regex pattern '{}': {}", pattern, e))?;
            let rule = if keep {
                Rule::OnlyPattern(regex)
            } else {
                Rule::DropPattern(regex)
            };
            return Ok(Self { rule });
        }

        let values: HashSet<String> = spec
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect();

        let rule = if keep {
            Rule::Only(values)
        } else {
            Rule::Drop(values)
        };
        Ok(Self { rule })
    }

    /// Check if a value should be tallied
    pub fn should_count(&self, value: &str) -> bool {
        match &self.rule {
            Rule::All => true,
            Rule::Only(set) => set.contains(value),
            Rule::Drop(set) => !set.contains(value),
            Rule::OnlyPattern(regex) => regex.is_match(value),
            Rule::DropPattern(regex) => !regex.is_match(value),
        }
    }
}
