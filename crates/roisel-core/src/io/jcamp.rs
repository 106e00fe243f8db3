//! Reader for the JCAMP-DX parameter files (`visu_pars`, `reco`, ...) that
//! sit next to ParaVision image data.
//!
//! Only the subset the dataset adapter needs is understood: `##$Name=value`
//! records, array records whose `( dims )` header is followed by a body on the
//! next lines, `<...>` strings, `$$` comments and `@N*(v)` run-length repeats.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, RoiselError};

/// One parameter record.
#[derive(Clone, Debug, PartialEq)]
pub struct JcampValue {
    /// Array dimensions from a `( d1, d2 )` header, `None` for inline values.
    pub dims: Option<Vec<usize>>,
    /// Value text with continuation lines joined by single spaces.
    pub raw: String,
}

impl JcampValue {
    /// The value as a string, with surrounding `<` `>` removed.
    pub fn as_str(&self) -> &str {
        let s = self.raw.trim();
        s.strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(s)
    }

    /// Whitespace-separated tokens with `@N*(v)` repeats expanded.
    pub fn tokens(&self) -> Vec<String> {
        let mut out = Vec::new();
        for tok in self.raw.split_whitespace() {
            match parse_repeat(tok) {
                Some((count, value)) => {
                    out.extend(std::iter::repeat(value.to_string()).take(count))
                }
                None => out.push(tok.to_string()),
            }
        }
        out
    }

    pub fn as_f64_list(&self, name: &str) -> Result<Vec<f64>> {
        self.tokens()
            .iter()
            .map(|t| t.parse::<f64>().map_err(|_| self.invalid(name)))
            .collect()
    }

    pub fn as_usize_list(&self, name: &str) -> Result<Vec<usize>> {
        self.tokens()
            .iter()
            .map(|t| t.parse::<usize>().map_err(|_| self.invalid(name)))
            .collect()
    }

    pub fn as_usize(&self, name: &str) -> Result<usize> {
        self.as_usize_list(name)?
            .first()
            .copied()
            .ok_or_else(|| self.invalid(name))
    }

    fn invalid(&self, name: &str) -> RoiselError {
        RoiselError::InvalidParameter {
            name: name.to_string(),
            value: self.raw.clone(),
        }
    }
}

/// All records of one parameter file, keyed by name without the `$` prefix.
#[derive(Clone, Debug, Default)]
pub struct JcampParams {
    values: HashMap<String, JcampValue>,
}

impl JcampParams {
    /// Read and parse a parameter file. Non-UTF-8 bytes are replaced.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    pub fn parse(text: &str) -> Self {
        let mut values = HashMap::new();
        let mut current: Option<(String, JcampValue)> = None;

        for line in text.lines() {
            let line = line.trim_end();
            if line.starts_with("$$") {
                continue;
            }

            if let Some(record) = line.strip_prefix("##") {
                if let Some((key, value)) = current.take() {
                    values.insert(key, value);
                }
                let Some((key, value)) = record.split_once('=') else {
                    continue;
                };
                let key = key.trim().trim_start_matches('$').to_string();
                if key == "END" {
                    break;
                }
                let value = value.trim();
                let parsed = match parse_dims(value) {
                    Some(dims) => JcampValue {
                        dims: Some(dims),
                        raw: String::new(),
                    },
                    None => JcampValue {
                        dims: None,
                        raw: value.to_string(),
                    },
                };
                current = Some((key, parsed));
            } else if let Some((_, ref mut value)) = current {
                let body = line.trim();
                if body.is_empty() {
                    continue;
                }
                if !value.raw.is_empty() {
                    value.raw.push(' ');
                }
                value.raw.push_str(body);
            }
        }

        if let Some((key, value)) = current {
            values.insert(key, value);
        }

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&JcampValue> {
        self.values.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&JcampValue> {
        self.get(name)
            .ok_or_else(|| RoiselError::MissingParameter(name.to_string()))
    }

    /// String value of an optional parameter, `None` when absent or empty.
    pub fn string(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|v| v.as_str().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse an array header such as `( 2 )` or `( 3, 64 )`.
fn parse_dims(value: &str) -> Option<Vec<usize>> {
    let inner = value.strip_prefix('(')?.strip_suffix(')')?;
    inner
        .split(',')
        .map(|d| d.trim().parse::<usize>().ok())
        .collect()
}

/// Parse a run-length token `@N*(v)`.
fn parse_repeat(tok: &str) -> Option<(usize, &str)> {
    let rest = tok.strip_prefix('@')?;
    let (count, value) = rest.split_once('*')?;
    let value = value.strip_prefix('(')?.strip_suffix(')')?;
    Some((count.parse().ok()?, value))
}
