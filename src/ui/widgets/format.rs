//! printf-style templates for slider values (`"%.2f"`, `"%d px"`, `"%f%%"`).

use std::fmt;
use std::str::FromStr;

/// Widest precision accepted by `%.Nf`.
const MAX_PRECISION: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    MissingPlaceholder,
    UnsupportedSpec(String),
    InvalidPrecision,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingPlaceholder => write!(f, "format has no numeric placeholder"),
            FormatError::UnsupportedSpec(spec) => write!(f, "unsupported format spec: {spec}"),
            FormatError::InvalidPrecision => write!(f, "invalid precision"),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Number {
    Fixed(usize),
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormat {
    prefix: String,
    suffix: String,
    number: Number,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            number: Number::Fixed(2),
        }
    }
}

impl ValueFormat {
    pub fn format(&self, value: f32) -> String {
        let number = match self.number {
            Number::Fixed(precision) => format!("{value:.precision$}"),
            Number::Integer => format!("{}", value.round() as i64),
        };
        format!("{}{number}{}", self.prefix, self.suffix)
    }

    /// Reads a number back out of text produced by `format` (or typed by the
    /// user). The prefix and suffix are optional.
    pub fn parse(&self, text: &str) -> Option<f32> {
        let mut s = text.trim();
        if let Some(rest) = s.strip_prefix(self.prefix.as_str()) {
            s = rest;
        }
        if let Some(rest) = s.strip_suffix(self.suffix.as_str()) {
            s = rest;
        }
        s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
    }
}

impl FromStr for ValueFormat {
    type Err = FormatError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut number = None;
        let mut chars = template.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                if number.is_none() {
                    prefix.push(ch);
                } else {
                    suffix.push(ch);
                }
                continue;
            }

            let mut spec = String::from("%");
            let parsed = match chars.next() {
                Some('%') => {
                    if number.is_none() {
                        prefix.push('%');
                    } else {
                        suffix.push('%');
                    }
                    continue;
                }
                Some('f') => Number::Fixed(6),
                Some('d') => Number::Integer,
                Some('.') => {
                    spec.push('.');
                    let mut digits = String::new();
                    while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                        digits.push(d);
                        chars.next();
                    }
                    spec.push_str(&digits);
                    match chars.next() {
                        Some('f') => {}
                        Some(other) => {
                            spec.push(other);
                            return Err(FormatError::UnsupportedSpec(spec));
                        }
                        None => return Err(FormatError::UnsupportedSpec(spec)),
                    }
                    let precision = digits
                        .parse::<usize>()
                        .map_err(|_| FormatError::InvalidPrecision)?;
                    if precision > MAX_PRECISION {
                        return Err(FormatError::InvalidPrecision);
                    }
                    Number::Fixed(precision)
                }
                Some(other) => {
                    spec.push(other);
                    return Err(FormatError::UnsupportedSpec(spec));
                }
                None => return Err(FormatError::UnsupportedSpec(spec)),
            };

            if number.is_some() {
                return Err(FormatError::UnsupportedSpec(template.to_string()));
            }
            number = Some(parsed);
        }

        let number = number.ok_or(FormatError::MissingPlaceholder)?;
        Ok(Self {
            prefix,
            suffix,
            number,
        })
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escape = |s: &str| s.replace('%', "%%");
        let spec = match self.number {
            Number::Fixed(6) => "%f".to_string(),
            Number::Fixed(p) => format!("%.{p}f"),
            Number::Integer => "%d".to_string(),
        };
        write!(f, "{}{spec}{}", escape(&self.prefix), escape(&self.suffix))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/format.rs"]
mod tests;
