//! Culture number formats.
//!
//! A [`NumberFormat`] is an explicit configuration value passed into every
//! parse and format call; nothing in this crate reads locale state from the
//! environment. A [`Culture`] pairs a format with the identifier used to
//! select per-culture abbreviation lists in the catalog.

/// Decimal, grouping and sign configuration for one culture.
///
/// The decimal and group separators must differ; the shipped cultures keep
/// that invariant and a test enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
    pub negative_sign: char,
}

impl NumberFormat {
    /// Regex fragment matching a number in this format: optional sign,
    /// grouped or plain integer part, optional decimal part (including the
    /// leading-decimal form `.77`), optional exponent.
    ///
    /// The fragment contains no capture groups, so it can be embedded several
    /// times into one composite pattern.
    pub fn pattern(&self) -> String {
        let dec = regex::escape(&self.decimal_separator.to_string());
        let sign = self.sign_class();
        let int_part = match self.group_separator {
            Some(group) => {
                let group = regex::escape(&group.to_string());
                format!(r"(?:\d{{1,3}}(?:{group}\d{{3}})+|\d+)")
            }
            None => r"\d+".to_string(),
        };
        format!(r"{sign}?(?:{int_part}(?:{dec}\d+)?|{dec}\d+)(?:[eE][-+]?\d+)?")
    }

    /// Character class for the sign. The ASCII hyphen and U+2212 minus are
    /// always accepted alongside the configured sign; the hyphen goes last so
    /// it stays literal inside the class.
    fn sign_class(&self) -> String {
        let mut class = String::from("[+\u{2212}");
        if self.negative_sign != '-' {
            class.push(self.negative_sign);
        }
        class.push('-');
        class.push(']');
        class
    }

    /// Parse a literal previously matched by [`NumberFormat::pattern`].
    pub fn parse(&self, text: &str) -> Option<f64> {
        let mut normalized = String::with_capacity(text.len());
        for c in text.chars() {
            if Some(c) == self.group_separator {
                continue;
            }
            if c == self.decimal_separator {
                normalized.push('.');
            } else if c == '\u{2212}' || c == self.negative_sign {
                normalized.push('-');
            } else if c == '+' {
                // Leading plus and exponent plus are both redundant.
            } else {
                normalized.push(c);
            }
        }
        normalized.parse::<f64>().ok()
    }

    /// Render a value in this format, without grouping. Only used to validate
    /// round-trips; display formatting proper is out of scope.
    pub fn format(&self, value: f64) -> String {
        let mut out = format!("{value}");
        if self.decimal_separator != '.' {
            out = out.replace('.', &self.decimal_separator.to_string());
        }
        if self.negative_sign != '-' {
            out = out.replace('-', &self.negative_sign.to_string());
        }
        out
    }
}

/// A culture: an opaque identifier selecting the abbreviation set, plus the
/// number format used for literals in that culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    pub id: &'static str,
    pub number_format: NumberFormat,
}

pub static EN: Culture = Culture {
    id: "en",
    number_format: NumberFormat { decimal_separator: '.', group_separator: Some(','), negative_sign: '-' },
};

pub static DE: Culture = Culture {
    id: "de",
    number_format: NumberFormat { decimal_separator: ',', group_separator: Some('.'), negative_sign: '-' },
};

pub static SV: Culture = Culture {
    id: "sv",
    number_format: NumberFormat { decimal_separator: ',', group_separator: Some(' '), negative_sign: '-' },
};

/// The culture used when callers do not pass one, and the fallback for
/// abbreviation lookups.
pub static DEFAULT_CULTURE: &Culture = &EN;

/// Look up a shipped culture by its identifier.
pub fn culture(id: &str) -> Option<&'static Culture> {
    [&EN, &DE, &SV].into_iter().find(|c| c.id == id)
}
