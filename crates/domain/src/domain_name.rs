use crate::DomainError;
use std::fmt;

pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound on the encoded form, length octets and terminator included.
pub const MAX_NAME_LEN: usize = 255;

/// A fully-qualified domain name held as raw labels.
///
/// Labels are arbitrary octets of length 1–63 and the wire form never exceeds
/// 255 octets; both are enforced on construction, so every `DomainName` can be
/// encoded without further checks. The empty label list is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn from_labels(labels: Vec<Vec<u8>>) -> Result<Self, DomainError> {
        let mut wire_len = 1;
        for label in &labels {
            if label.is_empty() {
                return Err(DomainError::EmptyLabel(render(&labels)));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong { len: label.len() });
            }
            wire_len += 1 + label.len();
        }
        if wire_len > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong);
        }
        Ok(Self { labels })
    }

    /// Parses a dotted name. A single trailing dot is accepted and ignored.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        if trimmed.is_empty() {
            return if name.is_empty() || name == "." {
                Ok(Self::root())
            } else {
                Err(DomainError::EmptyLabel(name.to_string()))
            };
        }

        let mut labels = Vec::new();
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(DomainError::EmptyLabel(name.to_string()));
            }
            labels.push(label.as_bytes().to_vec());
        }
        Self::from_labels(labels)
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of the encoded form: one octet per label plus the label, plus the terminator.
    pub fn wire_len(&self) -> usize {
        1 + self.labels.iter().map(|l| 1 + l.len()).sum::<usize>()
    }

    /// Dotted form with the trailing root dot, `"."` for the root itself.
    pub fn fqdn(&self) -> String {
        if self.is_root() {
            ".".to_string()
        } else {
            format!("{}.", self)
        }
    }
}

fn render(labels: &[Vec<u8>]) -> String {
    let mut out = String::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        for &b in label {
            match b {
                b'.' | b'\\' => {
                    out.push('\\');
                    out.push(b as char);
                }
                0x21..=0x7E => out.push(b as char),
                _ => out.push_str(&format!("\\{:03}", b)),
            }
        }
    }
    out
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.labels))
    }
}
