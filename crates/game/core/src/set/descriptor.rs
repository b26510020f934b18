use core::fmt;

/// One raw attribute line granted by a set tier, e.g. `"Damage: +10"`.
///
/// Descriptors are opaque here. The host's attribute compiler parses them
/// into typed effects; this crate only orders and concatenates them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor(String);

impl AttributeDescriptor {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttributeDescriptor {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for AttributeDescriptor {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
