/// Whether the order of keys inside nested objects takes part in equality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum KeyOrder {
    /// `{"a":1,"b":2}` and `{"b":2,"a":1}` are different values.
    #[default]
    Significant,
    /// Objects compare as unordered maps.
    Ignored,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct DeltaOptions {
    pub key_order: KeyOrder,
}

impl DeltaOptions {
    #[must_use]
    pub fn key_order(self, key_order: KeyOrder) -> Self {
        Self { key_order, ..self }
    }
}
