//! Common behaviour of contact fields.

/// A labeled string value that belongs to a contact.
///
/// Every field stores its input verbatim; subtypes that carry a format
/// (phones, birthdays) validate it before the value is stored.
pub trait Field {
    /// Human-readable label of the field, e.g. `"phone"`.
    const LABEL: &'static str;

    /// The stored value, exactly as it was supplied.
    fn value(&self) -> &str;

    /// Render the field as `label: value`.
    fn labeled(&self) -> String {
        format!("{}: {}", Self::LABEL, self.value())
    }
}
