//! Field types and the literal-synthesis table
//!
//! The describe service reports field types as strings; they are parsed once
//! into a closed enumeration so the literal table below is exhaustive and a
//! type with no literal is an explicit variant, not a silent fallthrough.

use super::describe::FieldDescriptor;

/// The field types literal synthesis knows how to seed.
///
/// `Unknown` covers every describe type with no entry in the table
/// (blob, location, and whatever the platform adds next).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "wasm", serde(rename_all = "lowercase"))]
pub enum FieldType {
    Date,
    DateTime,
    Email,
    Picklist,
    Time,
    String,
    Currency,
    Double,
    Phone,
    Url,
    TextArea,
    Boolean,
    Reference,
    Address,
    Int,
    Combobox,
    MultiPicklist,
    Unknown,
}

impl FieldType {
    /// Parse a describe-service type string, case-insensitively.
    pub fn from_api_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "email" => Self::Email,
            "picklist" => Self::Picklist,
            "time" => Self::Time,
            "string" => Self::String,
            "currency" => Self::Currency,
            "double" => Self::Double,
            "phone" => Self::Phone,
            "url" => Self::Url,
            "textarea" => Self::TextArea,
            "boolean" => Self::Boolean,
            "reference" => Self::Reference,
            "address" => Self::Address,
            "int" => Self::Int,
            "combobox" => Self::Combobox,
            "multipicklist" => Self::MultiPicklist,
            _ => Self::Unknown,
        }
    }
}

/// Produce the right-hand side of a seed assignment for one field, or
/// `None` when the field type has no literal (the field is then dropped by
/// the caller, non-fatally).
pub fn sample_literal(field: &FieldDescriptor) -> Option<String> {
    let literal = match field.field_type {
        FieldType::Date => "Date.today()".to_string(),
        FieldType::DateTime => "System.now()".to_string(),
        FieldType::Email => "'testEmail@gmail.com'".to_string(),
        FieldType::Time => "Time.newInstance(1, 2, 3, 4)".to_string(),
        FieldType::String => "'test value'".to_string(),
        FieldType::Currency | FieldType::Double => "1.1".to_string(),
        FieldType::Phone => "'1234567890'".to_string(),
        FieldType::Url => "'www.google.com'".to_string(),
        FieldType::TextArea => "'Test Value'".to_string(),
        FieldType::Boolean => "true".to_string(),
        FieldType::Reference => "'Here is reference id'".to_string(),
        FieldType::Address => "'test address'".to_string(),
        FieldType::Int => "12".to_string(),
        FieldType::Picklist | FieldType::Combobox | FieldType::MultiPicklist => {
            match field.picklist_values.first() {
                Some(entry) => format!("'{}'", entry.value),
                None => "'Here picklist value'".to_string(),
            }
        }
        FieldType::Unknown => return None,
    };
    Some(literal)
}
