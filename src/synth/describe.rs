//! Field-describe metadata and required/non-required classification

use super::literals::FieldType;

/// One picklist entry from object metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "wasm", serde(rename_all = "camelCase", default))]
pub struct PicklistEntry {
    pub value: String,
    pub label: String,
    pub active: bool,
}

impl PicklistEntry {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            active: true,
        }
    }
}

/// One entry of an object's field-describe array, as supplied by the
/// external schema-describe service.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "wasm", serde(rename_all = "camelCase"))]
pub struct RawFieldMetadata {
    /// Field API name (e.g., "LastName", "Custom_Field__c")
    pub name: String,
    /// Label for display
    pub label: String,
    /// Raw field type string (e.g., "string", "picklist")
    #[cfg_attr(feature = "wasm", serde(rename = "type"))]
    pub field_type: String,
    /// Whether the field accepts null
    pub nillable: bool,
    /// Whether the platform fills a default on create
    pub defaulted_on_create: bool,
    /// Whether the field is writable on update
    pub updateable: bool,
    /// Whether the field is writable on create
    pub createable: bool,
    /// Picklist entries, empty for non-picklist fields
    #[cfg_attr(feature = "wasm", serde(default))]
    pub picklist_values: Vec<PicklistEntry>,
}

impl RawFieldMetadata {
    /// Create field metadata with the permissive defaults of an ordinary
    /// optional field.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            field_type: field_type.into(),
            nillable: true,
            defaulted_on_create: false,
            updateable: true,
            createable: true,
            picklist_values: Vec::new(),
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set whether the field accepts null
    pub fn with_nillable(mut self, nillable: bool) -> Self {
        self.nillable = nillable;
        self
    }

    /// Set whether the platform defaults the field on create
    pub fn with_defaulted_on_create(mut self, defaulted: bool) -> Self {
        self.defaulted_on_create = defaulted;
        self
    }

    /// Set whether the field is updateable
    pub fn with_updateable(mut self, updateable: bool) -> Self {
        self.updateable = updateable;
        self
    }

    /// Set whether the field is createable
    pub fn with_createable(mut self, createable: bool) -> Self {
        self.createable = createable;
        self
    }

    /// Set picklist entries
    pub fn with_picklist_values(mut self, values: Vec<PicklistEntry>) -> Self {
        self.picklist_values = values;
        self
    }
}

/// A classified field, carrying everything literal synthesis needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "wasm", serde(rename_all = "camelCase"))]
pub struct FieldDescriptor {
    pub label: String,
    pub api_name: String,
    #[cfg_attr(feature = "wasm", serde(rename = "type"))]
    pub field_type: FieldType,
    pub picklist_values: Vec<PicklistEntry>,
}

/// Required/non-required partition of one object's fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "wasm", serde(rename_all = "camelCase"))]
pub struct ClassifiedFields {
    pub required: Vec<FieldDescriptor>,
    pub non_required: Vec<FieldDescriptor>,
}

impl ClassifiedFields {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.non_required.is_empty()
    }
}

/// Partition an object's field-describe array into required and
/// non-required fields.
///
/// A field is required iff it is not nillable, not defaulted on create, and
/// both updateable and createable. A field is non-required iff it is
/// updateable and not `OwnerId`. Fields failing both tests are dropped.
/// Returns `None` when there is no metadata to classify.
pub fn classify_fields(fields: &[RawFieldMetadata]) -> Option<ClassifiedFields> {
    if fields.is_empty() {
        return None;
    }

    let mut classified = ClassifiedFields::default();
    for meta in fields {
        let descriptor = FieldDescriptor {
            label: meta.label.clone(),
            api_name: meta.name.clone(),
            field_type: FieldType::from_api_name(&meta.field_type),
            picklist_values: meta.picklist_values.clone(),
        };
        if !meta.nillable && !meta.defaulted_on_create && meta.updateable && meta.createable {
            classified.required.push(descriptor);
        } else if meta.updateable && meta.name != "OwnerId" {
            classified.non_required.push(descriptor);
        }
    }
    Some(classified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metadata_is_a_sentinel() {
        assert_eq!(classify_fields(&[]), None);
    }

    #[test]
    fn partition_is_disjoint() {
        let fields = vec![
            RawFieldMetadata::new("LastName", "string").with_nillable(false),
            RawFieldMetadata::new("Email", "email"),
            RawFieldMetadata::new("CreatedDate", "datetime")
                .with_updateable(false)
                .with_createable(false),
        ];
        let classified = classify_fields(&fields).unwrap();

        assert_eq!(classified.required.len(), 1);
        assert_eq!(classified.required[0].api_name, "LastName");
        assert_eq!(classified.non_required.len(), 1);
        assert_eq!(classified.non_required[0].api_name, "Email");
    }

    #[test]
    fn owner_id_never_lands_in_non_required() {
        let fields = vec![RawFieldMetadata::new("OwnerId", "reference")];
        let classified = classify_fields(&fields).unwrap();
        assert!(classified.is_empty());
    }

    #[test]
    fn defaulted_fields_are_not_required() {
        let fields = vec![RawFieldMetadata::new("IsActive", "boolean")
            .with_nillable(false)
            .with_defaulted_on_create(true)];
        let classified = classify_fields(&fields).unwrap();
        assert!(classified.required.is_empty());
        assert_eq!(classified.non_required[0].api_name, "IsActive");
    }

    #[test]
    fn read_only_fields_are_dropped() {
        let fields = vec![RawFieldMetadata::new("SystemModstamp", "datetime")
            .with_updateable(false)
            .with_createable(false)];
        let classified = classify_fields(&fields).unwrap();
        assert!(classified.is_empty());
    }

    #[test]
    fn unknown_type_strings_map_to_unknown() {
        let fields = vec![RawFieldMetadata::new("Location__c", "location")];
        let classified = classify_fields(&fields).unwrap();
        assert_eq!(classified.non_required[0].field_type, FieldType::Unknown);
    }
}
