//! Test-data block generation
//!
//! Turns one object's classified fields plus the fields its queries actually
//! reference into an Apex construction-and-insert block, and stitches the
//! blocks for every discovered object into a `@testSetup` body.

use std::collections::HashMap;

use crate::aggregate::ObjectFieldSet;

use super::describe::{ClassifiedFields, FieldDescriptor};
use super::error::SynthesisError;
use super::literals::sample_literal;

/// The reserved attachment object is seeded with a fixed built-in block
/// instead of per-field synthesis.
fn is_attachment(object_name: &str) -> bool {
    object_name == "attachment" || object_name == "attachments"
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the construction + insert block for one object, or `None` when the
/// object has no classified fields at all.
fn object_block(set: &ObjectFieldSet, classified: &ClassifiedFields) -> Option<String> {
    // Required fields go last so truncation elsewhere can never crowd them
    // out of the initializer.
    let combined: Vec<(&FieldDescriptor, bool)> = classified
        .non_required
        .iter()
        .map(|field| (field, false))
        .chain(classified.required.iter().map(|field| (field, true)))
        .collect();
    if combined.is_empty() {
        return None;
    }

    let type_name = capitalize_first(&set.object_name);
    let variable = format!("{}Obj", set.object_name.replace('_', ""));

    let mut assignments: Vec<String> = Vec::new();
    for &(field, required) in &combined {
        if required || set.contains(&field.api_name.to_lowercase()) {
            if let Some(literal) = sample_literal(field) {
                assignments.push(format!("{} = {}", field.api_name, literal));
            }
        }
    }

    // An initializer with zero assignments is not valid Apex; seed the first
    // field that has a literal.
    if assignments.is_empty() {
        let forced = combined.iter().find_map(|&(field, _)| {
            sample_literal(field).map(|literal| format!("{} = {}", field.api_name, literal))
        })?;
        assignments.push(forced);
    }

    let mut block = format!("{} {} = new {} (", type_name, variable, type_name);
    for (i, assignment) in assignments.iter().enumerate() {
        block.push_str("\n\t\t\t");
        block.push_str(assignment);
        if i + 1 < assignments.len() {
            block.push(',');
        }
    }
    block.push_str("\n\t\t);\n\t\tinsert ");
    block.push_str(&variable);
    block.push_str(";\n\t\t");
    Some(block)
}

/// Synthesize the `@testSetup` body text for every discovered object.
///
/// `classified_by_object` is keyed by object name in any casing; lookup is
/// case-insensitive. Attachment objects are excluded, and objects with no
/// metadata entry are skipped silently. When nothing at all comes out, the
/// sentinel distinguishes the only-attachment case from missing server data.
pub fn synthesize_test_body(
    object_sets: &[ObjectFieldSet],
    classified_by_object: &HashMap<String, ClassifiedFields>,
) -> Result<String, SynthesisError> {
    if object_sets.is_empty() {
        return Err(SynthesisError::NoInputData);
    }

    let by_name: HashMap<String, &ClassifiedFields> = classified_by_object
        .iter()
        .map(|(name, fields)| (name.to_lowercase(), fields))
        .collect();

    let mut body = String::new();
    let mut attachment_seen = false;
    for set in object_sets {
        if is_attachment(&set.object_name) {
            attachment_seen = true;
            continue;
        }
        let Some(classified) = by_name.get(&set.object_name.to_lowercase()) else {
            continue;
        };
        if let Some(block) = object_block(set, classified) {
            body.push_str(&block);
        }
    }

    if body.is_empty() {
        return Err(if attachment_seen {
            SynthesisError::OnlyAttachmentReferenced
        } else {
            SynthesisError::NoServerDataFound
        });
    }
    Ok(body)
}

/// The fixed seed block for the reserved attachment object.
pub fn attachment_block() -> String {
    "Attachment attachObj = new Attachment(Name = 'Unit Test Attachment', \
     bodyBlob = Blob.valueOf('test body'), parentId = 'parentId');\n\t\tinsert attachObj;\n\t\t"
        .to_string()
}

/// Wrap a synthesized body in the `@isTest` class scaffold the generated
/// test file uses: a `Test<name>` class with a `@testSetup` method holding
/// the body and two stub test methods.
pub fn wrap_test_class(class_name: &str, body: &str) -> String {
    format!(
        "@isTest\nprivate class Test{class_name}{{\n\n\t@testSetup static void setup(){{\n\n\t\t\
         {body}\n\t}}\n\n\t@isTest static void testMethod1() {{\n\t\t// code_block\t\n\t}}\n\n\t\
         @isTest static void testMethod2() {{\n\t\t// code_block\t\n\t}}\n}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::describe::{classify_fields, RawFieldMetadata};

    fn lead_metadata() -> ClassifiedFields {
        classify_fields(&[
            RawFieldMetadata::new("Company", "string"),
            RawFieldMetadata::new("Email", "email"),
            RawFieldMetadata::new("LastName", "string").with_nillable(false),
        ])
        .unwrap()
    }

    fn lead_set(fields: &[&str]) -> ObjectFieldSet {
        ObjectFieldSet {
            object_name: "lead".to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn block_includes_required_and_referenced_fields() {
        let block = object_block(&lead_set(&["company"]), &lead_metadata()).unwrap();
        assert_eq!(
            block,
            "Lead leadObj = new Lead (\n\t\t\tCompany = 'test value',\n\t\t\t\
             LastName = 'test value'\n\t\t);\n\t\tinsert leadObj;\n\t\t"
        );
    }

    #[test]
    fn unreferenced_non_required_fields_stay_out() {
        let block = object_block(&lead_set(&["id"]), &lead_metadata()).unwrap();
        assert!(!block.contains("Company"));
        assert!(!block.contains("Email"));
        assert!(block.contains("LastName = 'test value'"));
    }

    #[test]
    fn empty_initializer_is_backfilled_with_one_field() {
        // No required fields, nothing referenced: the first combined field
        // is forced in.
        let classified = classify_fields(&[
            RawFieldMetadata::new("Email", "email"),
            RawFieldMetadata::new("Phone", "phone"),
        ])
        .unwrap();
        let block = object_block(&lead_set(&["nothing_matches"]), &classified).unwrap();
        assert!(block.contains("Email = 'testEmail@gmail.com'"));
        assert!(!block.contains("Phone"));
    }

    #[test]
    fn underscores_leave_the_variable_name() {
        let set = ObjectFieldSet {
            object_name: "purchase_order__c".to_string(),
            fields: vec!["id".to_string()],
        };
        let classified =
            classify_fields(&[RawFieldMetadata::new("Name", "string").with_nillable(false)])
                .unwrap();
        let block = object_block(&set, &classified).unwrap();
        assert!(block.starts_with("Purchase_order__c purchaseordercObj = new Purchase_order__c ("));
        assert!(block.contains("insert purchaseordercObj;"));
    }

    #[test]
    fn object_without_classified_fields_yields_no_block() {
        let classified = ClassifiedFields::default();
        assert_eq!(object_block(&lead_set(&["id"]), &classified), None);
    }

    #[test]
    fn body_covers_every_object_with_metadata() {
        let mut classified = HashMap::new();
        classified.insert("Lead".to_string(), lead_metadata());
        let body = synthesize_test_body(&[lead_set(&["company"])], &classified).unwrap();
        assert!(body.starts_with("Lead leadObj = new Lead ("));
        assert!(body.contains("insert leadObj;"));
    }

    #[test]
    fn attachment_objects_are_excluded() {
        let mut classified = HashMap::new();
        classified.insert("Lead".to_string(), lead_metadata());
        let sets = vec![
            ObjectFieldSet {
                object_name: "attachment".to_string(),
                fields: vec!["id".to_string()],
            },
            lead_set(&["company"]),
        ];
        let body = synthesize_test_body(&sets, &classified).unwrap();
        assert!(!body.contains("Attachment"));
        assert!(body.contains("leadObj"));
    }

    #[test]
    fn only_attachment_is_its_own_sentinel() {
        let sets = vec![ObjectFieldSet {
            object_name: "attachments".to_string(),
            fields: vec!["id".to_string()],
        }];
        assert_eq!(
            synthesize_test_body(&sets, &HashMap::new()),
            Err(SynthesisError::OnlyAttachmentReferenced)
        );
    }

    #[test]
    fn missing_metadata_for_everything_is_no_server_data() {
        assert_eq!(
            synthesize_test_body(&[lead_set(&["company"])], &HashMap::new()),
            Err(SynthesisError::NoServerDataFound)
        );
    }

    #[test]
    fn no_object_sets_is_no_input() {
        assert_eq!(
            synthesize_test_body(&[], &HashMap::new()),
            Err(SynthesisError::NoInputData)
        );
    }

    #[test]
    fn metadata_lookup_is_case_insensitive() {
        let mut classified = HashMap::new();
        classified.insert("LEAD".to_string(), lead_metadata());
        assert!(synthesize_test_body(&[lead_set(&["company"])], &classified).is_ok());
    }

    #[test]
    fn scaffold_embeds_the_body() {
        let scaffold = wrap_test_class("LeadService", "Lead leadObj;");
        assert!(scaffold.starts_with("@isTest\nprivate class TestLeadService{"));
        assert!(scaffold.contains("@testSetup static void setup(){\n\n\t\tLead leadObj;"));
        assert!(scaffold.contains("testMethod1"));
        assert!(scaffold.contains("testMethod2"));
        assert!(scaffold.ends_with("}"));
    }
}
