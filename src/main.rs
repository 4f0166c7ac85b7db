use std::collections::HashMap;

use apexseed::{
    classify_fields, extract_and_aggregate, synthesize_test_body, wrap_test_class, PicklistEntry,
    RawFieldMetadata,
};

fn main() {
    let source = r#"
public class AccountService {
    // Cached lookup used by the nightly batch
    public List<Account> getAccountsWithContacts() {
        return [SELECT Id, Name, Industry, (SELECT Id, Email FROM Contacts) FROM Account];
    }

    /* Leads are filtered separately so the batch can
       throttle them independently. */
    public List<Lead> getHotLeads() {
        return [SELECT Id, Company FROM Lead WHERE Rating = 'Hot'];
    }
}
    "#;

    println!("=== Apex Test-Data Seeder Demo ===\n");

    println!("--- Extracting queries ---");
    let sets = match extract_and_aggregate(source) {
        Ok(sets) => sets,
        Err(e) => {
            eprintln!("Extraction stopped: {}", e);
            return;
        }
    };
    for set in &sets {
        println!("  {}: {:?}", set.object_name, set.fields);
    }
    println!();

    println!("--- Classifying fields (demo metadata) ---");
    let mut classified = HashMap::new();
    for (object, fields) in demo_metadata() {
        if let Some(partition) = classify_fields(&fields) {
            println!(
                "  {}: {} required, {} non-required",
                object,
                partition.required.len(),
                partition.non_required.len()
            );
            classified.insert(object, partition);
        }
    }
    println!();

    println!("--- Synthesizing test body ---");
    match synthesize_test_body(&sets, &classified) {
        Ok(body) => println!("{}", wrap_test_class("AccountService", &body)),
        Err(e) => eprintln!("Synthesis stopped: {}", e),
    }
}

/// Hand-built stand-in for the schema-describe service.
fn demo_metadata() -> Vec<(String, Vec<RawFieldMetadata>)> {
    vec![
        (
            "Account".to_string(),
            vec![
                RawFieldMetadata::new("Name", "string").with_nillable(false),
                RawFieldMetadata::new("Industry", "picklist").with_picklist_values(vec![
                    PicklistEntry::new("Agriculture"),
                    PicklistEntry::new("Banking"),
                ]),
                RawFieldMetadata::new("Phone", "phone"),
                RawFieldMetadata::new("OwnerId", "reference"),
            ],
        ),
        (
            "Contact".to_string(),
            vec![
                RawFieldMetadata::new("LastName", "string").with_nillable(false),
                RawFieldMetadata::new("Email", "email"),
            ],
        ),
        (
            "Lead".to_string(),
            vec![
                RawFieldMetadata::new("LastName", "string").with_nillable(false),
                RawFieldMetadata::new("Company", "string").with_nillable(false),
                RawFieldMetadata::new("Rating", "picklist"),
            ],
        ),
    ]
}
