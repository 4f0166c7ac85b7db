//! WebAssembly bindings for Apexseed
//!
//! This module provides JavaScript-friendly APIs for the three pipeline
//! entry points, so an editor-extension host can run extraction and
//! synthesis without shelling out.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { extractQueries, classifyFields, synthesizeTestBody } from 'apexseed';
//!
//! await init();
//!
//! const extracted = extractQueries(apexSource);
//! if (!extracted.success) { /* NoInputData / NoQueryFound */ }
//!
//! const classified = {};
//! for (const obj of extracted.objects) {
//!   // describe.fields comes from the schema-describe service
//!   const result = classifyFields(describe.fields);
//!   if (result.success) classified[obj.objectName] = result.classified;
//! }
//!
//! const body = synthesizeTestBody(extracted.objects, classified);
//! if (body.success) console.log(body.body);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use std::collections::HashMap;

use crate::aggregate::ObjectFieldSet;
use crate::synth::describe::{ClassifiedFields, RawFieldMetadata};

/// Helper to serialize values as plain JS objects (not Maps)
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}

fn error_value(message: impl std::fmt::Display) -> JsValue {
    to_js_value(&serde_json::json!({
        "success": false,
        "error": message.to_string(),
    }))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Extract every SOQL query from Apex source and aggregate projected fields
/// per target object.
///
/// Returns `{success: true, objects: [{objectName, fields}]}` or
/// `{success: false, error}` for the no-input / no-query sentinels.
#[wasm_bindgen(js_name = extractQueries)]
pub fn extract_queries(source: &str) -> JsValue {
    match crate::aggregate::extract_and_aggregate(source) {
        Ok(sets) => to_js_value(&serde_json::json!({
            "success": true,
            "objects": sets,
        })),
        Err(e) => error_value(e),
    }
}

/// Classify one object's field-describe array.
///
/// `fields` is the `fields` array of a schema-describe payload. Returns
/// `{success: true, classified: {required, nonRequired}}`.
#[wasm_bindgen(js_name = classifyFields)]
pub fn classify_fields(fields: JsValue) -> JsValue {
    let fields: Vec<RawFieldMetadata> = match serde_wasm_bindgen::from_value(fields) {
        Ok(fields) => fields,
        Err(e) => return error_value(e),
    };

    match crate::synth::classify_fields(&fields) {
        Some(classified) => to_js_value(&serde_json::json!({
            "success": true,
            "classified": classified,
        })),
        None => error_value("no field metadata to classify"),
    }
}

/// Synthesize the `@testSetup` body for the extracted objects.
///
/// `objects` is the `objects` array returned by `extractQueries`;
/// `classified` maps object names to `classifyFields` results.
#[wasm_bindgen(js_name = synthesizeTestBody)]
pub fn synthesize_test_body(objects: JsValue, classified: JsValue) -> JsValue {
    let sets: Vec<ObjectFieldSet> = match serde_wasm_bindgen::from_value(objects) {
        Ok(sets) => sets,
        Err(e) => return error_value(e),
    };
    let classified: HashMap<String, ClassifiedFields> =
        match serde_wasm_bindgen::from_value(classified) {
            Ok(classified) => classified,
            Err(e) => return error_value(e),
        };

    match crate::synth::synthesize_test_body(&sets, &classified) {
        Ok(body) => to_js_value(&serde_json::json!({
            "success": true,
            "body": body,
        })),
        Err(e) => error_value(e),
    }
}

/// The fixed attachment seed block, for the only-attachment fallback path.
#[wasm_bindgen(js_name = attachmentBlock)]
pub fn attachment_block() -> String {
    crate::synth::attachment_block()
}

/// Wrap a synthesized body in the generated `@isTest` class scaffold.
#[wasm_bindgen(js_name = wrapTestClass)]
pub fn wrap_test_class(class_name: &str, body: &str) -> String {
    crate::synth::wrap_test_class(class_name, body)
}
