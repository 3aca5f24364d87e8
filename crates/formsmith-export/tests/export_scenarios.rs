//! End-to-end scenarios: drive a `FormBuilder`, then export.

use formsmith_core::{FieldPatch, FieldType, FormBuilder};
use formsmith_export::{FormDocument, HtmlOptions, generate_html, generate_json};

#[test]
fn add_text_field_then_export_html() {
    let mut form = FormBuilder::new();
    form.add_field(FieldType::Text);
    let html = generate_html(form.fields(), &HtmlOptions { include_tailwind: false, ..HtmlOptions::default() });

    assert_eq!(html.matches("<form").count(), 1);
    assert!(html.contains("<input type=\"text\" id=\"text_field\" name=\"text_field\""));
    assert!(html.contains(">Text Field</label>"));
}

#[test]
fn reorder_is_reflected_in_json() {
    let mut form = FormBuilder::new();
    let a = form.add_field(FieldType::Select);
    let b = form.add_field(FieldType::Radio);
    form.reorder_fields(0, 1).unwrap();

    let json = generate_json(form.fields()).unwrap();
    let b_at = json.find(&format!("\"id\": \"{b}\"")).unwrap();
    let a_at = json.find(&format!("\"id\": \"{a}\"")).unwrap();
    assert!(b_at < a_at);
}

#[test]
fn undo_after_clear_round_trips_through_json() {
    let mut form = FormBuilder::new();
    form.add_field(FieldType::Email);
    form.add_field(FieldType::Checkbox);
    form.add_field(FieldType::Submit);
    let before = generate_json(form.fields()).unwrap();

    form.clear_fields();
    assert_eq!(generate_json(form.fields()).unwrap(), "{\n  \"fields\": []\n}");

    form.undo();
    assert_eq!(generate_json(form.fields()).unwrap(), before);
}

#[test]
fn duplicate_shows_up_last_in_html() {
    let mut form = FormBuilder::new();
    let email = form.add_field(FieldType::Email);
    form.update_field(&email, FieldPatch::new().name("email").label("Email"))
        .unwrap();
    form.add_field(FieldType::Submit);
    form.duplicate_field(&email).unwrap();

    let html = generate_html(form.fields(), &HtmlOptions::plain());
    let submit_at = html.find("<button").unwrap();
    let copy_at = html.find("name=\"email_copy\"").unwrap();
    assert!(submit_at < copy_at);
    assert!(html.contains(">Email (Copy)</label>"));
}

#[test]
fn full_form_parses_back() {
    let mut form = FormBuilder::new();
    for kind in FieldType::ALL {
        form.add_field(kind);
    }
    let json = generate_json(form.fields()).unwrap();
    let doc: FormDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.fields.as_slice(), form.fields());
}
