//! Property-based invariant tests for the serializers.
//!
//! 1. JSON output parses back to a field list equal to the input.
//! 2. HTML has exactly one `<form>` and one block per field, in input order.
//! 3. Both generators are deterministic.
//! 4. Arbitrary user text never injects markup.

use formsmith_core::{Field, FieldType};
use formsmith_export::{FormDocument, HtmlOptions, generate_html, generate_json};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn kind_strategy() -> impl Strategy<Value = FieldType> {
    prop::sample::select(FieldType::ALL.to_vec())
}

fn field_strategy() -> impl Strategy<Value = (FieldType, String, String, bool)> {
    (kind_strategy(), "\\PC{0,16}", "[a-z_]{1,12}", any::<bool>())
}

fn fields_strategy() -> impl Strategy<Value = Vec<Field>> {
    prop::collection::vec(field_strategy(), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, label, name, required))| {
                let field = Field::new(format!("field_{i}"), kind)
                    .with_label(label)
                    .with_name(name);
                if kind.can_be_required() {
                    field.with_required(required)
                } else {
                    field
                }
            })
            .collect()
    })
}

/// Opening tag each field type renders exactly once per block.
fn block_marker(kind: FieldType) -> &'static str {
    match kind {
        FieldType::Text | FieldType::Email | FieldType::Password => "    <input type=\"",
        FieldType::Textarea => "    <textarea",
        FieldType::Select => "    <select",
        FieldType::Radio => "  <fieldset",
        FieldType::Checkbox => "    <input type=\"checkbox\"",
        FieldType::Submit => "  <button",
    }
}

proptest! {
    #[test]
    fn json_round_trips(fields in fields_strategy()) {
        let json = generate_json(&fields).unwrap();
        let doc: FormDocument = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(doc.fields, fields);
    }

    #[test]
    fn html_has_one_form_and_one_block_per_field(
        fields in fields_strategy(),
        tailwind in any::<bool>(),
    ) {
        let options = HtmlOptions { include_tailwind: tailwind, ..HtmlOptions::default() };
        let html = generate_html(&fields, &options);

        prop_assert_eq!(html.matches("<form").count(), 1);
        prop_assert_eq!(html.matches("</form>").count(), 1);
        prop_assert!(html.ends_with("</form>"));
        // Every block ends with a blank line.
        prop_assert_eq!(html.matches("\n\n").count(), fields.len());

        let mut cursor = 0;
        for field in &fields {
            let marker = block_marker(field.kind());
            let found = html[cursor..].find(marker);
            prop_assert!(found.is_some(), "missing block for {:?}", field.kind());
            cursor += found.unwrap_or_default() + marker.len();
        }
    }

    #[test]
    fn generators_are_deterministic(fields in fields_strategy()) {
        prop_assert_eq!(
            generate_html(&fields, &HtmlOptions::tailwind()),
            generate_html(&fields.clone(), &HtmlOptions::tailwind())
        );
        prop_assert_eq!(generate_json(&fields).unwrap(), generate_json(&fields.clone()).unwrap());
    }

    #[test]
    fn labels_cannot_inject_markup(label in "\\PC{1,24}") {
        let fields = [Field::new("f1", FieldType::Textarea).with_label(label.clone())];
        let html = generate_html(&fields, &HtmlOptions::plain());
        // form, div, label, textarea and their closing tags.
        prop_assert_eq!(html.matches('<').count(), 8);
    }
}
