#![forbid(unsafe_code)]

//! HTML form generator.
//!
//! [`generate_html`] renders a field list as a single `<form>` element with
//! one block per field, in list order. Each field type has a fixed markup
//! shape; attributes always appear as `type`/`id`/`name`, then `class`, then
//! `placeholder`, then `required`, then `value`/`checked`.
//!
//! Styling is either Tailwind utility classes ([`HtmlOptions::tailwind`]) or
//! no styling at all. `include_styles` is accepted for compatibility but does
//! not change the output.
//!
//! ```
//! use formsmith_core::{Field, FieldType};
//! use formsmith_export::html::{HtmlOptions, generate_html};
//!
//! let fields = [Field::new("f1", FieldType::Text)];
//! let html = generate_html(&fields, &HtmlOptions::plain());
//! assert!(html.starts_with("<form>\n"));
//! assert!(html.contains(r#"<input type="text" id="text_field" name="text_field""#));
//! ```

use formsmith_core::{Field, FieldType};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for HTML export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Emit Tailwind `class` attributes.
    pub include_tailwind: bool,
    /// Reserved. Has no effect on the generated markup.
    pub include_styles: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            include_tailwind: false,
            include_styles: true,
        }
    }
}

impl HtmlOptions {
    /// Unstyled markup.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Markup with Tailwind utility classes.
    #[must_use]
    pub fn tailwind() -> Self {
        Self {
            include_tailwind: true,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Class table
// ---------------------------------------------------------------------------

/// Styled element roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Form,
    Label,
    Input,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Button,
    Fieldset,
    Legend,
}

impl Element {
    fn tailwind_classes(self) -> &'static str {
        match self {
            Self::Form => "max-w-2xl mx-auto p-8 bg-white dark:bg-gray-900 rounded-lg shadow-lg",
            Self::Label => "block mb-2 font-semibold text-gray-700 dark:text-gray-300",
            Self::Input | Self::Select => {
                "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md \
                 focus:outline-none focus:ring-2 focus:ring-blue-500 dark:bg-gray-800 \
                 dark:text-white mb-4"
            }
            Self::Textarea => {
                "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md \
                 focus:outline-none focus:ring-2 focus:ring-blue-500 dark:bg-gray-800 \
                 dark:text-white mb-4 min-h-[120px] resize-y"
            }
            Self::Radio | Self::Checkbox => "mr-2",
            Self::Button => {
                "bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-md \
                 transition-colors duration-200"
            }
            Self::Fieldset => "border border-gray-300 dark:border-gray-600 rounded-md p-4 mb-4",
            Self::Legend => "font-semibold text-gray-700 dark:text-gray-300 px-2",
        }
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Render `fields` as an HTML `<form>`.
#[must_use]
pub fn generate_html(fields: &[Field], options: &HtmlOptions) -> String {
    let mut out = String::with_capacity(64 + fields.len() * 256);
    let writer = FieldWriter { options };

    out.push_str("<form");
    writer.class_attr(&mut out, Element::Form);
    out.push_str(">\n");

    for field in fields {
        writer.write_field(&mut out, field);
    }

    out.push_str("</form>");
    out
}

struct FieldWriter<'a> {
    options: &'a HtmlOptions,
}

impl FieldWriter<'_> {
    /// Append ` class="..."` when Tailwind is enabled.
    fn class_attr(&self, out: &mut String, element: Element) {
        if self.options.include_tailwind {
            out.push_str(" class=\"");
            out.push_str(element.tailwind_classes());
            out.push('"');
        }
    }

    fn write_field(&self, out: &mut String, field: &Field) {
        match field.kind() {
            FieldType::Text | FieldType::Email | FieldType::Password => {
                self.write_input(out, field)
            }
            FieldType::Textarea => self.write_textarea(out, field),
            FieldType::Select => self.write_select(out, field),
            FieldType::Radio => self.write_radio(out, field),
            FieldType::Checkbox => self.write_checkbox(out, field),
            FieldType::Submit => self.write_submit(out, field),
        }
    }

    /// `<label for=name>` line, skipped when the label is empty.
    fn write_label(&self, out: &mut String, field: &Field) {
        if field.label.is_empty() {
            return;
        }
        out.push_str("    <label for=\"");
        escape_into(out, &field.name);
        out.push('"');
        self.class_attr(out, Element::Label);
        out.push('>');
        write_label_text(out, field);
        out.push_str("</label>\n");
    }

    fn write_input(&self, out: &mut String, field: &Field) {
        out.push_str("  <div>\n");
        self.write_label(out, field);
        out.push_str("    <input type=\"");
        out.push_str(field.kind().as_str());
        out.push('"');
        write_id_name(out, &field.name);
        self.class_attr(out, Element::Input);
        write_placeholder(out, field);
        if field.is_required() {
            out.push_str(" required");
        }
        if field.value.is_truthy() {
            out.push_str(" value=\"");
            escape_into(out, field.value.display_text());
            out.push('"');
        }
        out.push_str(">\n  </div>\n\n");
    }

    fn write_textarea(&self, out: &mut String, field: &Field) {
        out.push_str("  <div>\n");
        self.write_label(out, field);
        out.push_str("    <textarea");
        write_id_name(out, &field.name);
        self.class_attr(out, Element::Textarea);
        write_placeholder(out, field);
        if field.is_required() {
            out.push_str(" required");
        }
        out.push('>');
        escape_into(out, field.value.display_text());
        out.push_str("</textarea>\n  </div>\n\n");
    }

    fn write_select(&self, out: &mut String, field: &Field) {
        out.push_str("  <div>\n");
        self.write_label(out, field);
        out.push_str("    <select");
        write_id_name(out, &field.name);
        self.class_attr(out, Element::Select);
        if field.is_required() {
            out.push_str(" required");
        }
        out.push_str(">\n");
        if let Some(placeholder) = field.placeholder_text() {
            out.push_str("      <option value=\"\" disabled selected>");
            escape_into(out, placeholder);
            out.push_str("</option>\n");
        }
        for option in field.options() {
            out.push_str("      <option value=\"");
            escape_into(out, option);
            out.push('"');
            if field.value.matches_option(option) {
                out.push_str(" selected");
            }
            out.push('>');
            escape_into(out, option);
            out.push_str("</option>\n");
        }
        out.push_str("    </select>\n  </div>\n\n");
    }

    fn write_radio(&self, out: &mut String, field: &Field) {
        out.push_str("  <fieldset");
        self.class_attr(out, Element::Fieldset);
        out.push_str(">\n");
        if !field.label.is_empty() {
            out.push_str("    <legend");
            self.class_attr(out, Element::Legend);
            out.push('>');
            write_label_text(out, field);
            out.push_str("</legend>\n");
        }
        for (index, option) in field.options().iter().enumerate() {
            out.push_str("    <div>\n      <input type=\"radio\" id=\"");
            write_option_id(out, &field.name, index);
            out.push_str("\" name=\"");
            escape_into(out, &field.name);
            out.push_str("\" value=\"");
            escape_into(out, option);
            out.push('"');
            self.class_attr(out, Element::Radio);
            if field.value.matches_option(option) {
                out.push_str(" checked");
            }
            if field.is_required() && index == 0 {
                out.push_str(" required");
            }
            out.push_str(">\n      <label for=\"");
            write_option_id(out, &field.name, index);
            out.push_str("\">");
            escape_into(out, option);
            out.push_str("</label>\n    </div>\n");
        }
        out.push_str("  </fieldset>\n\n");
    }

    fn write_checkbox(&self, out: &mut String, field: &Field) {
        out.push_str("  <div>\n    <input type=\"checkbox\"");
        write_id_name(out, &field.name);
        self.class_attr(out, Element::Checkbox);
        if field.is_required() {
            out.push_str(" required");
        }
        if field.value.is_truthy() {
            out.push_str(" checked");
        }
        out.push_str(">\n");
        if !field.label.is_empty() {
            out.push_str("    <label for=\"");
            escape_into(out, &field.name);
            out.push_str("\">");
            write_label_text(out, field);
            out.push_str("</label>\n");
        }
        out.push_str("  </div>\n\n");
    }

    fn write_submit(&self, out: &mut String, field: &Field) {
        out.push_str("  <button type=\"submit\"");
        self.class_attr(out, Element::Button);
        out.push('>');
        let caption = if field.label.is_empty() {
            "Submit"
        } else {
            &field.label
        };
        escape_into(out, caption);
        out.push_str("</button>\n\n");
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `name_index`, the id of one radio option.
fn write_option_id(out: &mut String, name: &str, index: usize) {
    escape_into(out, name);
    out.push('_');
    out.push_str(&index.to_string());
}

/// ` id="name" name="name"`.
fn write_id_name(out: &mut String, name: &str) {
    out.push_str(" id=\"");
    escape_into(out, name);
    out.push_str("\" name=\"");
    escape_into(out, name);
    out.push('"');
}

fn write_placeholder(out: &mut String, field: &Field) {
    if let Some(placeholder) = field.placeholder_text() {
        out.push_str(" placeholder=\"");
        escape_into(out, placeholder);
        out.push('"');
    }
}

/// Label text with a ` *` marker for required fields.
fn write_label_text(out: &mut String, field: &Field) {
    escape_into(out, &field.label);
    if field.is_required() {
        out.push_str(" *");
    }
}

/// HTML-escape a string into the output buffer.
fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_core::FieldValue;

    fn render(field: Field) -> String {
        generate_html(&[field], &HtmlOptions::plain())
    }

    // --- Form wrapper ---

    #[test]
    fn empty_list_renders_bare_form() {
        assert_eq!(generate_html(&[], &HtmlOptions::plain()), "<form>\n</form>");
    }

    #[test]
    fn tailwind_form_has_class() {
        let html = generate_html(&[], &HtmlOptions::tailwind());
        assert!(html.starts_with("<form class=\"max-w-2xl mx-auto"));
        assert!(html.ends_with("</form>"));
    }

    #[test]
    fn include_styles_is_inert() {
        let fields = [
            Field::new("a", FieldType::Text),
            Field::new("b", FieldType::Radio),
        ];
        let with = generate_html(&fields, &HtmlOptions::plain());
        let without = generate_html(
            &fields,
            &HtmlOptions {
                include_styles: false,
                ..HtmlOptions::plain()
            },
        );
        assert_eq!(with, without);
        assert!(!with.contains("style="));
        assert!(!with.contains("class="));
    }

    // --- Text-like inputs ---

    #[test]
    fn text_input_block() {
        let html = render(Field::new("f1", FieldType::Text));
        assert_eq!(
            html,
            "<form>\n  <div>\n    <label for=\"text_field\">Text Field</label>\n    \
             <input type=\"text\" id=\"text_field\" name=\"text_field\" \
             placeholder=\"Enter text...\">\n  </div>\n\n</form>"
        );
    }

    #[test]
    fn required_input_with_value() {
        let field = Field::new("f1", FieldType::Email)
            .with_required(true)
            .with_value("a@b.c");
        let html = render(field);
        assert!(html.contains("<label for=\"email\">Email Address *</label>"));
        assert!(html.contains(
            "<input type=\"email\" id=\"email\" name=\"email\" \
             placeholder=\"Enter your email...\" required value=\"a@b.c\">"
        ));
    }

    #[test]
    fn tailwind_input_class_precedes_placeholder() {
        let html = generate_html(&[Field::new("f1", FieldType::Password)], &HtmlOptions::tailwind());
        let class_at = html.find("<input type=\"password\" id=\"password\" name=\"password\" class=\"w-full");
        let placeholder_at = html.find("placeholder=");
        assert!(class_at.is_some());
        assert!(class_at < placeholder_at);
    }

    #[test]
    fn tailwind_classes_on_choice_and_submit_blocks() {
        let fields = [
            Field::new("f1", FieldType::Select),
            Field::new("f2", FieldType::Radio).with_options(["A"]),
            Field::new("f3", FieldType::Checkbox),
            Field::new("f4", FieldType::Submit),
        ];
        let html = generate_html(&fields, &HtmlOptions::tailwind());

        assert!(html.contains(&format!(
            "<select id=\"select_field\" name=\"select_field\" class=\"{}\">",
            Element::Select.tailwind_classes()
        )));
        assert!(html.contains(&format!(
            "<fieldset class=\"{}\">\n    <legend class=\"{}\">Select One</legend>",
            Element::Fieldset.tailwind_classes(),
            Element::Legend.tailwind_classes()
        )));
        assert!(html.contains(
            "<input type=\"radio\" id=\"radio_field_0\" name=\"radio_field\" value=\"A\" \
             class=\"mr-2\">"
        ));
        assert!(html.contains(
            "<input type=\"checkbox\" id=\"checkbox_field\" name=\"checkbox_field\" \
             class=\"mr-2\">"
        ));
        assert!(html.contains(&format!(
            "<button type=\"submit\" class=\"{}\">Submit Form</button>",
            Element::Button.tailwind_classes()
        )));
    }

    #[test]
    fn empty_label_is_omitted() {
        let html = render(Field::new("f1", FieldType::Text).with_label(""));
        assert!(!html.contains("<label"));
    }

    // --- Textarea ---

    #[test]
    fn textarea_contains_default_value() {
        let field = Field::new("f1", FieldType::Textarea).with_value("hello");
        let html = render(field);
        assert!(html.contains(
            "<textarea id=\"message\" name=\"message\" \
             placeholder=\"Enter your message...\">hello</textarea>"
        ));
    }

    // --- Select ---

    #[test]
    fn select_with_placeholder_and_selected_option() {
        let field = Field::new("f1", FieldType::Select).with_value("Option 2");
        let html = render(field);
        assert!(html.contains("<select id=\"select_field\" name=\"select_field\">\n"));
        assert!(
            html.contains("<option value=\"\" disabled selected>Choose an option...</option>")
        );
        assert!(html.contains("<option value=\"Option 1\">Option 1</option>"));
        assert!(html.contains("<option value=\"Option 2\" selected>Option 2</option>"));
        assert!(html.contains("</select>\n  </div>"));
    }

    #[test]
    fn select_without_placeholder() {
        let field = Field::new("f1", FieldType::Select)
            .with_placeholder("")
            .with_required(true);
        let html = render(field);
        assert!(!html.contains("disabled"));
        assert!(html.contains("<select id=\"select_field\" name=\"select_field\" required>"));
    }

    // --- Radio ---

    #[test]
    fn radio_group_block() {
        let field = Field::new("f1", FieldType::Radio)
            .with_options(["Yes", "No"])
            .with_value("No")
            .with_required(true);
        let html = render(field);
        assert_eq!(
            html,
            "<form>\n  <fieldset>\n    <legend>Select One *</legend>\n    <div>\n      \
             <input type=\"radio\" id=\"radio_field_0\" name=\"radio_field\" value=\"Yes\" \
             required>\n      <label for=\"radio_field_0\">Yes</label>\n    </div>\n    \
             <div>\n      <input type=\"radio\" id=\"radio_field_1\" name=\"radio_field\" \
             value=\"No\" checked>\n      <label for=\"radio_field_1\">No</label>\n    \
             </div>\n  </fieldset>\n\n</form>"
        );
    }

    // --- Checkbox ---

    #[test]
    fn checkbox_label_follows_control() {
        let html = render(Field::new("f1", FieldType::Checkbox).with_value(true));
        assert!(html.contains(
            "    <input type=\"checkbox\" id=\"checkbox_field\" name=\"checkbox_field\" checked>\n    \
             <label for=\"checkbox_field\">I agree to the terms</label>\n"
        ));
    }

    #[test]
    fn unchecked_checkbox() {
        let html = render(Field::new("f1", FieldType::Checkbox));
        assert!(!html.contains("checked"));
        assert_eq!(
            Field::new("f1", FieldType::Checkbox).value,
            FieldValue::Flag(false)
        );
    }

    // --- Submit ---

    #[test]
    fn submit_uses_label_or_fallback() {
        let html = render(Field::new("f1", FieldType::Submit));
        assert!(html.contains("  <button type=\"submit\">Submit Form</button>\n\n"));

        let html = render(Field::new("f1", FieldType::Submit).with_label(""));
        assert!(html.contains("<button type=\"submit\">Submit</button>"));
    }

    #[test]
    fn submit_ignores_required() {
        let html = render(Field::new("f1", FieldType::Submit).with_required(true));
        assert!(!html.contains("required"));
    }

    // --- Escaping ---

    #[test]
    fn user_text_is_escaped() {
        let field = Field::new("f1", FieldType::Text)
            .with_label("<b>Name</b>")
            .with_placeholder("say \"hi\" & go");
        let html = render(field);
        assert!(html.contains("&lt;b&gt;Name&lt;/b&gt;"));
        assert!(html.contains("placeholder=\"say &quot;hi&quot; &amp; go\""));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn escape_passthrough_normal() {
        let mut out = String::new();
        escape_into(&mut out, "Hello World 123");
        assert_eq!(out, "Hello World 123");
    }
}
