//! Shared advanced validation settings
//!
//! The base set every advanced field type starts from. Field types reorder
//! it; they do not edit it.

use serde_json::json;

use crate::model::Descriptor;

fn checkbox(key: &str, label: &str, tooltip: &str) -> Descriptor {
    Descriptor::new(key)
        .with_type("checkbox")
        .with_label(label)
        .with_attr("input", json!(true))
        .with_attr("tooltip", json!(tooltip))
}

fn number(key: &str, label: &str) -> Descriptor {
    Descriptor::new(key)
        .with_type("number")
        .with_label(label)
        .with_attr("input", json!(true))
        .with_attr("placeholder", json!(label))
}

fn textfield(key: &str, label: &str, tooltip: &str) -> Descriptor {
    Descriptor::new(key)
        .with_type("textfield")
        .with_label(label)
        .with_attr("input", json!(true))
        .with_attr("tooltip", json!(tooltip))
}

fn panel(key: &str, title: &str) -> Descriptor {
    Descriptor::new(key)
        .with_type("panel")
        .with_attr("title", json!(title))
        .with_attr("collapsible", json!(true))
        .with_attr("collapsed", json!(true))
}

/// Advanced validation descriptors in their shared default order
pub fn advanced_validation() -> Vec<Descriptor> {
    vec![
        checkbox(
            "validate.required",
            "Required",
            "A required field must be filled in before the form can be submitted.",
        ),
        checkbox(
            "unique",
            "Unique",
            "Makes sure the data submitted for this field is unique.",
        ),
        Descriptor::new("validateOn")
            .with_type("select")
            .with_label("Validate On")
            .with_attr("input", json!(true))
            .with_attr("dataSrc", json!("values"))
            .with_attr(
                "data",
                json!({
                    "values": [
                        { "label": "Change", "value": "change" },
                        { "label": "Blur", "value": "blur" }
                    ]
                }),
            ),
        textfield(
            "errorLabel",
            "Error Label",
            "The label for this field when an error occurs.",
        ),
        textfield(
            "validate.customMessage",
            "Custom Error Message",
            "Error message displayed if any error occurred.",
        ),
        number("validate.minLength", "Minimum Length"),
        number("validate.maxLength", "Maximum Length"),
        number("validate.minWords", "Minimum Word Length"),
        number("validate.maxWords", "Maximum Word Length"),
        textfield(
            "validate.pattern",
            "Regular Expression Pattern",
            "The regular expression pattern test that the field value must pass.",
        ),
        panel("kickbox", "Kickbox").with_component(checkbox(
            "kickbox.enabled",
            "Enable",
            "Enable Kickbox validation for this email field.",
        )),
        Descriptor::new("errors")
            .with_type("textarea")
            .with_label("Error Messages")
            .with_attr("editor", json!("ace"))
            .with_attr("as", json!("json"))
            .with_attr("input", json!(true)),
        panel("custom-validation-js", "Custom Validation")
            .with_component(
                Descriptor::new("validate.custom")
                    .with_type("textarea")
                    .with_attr("editor", json!("ace"))
                    .with_attr("input", json!(true)),
            )
            .with_component(checkbox(
                "validate.customPrivate",
                "Secret Validation",
                "Only run this validation on the server.",
            )),
        panel("json-validation-json", "JSONLogic Validation").with_component(
            Descriptor::new("validate.json")
                .with_type("textarea")
                .with_attr("editor", json!("ace"))
                .with_attr("as", json!("json"))
                .with_attr("input", json!(true)),
        ),
        checkbox(
            "validate.isUseForCopy",
            "Use For Copy",
            "Validate the value when it is copied to another form.",
        ),
    ]
}
