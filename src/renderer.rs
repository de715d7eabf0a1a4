use log::warn;

use crate::constants::tokens;
use crate::group::{FieldSpec, GroupSpec};

/// Renders a stub into the final artifact text.
///
/// Substitution is literal and sequential, exactly one pass per token:
/// unknown text in the stub is left untouched, and a token absent from the
/// stub is a silent no-op. The operation is pure; the same group and stub
/// always produce byte-identical output.
///
/// User-supplied values are inserted into generated string literals without
/// escaping. A value containing the `'` delimiter therefore produces a
/// malformed class; the renderer only warns about it.
pub fn render(group: &GroupSpec, stub: &str) -> String {
    warn_on_delimiter_collision(group);

    let fields_block: String =
        group.fields.iter().map(field_markup).collect::<Vec<_>>().join("");

    stub.replace(tokens::CLASS_NAME, &group.class_name())
        .replace(tokens::GROUP_SLUG, &group.slug)
        .replace(tokens::LOCATION_WHEN, group.location.when.as_str())
        .replace(tokens::LOCATION_EQUAL, group.location.operator.as_str())
        .replace(tokens::LOCATION_VALUE, &group.location.value)
        .replace(tokens::FIELDS_BLOCK, &fields_block)
}

/// Builds the fixed-shape builder call for one field. The `required` flag
/// renders as `1`/`0` only here; the model keeps it a bool.
pub fn field_markup(field: &FieldSpec) -> String {
    format!(
        "->add{method}(
            '{slug}',
            array(
                'label'    => '{label}',
                'required' => {required},
            )
        )",
        method = field.r#type.method_fragment(),
        slug = field.slug,
        label = field.label,
        required = if field.required { 1 } else { 0 },
    )
}

fn warn_on_delimiter_collision(group: &GroupSpec) {
    let check = |what: &str, value: &str| {
        if value.contains('\'') {
            warn!("{} '{}' contains a quote character; the generated class will be malformed", what, value);
        }
    };

    check("group slug", &group.slug);
    check("location value", &group.location.value);
    for field in &group.fields {
        check("field slug", &field.slug);
        check("field label", &field.label);
    }
}
