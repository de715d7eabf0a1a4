use cruet::case::pascal::to_pascal_case;
use std::fmt::Display;

use crate::constants::CLASS_SUFFIX;

/// The type of fields available to add in a field group.
///
/// The catalog is closed and ordered; it is offered to the user in exactly
/// this order.
///
/// See <https://www.advancedcustomfields.com/resources/#field-types>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Wysiwyg,
    Image,
    Relationship,
    Link,
    PageLink,
    Gallery,
}

impl FieldType {
    /// Catalog presentation order.
    pub const ALL: &'static [FieldType] = &[
        FieldType::Text,
        FieldType::Wysiwyg,
        FieldType::Image,
        FieldType::Relationship,
        FieldType::Link,
        FieldType::PageLink,
        FieldType::Gallery,
    ];

    /// The label shown in the selection menu.
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Wysiwyg => "wysiwyg",
            FieldType::Image => "image",
            FieldType::Relationship => "relationship",
            FieldType::Link => "link",
            FieldType::PageLink => "page link",
            FieldType::Gallery => "gallery",
        }
    }

    /// The PascalCase fragment used to build the `add*` method name in
    /// generated code, e.g. `page link` becomes `PageLink`.
    pub fn method_fragment(&self) -> String {
        to_pascal_case(self.label())
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One field of a group. Built once by the wizard, then read-only.
///
/// `slug` and `label` are embedded verbatim into the generated class as
/// string literals. `slug` is expected to be unique within the group; the
/// wizard does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub r#type: FieldType,
    pub slug: String,
    pub label: String,
    pub required: bool,
}

/// Placement contexts a field group can be attached to.
///
/// Closed, ordered catalog; offered to the user in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationWhen {
    PostType,
    PostTemplate,
    PostStatus,
    PostFormat,
    PostCategory,
    PostTaxonomy,
    PageTemplate,
    PageType,
    PageParent,
    Page,
    CurrentUser,
}

impl LocationWhen {
    pub const ALL: &'static [LocationWhen] = &[
        LocationWhen::PostType,
        LocationWhen::PostTemplate,
        LocationWhen::PostStatus,
        LocationWhen::PostFormat,
        LocationWhen::PostCategory,
        LocationWhen::PostTaxonomy,
        LocationWhen::PageTemplate,
        LocationWhen::PageType,
        LocationWhen::PageParent,
        LocationWhen::Page,
        LocationWhen::CurrentUser,
    ];

    /// The identifier used both in menus and in generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationWhen::PostType => "post_type",
            LocationWhen::PostTemplate => "post_template",
            LocationWhen::PostStatus => "post_status",
            LocationWhen::PostFormat => "post_format",
            LocationWhen::PostCategory => "post_category",
            LocationWhen::PostTaxonomy => "post_taxonomy",
            LocationWhen::PageTemplate => "page_template",
            LocationWhen::PageType => "page_type",
            LocationWhen::PageParent => "page_parent",
            LocationWhen::Page => "page",
            LocationWhen::CurrentUser => "current_user",
        }
    }
}

impl Display for LocationWhen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Equality operator of a placement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
}

impl Operator {
    pub const ALL: &'static [Operator] = &[Operator::Equals, Operator::NotEquals];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single placement rule of a field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub when: LocationWhen,
    pub operator: Operator,
    pub value: String,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.when, self.operator, self.value)
    }
}

/// A complete field group description, as collected by one wizard run.
///
/// Field order is significant: it is preserved verbatim in the generated
/// class. The wizard guarantees at least one field before a group reaches
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub slug: String,
    pub location: Location,
    pub fields: Vec<FieldSpec>,
}

impl GroupSpec {
    /// PascalCase form of the group slug, used for the artifact file name.
    pub fn file_stem(&self) -> String {
        to_pascal_case(&self.slug)
    }

    /// The generated class name, e.g. `product_page` becomes
    /// `ProductPageACFGroup`.
    pub fn class_name(&self) -> String {
        format!("{}{}", self.file_stem(), CLASS_SUFFIX)
    }
}
