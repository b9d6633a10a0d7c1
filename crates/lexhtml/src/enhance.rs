//! Presentation enhancement of rendered markup.
//!
//! Two passes over a parsed fragment:
//!
//! - images carrying the editor image class get responsive sizing and are
//!   marked with the processed attribute;
//! - top-level tables are wrapped in a scroll container, unless their
//!   parent already is one.
//!
//! Both passes are idempotent: running [`enhance`] on its own output
//! changes nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::node::Node;
use crate::utilities::append_style;

static MAX_WIDTH_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(^|;)\s*max-width\s*:").unwrap());
static HEIGHT_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(^|;)\s*height\s*:").unwrap());

/// Options for the enhancement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceOptions {
    /// Class marking images produced by the serializer
    pub image_class: String,

    /// Attribute set on images once processed
    pub processed_attribute: String,

    /// Class of the scroll container wrapped around tables
    pub table_wrapper_class: String,

    /// Add `loading="lazy"` and `decoding="async"` to images
    pub lazy_load_images: bool,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            image_class: "lexical-image".to_string(),
            processed_attribute: "data-enhanced".to_string(),
            table_wrapper_class: "table-scroll-wrapper".to_string(),
            lazy_load_images: true,
        }
    }
}

#[derive(Default)]
struct Counts {
    images: usize,
    tables: usize,
}

/// Enhance images and tables below `root` in place
pub fn enhance(root: &mut Node, options: &EnhanceOptions) {
    let mut counts = Counts::default();
    enhance_children(root, false, options, &mut counts);
    trace!(
        images = counts.images,
        tables = counts.tables,
        "enhanced rendered markup"
    );
}

fn enhance_children(
    parent: &mut Node,
    inside_table: bool,
    options: &EnhanceOptions,
    counts: &mut Counts,
) {
    let parent_is_wrapper = parent.has_class(&options.table_wrapper_class);
    let inside_table = inside_table || parent.is_tag("table");

    for child in parent.children_mut() {
        if !child.is_element() {
            continue;
        }

        if child.is_tag("img") {
            if enhance_image(child, options) {
                counts.images += 1;
            }
        } else if child.is_tag("table") && !inside_table && !parent_is_wrapper {
            wrap_table(child, options);
            counts.tables += 1;
        }

        enhance_children(child, inside_table, options, counts);
    }
}

/// Apply responsive sizing to one image. Returns false if skipped.
fn enhance_image(image: &mut Node, options: &EnhanceOptions) -> bool {
    if !image.has_class(&options.image_class) || image.has_attr(&options.processed_attribute) {
        return false;
    }

    let style = image.attr("style").unwrap_or_default();
    let mut additions = Vec::new();
    if !MAX_WIDTH_DECL.is_match(style) {
        additions.push("max-width: 100%;");
    }
    if !HEIGHT_DECL.is_match(style) {
        additions.push("height: auto;");
    }
    if !additions.is_empty() {
        let style = append_style(style, &additions.join(" "));
        image.set_attr("style", &style);
    }

    if options.lazy_load_images {
        if !image.has_attr("loading") {
            image.set_attr("loading", "lazy");
        }
        if !image.has_attr("decoding") {
            image.set_attr("decoding", "async");
        }
    }

    image.set_attr(&options.processed_attribute, "true");
    image.sort_attributes();
    true
}

/// Replace the table in `slot` with a wrapper holding it
fn wrap_table(slot: &mut Node, options: &EnhanceOptions) {
    let mut wrapper = Node::element("div");
    wrapper.add_class(&options.table_wrapper_class);
    let table = std::mem::replace(slot, wrapper);
    slot.add_child(table);
}
