//! Node rendering
//!
//! Converts document nodes into HTML fragments. Each node kind is handled
//! by one arm of [`write_node`]; unknown kinds render nothing.

use tracing::debug;

use crate::document::{Alignment, Node};
use crate::options::RenderOptions;
use crate::text::write_text;
use crate::utilities::{escape_html_into, format_dimension, is_unsafe_url};

/// Render a node and its descendants to an HTML fragment
pub fn render_node(node: &Node, options: &RenderOptions) -> String {
    let mut output = String::with_capacity(1024);
    write_node(node, options, &mut output);
    output
}

fn write_node(node: &Node, options: &RenderOptions, out: &mut String) {
    match node {
        Node::Root(children) => write_nodes(children, options, out),

        Node::Paragraph { align, children } => {
            let start = out.len();
            if !write_block("p", *align, children, options, out)
                && options.preserve_empty_paragraphs
            {
                out.truncate(start);
                open_tag("p", *align, out);
                out.push_str("<br></p>");
            }
        }

        Node::Heading {
            level,
            align,
            children,
        } => {
            if !(1..=6).contains(level) {
                debug!(level, "skipping heading with out-of-range level");
                return;
            }
            let tag = format!("h{}", level);
            write_block(&tag, *align, children, options, out);
        }

        Node::Quote { align, children } => {
            write_block("blockquote", *align, children, options, out);
        }

        Node::List {
            ordered,
            start,
            items,
        } => write_list(*ordered, *start, items, options, out),

        Node::ListItem(children) => {
            out.push_str("<li>");
            write_nodes(children, options, out);
            out.push_str("</li>");
        }

        Node::Code { language, code } => {
            if code.is_empty() {
                return;
            }
            out.push_str("<pre><code");
            if let Some(language) = language.as_deref().filter(|l| !l.is_empty()) {
                out.push_str(" data-language=\"");
                escape_html_into(language, out);
                out.push('"');
            }
            out.push('>');
            escape_html_into(code, out);
            out.push_str("</code></pre>");
        }

        Node::HorizontalRule => out.push_str("<hr>"),

        Node::Table(rows) => write_table(rows, options, out),

        Node::TableRow { is_header, cells } => {
            write_row(cells, is_header.unwrap_or(false), options, out)
        }

        Node::TableCell { header, children } => write_cell(*header, children, options, out),

        Node::Image {
            src,
            alt_text,
            width,
            height,
            max_width,
        } => write_image(src, alt_text, *width, *height, *max_width, options, out),

        Node::Link {
            url,
            target,
            rel,
            title,
            children,
        } => write_link(
            url,
            target.as_deref(),
            rel.as_deref(),
            title.as_deref(),
            children,
            options,
            out,
        ),

        Node::LineBreak => out.push_str("<br>"),

        Node::Tab => out.push('\t'),

        Node::Text { text, format } => write_text(text, *format, out),

        Node::Unknown { kind } => {
            debug!(kind = kind.as_str(), "skipping unknown node kind");
        }
    }
}

fn write_nodes(nodes: &[Node], options: &RenderOptions, out: &mut String) {
    for node in nodes {
        write_node(node, options, out);
    }
}

fn open_tag(tag: &str, align: Option<Alignment>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(align) = align {
        out.push_str(" style=\"text-align: ");
        out.push_str(align.as_css());
        out.push_str(";\"");
    }
    out.push('>');
}

/// Write a wrapping block element. Nothing is written, and `false` is
/// returned, when the children render empty.
fn write_block(
    tag: &str,
    align: Option<Alignment>,
    children: &[Node],
    options: &RenderOptions,
    out: &mut String,
) -> bool {
    let start = out.len();
    open_tag(tag, align, out);
    let content_start = out.len();
    write_nodes(children, options, out);

    if out.len() == content_start {
        out.truncate(start);
        return false;
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    true
}

fn write_list(
    ordered: bool,
    start: u32,
    items: &[Node],
    options: &RenderOptions,
    out: &mut String,
) {
    if items.is_empty() {
        return;
    }

    let tag = if ordered { "ol" } else { "ul" };
    out.push('<');
    out.push_str(tag);
    if ordered && start > 1 {
        out.push_str(&format!(" start=\"{}\"", start));
    }
    out.push('>');

    for item in items {
        match item {
            Node::ListItem(_) => write_node(item, options, out),
            other => {
                out.push_str("<li>");
                write_node(other, options, out);
                out.push_str("</li>");
            }
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_table(rows: &[Node], options: &RenderOptions, out: &mut String) {
    let rows: Vec<(Option<bool>, &[Node])> = rows
        .iter()
        .filter_map(|row| match row {
            Node::TableRow { is_header, cells } => Some((*is_header, cells.as_slice())),
            _ => None,
        })
        .collect();

    let Some(((first_flag, first_cells), rest)) = rows.split_first() else {
        return;
    };

    out.push_str("<table>");

    let body = if first_flag.unwrap_or(true) {
        out.push_str("<thead>");
        write_row(first_cells, true, options, out);
        out.push_str("</thead>");
        rest
    } else {
        rows.as_slice()
    };

    if !body.is_empty() {
        out.push_str("<tbody>");
        for (is_header, cells) in body {
            write_row(cells, is_header.unwrap_or(false), options, out);
        }
        out.push_str("</tbody>");
    }

    out.push_str("</table>");
}

fn write_row(cells: &[Node], header_row: bool, options: &RenderOptions, out: &mut String) {
    out.push_str("<tr>");
    for cell in cells {
        match cell {
            Node::TableCell { header, children } => {
                write_cell(header_row || *header, children, options, out)
            }
            other => write_cell(header_row, std::slice::from_ref(other), options, out),
        }
    }
    out.push_str("</tr>");
}

fn write_cell(header: bool, children: &[Node], options: &RenderOptions, out: &mut String) {
    let tag = if header { "th" } else { "td" };
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_nodes(children, options, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_image(
    src: &str,
    alt_text: &str,
    width: Option<f64>,
    height: Option<f64>,
    max_width: Option<f64>,
    options: &RenderOptions,
    out: &mut String,
) {
    let src = src.trim();
    if src.is_empty() {
        debug!("skipping image without src");
        return;
    }

    out.push_str("<img src=\"");
    escape_html_into(src, out);
    out.push_str("\" alt=\"");
    escape_html_into(alt_text, out);
    out.push_str("\" class=\"");
    escape_html_into(&options.image_class, out);
    out.push('"');

    match (max_width, width, height) {
        (Some(max_width), _, _) => {
            out.push_str(&format!(
                " style=\"max-width: {}px;\"",
                format_dimension(max_width)
            ));
        }
        (None, Some(width), Some(height)) => {
            out.push_str(&format!(
                " width=\"{}\" height=\"{}\"",
                format_dimension(width),
                format_dimension(height)
            ));
        }
        _ => {}
    }

    out.push_str(" />");
}

fn write_link(
    url: &str,
    target: Option<&str>,
    rel: Option<&str>,
    title: Option<&str>,
    children: &[Node],
    options: &RenderOptions,
    out: &mut String,
) {
    let url = url.trim();
    if url.is_empty() || is_unsafe_url(url) {
        debug!("rendering link content without anchor");
        write_nodes(children, options, out);
        return;
    }

    let target = target.map(str::trim).filter(|t| !t.is_empty());

    out.push_str("<a href=\"");
    escape_html_into(url, out);
    out.push('"');

    if let Some(target) = target {
        out.push_str(" target=\"");
        escape_html_into(target, out);
        out.push('"');
    }

    if let Some(rel) = link_rel(target, rel, options) {
        out.push_str(" rel=\"");
        escape_html_into(&rel, out);
        out.push('"');
    }

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        out.push_str(" title=\"");
        escape_html_into(title, out);
        out.push('"');
    }

    out.push('>');
    write_nodes(children, options, out);
    out.push_str("</a>");
}

/// Stored rel, with the blank-target tokens appended when missing
fn link_rel(target: Option<&str>, rel: Option<&str>, options: &RenderOptions) -> Option<String> {
    let mut tokens: Vec<&str> = rel.unwrap_or_default().split_whitespace().collect();

    // Browsing context keywords are ASCII case-insensitive
    if target.is_some_and(|t| t.trim().eq_ignore_ascii_case("_blank")) {
        for required in options.blank_link_rel.split_whitespace() {
            if !tokens.iter().any(|t| t.eq_ignore_ascii_case(required)) {
                tokens.push(required);
            }
        }
    }

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}
