//! SVG serialization — the deterministic back end.
//!
//! Takes a surface with its attached drawable tree and produces a
//! stand-alone SVG document. Pure and stateless: the same surface always
//! yields the same markup. It knows nothing about floors, dancers, or
//! geometry; it only walks nodes.

use crate::surface::{BasicSurface, Surface};
use crate::types::{Node, Paint, Transform};

/// Serialize a surface and its children as a complete SVG document.
pub fn document(surface: &BasicSurface) -> String {
    let width = surface.width();
    let height = surface.height();
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );
    for child in surface.children() {
        write_node(&mut out, child, 1);
    }
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Group {
            id,
            transform,
            children,
        } => {
            out.push_str(&pad);
            out.push_str("<g");
            if let Some(id) = id {
                out.push_str(&format!(" id=\"{}\"", escape(id)));
            }
            if !transform.is_empty() {
                out.push_str(&format!(" transform=\"{}\"", transform_attr(transform)));
            }
            out.push_str(">\n");
            for child in children {
                write_node(out, child, depth + 1);
            }
            out.push_str(&pad);
            out.push_str("</g>\n");
        }
        Node::Rect {
            x,
            y,
            width,
            height,
            paint,
        } => {
            out.push_str(&format!(
                "{pad}<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\"{}/>\n",
                paint_attrs(paint)
            ));
        }
        Node::Circle { cx, cy, r, paint } => {
            out.push_str(&format!(
                "{pad}<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"{}/>\n",
                paint_attrs(paint)
            ));
        }
        Node::Path { d, paint } => {
            out.push_str(&format!(
                "{pad}<path d=\"{}\"{}/>\n",
                escape(d),
                paint_attrs(paint)
            ));
        }
        Node::Use { href } => {
            out.push_str(&format!("{pad}<use href=\"{}\"/>\n", escape(href)));
        }
        Node::Text { text } => {
            out.push_str(&format!(
                "{pad}<text text-anchor=\"middle\" alignment-baseline=\"middle\">{}</text>\n",
                escape(text)
            ));
        }
    }
}

fn transform_attr(transforms: &[Transform]) -> String {
    let parts: Vec<String> = transforms
        .iter()
        .map(|t| match t {
            Transform::Translate { dx, dy } => format!("translate({dx}, {dy})"),
            Transform::Rotate { degrees } => format!("rotate({degrees})"),
        })
        .collect();
    parts.join(" ")
}

fn paint_attrs(paint: &Paint) -> String {
    let mut attrs = String::new();
    if let Some(fill) = &paint.fill {
        attrs.push_str(&format!(" fill=\"{}\"", escape(fill)));
    }
    if let Some(stroke) = &paint.stroke {
        attrs.push_str(&format!(" stroke=\"{}\"", escape(stroke)));
    }
    attrs
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
