// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of checkbox layers.

use kurbo::Rect;
use peniko::Color;
use tickbox::{Layer, LayerSet};

/// Renders sampled frames side by side, each `cell` wide, with `gap` between them.
pub(crate) fn filmstrip(frames: &[LayerSet], cell: f64, gap: f64) -> String {
    let count = frames.len().max(1) as f64;
    let width = count * cell + (count - 1.0) * gap;
    let view_box = Rect::new(0.0, 0.0, width, cell);
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');
    for (i, frame) in frames.iter().enumerate() {
        let x = i as f64 * (cell + gap);
        out.push_str(&format!(r#"<g transform="translate({x} 0)">"#));
        out.push('\n');
        for (_role, layer) in frame.iter() {
            write_layer(&mut out, layer);
        }
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

fn write_layer(out: &mut String, layer: &Layer) {
    if layer.hidden || layer.opacity <= 0.0 || layer.scale == 0.0 {
        return;
    }
    let Some(path) = &layer.path else {
        return;
    };
    let [a, b, c, d, e, f] = layer.transform().as_coeffs();
    out.push_str(&format!(
        r#"<path d="{}" transform="matrix({a} {b} {c} {d} {e} {f})""#,
        path.to_svg()
    ));
    write_paint_attr(out, "fill", layer.fill);
    if let Some(stroke) = layer.stroke {
        write_paint_attr(out, "stroke", Some(stroke));
        out.push_str(&format!(
            r#" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
            layer.line_width
        ));
        if layer.stroke_end < 1.0 {
            // Trim the stroke to a fraction of the normalized path length.
            out.push_str(&format!(
                r#" pathLength="1" stroke-dasharray="{} 2""#,
                layer.stroke_end.max(0.0)
            ));
        }
    }
    if layer.opacity < 1.0 {
        out.push_str(&format!(r#" opacity="{}""#, layer.opacity));
    }
    out.push_str("/>\n");
}

fn svg_paint(color: Option<Color>) -> (String, Option<f64>) {
    match color {
        Some(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        None => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Option<Color>) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}
