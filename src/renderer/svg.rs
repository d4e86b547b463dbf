//! SVG generation for the due-date annotation overlay
//!
//! The overlay covers a plotting area of `width` x `height` with a date axis
//! running left to right and the 0-100 progress scale running bottom to top.

use chrono::NaiveDate;

use crate::layout::{days_between, PositionedAnnotation};
use crate::stylesheet::Stylesheet;

use super::wrap::wrap_label;
use super::SvgConfig;

/// Colour tokens the overlay styles refer to
const COLOR_TOKENS: [&str; 6] = [
    "guide-line",
    "leader-line",
    "label-text",
    "label-border",
    "label-background",
    "axis",
];

/// Rough advance of one label character at the label font size
const CHAR_WIDTH: f64 = 5.5;

const LABEL_PADDING: f64 = 4.0;

/// Maps due dates and progress values onto the plotting area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    origin: NaiveDate,
    first_day: f64,
    last_day: f64,
    width: f64,
    height: f64,
}

impl ChartScale {
    /// Fit the date domain around every guide line and label position.
    ///
    /// Returns None for an empty annotation list.
    pub fn fit(positions: &[PositionedAnnotation], config: &SvgConfig) -> Option<Self> {
        let origin = positions.iter().map(|p| p.end_date).min()?;

        let mut first_day = f64::INFINITY;
        let mut last_day = f64::NEG_INFINITY;
        for pos in positions {
            let guide = days_between(pos.end_date, origin);
            let label = pos.display_day(origin);
            first_day = first_day.min(guide.min(label));
            last_day = last_day.max(guide.max(label));
        }

        let padding = config.day_padding.max(0.0);
        first_day -= padding;
        last_day += padding;
        if last_day - first_day < 1.0 {
            first_day -= 0.5;
            last_day += 0.5;
        }

        Some(Self {
            origin,
            first_day,
            last_day,
            width: config.width,
            height: config.height,
        })
    }

    /// Horizontal coordinate of a fractional day counted from the earliest due date
    pub fn x(&self, day: f64) -> f64 {
        (day - self.first_day) / (self.last_day - self.first_day) * self.width
    }

    /// Horizontal coordinate of a calendar date
    pub fn x_of_date(&self, date: NaiveDate) -> f64 {
        self.x(days_between(date, self.origin))
    }

    /// Vertical coordinate of a value on the 0-100 scale
    pub fn y(&self, value: f64) -> f64 {
        self.height - value / 100.0 * self.height
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add CSS custom properties and overlay class rules from a stylesheet
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let prefix = self.prefix();
        let mut css = String::from(":root {\n");
        for token in COLOR_TOKENS {
            css.push_str(&format!(
                "    --{}: {};\n",
                token,
                stylesheet.resolve_or_default(token)
            ));
        }
        css.push_str("  }\n");
        css.push_str(&format!(
            "  .{p}guide {{ stroke: var(--guide-line); stroke-width: 1; stroke-dasharray: 2 3; }}\n",
            p = prefix
        ));
        css.push_str(&format!(
            "  .{p}leader {{ stroke: var(--leader-line); stroke-width: 1; fill: none; }}\n",
            p = prefix
        ));
        css.push_str(&format!(
            "  .{p}label-box {{ fill: var(--label-background); stroke: var(--label-border); }}\n",
            p = prefix
        ));
        css.push_str(&format!(
            "  .{p}label {{ fill: var(--label-text); font-size: 9px; }}\n",
            p = prefix
        ));
        css.push_str(&format!(
            "  .{p}axis {{ stroke: var(--axis); stroke-width: 1; }}",
            p = prefix
        ));
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the arrow marker definition used by leader lines
    pub fn add_arrow_marker(&mut self) {
        let prefix = self.prefix();
        self.defs.push(format!(
            r#"<marker id="{prefix}arrow" viewBox="0 0 10 10" refX="8" refY="5" markerWidth="6" markerHeight="6" markerUnits="strokeWidth" orient="auto">
      <path d="M0,0 L10,5 L0,10 Z" fill="context-stroke"/>
    </marker>"#
        ));
    }

    /// Add a straight line with the given class suffix
    pub fn add_line(&mut self, class: &str, x1: f64, y1: f64, x2: f64, y2: f64, marker_end: bool) {
        let prefix = self.prefix();
        let marker = if marker_end {
            format!(r#" marker-end="url(#{prefix}arrow)""#)
        } else {
            String::new()
        };
        self.elements.push(format!(
            r#"{}<line class="{}{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            prefix,
            class,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            marker
        ));
    }

    /// Add the background box behind a label
    pub fn add_label_box(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}label-box" x="{}" y="{}" width="{}" height="{}" rx="2"/>"#,
            self.indent_str(),
            prefix,
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h)
        ));
    }

    /// Add a multi-line, horizontally centred label whose first baseline is at `y`
    pub fn add_label(&mut self, lines: &[String], x: f64, y: f64, line_height: f64) {
        let prefix = self.prefix();
        let x = fmt_num(x);
        let spans = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let dy = if i == 0 { 0.0 } else { line_height };
                format!(r#"<tspan x="{}" dy="{}">{}</tspan>"#, x, fmt_num(dy), escape_xml(line))
            })
            .collect::<String>();

        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            fmt_num(y),
            spans
        ));
    }

    /// Open a group element with the given classes
    pub fn start_group(&mut self, classes: &[String]) {
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}>", self.indent_str(), class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = -padding;
        let vb_y = -padding;
        let vb_w = self.config.width + 2.0 * padding;
        let vb_h = self.config.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            fmt_num(vb_x),
            fmt_num(vb_y),
            fmt_num(vb_w),
            fmt_num(vb_h)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        if !self.defs.is_empty() {
            svg.push_str("  <defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str("    ");
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str("  </defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render positioned annotations as an SVG overlay
pub fn render_overlay(positions: &[PositionedAnnotation], config: &SvgConfig) -> String {
    render_overlay_with_stylesheet(positions, config, &Stylesheet::default())
}

/// Render positioned annotations as an SVG overlay with a custom stylesheet
pub fn render_overlay_with_stylesheet(
    positions: &[PositionedAnnotation],
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);

    // Frame of the 0-100 scale
    builder.add_line("axis", 0.0, 0.0, config.width, 0.0, false);
    builder.add_line("axis", 0.0, config.height, config.width, config.height, false);

    let Some(scale) = ChartScale::fit(positions, config) else {
        return builder.build();
    };

    builder.add_arrow_marker();
    let prefix = config.class_prefix.clone().unwrap_or_default();
    for pos in positions {
        let classes = vec![
            format!("{prefix}annotation"),
            format!("{prefix}group-{}", pos.group_id.0),
        ];
        builder.start_group(&classes);
        render_annotation(pos, &scale, config, &mut builder);
        builder.end_group();
    }

    builder.build()
}

/// Guide line at the due date, then the label block with its leader line
fn render_annotation(
    pos: &PositionedAnnotation,
    scale: &ChartScale,
    config: &SvgConfig,
    builder: &mut SvgBuilder,
) {
    let guide_x = scale.x_of_date(pos.end_date);
    builder.add_line("guide", guide_x, scale.y(0.0), guide_x, scale.y(100.0), false);

    let lines = label_lines(pos, config.label_max_chars);
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_w = widest as f64 * CHAR_WIDTH + 2.0 * LABEL_PADDING;
    let box_h = lines.len() as f64 * config.line_height + 2.0 * LABEL_PADDING;

    let anchor_x = scale.x(pos.display_day(scale.origin));
    let anchor_y = scale.y(pos.y);
    let box_bottom = anchor_y - config.leader_length;
    let box_top = box_bottom - box_h;

    builder.add_line("leader", anchor_x, box_bottom, anchor_x, anchor_y, true);
    builder.add_label_box(anchor_x - box_w / 2.0, box_top, box_w, box_h);
    let first_baseline = box_top + LABEL_PADDING + config.line_height * 0.8;
    builder.add_label(&lines, anchor_x, first_baseline, config.line_height);
}

/// Wrapped label text followed by the due-date line
pub fn label_lines(pos: &PositionedAnnotation, max_chars: usize) -> Vec<String> {
    let mut lines = wrap_label(&pos.task.label, max_chars);
    lines.push(format!("Due: {}", pos.end_date.format("%m/%d")));
    lines
}

/// Format a coordinate with at most two decimals
fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
