// src/render/chart.rs
//! One panel = one SVG document. A `ChartSpec` is declarative (stacked
//! series over a year axis plus decorations); rendering is a single
//! deterministic pass, so identical specs yield identical documents.

use svg::Document;
use svg::node::element::{Line, Rectangle, Text};

use super::style::{ANNOTATION, BAR_LABEL_PT, DECORATION, FONT_FAMILY, FONT_PT, FOREGROUND};

pub struct StackSeries {
    pub label: String,
    pub color: String,
    /// One value per year, aligned with `ChartSpec::years`.
    pub values: Vec<u32>,
}

/// Dotted horizontal guide at a data-space height.
pub struct HGuide {
    pub y: f32,
    pub show_line: bool,
    /// Annotation centered above the line at this year.
    pub label: Option<(f32, String)>,
}

/// Dotted vertical guide at a data-space year.
pub struct VGuide {
    pub x_year: f32,
    /// Annotation to the right of the line at this data-space height.
    pub label: Option<(f32, String)>,
}

pub struct ChartSpec {
    pub title: String,
    pub title_pt: f32,
    pub size_in: (f32, f32),
    pub years: Vec<i32>,
    /// Stacked bottom-up in order.
    pub series: Vec<StackSeries>,
    pub y_label: Option<String>,
    /// Data-space top of the plot; 0.0 means auto (peak stack × 1.05).
    pub y_max: f32,
    pub show_y_axis: bool,
    /// 0 = no legend.
    pub legend_cols: usize,
    /// Stack totals above each bar.
    pub annotate_totals: bool,
    pub h_guide: Option<HGuide>,
    pub v_guide: Option<VGuide>,
}

impl ChartSpec {
    fn resolved_y_max(&self) -> f32 {
        if self.y_max > 0.0 {
            return self.y_max;
        }
        let peak = (0..self.years.len())
            .map(|i| self.series.iter().map(|s| s.values[i]).sum::<u32>())
            .max()
            .unwrap_or(0);
        (peak as f32 * 1.05).max(1.0)
    }
}

pub fn render_svg(spec: &ChartSpec, dpi: f32) -> String {
    render_document(spec, dpi).to_string()
}

pub fn render_document(spec: &ChartSpec, dpi: f32) -> Document {
    let frame = Frame::new(spec, dpi);
    let mut doc = Document::new()
        .set("width", frame.w)
        .set("height", frame.h)
        .set("viewBox", format!("0 0 {} {}", r2(frame.w), r2(frame.h)))
        .set("font-family", FONT_FAMILY);

    doc = draw_title(doc, spec, &frame);
    doc = draw_guides(doc, spec, &frame);
    doc = draw_bars(doc, spec, &frame);
    doc = draw_axes(doc, spec, &frame);
    if spec.legend_cols > 0 {
        doc = draw_legend(doc, spec, &frame);
    }
    doc
}

/// Pixel-space frame: margins resolved, data→pixel mapping ready.
struct Frame {
    w: f32,
    h: f32,
    left: f32,
    bottom: f32,
    plot_w: f32,
    plot_h: f32,
    step: f32,
    y_max: f32,
    year0: i32,
    pt: f32, // one point, in pixels
}

impl Frame {
    fn new(spec: &ChartSpec, dpi: f32) -> Frame {
        let pt = dpi / 72.0;
        let w = spec.size_in.0 * dpi;
        let h = spec.size_in.1 * dpi;

        let left = if spec.show_y_axis { 0.55 * dpi } else { 0.08 * dpi };
        let right = 0.08 * dpi;
        let top = spec.title_pt * pt * 1.5 + 6.0 * pt;
        let bottom_margin = 24.0 * pt;

        let plot_w = w - left - right;
        let plot_h = h - top - bottom_margin;
        let bottom = top + plot_h;
        let step = plot_w / spec.years.len().max(1) as f32;

        Frame {
            w,
            h,
            left,
            bottom,
            plot_w,
            plot_h,
            step,
            y_max: spec.resolved_y_max(),
            year0: spec.years.first().copied().unwrap_or(0),
            pt,
        }
    }

    /// Pixel x of a (fractional) year's bar center.
    fn x(&self, year: f32) -> f32 {
        self.left + (year - self.year0 as f32 + 0.5) * self.step
    }

    /// Pixel y of a data-space height.
    fn y(&self, value: f32) -> f32 {
        self.bottom - value / self.y_max * self.plot_h
    }
}

fn r2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

fn text_at(x: f32, y: f32, size: f32, fill: &str, anchor: &str, content: &str) -> Text {
    Text::new(content)
        .set("x", r2(x))
        .set("y", r2(y))
        .set("font-size", r2(size))
        .set("fill", fill)
        .set("text-anchor", anchor)
}

fn draw_title(doc: Document, spec: &ChartSpec, f: &Frame) -> Document {
    if spec.title.is_empty() {
        return doc;
    }
    let size = spec.title_pt * f.pt;
    doc.add(
        text_at(f.left, size * 1.1, size, FOREGROUND, "start", &spec.title)
            .set("font-weight", 600),
    )
}

fn draw_bars(mut doc: Document, spec: &ChartSpec, f: &Frame) -> Document {
    let bar_w = f.step * 0.8;
    let scale = f.plot_h / f.y_max;

    for i in 0..spec.years.len() {
        let xc = f.left + (i as f32 + 0.5) * f.step;
        let mut cum = 0u32;
        for series in &spec.series {
            let v = series.values[i];
            if v > 0 {
                let y_top = f.y((cum + v) as f32);
                doc = doc.add(
                    Rectangle::new()
                        .set("x", r2(xc - bar_w / 2.0))
                        .set("y", r2(y_top))
                        .set("width", r2(bar_w))
                        .set("height", r2(v as f32 * scale))
                        .set("fill", series.color.as_str()),
                );
            }
            cum += v;
        }
        if spec.annotate_totals {
            doc = doc.add(text_at(
                xc,
                f.y(cum as f32) - 3.0 * f.pt,
                BAR_LABEL_PT * f.pt,
                ANNOTATION,
                "middle",
                &cum.to_string(),
            ));
        }
    }
    doc
}

fn draw_axes(mut doc: Document, spec: &ChartSpec, f: &Frame) -> Document {
    let spine_w = r2(0.8 * f.pt);
    let tick_len = 6.0 * f.pt;
    let label_size = FONT_PT * f.pt;

    // Bottom spine
    doc = doc.add(
        Line::new()
            .set("x1", r2(f.left))
            .set("y1", r2(f.bottom))
            .set("x2", r2(f.left + f.plot_w))
            .set("y2", r2(f.bottom))
            .set("stroke", FOREGROUND)
            .set("stroke-width", spine_w),
    );

    // Decade ticks
    for (i, year) in spec.years.iter().enumerate() {
        if year % 10 != 0 {
            continue;
        }
        let x = f.left + (i as f32 + 0.5) * f.step;
        doc = doc
            .add(
                Line::new()
                    .set("x1", r2(x))
                    .set("y1", r2(f.bottom))
                    .set("x2", r2(x))
                    .set("y2", r2(f.bottom + tick_len))
                    .set("stroke", FOREGROUND)
                    .set("stroke-width", spine_w),
            )
            .add(text_at(
                x,
                f.bottom + tick_len + label_size,
                label_size,
                FOREGROUND,
                "middle",
                &year.to_string(),
            ));
    }

    if !spec.show_y_axis {
        return doc;
    }

    // Left spine
    doc = doc.add(
        Line::new()
            .set("x1", r2(f.left))
            .set("y1", r2(f.bottom - f.plot_h))
            .set("x2", r2(f.left))
            .set("y2", r2(f.bottom))
            .set("stroke", FOREGROUND)
            .set("stroke-width", spine_w),
    );

    // Value ticks at a readable step
    let step = nice_step(f.y_max);
    let mut v = 0.0;
    while v <= f.y_max {
        let y = f.y(v);
        doc = doc
            .add(
                Line::new()
                    .set("x1", r2(f.left - tick_len))
                    .set("y1", r2(y))
                    .set("x2", r2(f.left))
                    .set("y2", r2(y))
                    .set("stroke", FOREGROUND)
                    .set("stroke-width", spine_w),
            )
            .add(text_at(
                f.left - tick_len - 3.0 * f.pt,
                y + label_size * 0.35,
                label_size,
                FOREGROUND,
                "end",
                &format!("{}", v as u32),
            ));
        v += step;
    }

    if let Some(label) = &spec.y_label {
        let x = label_size;
        let y = f.bottom - f.plot_h / 2.0;
        doc = doc.add(
            text_at(x, y, label_size, FOREGROUND, "middle", label)
                .set("font-weight", 600)
                .set("transform", format!("rotate(-90 {} {})", r2(x), r2(y))),
        );
    }
    doc
}

fn nice_step(y_max: f32) -> f32 {
    for candidate in [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0] {
        if y_max / candidate <= 6.0 {
            return candidate;
        }
    }
    1000.0
}

fn dotted(x1: f32, y1: f32, x2: f32, y2: f32, f: &Frame) -> Line {
    Line::new()
        .set("x1", r2(x1))
        .set("y1", r2(y1))
        .set("x2", r2(x2))
        .set("y2", r2(y2))
        .set("stroke", DECORATION)
        .set("stroke-width", r2(1.6 * f.pt))
        .set("stroke-dasharray", format!("{} {}", r2(1.6 * f.pt), r2(4.0 * f.pt)))
}

fn draw_guides(mut doc: Document, spec: &ChartSpec, f: &Frame) -> Document {
    let size = FONT_PT * f.pt;

    if let Some(guide) = &spec.h_guide {
        let y = f.y(guide.y);
        if guide.show_line {
            doc = doc.add(dotted(f.left, y, f.left + f.plot_w, y, f));
        }
        if let Some((year, text)) = &guide.label {
            doc = doc.add(text_at(f.x(*year), y - 5.0 * f.pt, size, ANNOTATION, "middle", text));
        }
    }

    if let Some(guide) = &spec.v_guide {
        let x = f.x(guide.x_year);
        doc = doc.add(dotted(x, f.bottom - f.plot_h, x, f.bottom, f));
        if let Some((value, text)) = &guide.label {
            doc = doc.add(text_at(
                x + 0.5 * f.step,
                f.y(*value) + size * 0.35,
                size,
                ANNOTATION,
                "start",
                text,
            ));
        }
    }
    doc
}

fn draw_legend(mut doc: Document, spec: &ChartSpec, f: &Frame) -> Document {
    let size = FONT_PT * f.pt;
    let square = 9.0 * f.pt;
    let row_h = 18.0 * f.pt;
    let col_w = f.plot_w / spec.legend_cols as f32;
    let x0 = f.left + 8.0 * f.pt;
    let y0 = f.bottom - f.plot_h + 8.0 * f.pt;

    for (i, series) in spec.series.iter().enumerate() {
        let col = i % spec.legend_cols;
        let row = i / spec.legend_cols;
        let x = x0 + col as f32 * col_w;
        let y = y0 + row as f32 * row_h;
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", r2(x))
                    .set("y", r2(y))
                    .set("width", r2(square))
                    .set("height", r2(square))
                    .set("fill", series.color.as_str()),
            )
            .add(text_at(
                x + square + 4.0 * f.pt,
                y + square,
                size,
                FOREGROUND,
                "start",
                &series.label,
            ));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ChartSpec {
        ChartSpec {
            title: s!("Panel"),
            title_pt: 20.0,
            size_in: (6.0, 2.0),
            years: vec![2019, 2020, 2021],
            series: vec![
                StackSeries { label: s!("a"), color: s!("#111111"), values: vec![1, 2, 3] },
                StackSeries { label: s!("b"), color: s!("#222222"), values: vec![0, 1, 0] },
            ],
            y_label: Some(s!("Launches")),
            y_max: 0.0,
            show_y_axis: true,
            legend_cols: 2,
            annotate_totals: true,
            h_guide: None,
            v_guide: None,
        }
    }

    #[test]
    fn identical_specs_render_identical_documents() {
        assert_eq!(render_svg(&spec(), 100.0), render_svg(&spec(), 100.0));
    }

    #[test]
    fn auto_y_max_tracks_the_tallest_stack() {
        let s = spec();
        assert!((s.resolved_y_max() - 3.15).abs() < 1e-4);
    }

    #[test]
    fn zero_valued_segments_emit_no_rect() {
        let doc = render_svg(&spec(), 100.0);
        // 4 non-zero segments + 1 legend square per series.
        assert_eq!(doc.matches("<rect").count(), 4 + 2);
    }

    #[test]
    fn totals_add_one_text_per_year() {
        let with = render_svg(&spec(), 100.0);
        let mut s = spec();
        s.annotate_totals = false;
        let without = render_svg(&s, 100.0);
        assert_eq!(
            with.matches("<text").count() - without.matches("<text").count(),
            spec().years.len()
        );
    }

    #[test]
    fn guides_draw_dotted_lines() {
        let mut s = spec();
        s.h_guide = Some(HGuide { y: 2.0, show_line: true, label: Some((2020.0, s!("note"))) });
        s.v_guide = Some(VGuide { x_year: 2020.0, label: None });
        let doc = render_svg(&s, 100.0);
        assert_eq!(doc.matches("stroke-dasharray").count(), 2);
        assert!(doc.contains("note"));
    }

    #[test]
    fn hidden_y_axis_means_no_value_ticks() {
        let mut s = spec();
        s.show_y_axis = false;
        s.y_label = None;
        s.legend_cols = 0;
        s.annotate_totals = false;
        let doc = render_svg(&s, 100.0);
        // Only the bottom spine and the one decade tick remain.
        assert_eq!(doc.matches("<line").count(), 2);
    }
}
