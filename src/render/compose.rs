// src/render/compose.rs
//! Panel assembly and the final canvas. Builds every panel spec for one
//! language, rasterizes them, and pastes the results onto a single
//! canvas with half-inch gutters.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};

use super::chart::{ChartSpec, HGuide, StackSeries, VGuide, render_svg};
use super::raster;
use super::style::{
    BACKGROUND_RGBA, CONTENT_HEIGHT_IN, CONTENT_WIDTH_IN, PLOT_LONG_IN, PLOT_SIDE_IN,
    PLOT_TINY_IN, PLOT_XLONG_IN, SPACING_IN, TINY_PLOT_COUNT, TITLE_PT, TITLE_TINY_PT,
    country_color, failure_color, family_color, success_color,
};
use crate::config::consts::OUTPUT_STEM;
use crate::error::RenderError;
use crate::i18n::{Language, translated};
use crate::launch::ROCKET_FAMILIES;
use crate::stats::Aggregates;

const GUIDE_HUNDRED_Y: f32 = 100.0;
const GUIDE_COLD_WAR_YEAR: f32 = 1991.0;
const GUIDE_TEXT_YEAR: f32 = 2005.0;

pub struct RenderOptions<'a> {
    pub dpi: f32,
    pub out_dir: &'a Path,
    pub template: Option<&'a Path>,
}

/// Render one language variant and return the written path.
pub fn render_infographic(
    agg: &Aggregates,
    language: Language,
    options: &RenderOptions,
) -> Result<PathBuf, RenderError> {
    std::fs::create_dir_all(options.out_dir)?;

    let dpi = options.dpi;
    let canvas_w = ((CONTENT_WIDTH_IN + 2.0 * SPACING_IN) * dpi).round() as u32;
    let canvas_h = ((CONTENT_HEIGHT_IN + 2.0 * SPACING_IN) * dpi).round() as u32;

    let mut canvas = match options.template {
        Some(path) => {
            let template = image::open(path)?.to_rgba8();
            imageops::resize(&template, canvas_w, canvas_h, imageops::FilterType::Triangle)
        }
        None => RgbaImage::from_pixel(canvas_w, canvas_h, Rgba(BACKGROUND_RGBA)),
    };

    let usvg_options = raster::base_options();

    for (spec, (x_in, y_in)) in build_panels(agg, language) {
        let t = std::time::Instant::now();
        let w = (spec.size_in.0 * dpi).round() as u32;
        let h = (spec.size_in.1 * dpi).round() as u32;
        let pixmap = raster::rasterize(&render_svg(&spec, dpi), w, h, &usvg_options)?;
        let panel = raster::pixmap_to_image(&pixmap);

        let x = ((x_in + SPACING_IN) * dpi).round() as i64;
        let y = ((y_in + SPACING_IN) * dpi).round() as i64;
        imageops::overlay(&mut canvas, &panel, x, y);
        logd!("Render: [{}] {:?} in {:?}", language.code(), spec.title, t.elapsed());
    }

    let path = options.out_dir.join(output_name(language));
    canvas.save(&path)?;
    Ok(path)
}

pub fn output_name(language: Language) -> String {
    format!("{} ({}).png", OUTPUT_STEM, language.code())
}

/// All panel specs for one language, with content-space origins in inches.
pub fn build_panels(agg: &Aggregates, language: Language) -> Vec<(ChartSpec, (f32, f32))> {
    let tr = |label: &str| translated(language, label);
    let mut panels = Vec::with_capacity(3 + 2 * TINY_PLOT_COUNT);
    let mut y_in = 0.0;

    // All successful launches, stacked by country, most successful at
    // the bottom of the stack.
    let country_series: Vec<StackSeries> = agg
        .countries
        .iter()
        .map(|country| {
            let values = agg.country_successes(country);
            let total: u32 = values.iter().sum();
            StackSeries {
                label: format!("{} ({})", tr(country), total),
                color: country_color(country),
                values,
            }
        })
        .collect();

    panels.push((
        ChartSpec {
            title: tr("All Successful Orbital Launches"),
            title_pt: TITLE_PT,
            size_in: PLOT_LONG_IN,
            years: agg.years.clone(),
            series: country_series,
            y_label: Some(tr("Launches")),
            y_max: agg.peak_year_total as f32,
            show_y_axis: true,
            legend_cols: 6,
            annotate_totals: true,
            h_guide: Some(HGuide {
                y: GUIDE_HUNDRED_Y,
                show_line: true,
                label: Some((
                    GUIDE_TEXT_YEAR,
                    tr("↓ This line marks a hundred launches per year."),
                )),
            }),
            v_guide: Some(VGuide {
                x_year: GUIDE_COLD_WAR_YEAR,
                label: Some((
                    0.7 * agg.peak_year_total as f32,
                    tr("← This line marks the end of the Cold War."),
                )),
            }),
        },
        (0.0, y_in),
    ));

    // Successes and failures, side by side with the country stack.
    let successes = agg.year_successes();
    let failures = agg.year_failures();
    let success_total: u32 = successes.iter().sum();
    let failure_total: u32 = failures.iter().sum();

    panels.push((
        ChartSpec {
            title: tr("Successes and Failures"),
            title_pt: TITLE_PT,
            size_in: PLOT_SIDE_IN,
            years: agg.years.clone(),
            series: vec![
                StackSeries {
                    label: format!("{} ({})", tr("Successful Launches"), success_total),
                    color: success_color(),
                    values: successes,
                },
                StackSeries {
                    label: format!("{} ({})", tr("Total or Partial Failures"), failure_total),
                    color: failure_color(),
                    values: failures,
                },
            ],
            y_label: None,
            y_max: agg.peak_year_total as f32,
            show_y_axis: false,
            legend_cols: 1,
            annotate_totals: false,
            h_guide: Some(HGuide { y: GUIDE_HUNDRED_Y, show_line: true, label: None }),
            v_guide: Some(VGuide { x_year: GUIDE_COLD_WAR_YEAR, label: None }),
        },
        (PLOT_LONG_IN.0 + SPACING_IN, y_in),
    ));
    y_in += PLOT_LONG_IN.1 + SPACING_IN;

    // Tiny per-country panels for the top countries.
    let top_countries: Vec<&String> = agg.countries.iter().take(TINY_PLOT_COUNT).collect();
    let country_y_max = shared_tiny_y_max(top_countries.iter().map(|c| {
        (agg.country_successes(c), agg.country_failures(c))
    }));

    for (i, country) in top_countries.iter().enumerate() {
        let successes = agg.country_successes(country);
        let peak = successes.iter().copied().max().unwrap_or(0);
        panels.push((
            tiny_panel(
                tr(country),
                country_color(country),
                successes,
                agg.country_failures(country),
                agg.years.clone(),
                country_y_max,
                // A guide at one launch per year would sit on top of the
                // actual marks and make them unreadable.
                HGuide {
                    y: peak as f32,
                    show_line: peak > 1,
                    label: Some((GUIDE_TEXT_YEAR, peak.to_string())),
                },
            ),
            (i as f32 * (PLOT_TINY_IN.0 + SPACING_IN), y_in),
        ));
    }
    y_in += PLOT_TINY_IN.1 + 2.0 * SPACING_IN;

    // Selected rocket families, stacked.
    let family_series: Vec<StackSeries> = ROCKET_FAMILIES
        .iter()
        .map(|family| {
            let values = agg.family_successes(family);
            let total: u32 = values.iter().sum();
            StackSeries {
                label: format!("{} ({})", tr(family), total),
                color: family_color(family),
                values,
            }
        })
        .collect();

    panels.push((
        ChartSpec {
            title: tr("Launches of Selected Rocket Families"),
            title_pt: TITLE_PT,
            size_in: PLOT_XLONG_IN,
            years: agg.years.clone(),
            series: family_series,
            y_label: Some(tr("Launches")),
            y_max: 0.0,
            show_y_axis: true,
            legend_cols: ROCKET_FAMILIES.len(),
            annotate_totals: false,
            h_guide: None,
            v_guide: None,
        },
        (0.0, y_in),
    ));
    y_in += PLOT_XLONG_IN.1 + SPACING_IN;

    // Tiny per-family panels.
    let family_y_max = shared_tiny_y_max(ROCKET_FAMILIES.iter().map(|f| {
        (agg.family_successes(f), agg.family_failures(f))
    }));

    for (i, family) in ROCKET_FAMILIES.iter().enumerate() {
        let successes = agg.family_successes(family);
        let peak = successes.iter().copied().max().unwrap_or(0);
        panels.push((
            tiny_panel(
                tr(family),
                family_color(family),
                successes,
                agg.family_failures(family),
                agg.years.clone(),
                family_y_max,
                HGuide {
                    y: peak as f32,
                    show_line: true,
                    label: Some((GUIDE_TEXT_YEAR, peak.to_string())),
                },
            ),
            (i as f32 * (PLOT_TINY_IN.0 + SPACING_IN), y_in),
        ));
    }

    panels
}

fn tiny_panel(
    title: String,
    color: String,
    successes: Vec<u32>,
    failures: Vec<u32>,
    years: Vec<i32>,
    y_max: f32,
    h_guide: HGuide,
) -> ChartSpec {
    ChartSpec {
        title,
        title_pt: TITLE_TINY_PT,
        size_in: PLOT_TINY_IN,
        years,
        series: vec![
            StackSeries { label: s!(), color, values: successes },
            StackSeries { label: s!(), color: failure_color(), values: failures },
        ],
        y_label: None,
        y_max,
        show_y_axis: false,
        legend_cols: 0,
        annotate_totals: false,
        h_guide: Some(h_guide),
        v_guide: None,
    }
}

/// Shared y-range for a group of tiny panels: the tallest stack in the
/// group, with matplotlib's usual 5% headroom.
fn shared_tiny_y_max(groups: impl Iterator<Item = (Vec<u32>, Vec<u32>)>) -> f32 {
    let mut peak = 0u32;
    for (successes, failures) in groups {
        for (s, f) in successes.iter().zip(&failures) {
            peak = peak.max(s + f);
        }
    }
    (peak as f32 * 1.05).max(1.0)
}
