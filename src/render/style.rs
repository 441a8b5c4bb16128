// src/render/style.rs
//! Palette and plot geometry. Colors come from an HSV wheel so related
//! entries (countries, families) stay visually balanced; geometry is in
//! inches and scaled by DPI at draw time.

/// Chart text and spines.
pub const FOREGROUND: &str = "#fff";
/// Secondary text: bar totals, guide-line annotations.
pub const ANNOTATION: &str = "#bbb";
/// Guide lines.
pub const DECORATION: &str = "#777";
/// Canvas fill, RGBA. Fully transparent; the color matters only when a
/// viewer flattens the alpha channel.
pub const BACKGROUND_RGBA: [u8; 4] = [0x31, 0x42, 0x4c, 0x00];

pub const FONT_FAMILY: &str = "Source Sans Pro, sans-serif";

// Font sizes in points.
pub const FONT_PT: f32 = 12.0;
pub const TITLE_PT: f32 = 20.0;
pub const TITLE_TINY_PT: f32 = 14.0;
pub const BAR_LABEL_PT: f32 = 8.0;

// Panel geometry in inches.
pub const SPACING_IN: f32 = 0.5;
pub const PLOT_LONG_IN: (f32, f32) = (18.0, 4.0);
pub const PLOT_SIDE_IN: (f32, f32) = (9.0, 4.0); // half a long panel
pub const TINY_PLOT_COUNT: usize = 7; // tiny panels in a row
pub const PLOT_TINY_IN: (f32, f32) = (3.5, 2.0);
pub const PLOT_XLONG_IN: (f32, f32) = (27.5, 4.0); // full content width
pub const CONTENT_WIDTH_IN: f32 = 27.5;
pub const CONTENT_HEIGHT_IN: f32 = 14.0;

/// HSV → `#rrggbb`, hue in degrees.
pub fn hsv_hex(hue_deg: f32, saturation: f32, value: f32) -> String {
    let h = (hue_deg.rem_euclid(360.0)) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match i as u32 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    let byte = |x: f32| (x * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
}

fn shade(hue_deg: f32) -> String {
    hsv_hex(hue_deg, 0.7, 0.7)
}

/// Stack color for the success share of a panel.
pub fn success_color() -> String {
    shade(131.0)
}

/// Stack color for the failure share: plain white, readable on any hue.
pub fn failure_color() -> String {
    hsv_hex(0.0, 0.0, 1.0)
}

pub fn country_color(country: &str) -> String {
    match country {
        "Brazil" => shade(131.0),
        "China" => shade(50.0),
        "Europe" => hsv_hex(188.0, 0.8, 0.7),
        "India" => hsv_hex(40.0, 0.7, 0.9),
        "Iran" => hsv_hex(131.0, 0.7, 0.5),
        "Israel" => hsv_hex(220.0, 0.1, 0.9),
        "Japan" => hsv_hex(313.0, 0.7, 0.9),
        "North Korea" => shade(25.0),
        "South Korea" => hsv_hex(0.0, 0.3, 0.7),
        "USA" => shade(219.0),
        "USSR/Russia" => shade(5.0),
        _ => s!(FOREGROUND),
    }
}

pub fn family_color(family: &str) -> String {
    match family {
        "Ariane" => country_color("Europe"),
        "Atlas" => shade(209.0),
        "Falcon" => hsv_hex(259.0, 0.3, 1.0),
        "Kosmos" => hsv_hex(15.0, 0.3, 0.7),
        "Long March" => country_color("China"),
        "Proton" => hsv_hex(35.0, 0.9, 0.5),
        "R-7" => shade(5.0),
        _ => s!(FOREGROUND),
    }
}
