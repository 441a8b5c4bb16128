// src/config/consts.rs

// Net config
pub const HOST: &str = "space.skyrocket.de";
pub const CHRONOLOGY_PATH: &str = "/doc_chr/lauXXXX.htm"; // XXXX = four-digit year
pub const USER_AGENT: &str = "launch_stats/1.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Year range. The current year is by definition incomplete and would
// render as a sudden drop at the end of every panel, so the range ends
// at the previous calendar year.
pub const YEAR_MINIMUM: i32 = 1957; // the launch of Sputnik

// Local cache
pub const STORE_DIR: &str = ".store";

// Data file
pub const DEFAULT_DATA_FILE: &str = "Data.csv";
pub const DATA_DELIM: char = ';';

// Output
pub const OUTPUT_STEM: &str = "Infographic"; // "Infographic (en).png" etc.
pub const DEFAULT_DPI: f32 = 300.0;

/// Path of the chronology page for one year.
pub fn chronology_path(year: i32) -> String {
    CHRONOLOGY_PATH.replace("XXXX", &year.to_string())
}
