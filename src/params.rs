// src/params.rs
use std::path::PathBuf;

use crate::config::consts::{DEFAULT_DATA_FILE, DEFAULT_DPI};
use crate::i18n::Language;

#[derive(Clone)]
pub struct Params {
    pub languages: Vec<Language>,    // one infographic per entry
    pub data_path: PathBuf,          // the flat data file
    pub out_dir: PathBuf,            // where the images land
    pub template: Option<PathBuf>,   // optional backdrop image
    pub refresh: bool,               // re-scrape even if data exists
    pub dpi: f32,
}

impl Params {
    pub fn new() -> Self {
        Self {
            languages: vec![Language::En, Language::Pl],
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            out_dir: PathBuf::from("."),
            template: None,
            refresh: false,
            dpi: DEFAULT_DPI,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
