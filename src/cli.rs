// src/cli.rs
use std::{env, path::PathBuf};

use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::params::Params;
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params).map_err(Error::Usage)?;

    let mut progress = CliProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;
    println!(
        "{} records, {} image(s) written.",
        summary.records,
        summary.images_written.len()
    );
    Ok(())
}

fn parse_cli(params: &mut Params) -> std::result::Result<(), String> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-l" | "--languages" => {
                let v = args.next().ok_or("Missing value for --languages")?;
                params.languages = parse_languages(&v)?;
            }
            "-d" | "--data" => {
                let v = args.next().ok_or("Missing value for --data")?;
                params.data_path = PathBuf::from(v);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing value for --out")?;
                params.out_dir = PathBuf::from(v);
            }
            "-t" | "--template" => {
                let v = args.next().ok_or("Missing value for --template")?;
                params.template = Some(PathBuf::from(v));
            }
            "--refresh" => params.refresh = true,
            "--dpi" => {
                let v = args.next().ok_or("Missing value for --dpi")?;
                let dpi: f32 = v.parse().map_err(|_| format!("Bad --dpi value: {}", v))?;
                if !(20.0..=1200.0).contains(&dpi) {
                    return Err(format!("--dpi out of range (20..=1200): {}", dpi));
                }
                params.dpi = dpi;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a)),
        }
    }
    Ok(())
}

fn parse_languages(s: &str) -> std::result::Result<Vec<Language>, String> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let lang = Language::parse(part).ok_or(format!("Unknown language: {}", part))?;
        if !out.contains(&lang) {
            out.push(lang);
        }
    }
    if out.is_empty() {
        return Err(s!("No languages given"));
    }
    Ok(out)
}

/* ---------------- CLI progress sink ---------------- */

#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn item_done(&mut self, year: i32) {
        self.done += 1;
        println!("[{}/{}] {}", self.done, self.total, year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_lists_parse_and_dedup() {
        assert_eq!(parse_languages("en,pl").unwrap(), vec![Language::En, Language::Pl]);
        assert_eq!(parse_languages("pl, pl ,").unwrap(), vec![Language::Pl]);
        assert!(parse_languages("en,xx").is_err());
        assert!(parse_languages("").is_err());
    }
}
