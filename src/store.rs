// src/store.rs
//! The flat data file. One row per launch, semicolon-delimited, one
//! header row. The renderer treats this as read-only input; the scraper
//! overwrites it wholesale.

use std::path::Path;

use crate::config::consts::DATA_DELIM;
use crate::csv::{parse_rows, rows_to_string, write_row};
use crate::error::RenderError;
use crate::launch::Launch;

pub const HEADER: [&str; 7] =
    ["Year", "Site", "Country", "Vehicle", "Family", "Remarks", "Success"];

/// Overwrite the data file with the full record set.
pub fn save(path: &Path, launches: &[Launch]) -> std::io::Result<()> {
    let mut buf: Vec<u8> = Vec::new();
    let header: Vec<String> = HEADER.iter().map(|h| s!(*h)).collect();
    write_row(&mut buf, &header, DATA_DELIM)?;
    for l in launches {
        write_row(&mut buf, &to_row(l), DATA_DELIM)?;
    }
    std::fs::write(path, buf)
}

/// Load and decode the data file. All load failures (unreadable, empty,
/// wrong header, unparseable fields) are `Data` errors naming the problem.
pub fn load(path: &Path) -> Result<Vec<Launch>, RenderError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| RenderError::Data(format!("cannot read {}: {}", path.display(), e)))?;

    let mut rows = parse_rows(&text, DATA_DELIM);
    if rows.is_empty() {
        return Err(RenderError::Data(format!("{} is empty", path.display())));
    }

    let header = rows.remove(0);
    if !header_matches(&header) {
        return Err(RenderError::Data(format!(
            "{} has unexpected columns {:?} (want {:?})",
            path.display(),
            header,
            HEADER
        )));
    }

    let mut launches = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        launches.push(from_row(row).map_err(|why| {
            RenderError::Data(format!("{} row {}: {}", path.display(), i + 2, why))
        })?);
    }
    Ok(launches)
}

fn header_matches(header: &[String]) -> bool {
    header.len() == HEADER.len()
        && header.iter().zip(HEADER).all(|(a, b)| a.eq_ignore_ascii_case(b))
}

fn to_row(l: &Launch) -> Vec<String> {
    vec![
        l.year.to_string(),
        l.site.clone(),
        l.country.clone(),
        l.vehicle.clone(),
        l.family.clone(),
        l.remarks.clone(),
        l.success.to_string(),
    ]
}

fn from_row(row: &[String]) -> Result<Launch, String> {
    if row.len() != HEADER.len() {
        return Err(format!("expected {} fields, got {}", HEADER.len(), row.len()));
    }
    let year: i32 = row[0]
        .parse()
        .map_err(|_| format!("bad year {:?}", row[0]))?;
    let success = match row[6].to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        other => return Err(format!("bad success flag {:?}", other)),
    };
    Ok(Launch {
        year,
        site: row[1].clone(),
        country: row[2].clone(),
        vehicle: row[3].clone(),
        family: row[4].clone(),
        remarks: row[5].clone(),
        success,
    })
}

/// Stringify a record set the way `save` writes it (for tests/tools).
pub fn to_data_string(launches: &[Launch]) -> String {
    let header: Vec<String> = HEADER.iter().map(|h| s!(*h)).collect();
    let rows: Vec<Vec<String>> = launches.iter().map(to_row).collect();
    rows_to_string(&rows, &Some(header), DATA_DELIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Launch {
        Launch {
            year: 1957,
            site: s!("Ba LC-1/5"),
            country: s!("USSR/Russia"),
            vehicle: s!("Sputnik (8K71PS)"),
            family: s!("R-7"),
            remarks: s!(""),
            success: true,
        }
    }

    fn tmp_file(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("launch_stats_store_{}", name));
        p
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = tmp_file("roundtrip.csv");
        let launches = vec![sample()];
        save(&path, &launches).unwrap();
        let loaded = load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, launches);
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let err = load(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, RenderError::Data(_)));
    }

    #[test]
    fn wrong_header_is_a_data_error() {
        let path = tmp_file("badheader.csv");
        std::fs::write(&path, "Year;Site;Country;Vehicle;Family;Remarks\n").unwrap();
        let err = load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, RenderError::Data(_)));
    }

    #[test]
    fn short_row_is_a_data_error() {
        let path = tmp_file("shortrow.csv");
        let text = format!("{}\n1999;Ba\n", to_data_string(&[]).trim_end());
        std::fs::write(&path, text).unwrap();
        let err = load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        match err {
            RenderError::Data(msg) => assert!(msg.contains("row 2")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_only_file_loads_zero_records() {
        let path = tmp_file("headeronly.csv");
        save(&path, &[]).unwrap();
        let loaded = load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(loaded.is_empty());
    }
}
