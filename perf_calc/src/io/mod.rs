//! File input and output helpers for chart data.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::chart::Chart;
use crate::geometry::Point3;

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing content.
pub fn write_string(path: &str, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}

/// Reads a file as a vector of lines.
pub fn read_lines(path: &str) -> io::Result<Vec<String>> {
    Ok(read_to_string(path)?.lines().map(str::to_string).collect())
}

/// Reads chart samples from a CSV file with one `x,y,z` triple per line.
/// Blank lines are skipped.
pub fn read_points_csv(path: &str) -> io::Result<Vec<Point3>> {
    let lines = read_lines(path)?;
    let mut points = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected three comma-separated values", idx + 1),
            ));
        }
        let x = parts[0].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        let y = parts[1].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        let z = parts[2].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        points.push(Point3::new(x, y, z));
    }
    Ok(points)
}

/// Writes chart samples as a CSV file with one `x,y,z` triple per line.
pub fn write_points_csv(path: &str, points: &[Point3]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for p in points {
        writeln!(file, "{},{},{}", p.x, p.y, p.z)?;
    }
    Ok(())
}

/// Reads a chart chain from a JSON file: an array of charts, each holding
/// its sample cloud.
pub fn read_chain_json(path: &str) -> io::Result<Vec<Chart>> {
    let data = read_to_string(path)?;
    serde_json::from_str(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

/// Writes a chart chain as pretty-printed JSON.
pub fn write_chain_json(path: &str, charts: &[Chart]) -> io::Result<()> {
    let data = serde_json::to_string_pretty(charts)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    std::fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn points_csv_roundtrip() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("points.csv");
        let path = file.path().to_str().unwrap().to_string();

        let points = vec![
            Point3::new(-42.5, 14000.0, 6000.0),
            Point3::new(24.0, 14000.0, 9700.0),
        ];
        write_points_csv(&path, &points).unwrap();
        file.assert(predicate::str::contains("-42.5,14000,6000"));

        let read_back = read_points_csv(&path).unwrap();
        assert_eq!(read_back, points);
    }

    #[test]
    fn points_csv_skips_blank_lines() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("points.csv");
        file.write_str("1,2,3\n\n4,5,6\n").unwrap();

        let points = read_points_csv(file.path().to_str().unwrap()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn points_csv_rejects_short_lines() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("points.csv");
        file.write_str("1,2\n").unwrap();

        let err = read_points_csv(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn chain_json_roundtrip() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("chain.json");
        let path = file.path().to_str().unwrap().to_string();

        let chain = vec![
            Chart::new(vec![
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 2.0),
                Point3::new(0.0, 1.0, 3.0),
            ]),
            Chart::new(vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 2.0),
                Point3::new(0.0, 2.0, 2.0),
            ]),
        ];
        write_chain_json(&path, &chain).unwrap();

        let read_back = read_chain_json(&path).unwrap();
        assert_eq!(read_back.len(), 2);
        assert_eq!(read_back[0].points, chain[0].points);
        assert_eq!(read_back[1].points, chain[1].points);
    }

    #[test]
    fn chain_json_rejects_malformed_file() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("chain.json");
        file.write_str("not json").unwrap();

        let err = read_chain_json(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
