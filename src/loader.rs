//! Reading point lists from text, and writing them back out as WKT.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;
use wkt::types::Point as WktPoint;
use wkt::{Geometry, Wkt};

use crate::{Error, Point, Result};

/// Parse whitespace separated numbers, taken two at a time as (x, y).
/// A pair may span lines.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    // x coordinate waiting for its y, with the line it came from
    let mut pending: Option<(f64, usize)> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        for token in line.split_whitespace() {
            let value: f64 = token
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite())
                .ok_or_else(|| Error::Parse {
                    line: line_no,
                    message: format!("'{}' is not a finite number", token),
                })?;
            match pending.take() {
                None => pending = Some((value, line_no)),
                Some((x, _)) => points.push(Point::new(x, value)),
            }
        }
    }

    if let Some((x, line)) = pending {
        return Err(Error::Parse {
            line,
            message: format!("coordinate {} has no partner", x),
        });
    }
    Ok(points)
}

/// Parse WKT with one geometry per line. Only POINT and MULTIPOINT are
/// accepted; POINT EMPTY contributes nothing.
pub fn parse_wkt_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = Wkt::<f64>::from_str(line).map_err(|e| Error::Parse {
            line: line_no,
            message: e.to_string(),
        })?;
        let first_new = points.len();
        for geometry in parsed.items {
            match geometry {
                Geometry::Point(point) => points.extend(from_wkt_point(point)),
                Geometry::MultiPoint(multi) => {
                    points.extend(multi.0.into_iter().filter_map(from_wkt_point))
                }
                _ => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: "expected POINT or MULTIPOINT".to_string(),
                    })
                }
            }
        }
        if let Some(bad) = points[first_new..].iter().find(|p| !p.is_valid()) {
            return Err(Error::Parse {
                line: line_no,
                message: format!("point ({}, {}) is not finite", bad.x, bad.y),
            });
        }
    }

    Ok(points)
}

fn from_wkt_point(point: WktPoint<f64>) -> Option<Point> {
    point.0.map(|c| Point::new(c.x, c.y))
}

/// Read a point file. `.wkt` files are parsed as WKT, anything else as
/// plain coordinate pairs.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let is_wkt = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("wkt"));

    let points = if is_wkt {
        parse_wkt_points(&contents)?
    } else {
        parse_points(&contents)?
    };
    debug!(path = %path.display(), count = points.len(), "read points");
    Ok(points)
}

/// Render points as a single WKT MULTIPOINT.
pub fn to_wkt(points: &[Point]) -> String {
    if points.is_empty() {
        return "MULTIPOINT EMPTY".to_string();
    }
    let coords: Vec<String> = points
        .iter()
        .map(|p| format!("({} {})", p.x, p.y))
        .collect();
    format!("MULTIPOINT({})", coords.join(","))
}
