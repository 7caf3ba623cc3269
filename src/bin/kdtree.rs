//! Load a point file into a 2D-tree and answer queries against it.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kdtree_2d::loader::{read_points, to_wkt};
use kdtree_2d::{BruteForce, KdTree, Point, PointIndex, Rectangle, Result};

const DEFAULT_TARGET: (f64, f64) = (0.5, 0.954);

#[derive(Parser)]
#[command(name = "kdtree")]
#[command(about = "Nearest-neighbor and range queries over a point file", version)]
struct Cli {
    /// Point file: whitespace separated x y pairs, or WKT if it ends in .wkt
    file: PathBuf,

    /// Report the stored point nearest to X Y
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    nearest: Vec<f64>,

    /// Report every stored point inside the rectangle
    #[arg(long, num_args = 4, value_names = ["XMIN", "YMIN", "XMAX", "YMAX"], allow_negative_numbers = true)]
    range: Vec<f64>,

    /// Report whether X Y is stored
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    contains: Vec<f64>,

    /// Print every stored point as a WKT MULTIPOINT
    #[arg(long)]
    dump: bool,

    /// Answer with the linear-scan index instead of the tree
    #[arg(long)]
    brute_force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kdtree_2d={},kdtree={},warn", level, level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = execute(&cli, &mut stdout.lock()) {
        error!("{}", e);
        process::exit(1);
    }
}

fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.brute_force {
        run(cli, BruteForce::new(), out)
    } else {
        run(cli, KdTree::new(), out)
    }
}

fn run<W: Write>(cli: &Cli, mut index: impl PointIndex, out: &mut W) -> Result<()> {
    let points = read_points(&cli.file)?;
    let mut inserted = 0;
    for point in points.iter().copied() {
        if index.insert(point)? {
            inserted += 1;
        }
    }
    let bounds = Rectangle::of(&points);
    info!(
        file = %cli.file.display(),
        read = points.len(),
        inserted,
        "loaded points"
    );
    debug!(
        x_min = bounds.x_min,
        y_min = bounds.y_min,
        x_max = bounds.x_max,
        y_max = bounds.y_max,
        "point bounds"
    );

    writeln!(out, "Size = {}", index.len())?;

    let mut nearest: Vec<Point> = cli.nearest.chunks(2).map(|c| Point::new(c[0], c[1])).collect();
    if nearest.is_empty() && cli.range.is_empty() && cli.contains.is_empty() && !cli.dump {
        nearest.push(DEFAULT_TARGET.into());
    }

    for target in nearest {
        match index.nearest(target)? {
            Some(p) => writeln!(out, "nearest({}, {}) = ({}, {})", target.x, target.y, p.x, p.y)?,
            None => writeln!(out, "nearest({}, {}) = none", target.x, target.y)?,
        }
    }

    for bounds in cli.range.chunks(4) {
        let rect = Rectangle {
            x_min: bounds[0],
            y_min: bounds[1],
            x_max: bounds[2],
            y_max: bounds[3],
        };
        let found = index.range(&rect)?;
        writeln!(
            out,
            "range([{}, {}] x [{}, {}]) = {}",
            rect.x_min,
            rect.x_max,
            rect.y_min,
            rect.y_max,
            to_wkt(&found)
        )?;
    }

    for coords in cli.contains.chunks(2) {
        let target = Point::new(coords[0], coords[1]);
        writeln!(
            out,
            "contains({}, {}) = {}",
            target.x,
            target.y,
            index.contains(target)?
        )?;
    }

    if cli.dump {
        writeln!(out, "{}", to_wkt(&index.points()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdtree_2d::Error;
    use std::path::Path;

    fn test_file(name: &str) -> String {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("testdata")
            .join(name)
            .display()
            .to_string()
    }

    fn run_cli(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        execute(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_target() {
        let file = test_file("input5.txt");
        let expected = "Size = 5\nnearest(0.5, 0.954) = (0.4, 0.7)\n";
        assert_eq!(run_cli(&["kdtree", file.as_str()]).unwrap(), expected);
        assert_eq!(run_cli(&["kdtree", file.as_str(), "--brute-force"]).unwrap(), expected);
    }

    #[test]
    fn test_queries() {
        let file = test_file("input5.txt");
        let args = [
            "kdtree",
            file.as_str(),
            "--nearest",
            "-1",
            "-1",
            "--range",
            "0.3",
            "0.1",
            "0.7",
            "0.5",
            "--contains",
            "0.2",
            "0.3",
            "--contains",
            "0.2",
            "0.4",
        ];
        let expected = "Size = 5\n\
                        nearest(-1, -1) = (0.2, 0.3)\n\
                        range([0.3, 0.7] x [0.1, 0.5]) = MULTIPOINT((0.7 0.2),(0.5 0.4))\n\
                        contains(0.2, 0.3) = true\n\
                        contains(0.2, 0.4) = false\n";
        assert_eq!(run_cli(&args).unwrap(), expected);
        let mut brute_args = args.to_vec();
        brute_args.push("--brute-force");
        assert_eq!(run_cli(&brute_args).unwrap(), expected);
    }

    #[test]
    fn test_dump_wkt_file() {
        let file = test_file("circle10.wkt");
        let output = run_cli(&["kdtree", file.as_str(), "--dump"]).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Size = 10"));
        let dumped = kdtree_2d::loader::parse_wkt_points(lines.next().unwrap()).unwrap();
        assert_eq!(dumped.len(), 10);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_errors_propagate() {
        match run_cli(&["kdtree", test_file("missing.txt").as_str()]) {
            Err(Error::Io(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        let file = test_file("input5.txt");
        match run_cli(&["kdtree", file.as_str(), "--range", "1", "0", "0", "1"]) {
            Err(e) => assert!(e.is_invalid_argument()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
