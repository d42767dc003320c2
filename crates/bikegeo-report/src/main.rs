//! Print the geometry of a bike preset as JSON.
//!
//! ```text
//! bikegeo-report <bike.json> [--shadow <shadow.json>] [--spin <degrees>]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use bikegeo::compare::{MATCH_TOLERANCE, key_points};
use bikegeo::frame::ForkPlacement;
use bikegeo::{
    BikeGeometry, BikeParams, Coordinates, GeometryError, Metrics, PoseError, compare,
};
use serde::Serialize;

const USAGE: &str =
    "usage: bikegeo-report <bike.json> [--shadow <shadow.json>] [--spin <degrees>]";

#[derive(Debug, PartialEq)]
struct Args {
    bike: PathBuf,
    shadow: Option<PathBuf>,
    spin: Option<f64>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut bike = None;
    let mut shadow = None;
    let mut spin = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--shadow" => {
                let path = args.next().context("--shadow needs a file")?;
                shadow = Some(PathBuf::from(path));
            }
            "--spin" => {
                let value = args.next().context("--spin needs an angle in degrees")?;
                let degrees: f64 = value
                    .parse()
                    .with_context(|| format!("bad spin angle `{value}`"))?;
                spin = Some(degrees);
            }
            flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
            _ if bike.is_none() => bike = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument `{arg}`"),
        }
    }
    let bike = bike.context("missing bike preset")?;
    Ok(Args { bike, shadow, spin })
}

fn load(path: &Path) -> anyhow::Result<BikeGeometry> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let params: BikeParams = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a bike preset", path.display()))?;
    let bike = BikeGeometry::new(&params)
        .with_context(|| format!("cannot build bike from {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        issues = bike.rider_issues().len(),
        "bike built"
    );
    Ok(bike)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    points: Vec<NamedPoint>,
    metrics: Metrics,
    fork_placement: ForkPlacement,
    rider_issues: Vec<Issue>,
    bounds: [[f64; 2]; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pose: Option<PoseReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shadow: Option<ShadowReport>,
}

#[derive(Serialize)]
struct NamedPoint {
    name: &'static str,
    at: Option<[f64; 2]>,
}

#[derive(Serialize)]
struct Issue {
    kind: &'static str,
    message: String,
}

impl From<&PoseError> for Issue {
    fn from(err: &PoseError) -> Self {
        Issue {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum PoseReport {
    #[serde(rename_all = "camelCase")]
    Placed {
        spin: f64,
        crank_end: [f64; 2],
        knee: [f64; 2],
        heel: [f64; 2],
        toe: [f64; 2],
    },
    Failed(Issue),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShadowReport {
    metrics: Metrics,
    matches: bool,
    metric_deltas: Vec<Delta>,
    point_deltas: Vec<Delta>,
}

#[derive(Serialize)]
struct Delta {
    name: &'static str,
    delta: Option<f64>,
}

fn xy(p: Coordinates) -> [f64; 2] {
    [p.x, p.y]
}

fn report(bike: &BikeGeometry, shadow: Option<&BikeGeometry>, spin: Option<f64>) -> Report {
    let bounds = bike.bounds();
    let pose = spin.map(|spin| match bike.pose_at(spin) {
        Ok(pose) => PoseReport::Placed {
            spin,
            crank_end: xy(pose.crank_end),
            knee: xy(pose.knee),
            heel: xy(pose.heel),
            toe: xy(pose.toe),
        },
        Err(err) => PoseReport::Failed(Issue::from(&err)),
    });
    let shadow = shadow.map(|shadow| {
        let cmp = compare(bike, shadow);
        ShadowReport {
            metrics: shadow.metrics(),
            matches: cmp.is_match(MATCH_TOLERANCE),
            metric_deltas: cmp
                .metrics
                .iter()
                .map(|m| Delta {
                    name: m.name,
                    delta: m.difference(),
                })
                .collect(),
            point_deltas: cmp
                .points
                .iter()
                .map(|p| Delta {
                    name: p.name,
                    delta: p.distance(),
                })
                .collect(),
        }
    });

    Report {
        points: key_points(bike)
            .into_iter()
            .map(|(name, at)| NamedPoint {
                name,
                at: at.map(xy),
            })
            .collect(),
        metrics: bike.metrics(),
        fork_placement: bike.fork().placement(),
        rider_issues: bike.rider_issues().iter().map(Issue::from).collect(),
        bounds: [xy(bounds.min), xy(bounds.max)],
        pose,
        shadow,
    }
}

fn run() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1)).context(USAGE)?;
    let bike = load(&args.bike)?;
    let shadow = args.shadow.as_deref().map(load).transpose()?;
    let out = report(&bike, shadow.as_ref(), args.spin);
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn main() -> ExitCode {
    // stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GeometryError>() {
                Some(geometry) => eprintln!("{err}\n{:?}", miette::Report::new(geometry.clone())),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_all_options() {
        let parsed = args(&["road.json", "--spin", "90", "--shadow", "gravel.json"]).unwrap();
        assert_eq!(
            parsed,
            Args {
                bike: PathBuf::from("road.json"),
                shadow: Some(PathBuf::from("gravel.json")),
                spin: Some(90.0),
            }
        );
    }

    #[test]
    fn rejects_bad_usage() {
        assert!(args(&[]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
        assert!(args(&["a.json", "--spin"]).is_err());
        assert!(args(&["a.json", "--spin", "fast"]).is_err());
        assert!(args(&["a.json", "--verbose"]).is_err());
    }

    #[test]
    fn report_serializes() {
        let params = BikeParams {
            reach_length: 380.0,
            stack_length: 560.0,
            head_tube_length: 150.0,
            head_tube_angle: 73.0,
            chain_stay_length: 410.0,
            bb_drop_length: 70.0,
            seat_tube_length: 520.0,
            seat_tube_angle: 73.5,
            effective_seat_tube_angle: 73.5,
            wheel_base: 990.0,
            ..Default::default()
        };
        let bike = BikeGeometry::new(&params).unwrap();
        let json = serde_json::to_value(report(&bike, Some(&bike), Some(90.0))).unwrap();
        assert_eq!(json["forkPlacement"], "wheel-base");
        assert_eq!(json["shadow"]["matches"], true);
        assert_eq!(json["pose"]["failed"]["kind"], "unseated");
        assert_eq!(json["points"][0]["name"], "bottomBracket");
        assert!(json["metrics"]["seatPostLength"].is_null());
    }
}
