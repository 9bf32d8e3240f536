use clap::{Parser, ValueEnum};
use landmark_rotations::io::{RotationReport, object_from_json, object_to_json, write_summary};
use landmark_rotations::{ExtractorConfig, LandmarkFrame, LandmarkKind, RotationExtractor};
use log::info;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Pose,
    Hand,
    Face,
    Hands,
    Holistic,
}

#[derive(Parser)]
#[command(version, about, author)]
struct LmrotCli {
    /// landmark frame json
    path: String,

    /// which landmark sets to convert
    #[arg(short, long, value_enum, default_value = "holistic")]
    mode: Mode,

    /// extractor config json
    #[arg(short, long)]
    config: Option<String>,

    /// rotations json, printed to stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// write a per-set text summary to this path
    #[arg(long)]
    summary: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = LmrotCli::parse();

    let config: ExtractorConfig = match &cli.config {
        Some(path) => object_from_json(path)?,
        None => ExtractorConfig::default(),
    };
    let extractor = RotationExtractor::new(config);
    let frame: LandmarkFrame = object_from_json(&cli.path)?;
    let set = |name: &str| {
        frame
            .set(name)
            .ok_or_else(|| landmark_rotations::error::Error::UnknownSet(name.to_string()))
    };

    let now = Instant::now();
    let mut report = RotationReport::default();
    match cli.mode {
        Mode::Pose => {
            let pose = set("pose")?;
            report.insert("pose", &pose, extractor.single(&pose, LandmarkKind::Pose))?;
        }
        Mode::Face => {
            let face = set("face")?;
            report.insert("face", &face, extractor.single(&face, LandmarkKind::Face))?;
        }
        Mode::Hand => {
            let hand = set("left_hand")?;
            report.insert("left_hand", &hand, extractor.single(&hand, LandmarkKind::Hand))?;
        }
        Mode::Hands => {
            let (left, right) = (set("left_hand")?, set("right_hand")?);
            let (l, r) = extractor.pair(&left, &right);
            report.insert("left_hand", &left, l)?;
            report.insert("right_hand", &right, r)?;
        }
        Mode::Holistic => {
            let (pose, face) = (set("pose")?, set("face")?);
            let (left, right) = (set("left_hand")?, set("right_hand")?);
            let (p, f, l, r) = extractor.composite(&pose, &face, &left, &right);
            report.insert("pose", &pose, p)?;
            report.insert("face", &face, f)?;
            report.insert("left_hand", &left, l)?;
            report.insert("right_hand", &right, r)?;
        }
    }
    info!("{:?} rotations took {:.6} sec", cli.mode, now.elapsed().as_secs_f64());

    match &cli.output {
        Some(path) => {
            object_to_json(path, &report)?;
            info!("wrote {}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    if let Some(path) = &cli.summary {
        write_summary(path, &report)?;
    }
    Ok(())
}
