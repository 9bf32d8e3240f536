use clap::{Parser, Subcommand};
use landmark_rotations::ExtractorConfig;
use landmark_rotations::io::object_to_json;
use landmark_rotations::synthetic::{SET_NAMES, landmark_frame};
use log::info;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic landmark frames
    Generate {
        /// Output directory
        #[arg(short, long)]
        output: String,

        /// Number of frames to generate
        #[arg(short, long, default_value = "20")]
        num_frames: usize,

        /// Seed of the first frame, incremented per frame
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Landmark sets to leave empty: pose, face, left_hand, right_hand
        #[arg(short, long, value_delimiter = ',')]
        missing: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Commands::Generate {
            output,
            num_frames,
            seed,
            missing,
        } => {
            generate_frames(&output, num_frames, seed, &missing)?;
        }
    }

    Ok(())
}

fn generate_frames(
    output_dir: &str,
    num_frames: usize,
    seed: u64,
    missing: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(unknown) = missing.iter().find(|m| !SET_NAMES.contains(&m.as_str())) {
        return Err(landmark_rotations::error::Error::UnknownSet(unknown.clone()).into());
    }
    std::fs::create_dir_all(output_dir)?;

    for frame_idx in 0..num_frames {
        let frame = landmark_frame(seed + frame_idx as u64, missing);
        let filename = format!("{:06}.json", frame_idx);
        object_to_json(Path::new(output_dir).join(filename), &frame)?;
    }

    object_to_json(Path::new(output_dir).join("config.json"), &ExtractorConfig::default())?;

    info!("Generated {} frames in {}", num_frames, output_dir);
    Ok(())
}
