//! Blend-shape inspector
//!
//! Loads a glTF/VRM asset through the viewer core, prints the blend-shape
//! panel it would show, optionally moves some sliders, and prints the
//! resulting morph weights.
//!
//! ```text
//! blendshape_inspector avatar.vrm --set face/jawOpen=0.8 --set face/eyeBlink=1
//! ```

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;

use vrm_viewer::vrm::HumanoidBone;
use vrm_viewer::{PendingLoad, PresentationRow, ViewerSession, ViewerSettings};

/// Inspect and drive the blend shapes of a glTF/VRM asset
#[derive(Parser, Debug)]
#[command(name = "blendshape_inspector", version, about, long_about = None)]
struct Args {
    /// Asset to load (.gltf, .glb or .vrm)
    path: PathBuf,

    /// Move a slider before printing weights, e.g. `face/jawOpen=0.5`
    #[arg(short, long = "set", value_parser = parse_assignment)]
    assignments: Vec<Assignment>,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the humanoid bone map
    #[arg(long)]
    bones: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
struct Assignment {
    group: String,
    leaf: String,
    value: f32,
}

fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected group/name=value, got '{raw}'"))?;
    let (group, leaf) = path
        .split_once('/')
        .ok_or_else(|| format!("expected group/name, got '{path}'"))?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid weight '{value}': {e}"))?;
    Ok(Assignment {
        group: group.trim().to_string(),
        leaf: leaf.trim().to_string(),
        value,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = match &args.settings {
        Some(path) => ViewerSettings::from_file(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => ViewerSettings::default(),
    };

    let mut session = ViewerSession::new(settings);
    let pending = PendingLoad::spawn(&args.path)?;
    log::info!("Loading {}", pending.label());
    session.finish_load(pending.wait())?;

    print_rows(&session);

    for assignment in &args.assignments {
        let index = session
            .rows()
            .find_slider(&assignment.group, &assignment.leaf)
            .ok_or_else(|| anyhow!("no slider {}/{}", assignment.group, assignment.leaf))?;
        session.slider_changed(index, assignment.value);
    }

    let asset = session
        .asset()
        .ok_or_else(|| anyhow!("no asset after a successful load"))?;

    println!();
    println!("Morph weights:");
    for (_, node) in asset.scene.iter() {
        if node.morph_weights().is_empty() {
            continue;
        }
        let name = node.name().or(node.mesh_name()).unwrap_or("<unnamed>");
        println!("  {name}: {:?}", node.morph_weights());
    }

    if let Some(camera) = session.camera() {
        println!();
        println!(
            "Camera: position {:?}, target {:?}, fov {}°",
            camera.position, camera.target, camera.fov_degrees
        );
    }

    if let Some(animation) = session.autoplay_animation() {
        println!("Autoplay: {animation}");
    }

    if args.bones {
        println!();
        println!("Humanoid ({:?}):", asset.meta.version);
        for &bone in HumanoidBone::ALL {
            if let Some(node) = asset.meta.bone_node(bone) {
                println!("  {:<24} -> node {node}", bone.name());
            }
        }
    }

    Ok(())
}

fn print_rows(session: &ViewerSession) {
    let rows = session.rows();
    if rows.is_empty() {
        println!("No blend shapes under the known roots.");
        return;
    }

    for (i, row) in rows.rows().iter().enumerate() {
        let height = rows.row_height(i).unwrap_or_default();
        match row {
            PresentationRow::Group { name } => println!("[{name}] ({height}px)"),
            PresentationRow::Slider { name, value, .. } => {
                println!("  {i:>4}  {name:<28} {value:.2} ({height}px)");
            }
        }
    }
}
