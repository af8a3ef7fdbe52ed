//! Frame command - compose a single frame

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use clap::Args;
use railscape_core::{CameraAnchor, Composer, DrawRecord, Trigger};
use railscape_shared::{Matrix4, MeshId};
use serde::Serialize;

use crate::GlobalArgs;

/// Arguments for the frame command
#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Simulation time in seconds
    #[arg(short, long, default_value = "0")]
    pub time: f32,

    /// Viewport aspect ratio (width / height)
    #[arg(short, long, default_value = "1.7777778")]
    pub aspect: f32,

    /// Print every draw instruction as JSON
    #[arg(long)]
    pub json: bool,

    /// Attach the camera to an anchor and report the resulting view
    #[arg(long)]
    pub anchor: Option<CameraAnchor>,
}

/// JSON shape of a frame dump
#[derive(Serialize)]
struct FrameDump {
    time: f32,
    aspect: f32,
    fov: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    camera: Option<Matrix4>,
    instructions: Vec<DrawRecord>,
}

/// Execute the frame command
pub fn execute(global: &GlobalArgs, args: FrameArgs) -> Result<()> {
    if !args.time.is_finite() {
        bail!("--time must be finite");
    }
    if !(args.aspect.is_finite() && args.aspect > 0.0) {
        bail!("--aspect must be a positive number");
    }

    let scene = global.scene_config()?;
    let composer = Composer::from_config(&scene)?;
    let mut session = scene.session()?;
    if let Some(anchor) = args.anchor {
        session.apply(Trigger::Attach(anchor));
    }

    let frame = composer.compose_frame(&session, args.time, args.aspect);
    let mut rig = scene.camera_rig()?;
    let camera = rig
        .update(session.attached(), &frame.anchors)
        .map(|view| Matrix4::from_cols_array(view.to_cols_array()));

    if args.json {
        let dump = FrameDump {
            time: args.time,
            aspect: args.aspect,
            fov: frame.projection.fov,
            camera,
            instructions: frame.instructions.iter().map(|d| d.to_record()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let mut counts: BTreeMap<MeshId, usize> = BTreeMap::new();
    for instruction in &frame.instructions {
        *counts.entry(instruction.mesh).or_default() += 1;
    }

    println!("Frame at t = {:.3}s", args.time);
    println!("  Instructions: {}", frame.instructions.len());
    for (mesh, count) in &counts {
        println!("    {:<14} {}", mesh.name(), count);
    }
    println!(
        "  Projection:   fov {:.3} rad, aspect {:.3}",
        frame.projection.fov, frame.projection.aspect
    );
    let lead = composer.train_state(session.speed(), args.time);
    let position = lead.locomotive().position;
    println!(
        "  Locomotive:   ({:.2}, {:.2}, {:.2})",
        position.x, position.y, position.z
    );
    if let (Some(anchor), Some(camera)) = (args.anchor, camera) {
        println!("  Camera ({anchor}): {:?}", camera.translation());
    }
    Ok(())
}
