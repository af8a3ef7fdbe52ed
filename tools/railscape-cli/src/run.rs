//! Run command - drive frames through a recording renderer

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Args;
use railscape_core::camera::{desired_view, transform_distance};
use railscape_core::{CameraAnchor, RecordingRenderer, Runtime, Trigger};

use crate::GlobalArgs;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of frames to simulate
    #[arg(short, long, default_value = "600")]
    pub frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Viewport aspect ratio (width / height)
    #[arg(short, long, default_value = "1.7777778")]
    pub aspect: f32,

    /// Attach the camera to an anchor before the first frame
    #[arg(long)]
    pub anchor: Option<CameraAnchor>,

    /// Keys to press before the first frame, using the configured bindings
    #[arg(long = "key", value_name = "KEY")]
    pub keys: Vec<String>,
}

/// Execute the run command
pub fn execute(global: &GlobalArgs, args: RunArgs) -> Result<()> {
    if args.fps == 0 {
        bail!("--fps must be at least 1");
    }
    if !(args.aspect.is_finite() && args.aspect > 0.0) {
        bail!("--aspect must be a positive number");
    }

    let scene = global.scene_config()?;
    let mut runtime = Runtime::from_config(&scene)?;
    for key in &args.keys {
        match runtime.handle_key(key) {
            Some(trigger) => tracing::debug!(%key, ?trigger, "key pressed"),
            None => tracing::warn!(%key, "no control bound to key"),
        }
    }
    if let Some(anchor) = args.anchor {
        runtime.apply(Trigger::Attach(anchor));
    }

    let mut renderer = RecordingRenderer::new();
    let delta = 1.0 / args.fps as f32;
    let mut total = Duration::ZERO;
    let mut slowest = Duration::ZERO;
    let mut time = 0.0_f32;
    let mut last_time = None;
    let mut step = delta;

    for _ in 0..args.frames {
        let stats = runtime.frame(&mut renderer, time, delta, args.aspect)?;
        total += stats.elapsed;
        slowest = slowest.max(stats.elapsed);
        last_time = Some(time);
        step = stats.delta;
        time += stats.delta;
    }

    println!(
        "Ran {} frames at {} fps ({:.2}s simulated)",
        args.frames, args.fps, time
    );
    if step < delta {
        println!("  Time step:      {step:.4}s (clamped from {delta:.4}s)");
    } else {
        println!("  Time step:      {step:.4}s");
    }
    println!("  Draw calls:     {}", renderer.draws);
    if args.frames > 0 {
        println!("  Avg frame time: {:?}", total / args.frames);
    }
    println!("  Slowest frame:  {:?}", slowest);
    println!("  Camera updates: {}", renderer.camera_updates);

    if let (Some(anchor), Some(t)) = (runtime.session().attached(), last_time) {
        let anchors = runtime
            .composer()
            .compose_frame(runtime.session(), t, args.aspect)
            .anchors;
        let target = desired_view(anchors.get(anchor));
        println!(
            "  Camera lag ({anchor}): {:.4}",
            transform_distance(runtime.rig().view(), target)
        );
    }
    Ok(())
}
