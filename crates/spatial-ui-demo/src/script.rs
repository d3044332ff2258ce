//! A fixed session that exercises the UI without a terminal

use anyhow::Context;
use glam::Vec3;
use spatial_ui::{Bounds, Handed, RenderBackend, TextEvent};
use tracing::{info, warn};

use crate::host::DemoHost;

/// Fingertip offsets from a button's center, front to pressed
const PRESS_PATH: [f32; 6] = [-0.02, -0.015, -0.01, -0.006, -0.003, -0.003];

/// What the scripted session achieved
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptReport {
    pub pings: u32,
    pub greeted: Option<String>,
    pub bell_rings: u32,
    pub cube_moved: f32,
}

fn idle<R: RenderBackend>(host: &mut DemoHost<R>, frames: usize) {
    for _ in 0..frames {
        host.frame(&[]);
    }
}

/// Push a fingertip through `target` from the front, then pull it back
fn press<R: RenderBackend>(host: &mut DemoHost<R>, hand: Handed, target: Bounds) {
    for dz in PRESS_PATH {
        host.sim.place(hand, target.center + Vec3::new(0.0, 0.0, dz));
        host.frame(&[]);
    }
    host.sim.place(hand, target.center + Vec3::new(0.0, 0.0, -0.06));
    host.frame(&[]);
}

/// Run the scripted session: press a button, type a name, ring the bell
/// and drag the cube
pub fn run<R: RenderBackend>(host: &mut DemoHost<R>) -> anyhow::Result<ScriptReport> {
    // The window sizes itself over the first frames
    idle(host, 3);

    let ping = host.scene.ping_world.context("Ping button was never laid out")?;
    info!("Pressing Ping");
    press(host, Handed::Right, ping);

    let field = host.scene.name_world.context("Name field was never laid out")?;
    info!("Focusing the name field");
    press(host, Handed::Right, field);
    if !host.typing() {
        warn!("Name field did not take the keyboard");
    }
    let mut text: Vec<TextEvent> = "Ada".chars().map(TextEvent::from).collect();
    text.push(TextEvent::Enter);
    host.frame(&text);
    idle(host, 2);

    info!("Ringing the bell");
    host.sim.place(Handed::Left, Vec3::new(-0.25, -0.15, -0.45));
    idle(host, 2);
    host.sim.place(Handed::Left, Vec3::new(0.15, -0.12, -0.5));
    idle(host, 1);

    info!("Dragging the cube");
    let start = host.scene.cube_center();
    host.sim.place(Handed::Left, start);
    host.frame(&[]);
    host.sim.set_pinched(Handed::Left, true);
    host.frame(&[]);
    for step in 1..=5 {
        host.sim.place(Handed::Left, start + Vec3::new(0.01 * step as f32, 0.0, 0.0));
        host.frame(&[]);
    }
    host.sim.set_pinched(Handed::Left, false);
    idle(host, 2);

    Ok(ScriptReport {
        pings: host.scene.pings,
        greeted: host.scene.greeted.clone(),
        bell_rings: host.scene.bell_rings,
        cube_moved: host.scene.cube_center().distance(start),
    })
}
