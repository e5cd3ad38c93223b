//! The bicycle as a declarative list of parts, in painter's order.
//!
//! Every coordinate is an offset from the rear hub at (`center_x`, `center_y`).
//! Later parts are drawn over earlier ones, so the order of the list is part of the picture.

use crate::primitive::{self, Primitive};
use crate::scene_state::SceneState;

pub const FRAME_RGB: [f32; 3] = [1.0, 0.17, 0.27];
pub const SILVER_RGB: [f32; 3] = [0.65, 0.65, 0.65];
pub const BLACK_RGB: [f32; 3] = [0.0, 0.0, 0.0];
pub const CRANK_RGB: [f32; 3] = [0.2, 0.2, 0.2];
pub const PEDAL_RGB: [f32; 3] = [0.05, 0.05, 0.05];
pub const CHAINRING_RGB: [f32; 3] = [0.45, 0.45, 0.45];

/// tip-to-tip spoke length, also the tyre diameter
pub const SPOKE_LENGTH: f32 = 0.3;
/// front hub offset from the rear hub
pub const WHEELBASE: f32 = 0.6;
/// bottom bracket offset from the rear hub
pub const BOTTOM_BRACKET: f32 = 0.27;

const SMOOTH: usize = 200;
const COARSE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        ps: [f32; 2],
        pe: [f32; 2],
    },
    Rod {
        center: [f32; 2],
        length: f32,
        angle_deg: f32,
    },
    Ring {
        center: [f32; 2],
        radius: f32,
        num_segment: usize,
    },
    Disk {
        center: [f32; 2],
        radius: f32,
        num_segment: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub shape: Shape,
    pub rgb: [f32; 3],
    /// stroke width in pixels, unused for disks
    pub width: f32,
}

impl Part {
    pub fn to_primitive(&self) -> Primitive {
        match &self.shape {
            Shape::Line { ps, pe } => primitive::line(ps, pe),
            Shape::Rod {
                center,
                length,
                angle_deg,
            } => primitive::line_centered(center, *length, *angle_deg),
            Shape::Ring {
                center,
                radius,
                num_segment,
            } => primitive::ring(center, *radius, *num_segment),
            Shape::Disk {
                center,
                radius,
                num_segment,
            } => primitive::disk(center, *radius, *num_segment),
        }
    }
}

/// Collects parts placed relative to an origin.
struct Sketch {
    origin: [f32; 2],
    parts: Vec<Part>,
}

impl Sketch {
    fn at(&self, dx: f32, dy: f32) -> [f32; 2] {
        [self.origin[0] + dx, self.origin[1] + dy]
    }

    fn line(&mut self, ps: [f32; 2], pe: [f32; 2], rgb: [f32; 3], width: f32) {
        let shape = Shape::Line {
            ps: self.at(ps[0], ps[1]),
            pe: self.at(pe[0], pe[1]),
        };
        self.parts.push(Part { shape, rgb, width });
    }

    fn rod(&mut self, center: [f32; 2], length: f32, angle_deg: f32, rgb: [f32; 3], width: f32) {
        let shape = Shape::Rod {
            center: self.at(center[0], center[1]),
            length,
            angle_deg,
        };
        self.parts.push(Part { shape, rgb, width });
    }

    fn ring(&mut self, center: [f32; 2], radius: f32, rgb: [f32; 3], width: f32) {
        let shape = Shape::Ring {
            center: self.at(center[0], center[1]),
            radius,
            num_segment: SMOOTH,
        };
        self.parts.push(Part { shape, rgb, width });
    }

    fn disk(&mut self, center: [f32; 2], radius: f32, num_segment: usize, rgb: [f32; 3]) {
        let shape = Shape::Disk {
            center: self.at(center[0], center[1]),
            radius,
            num_segment,
        };
        self.parts.push(Part {
            shape,
            rgb,
            width: 1.0,
        });
    }

    /// pedal crank from the bottom bracket to `tip`, with the pedal bar on top
    fn crank(&mut self, tip: [f32; 2]) {
        self.line([BOTTOM_BRACKET, 0.0], tip, CRANK_RGB, 5.0);
        self.rod(tip, 0.04, 0.0, PEDAL_RGB, 8.0);
    }

    fn wheel(&mut self, hub_x: f32, angle_deg: f32) {
        let hub = [hub_x, 0.0];
        for spoke_deg in [0.0, 45.0, 90.0, 135.0] {
            self.rod(hub, SPOKE_LENGTH, angle_deg + spoke_deg, SILVER_RGB, 5.0);
        }
        self.ring(hub, SPOKE_LENGTH / 2.0, BLACK_RGB, 7.0);
        for (sx, sy) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
            self.disk([hub_x + sx * 0.106, sy * 0.106], 0.0055, SMOOTH, BLACK_RGB);
        }
        self.ring(hub, SPOKE_LENGTH / 2.0 - 0.008, SILVER_RGB, 5.0);
    }

    fn frame(&mut self) {
        // fork, stem and handlebar
        self.line([0.6, 0.0], [0.52, 0.3], FRAME_RGB, 8.0);
        self.disk([0.6, 0.0], 0.006, SMOOTH, FRAME_RGB);
        self.line([0.52, 0.3], [0.505, 0.36], SILVER_RGB, 8.0);
        self.line([0.47, 0.36], [0.54, 0.36], BLACK_RGB, 8.0);
        self.disk([0.47, 0.36], 0.015, COARSE, BLACK_RGB);
        self.disk([0.54, 0.36], 0.012, COARSE, BLACK_RGB);
        // rear triangle, seat post and saddle
        self.line([0.0, 0.0], [0.27, 0.0], FRAME_RGB, 8.0);
        self.line([0.0, 0.0], [0.22, 0.2], FRAME_RGB, 8.0);
        self.line([0.27, 0.0], [0.21, 0.23], FRAME_RGB, 8.0);
        self.line([0.21, 0.23], [0.20, 0.26], SILVER_RGB, 8.0);
        self.line([0.16, 0.255], [0.23, 0.26], BLACK_RGB, 8.0);
        self.disk([0.16, 0.265], 0.015, SMOOTH, BLACK_RGB);
        self.line([0.16, 0.275], [0.23, 0.26], BLACK_RGB, 8.0);
        // down tube and top tube
        self.line([0.27, 0.0], [0.53, 0.26], FRAME_RGB, 8.0);
        self.line([0.22, 0.2], [0.53, 0.28], FRAME_RGB, 8.0);
        self.disk([0.0, 0.0], 0.006, SMOOTH, FRAME_RGB);
    }
}

/// Build the whole illustration for `state`.
pub fn assemble(state: &SceneState) -> Vec<Part> {
    let mut sketch = Sketch {
        origin: state.center(),
        parts: Vec::with_capacity(42),
    };
    // far-side crank, hidden behind everything else
    sketch.crank([BOTTOM_BRACKET - state.pedal_x, -state.pedal_y]);
    sketch.wheel(0.0, state.angle_deg);
    sketch.wheel(WHEELBASE, state.angle_deg);
    sketch.frame();
    // near-side chainring and crank
    sketch.disk([BOTTOM_BRACKET, 0.0], 0.04, SMOOTH, CHAINRING_RGB);
    sketch.crank([BOTTOM_BRACKET + state.pedal_x, state.pedal_y]);
    sketch.disk([BOTTOM_BRACKET, 0.0], 0.02, SMOOTH, FRAME_RGB);
    sketch.parts
}
