//! Shapes reduced to a flat `vtx2xyz` array and a draw mode. No GL calls here.

/// How consecutive vertices of a [`Primitive`] are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Lines,
    /// the last vertex connects back to the first
    LineLoop,
    /// the first vertex is the hub of the fan
    TriangleFan,
}

impl DrawMode {
    pub fn gl_mode(self) -> u32 {
        match self {
            DrawMode::Lines => glow::LINES,
            DrawMode::LineLoop => glow::LINE_LOOP,
            DrawMode::TriangleFan => glow::TRIANGLE_FAN,
        }
    }

    /// whether the rasterizer line width affects this mode
    pub fn is_stroked(self) -> bool {
        !matches!(self, DrawMode::TriangleFan)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub mode: DrawMode,
    /// tightly packed xyz triples, z is always zero
    pub vtx2xyz: Vec<f32>,
}

impl Primitive {
    pub fn num_vtx(&self) -> usize {
        self.vtx2xyz.len() / 3
    }

    pub fn xyz(&self, i_vtx: usize) -> &[f32; 3] {
        arrayref::array_ref![self.vtx2xyz, i_vtx * 3, 3]
    }
}

fn push_xy(vtx2xyz: &mut Vec<f32>, p: &[f32; 2]) {
    vtx2xyz.extend_from_slice(&[p[0], p[1], 0.0]);
}

/// `num_segment` samples on the circle, starting at angle zero
fn circle_samples(
    center: &[f32; 2],
    radius: f32,
    num_segment: usize,
) -> impl Iterator<Item = [f32; 2]> + '_ {
    (0..num_segment).map(move |i_seg| {
        let theta = 2.0 * std::f32::consts::PI * i_seg as f32 / num_segment as f32;
        [
            center[0] + radius * theta.cos(),
            center[1] + radius * theta.sin(),
        ]
    })
}

pub fn line(ps: &[f32; 2], pe: &[f32; 2]) -> Primitive {
    let mut vtx2xyz = Vec::with_capacity(6);
    push_xy(&mut vtx2xyz, ps);
    push_xy(&mut vtx2xyz, pe);
    Primitive {
        mode: DrawMode::Lines,
        vtx2xyz,
    }
}

/// Rod of `length` pivoting around `center`, oriented by `angle_deg`.
pub fn line_centered(center: &[f32; 2], length: f32, angle_deg: f32) -> Primitive {
    use del_geo_core::vec2::Vec2;
    let theta = angle_deg.to_radians();
    let half = [theta.cos(), theta.sin()].scale(0.5 * length);
    line(&center.add(&half), &center.sub(&half))
}

/// Outline of a circle, drawn as a closed loop.
pub fn ring(center: &[f32; 2], radius: f32, num_segment: usize) -> Primitive {
    assert!(num_segment >= 3, "a ring needs at least 3 segments");
    let mut vtx2xyz = Vec::with_capacity(num_segment * 3);
    for p in circle_samples(center, radius, num_segment) {
        push_xy(&mut vtx2xyz, &p);
    }
    Primitive {
        mode: DrawMode::LineLoop,
        vtx2xyz,
    }
}

/// Filled circle as a triangle fan: the center, then `num_segment + 1` boundary
/// samples where the last one closes the fan.
pub fn disk(center: &[f32; 2], radius: f32, num_segment: usize) -> Primitive {
    assert!(num_segment >= 3, "a disk needs at least 3 segments");
    let mut vtx2xyz = Vec::with_capacity((num_segment + 2) * 3);
    push_xy(&mut vtx2xyz, center);
    for p in circle_samples(center, radius, num_segment) {
        push_xy(&mut vtx2xyz, &p);
    }
    let first = [vtx2xyz[3], vtx2xyz[4]];
    push_xy(&mut vtx2xyz, &first);
    Primitive {
        mode: DrawMode::TriangleFan,
        vtx2xyz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    fn dist(p: &[f32; 3], q: &[f32; 2]) -> f32 {
        ((p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2)).sqrt()
    }

    #[test]
    fn line_keeps_endpoints_in_order() {
        let prim = line(&[0.1, 0.2], &[-0.3, 0.4]);
        assert_eq!(prim.mode, DrawMode::Lines);
        assert_eq!(prim.vtx2xyz, vec![0.1, 0.2, 0.0, -0.3, 0.4, 0.0]);
    }

    #[test]
    fn centered_rod_is_balanced_on_its_pivot() {
        for &(cx, cy, length, angle) in &[
            (0.0f32, 0.0f32, 0.3f32, 0.0f32),
            (-0.5, 0.1, 0.04, 45.0),
            (0.27, -0.2, 1.5, -1234.5),
            (3.0, 7.0, 0.0, 90.0),
        ] {
            let prim = line_centered(&[cx, cy], length, angle);
            assert_eq!(prim.num_vtx(), 2);
            let (p0, p1) = (prim.xyz(0), prim.xyz(1));
            assert!(((p0[0] + p1[0]) * 0.5 - cx).abs() < EPS);
            assert!(((p0[1] + p1[1]) * 0.5 - cy).abs() < EPS);
            assert!((dist(p0, &[p1[0], p1[1]]) - length).abs() < EPS);
        }
    }

    #[test]
    fn centered_rod_at_zero_degrees_starts_on_the_right() {
        let prim = line_centered(&[1.0, 2.0], 0.04, 0.0);
        assert!((prim.xyz(0)[0] - 1.02).abs() < EPS);
        assert!((prim.xyz(1)[0] - 0.98).abs() < EPS);
        assert!((prim.xyz(0)[1] - 2.0).abs() < EPS);
    }

    #[test]
    fn ring_samples_are_on_the_circle_and_evenly_spaced() {
        let center = [-0.5, 0.25];
        for &num_segment in &[3usize, 7, 200] {
            let prim = ring(&center, 0.15, num_segment);
            assert_eq!(prim.mode, DrawMode::LineLoop);
            assert_eq!(prim.num_vtx(), num_segment);
            let step = 2.0 * std::f32::consts::PI / num_segment as f32;
            for i_vtx in 0..num_segment {
                let p = prim.xyz(i_vtx);
                assert!((dist(p, &center) - 0.15).abs() < EPS);
                assert_eq!(p[2], 0.0);
                let theta = (p[1] - center[1]).atan2(p[0] - center[0]);
                let expected = step * i_vtx as f32;
                let diff = (theta - expected).rem_euclid(2.0 * std::f32::consts::PI);
                assert!(diff < 1.0e-4 || diff > 2.0 * std::f32::consts::PI - 1.0e-4);
            }
        }
    }

    #[test]
    fn disk_is_a_closed_fan_around_its_center() {
        let center = [0.27, 0.0];
        let num_segment = 200;
        let prim = disk(&center, 0.04, num_segment);
        assert_eq!(prim.mode, DrawMode::TriangleFan);
        assert_eq!(prim.num_vtx(), num_segment + 2);
        assert_eq!(prim.xyz(0), &[0.27, 0.0, 0.0]);
        for i_vtx in 1..prim.num_vtx() {
            assert!((dist(prim.xyz(i_vtx), &center) - 0.04).abs() < EPS);
        }
        assert_eq!(prim.xyz(1), prim.xyz(num_segment + 1));
    }

    #[test]
    #[should_panic]
    fn ring_rejects_degenerate_segment_count() {
        ring(&[0.0, 0.0], 1.0, 2);
    }

    #[test]
    fn only_fans_ignore_line_width() {
        assert!(DrawMode::Lines.is_stroked());
        assert!(DrawMode::LineLoop.is_stroked());
        assert!(!DrawMode::TriangleFan.is_stroked());
        assert_eq!(DrawMode::TriangleFan.gl_mode(), glow::TRIANGLE_FAN);
    }
}
