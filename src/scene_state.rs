//! Scalars driving the illustration and the key-driven update applied once per frame.

use crate::config::MotionConfig;

/// Keys sampled once per frame. `true` means held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub escape: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    /// the host should close the window
    Exit,
}

/// Translation origin, wheel rotation and crank-tip offset.
///
/// None of the values are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    pub center_x: f32,
    pub center_y: f32,
    /// wheel rotation in degrees, counter-clockwise positive
    pub angle_deg: f32,
    pub pedal_x: f32,
    pub pedal_y: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            center_x: -0.5,
            center_y: 0.0,
            angle_deg: 0.0,
            pedal_x: 0.07,
            pedal_y: 0.0,
        }
    }
}

impl SceneState {
    pub fn center(&self) -> [f32; 2] {
        [self.center_x, self.center_y]
    }

    fn update_pedal(&mut self, motion: &MotionConfig) {
        let rad = (motion.crank_ratio * self.angle_deg).to_radians();
        self.pedal_x = motion.crank_radius * rad.cos();
        self.pedal_y = motion.crank_radius * rad.sin();
    }

    /// Apply one frame of held keys.
    ///
    /// Right rolls the bike forward (clockwise wheel), left rolls it back, up/down only
    /// translate. The pedal offset is recomputed only when a horizontal key is held.
    pub fn update(&mut self, keys: &HeldKeys, motion: &MotionConfig) -> FrameControl {
        let control = if keys.escape {
            FrameControl::Exit
        } else {
            FrameControl::Continue
        };
        if keys.right {
            self.center_x += motion.translation_step;
            self.angle_deg -= motion.rotation_step_deg;
            self.update_pedal(motion);
        }
        if keys.left {
            self.center_x -= motion.translation_step;
            self.angle_deg += motion.rotation_step_deg;
            self.update_pedal(motion);
        }
        if keys.up {
            self.center_y += motion.translation_step;
        }
        if keys.down {
            self.center_y -= motion.translation_step;
        }
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-6;

    #[test]
    fn right_key_rolls_forward() {
        let motion = MotionConfig::default();
        let mut state = SceneState::default();
        let keys = HeldKeys {
            right: true,
            ..Default::default()
        };
        assert_eq!(state.update(&keys, &motion), FrameControl::Continue);
        assert!((state.center_x - (-0.495)).abs() < EPS);
        assert_eq!(state.center_y, 0.0);
        assert_eq!(state.angle_deg, -1.5);
        let rad = (3.0f32 * -1.5).to_radians();
        assert!((state.pedal_x - 0.07 * rad.cos()).abs() < EPS);
        assert!((state.pedal_y - 0.07 * rad.sin()).abs() < EPS);
    }

    #[test]
    fn pedal_stays_on_the_crank_circle() {
        let motion = MotionConfig::default();
        for &angle_deg in &[0.0f32, 13.7, -250.0, 1.0e4] {
            for keys in [
                HeldKeys {
                    left: true,
                    ..Default::default()
                },
                HeldKeys {
                    right: true,
                    ..Default::default()
                },
            ] {
                let mut state = SceneState {
                    angle_deg,
                    pedal_x: 0.0,
                    pedal_y: 0.0,
                    ..Default::default()
                };
                state.update(&keys, &motion);
                let r2 = state.pedal_x * state.pedal_x + state.pedal_y * state.pedal_y;
                assert!((r2 - 0.07 * 0.07).abs() < 1.0e-6);
            }
        }
    }

    #[test]
    fn only_escape_requests_exit() {
        let motion = MotionConfig::default();
        let mut state = SceneState::default();
        for keys in [
            HeldKeys::default(),
            HeldKeys {
                left: true,
                right: true,
                up: true,
                down: true,
                escape: false,
            },
        ] {
            assert_eq!(state.update(&keys, &motion), FrameControl::Continue);
        }
        let keys = HeldKeys {
            escape: true,
            ..Default::default()
        };
        assert_eq!(state.update(&keys, &motion), FrameControl::Exit);
    }

    #[test]
    fn vertical_keys_leave_rotation_and_pedal_alone() {
        let motion = MotionConfig::default();
        let mut state = SceneState::default();
        let up = HeldKeys {
            up: true,
            ..Default::default()
        };
        state.update(&up, &motion);
        state.update(&up, &motion);
        assert!((state.center_y - 0.01).abs() < EPS);
        assert_eq!(state.angle_deg, 0.0);
        assert_eq!((state.pedal_x, state.pedal_y), (0.07, 0.0));
        let down = HeldKeys {
            down: true,
            ..Default::default()
        };
        state.update(&down, &motion);
        assert!((state.center_y - 0.005).abs() < EPS);
    }

    #[test]
    fn opposite_horizontal_keys_cancel() {
        let motion = MotionConfig::default();
        let mut state = SceneState {
            pedal_x: 0.0,
            ..Default::default()
        };
        let keys = HeldKeys {
            left: true,
            right: true,
            ..Default::default()
        };
        state.update(&keys, &motion);
        assert!((state.center_x - (-0.5)).abs() < EPS);
        assert!(state.angle_deg.abs() < EPS);
        assert!((state.pedal_x - 0.07).abs() < EPS);
    }

    #[test]
    fn translation_is_unbounded() {
        let motion = MotionConfig::default();
        let mut state = SceneState::default();
        let keys = HeldKeys {
            right: true,
            ..Default::default()
        };
        for _ in 0..1000 {
            state.update(&keys, &motion);
        }
        assert!(state.center_x > 4.0);
        assert!((state.angle_deg - (-1500.0)).abs() < 1.0e-2);
    }
}
