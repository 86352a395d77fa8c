//! Keyboard fly controls.
//!
//! Arrow keys turn the camera, WASD moves it along its own front/right axes.

use rayroom_renderer::Camera;

/// Which control keys are held this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub look_up: bool,
    pub look_down: bool,
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

impl KeyState {
    pub fn any(&self) -> bool {
        *self != Self::default()
    }
}

/// Per-frame step sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Degrees of yaw/pitch per frame while a turn key is held
    pub rotate_speed: f32,
    /// World units per frame while a move key is held
    pub move_speed: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            rotate_speed: 0.4,
            move_speed: 0.02,
        }
    }
}

impl Controls {
    /// Apply one frame of input to the camera.
    ///
    /// Rotation goes first so that movement follows the new heading.
    pub fn apply(&self, keys: &KeyState, camera: &mut Camera) {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));

        let yaw = axis(keys.turn_left, keys.turn_right);
        let pitch = axis(keys.look_down, keys.look_up);
        if yaw != 0.0 || pitch != 0.0 {
            camera.rotate(yaw * self.rotate_speed, pitch * self.rotate_speed);
        }

        let forward = axis(keys.back, keys.forward);
        if forward != 0.0 {
            camera.translate(camera.front(), forward * self.move_speed);
        }

        let strafe = axis(keys.strafe_left, keys.strafe_right);
        if strafe != 0.0 {
            camera.translate(camera.right(), strafe * self.move_speed);
        }
    }
}
