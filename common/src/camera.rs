//! Orbital camera for the comparison scene

use glam::{Mat4, Vec3};

/// Closest the orbit controls may zoom in
pub const MIN_ORBIT_DISTANCE: f32 = 1.0;
/// Farthest the orbit controls may zoom out
pub const MAX_ORBIT_DISTANCE: f32 = 200.0;

/// 3D perspective camera with orbital controls
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    // Orbital parameters
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera3D {
    pub fn new(aspect_ratio: f32, fov_degrees: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: fov_degrees.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 4000.0,
            distance: 10.0,
            yaw: 0.0,
            pitch: 0.0,
        };
        camera.update_orbital();
        camera
    }

    /// Update camera position based on orbital parameters
    pub fn update_orbital(&mut self) {
        self.position = self.target + Vec3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        );
    }

    /// Look straight at the origin from `distance` along +Z, discarding any orbit
    pub fn frame(&mut self, distance: f32) {
        self.target = Vec3::ZERO;
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = distance.max(MIN_ORBIT_DISTANCE);
        self.update_orbital();
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-1.5, 1.5);
        self.update_orbital();
    }

    /// Zoom in/out
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
        self.update_orbital();
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Get the combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders
///
/// `view` is kept separately so the vertex shader can build camera-facing
/// billboards; `light_dir` is the key light already rotated into view space.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub position: [f32; 4],
    pub light_dir: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_3d(camera: &Camera3D, light_world: Vec3) -> Self {
        let view = camera.view_matrix();
        let light = view.transform_vector3(light_world).normalize_or_zero();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
            light_dir: [light.x, light.y, light.z, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_looks_down_negative_z() {
        let mut camera = Camera3D::new(16.0 / 9.0, 75.0);
        camera.orbit(0.8, 0.4);
        camera.frame(12.5);

        assert_relative_eq!(camera.position.x, 0.0);
        assert_relative_eq!(camera.position.y, 0.0);
        assert_relative_eq!(camera.position.z, 12.5);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera3D::new(1.0, 75.0);
        camera.frame(10.0);

        camera.zoom(1000.0);
        assert_relative_eq!(camera.distance, MIN_ORBIT_DISTANCE);

        camera.zoom(-1000.0);
        assert_relative_eq!(camera.distance, MAX_ORBIT_DISTANCE);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera3D::new(1.0, 75.0);
        camera.orbit(0.0, 10.0);
        assert_relative_eq!(camera.pitch, 1.5);
    }

    #[test]
    fn test_light_is_rotated_into_view_space() {
        let mut camera = Camera3D::new(1.0, 75.0);
        camera.frame(10.0);

        // Camera on +Z looking at the origin: view space equals world space rotation-wise
        let uniform = CameraUniform::from_camera_3d(&camera, Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(uniform.light_dir[2], 1.0, epsilon = 1e-6);
        assert_relative_eq!(uniform.light_dir[3], 0.0);
    }
}
