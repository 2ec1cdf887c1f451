use glam::{Mat4, Vec3};

/// Default yaw in degrees. Points the camera down -Z, matching the
/// right-handed world convention.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees (level with the horizon).
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel of cursor travel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default zoom (vertical field of view) in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is clamped just short of the poles so `front` can never become
/// parallel to the world-up hint while the constraint is on.
const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Movement direction for [`Camera::process_movement`].
///
/// Directions are relative to the camera's current orientation: forward
/// and backward run along `front`, strafing runs along `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    StrafeLeft,
    /// Along `right`.
    StrafeRight,
}

impl MoveDirection {
    /// All directions, in the order movement is applied each frame.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::StrafeLeft, Self::StrafeRight];
}

/// First-person camera driven by Euler angles.
///
/// Orientation is stored as yaw/pitch in degrees; the orthonormal
/// `front`/`right`/`up` basis is derived from them (plus the fixed
/// `world_up` hint) and recomputed after every orientation change, so it
/// cannot drift. Position moves along the current basis vectors.
///
/// The camera owns no GPU state and performs no input interpretation —
/// callers feed it sensitivity-scaled offsets and per-frame elapsed time.
/// See [`CameraController`](super::controller::CameraController) for the
/// uniform-buffer wrapper.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World-space eye position.
    position: Vec3,
    /// Unit vector the camera looks along; derived from yaw/pitch.
    front: Vec3,
    /// Unit up vector of the camera basis; derived.
    up: Vec3,
    /// Unit right vector of the camera basis; derived.
    right: Vec3,
    /// Fixed up hint supplied at construction. Stored as given (not
    /// renormalized); the basis cross products normalize downstream.
    world_up: Vec3,
    /// Heading in degrees. Unconstrained; wraps naturally through trig.
    yaw: f32,
    /// Elevation in degrees. Clamped to ±89° when the caller requests
    /// constraint in [`process_look`](Self::process_look).
    pitch: f32,
    /// Vertical field of view proxy in degrees, within [1, 45].
    zoom: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Look sensitivity in degrees per pixel.
    pub mouse_sensitivity: f32,
}

impl Camera {
    /// Camera at `position` with the default orientation (yaw -90°, level
    /// pitch, +Y world up), looking down -Z.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Camera with explicit world-up hint and initial yaw/pitch in degrees.
    #[must_use]
    pub fn with_orientation(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            zoom: DEFAULT_ZOOM,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the camera without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up vector of the camera basis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector of the camera basis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Heading in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Elevation in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view proxy in degrees, always within [1, 45].
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom directly, clamped to [1, 45].
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// View transform looking from `position` toward `position + front`.
    ///
    /// Column-major, right-handed — feeds [`glam::Mat4`] products and GPU
    /// uniforms directly. Pure: no camera state changes.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Displace the camera along its basis for one frame.
    ///
    /// `elapsed_seconds` is the frame delta; displacement is
    /// `movement_speed * elapsed_seconds` along the chosen axis. Calls for
    /// different directions within a frame sum without renormalization:
    /// two simultaneous directions move the camera √2 faster along the
    /// diagonal, and consumers tune speeds against that.
    pub fn process_movement(
        &mut self,
        direction: MoveDirection,
        elapsed_seconds: f32,
    ) {
        let velocity = self.movement_speed * elapsed_seconds;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::StrafeLeft => {
                self.position -= self.right * velocity;
            }
            MoveDirection::StrafeRight => {
                self.position += self.right * velocity;
            }
        }
    }

    /// Rotate the camera from cursor travel.
    ///
    /// Offsets are in pixels of cursor movement and are scaled by
    /// `mouse_sensitivity` into degrees. Positive `x_offset` turns right;
    /// positive `y_offset` looks up (callers flip screen-space Y before
    /// passing it in). With `constrain_pitch` the pitch is clamped to ±89°
    /// *before* the basis recomputation, so the derived vectors never see
    /// an out-of-range angle.
    ///
    /// Passing `constrain_pitch = false` permits pitches at and beyond
    /// ±90°, where `front` can become parallel to the world-up hint and
    /// the derived basis degenerates (cross product of parallel vectors
    /// normalizes to non-finite values). That trade-off belongs to the
    /// caller who disabled the constraint.
    pub fn process_look(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrow or widen the field of view from scroll input.
    ///
    /// `scroll_delta` is subtracted from `zoom`, then clamped to [1, 45].
    /// Scrolling up (positive delta) therefore *narrows* the fov —
    /// magnifying the view like a zoom lens rather than widening it.
    pub fn process_zoom(&mut self, scroll_delta: f32) {
        self.zoom = (self.zoom - scroll_delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Recompute `front`, `right`, and `up` from yaw/pitch and the
    /// world-up hint.
    ///
    /// `right` and `up` are re-derived by cross products on every call
    /// rather than incrementally rotated, so orthonormality cannot drift
    /// over long look sequences.
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_faces_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert_vec3_near(camera.front(), Vec3::NEG_Z);
        assert_vec3_near(camera.up(), Vec3::Y);
        assert_vec3_near(camera.right(), Vec3::X);
        assert_eq!(camera.yaw(), DEFAULT_YAW);
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.zoom(), DEFAULT_ZOOM);
    }

    #[test]
    fn basis_stays_orthonormal_across_orientations() {
        for yaw_step in 0..12 {
            for pitch_step in -4..=4 {
                let yaw = -180.0 + 30.0 * yaw_step as f32;
                let pitch = 20.0 * pitch_step as f32;
                let camera = Camera::with_orientation(
                    Vec3::ZERO,
                    Vec3::Y,
                    yaw,
                    pitch,
                );

                let (f, r, u) = (camera.front(), camera.right(), camera.up());
                assert!((f.length() - 1.0).abs() < EPS, "front at {yaw}/{pitch}");
                assert!((r.length() - 1.0).abs() < EPS, "right at {yaw}/{pitch}");
                assert!((u.length() - 1.0).abs() < EPS, "up at {yaw}/{pitch}");
                assert!(f.dot(r).abs() < EPS, "front·right at {yaw}/{pitch}");
                assert!(f.dot(u).abs() < EPS, "front·up at {yaw}/{pitch}");
                assert!(r.dot(u).abs() < EPS, "right·up at {yaw}/{pitch}");
            }
        }
    }

    #[test]
    fn view_matrix_maps_point_ahead_onto_view_axis() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let view = camera.view_matrix();
        // One unit in front of the eye lands one unit down the view -Z axis.
        let p = view.transform_point3(Vec3::new(0.0, 0.0, 2.0));
        assert_vec3_near(p, Vec3::new(0.0, 0.0, -1.0));
        // The eye itself maps to the view-space origin.
        let eye = view.transform_point3(Vec3::new(0.0, 0.0, 3.0));
        assert_vec3_near(eye, Vec3::ZERO);
    }

    #[test]
    fn view_matrix_is_pure() {
        let camera = Camera::with_orientation(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::Y,
            -35.0,
            12.0,
        );
        let first = camera.view_matrix();
        let second = camera.view_matrix();
        assert_eq!(first, second);
    }

    #[test]
    fn forward_movement_covers_speed_times_dt() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_movement(MoveDirection::Forward, 1.0);
        assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn strafe_movement_runs_along_right() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_movement(MoveDirection::StrafeRight, 0.5);
        assert_vec3_near(camera.position(), Vec3::new(1.25, 0.0, 0.0));
        camera.process_movement(MoveDirection::StrafeLeft, 0.5);
        assert_vec3_near(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn combined_directions_gain_diagonal_speedup() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_movement(MoveDirection::Forward, 1.0);
        camera.process_movement(MoveDirection::StrafeRight, 1.0);
        // Two unnormalized axis displacements: √2 × the single-axis speed.
        let expected = DEFAULT_SPEED * std::f32::consts::SQRT_2;
        assert!((camera.position().length() - expected).abs() < EPS);
    }

    #[test]
    fn look_applies_sensitivity_to_yaw() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_look(100.0, 0.0, true);
        assert!((camera.yaw() + 80.0).abs() < EPS);
        let front = camera.front();
        assert!((front.x - (-80f32).to_radians().cos()).abs() < EPS);
        assert!((front.z - (-80f32).to_radians().sin()).abs() < EPS);
        assert!(front.y.abs() < EPS);
    }

    #[test]
    fn constrained_pitch_clamps_before_recompute() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_look(0.0, 2000.0, true);
        assert_eq!(camera.pitch(), 89.0);
        // The basis reflects the clamped angle, not the raw sum.
        assert!((camera.front().y - 89f32.to_radians().sin()).abs() < EPS);

        camera.process_look(0.0, -20_000.0, true);
        assert_eq!(camera.pitch(), -89.0);
        assert!((camera.front().y + 89f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn pitch_stays_clamped_under_arbitrary_look_sequences() {
        let mut camera = Camera::new(Vec3::ZERO);
        for i in 0..200 {
            let y = if i % 3 == 0 { 500.0 } else { -173.0 };
            camera.process_look(37.0, y, true);
            assert!(camera.pitch() >= -89.0);
            assert!(camera.pitch() <= 89.0);
        }
    }

    #[test]
    fn unconstrained_pitch_exceeds_the_clamp() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_look(0.0, 2000.0, false);
        assert!((camera.pitch() - 200.0).abs() < EPS);
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_zoom(50.0);
        assert_eq!(camera.zoom(), 1.0);
        camera.process_zoom(-100.0);
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn zoom_stays_in_range_under_scroll_sequences() {
        let mut camera = Camera::new(Vec3::ZERO);
        for i in 0..100 {
            let delta = if i % 2 == 0 { 7.3 } else { -11.9 };
            camera.process_zoom(delta);
            assert!(camera.zoom() >= 1.0);
            assert!(camera.zoom() <= 45.0);
        }
    }

    #[test]
    fn zoom_accumulates_between_clamps() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_zoom(10.0);
        assert_eq!(camera.zoom(), 35.0);
        camera.process_zoom(-3.0);
        assert_eq!(camera.zoom(), 38.0);
    }

    #[test]
    fn set_zoom_is_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.set_zoom(0.25);
        assert_eq!(camera.zoom(), 1.0);
        camera.set_zoom(30.0);
        assert_eq!(camera.zoom(), 30.0);
    }

    #[test]
    fn movement_follows_current_orientation() {
        let mut camera = Camera::new(Vec3::ZERO);
        // Turn 90° right: front swings from -Z to +X.
        camera.process_look(900.0, 0.0, true);
        assert_vec3_near(camera.front(), Vec3::X);
        camera.process_movement(MoveDirection::Forward, 1.0);
        assert_vec3_near(camera.position(), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn custom_world_up_still_yields_orthonormal_basis() {
        // Deliberately non-unit hint: the basis normalizes regardless.
        let camera = Camera::with_orientation(
            Vec3::ZERO,
            Vec3::new(0.0, 2.0, 0.0),
            -90.0,
            30.0,
        );
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < EPS);
        assert!((r.length() - 1.0).abs() < EPS);
        assert!((u.length() - 1.0).abs() < EPS);
        assert!(f.dot(r).abs() < EPS);
    }
}
