//! Free-fly camera.
//!
//! The camera tracks an observer pose as a world-space position plus Euler
//! yaw/pitch angles and derives an orthonormal direction/right/up basis from
//! them. It produces the view and projection transforms consumed by the
//! shaders and reacts to three kinds of input: discrete directional movement,
//! continuous mouse look, and scroll-wheel zoom.

use glam::{Mat4, Vec2, Vec3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Keeping pitch short of +-90 keeps the direction vector off the world-up
/// axis, so the basis cross products never degenerate.
pub const PITCH_LIMIT: f32 = 89.0;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Movement commands understood by [`Camera::process_movement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// A free-fly camera with Euler-angle orientation.
///
/// The direction/right/up basis is always derived from `yaw`/`pitch` and is
/// never written directly; every orientation change goes through
/// [`Camera::process_look`] which recomputes all three vectors.
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    ground_locked: bool,
}

impl Camera {
    /// Creates a camera at `position` looking down negative Z.
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        let mut camera = Self {
            position,
            direction: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            ground_locked: false,
        };
        camera.update_vectors();
        camera
    }

    /// Replaces the zoom range, re-clamping the current zoom into it.
    pub fn with_zoom_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_zoom = min;
        self.max_zoom = max;
        self.zoom = self.zoom.clamp(min, max);
        self
    }

    /// Locks forward/strafe movement to the horizontal plane, so looking up
    /// or down no longer lifts the camera while walking.
    pub fn with_ground_lock(mut self, locked: bool) -> Self {
        self.ground_locked = locked;
        self
    }

    /// Replaces the movement speed (world units per second).
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees, driven by the scroll wheel.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// View transform looking from the camera position along its direction.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction, self.up)
    }

    /// Perspective projection using the current zoom as the vertical FOV.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }

    /// Displaces the camera along its direction or right axis, scaled by
    /// `movement_speed * delta_time`.
    pub fn process_movement(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let (forward, right) = if self.ground_locked {
            (
                Vec3::new(self.direction.x, 0.0, self.direction.z).normalize_or_zero(),
                Vec3::new(self.right.x, 0.0, self.right.z).normalize_or_zero(),
            )
        } else {
            (self.direction, self.right)
        };
        match direction {
            MoveDirection::Forward => self.position += forward * velocity,
            MoveDirection::Backward => self.position -= forward * velocity,
            MoveDirection::Left => self.position -= right * velocity,
            MoveDirection::Right => self.position += right * velocity,
        }
    }

    /// Applies a pointer delta to yaw/pitch and recomputes the basis.
    ///
    /// `delta.y` is positive when looking up. With `constrain_pitch` the pitch
    /// is clamped to [-PITCH_LIMIT, PITCH_LIMIT].
    pub fn process_look(&mut self, delta: Vec2, constrain_pitch: bool) {
        self.yaw += delta.x * self.mouse_sensitivity;
        self.pitch += delta.y * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Applies a scroll delta to the zoom, clamped to the configured range.
    pub fn process_scroll(&mut self, delta: f32) {
        self.zoom = (self.zoom - delta).clamp(self.min_zoom, self.max_zoom);
    }

    /// Moves the camera by a world-space offset without reorienting it. Used
    /// by external forces such as gravity.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    fn update_vectors(&mut self) {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();

        self.direction = Vec3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        )
        .normalize();
        self.right = self.direction.cross(self.world_up).normalize();
        self.up = self.right.cross(self.direction).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn camera_at_origin() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::Y)
    }

    /// Drives the camera to the given angles through the look input path.
    fn look_to(camera: &mut Camera, yaw: f32, pitch: f32) {
        let delta = Vec2::new(
            (yaw - camera.yaw()) / DEFAULT_SENSITIVITY,
            (pitch - camera.pitch()) / DEFAULT_SENSITIVITY,
        );
        camera.process_look(delta, true);
    }

    #[test]
    fn basis_is_orthonormal_across_angles() {
        for yaw in [-180.0, -90.0, -45.0, 0.0, 30.0, 90.0, 170.0, 275.0] {
            for pitch in [-89.0, -45.0, 0.0, 45.0, 89.0] {
                let mut camera = camera_at_origin();
                look_to(&mut camera, yaw, pitch);

                let (d, r, u) = (camera.direction(), camera.right(), camera.up());
                assert!((d.length() - 1.0).abs() < TOLERANCE, "direction not unit");
                assert!((r.length() - 1.0).abs() < TOLERANCE, "right not unit");
                assert!((u.length() - 1.0).abs() < TOLERANCE, "up not unit");
                assert!(d.dot(r).abs() < TOLERANCE, "direction/right not orthogonal");
                assert!(d.dot(u).abs() < TOLERANCE, "direction/up not orthogonal");
                assert!(r.dot(u).abs() < TOLERANCE, "right/up not orthogonal");
            }
        }
    }

    #[test]
    fn pitch_clamps_exactly_at_limit() {
        let mut camera = camera_at_origin();
        camera.process_look(Vec2::new(0.0, 1.0e6), true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.process_look(Vec2::new(0.0, -1.0e7), true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_pitch_can_pass_the_limit() {
        let mut camera = camera_at_origin();
        camera.process_look(Vec2::new(0.0, 1200.0), false);
        assert!(camera.pitch() > PITCH_LIMIT);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut camera = camera_at_origin();
        for delta in [5.0, -3.0, 100.0, -100.0, 7.0, 44.0, -200.0] {
            camera.process_scroll(delta);
            assert!(camera.zoom() >= MIN_ZOOM && camera.zoom() <= MAX_ZOOM);
        }
    }

    #[test]
    fn scrolling_in_reduces_zoom() {
        let mut camera = camera_at_origin();
        camera.process_scroll(5.0);
        assert_eq!(camera.zoom(), DEFAULT_ZOOM - 5.0);
    }

    #[test]
    fn custom_zoom_bounds_apply() {
        let mut camera = camera_at_origin().with_zoom_bounds(1.0, 55.0);
        camera.process_scroll(-100.0);
        assert_eq!(camera.zoom(), 55.0);
    }

    #[test]
    fn zero_delta_time_movement_is_a_noop() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y);
        camera.process_movement(MoveDirection::Forward, 0.0);
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn initial_view_matrix_matches_look_at() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y);
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Y,
        );
        assert!(camera.view_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn zero_look_delta_keeps_default_direction() {
        let mut camera = camera_at_origin();
        camera.process_look(Vec2::ZERO, true);
        assert!(camera.direction().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn forward_movement_scales_with_speed_and_time() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y);
        camera.process_movement(MoveDirection::Forward, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn custom_speed_scales_movement() {
        let mut camera = camera_at_origin().with_speed(10.0);
        camera.process_movement(MoveDirection::Backward, 0.5);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn ground_locked_movement_stays_horizontal() {
        let mut camera = camera_at_origin().with_ground_lock(true);
        look_to(&mut camera, DEFAULT_YAW, 45.0);

        camera.process_movement(MoveDirection::Forward, 1.0);
        assert!(camera.position().y.abs() < TOLERANCE);
        // The horizontal direction is renormalized, so a pitched-up camera
        // still covers the full distance.
        assert!((camera.position().length() - DEFAULT_SPEED).abs() < TOLERANCE);

        camera.process_movement(MoveDirection::Right, 1.0);
        assert!(camera.position().y.abs() < TOLERANCE);
    }

    #[test]
    fn translate_does_not_reorient() {
        let mut camera = camera_at_origin();
        let direction = camera.direction();
        camera.translate(Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(camera.position(), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(camera.direction(), direction);
    }
}
