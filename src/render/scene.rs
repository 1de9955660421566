//! The sandbox scene: a lit container cube and an orbiting light cube.
//!
//! [`Sandbox`] owns the camera, the gravity system, the light rig and every
//! GL resource the scene draws with. The frame loop feeds it the polled input
//! state once per frame and then asks it to render.

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};
use glow::HasContext;
use sdl2::keyboard::Keycode;

use crate::{
    abs::{Mesh, ShaderProgram, Texture, Vertex},
    camera::{Camera, MoveDirection},
    gravity::Gravity,
    input::UpdateContext,
    render::texgen,
    shader_program,
};

pub const ORBIT_RADIUS: f32 = 2.5;
pub const ORBIT_HEIGHT: f32 = 0.4;

const CLEAR_COLOR: Vec3 = Vec3::splat(0.1);
const CUBE_OFFSET: Vec3 = Vec3::new(0.0, -0.75, 0.0);
const LIGHT_CUBE_SCALE: f32 = 0.2;
const SHININESS: f32 = 64.0;
const TEXTURE_SIZE: u32 = 64;

/// Vertex layout of the sandbox cubes.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CubeVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex for CubeVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<CubeVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Normal attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                stride,
                (2 * size_of::<Vec3>()) as i32,
            );
        }
    }
}

/// Unit-cube faces as (normal, four corners ordered bottom-left, bottom-right,
/// top-right, top-left when looking at the face from outside).
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    (
        [0.0, 0.0, 1.0],
        [
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
    ),
    (
        [0.0, 0.0, -1.0],
        [
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
        ],
    ),
    (
        [1.0, 0.0, 0.0],
        [
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
        ],
    ),
    (
        [-1.0, 0.0, 0.0],
        [
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
    ),
    (
        [0.0, 1.0, 0.0],
        [
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
        ],
    ),
    (
        [0.0, -1.0, 0.0],
        [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
    ),
];

/// Builds the unit cube as indexed geometry, two triangles per face.
pub fn cube_geometry() -> (Vec<CubeVertex>, Vec<u32>) {
    const UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in FACES {
        let base = vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(UVS) {
            vertices.push(CubeVertex {
                position: Vec3::from_array(*corner),
                normal: Vec3::from_array(normal),
                uv: Vec2::from_array(uv),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// The orbiting point light.
///
/// Accumulates animation time while unpaused, wrapping at 2π, and places the
/// light on a circle around the scene. Pausing freezes the light where it is.
pub struct LightRig {
    animation_time: f32,
    paused: bool,
    position: Vec3,
    pub color: Vec3,
}

impl LightRig {
    pub fn new() -> Self {
        Self {
            animation_time: 0.0,
            paused: false,
            position: Vec3::new(1.0, ORBIT_HEIGHT, 1.5),
            color: Vec3::ONE,
        }
    }

    /// Advances the orbit unless paused.
    pub fn update(&mut self, delta_time: f32) {
        if self.paused {
            return;
        }

        self.animation_time += delta_time;
        if self.animation_time > std::f32::consts::TAU {
            self.animation_time -= std::f32::consts::TAU;
        }

        self.position = Vec3::new(
            ORBIT_RADIUS * self.animation_time.sin(),
            ORBIT_HEIGHT,
            ORBIT_RADIUS * self.animation_time.cos(),
        );
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn animation_time(&self) -> f32 {
        self.animation_time
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the sandbox needs for a frame, owned in one place.
pub struct Sandbox {
    camera: Camera,
    gravity: Gravity,
    light: LightRig,
    wireframe: bool,
    aspect_ratio: f32,
    cube: Mesh,
    lighting_program: ShaderProgram,
    light_cube_program: ShaderProgram,
    diffuse_map: Texture,
    specular_map: Texture,
}

impl Sandbox {
    pub fn new(gl: &Arc<glow::Context>, width: u32, height: u32) -> Self {
        let lighting_program = shader_program!(lighting, gl, "..");
        let light_cube_program = shader_program!(lightcube, gl, "..");

        let (vertices, indices) = cube_geometry();
        let cube = Mesh::new(gl, &vertices, &indices, glow::TRIANGLES);

        let diffuse_map = Texture::new(
            gl,
            &image::DynamicImage::ImageRgba8(texgen::diffuse_map(TEXTURE_SIZE)),
        );
        let specular_map = Texture::new(
            gl,
            &image::DynamicImage::ImageRgba8(texgen::specular_map(TEXTURE_SIZE)),
        );

        // The sampler units never change, so set them once up front.
        lighting_program.use_program();
        lighting_program.set_uniform("material.diffuse", 0_i32);
        lighting_program.set_uniform("material.specular", 1_i32);

        log::info!("sandbox scene ready ({} cube indices)", cube.index_count());

        Self {
            camera: Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y),
            gravity: Gravity::default(),
            light: LightRig::new(),
            wireframe: false,
            aspect_ratio: width as f32 / height as f32,
            cube,
            lighting_program,
            light_cube_program,
            diffuse_map,
            specular_map,
        }
    }

    pub fn handle_resize(&mut self, width: i32, height: i32) {
        self.aspect_ratio = width as f32 / height as f32;
    }

    /// Dispatches the polled input state and advances the simulation.
    pub fn update(&mut self, ctx: &UpdateContext) {
        if ctx.keyboard.pressed.contains(&Keycode::E) {
            self.wireframe = !self.wireframe;
            log::debug!("wireframe: {}", self.wireframe);
        }
        if ctx.keyboard.pressed.contains(&Keycode::Space) {
            self.light.toggle_paused();
            log::debug!("light orbit paused: {}", self.light.is_paused());
        }
        if ctx.keyboard.pressed.contains(&Keycode::G) {
            self.gravity.toggle();
            log::debug!("gravity enabled: {}", self.gravity.is_enabled());
        }

        if ctx.keyboard.down.contains(&Keycode::W) {
            self.camera
                .process_movement(MoveDirection::Forward, ctx.delta_time);
        }
        if ctx.keyboard.down.contains(&Keycode::S) {
            self.camera
                .process_movement(MoveDirection::Backward, ctx.delta_time);
        }
        if ctx.keyboard.down.contains(&Keycode::A) {
            self.camera
                .process_movement(MoveDirection::Left, ctx.delta_time);
        }
        if ctx.keyboard.down.contains(&Keycode::D) {
            self.camera
                .process_movement(MoveDirection::Right, ctx.delta_time);
        }

        // SDL reports y growing downwards, the camera expects it upwards
        let look = ctx.mouse.delta;
        if look != Vec2::ZERO {
            self.camera.process_look(Vec2::new(look.x, -look.y), true);
        }
        if ctx.mouse.scroll_delta.y != 0.0 {
            self.camera.process_scroll(ctx.mouse.scroll_delta.y);
        }

        self.gravity.update(ctx.delta_time);
        if self.gravity.is_enabled() {
            self.camera
                .translate(Vec3::new(0.0, self.gravity.velocity() * ctx.delta_time, 0.0));
            self.gravity.log();
        }

        self.light.update(ctx.delta_time);
    }

    /// Draws the container cube and the light cube.
    pub fn render(&self, gl: &Arc<glow::Context>) {
        unsafe {
            gl.polygon_mode(
                glow::FRONT_AND_BACK,
                if self.wireframe { glow::LINE } else { glow::FILL },
            );
            gl.clear_color(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let projection = self.camera.projection_matrix(self.aspect_ratio);
        let view = self.camera.view_matrix();

        let light_color = self.light.color;
        let diffuse_color = light_color * 0.5;
        let ambient_color = diffuse_color * 0.2;

        self.lighting_program.use_program();
        self.lighting_program
            .set_uniform("light.position", self.light.position());
        self.lighting_program
            .set_uniform("light.ambient", ambient_color);
        self.lighting_program
            .set_uniform("light.diffuse", diffuse_color);
        self.lighting_program.set_uniform("light.specular", Vec3::ONE);
        self.lighting_program
            .set_uniform("u_view_pos", self.camera.position());
        self.lighting_program
            .set_uniform("material.shininess", SHININESS);
        self.lighting_program.set_uniform("u_projection", projection);
        self.lighting_program.set_uniform("u_view", view);
        self.lighting_program
            .set_uniform("u_model", Mat4::from_translation(CUBE_OFFSET));

        self.diffuse_map.bind(0);
        self.specular_map.bind(1);
        self.cube.draw();

        self.light_cube_program.use_program();
        self.light_cube_program
            .set_uniform("u_light_color", light_color);
        self.light_cube_program
            .set_uniform("u_projection", projection);
        self.light_cube_program.set_uniform("u_view", view);
        self.light_cube_program.set_uniform(
            "u_model",
            Mat4::from_translation(self.light.position())
                * Mat4::from_scale(Vec3::splat(LIGHT_CUBE_SCALE)),
        );
        self.cube.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_24_vertices_and_36_indices() {
        let (vertices, indices) = cube_geometry();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn cube_normals_are_unit_and_shared_per_face() {
        let (vertices, _) = cube_geometry();
        for face in vertices.chunks(4) {
            let normal = face[0].normal;
            assert!((normal.length() - 1.0).abs() < 1e-6);
            assert!(face.iter().all(|v| v.normal == normal));
        }
    }

    #[test]
    fn cube_corners_lie_on_the_unit_cube() {
        let (vertices, _) = cube_geometry();
        for vertex in &vertices {
            let p = vertex.position;
            assert!([p.x.abs(), p.y.abs(), p.z.abs()]
                .iter()
                .all(|c| (c - 0.5).abs() < 1e-6));
            assert!(vertex.uv.x >= 0.0 && vertex.uv.x <= 1.0);
            assert!(vertex.uv.y >= 0.0 && vertex.uv.y <= 1.0);
        }
    }

    #[test]
    fn cube_normals_point_outward() {
        let (vertices, _) = cube_geometry();
        for face in vertices.chunks(4) {
            let center: Vec3 = face.iter().map(|v| v.position).sum::<Vec3>() / 4.0;
            assert!(center.dot(face[0].normal) > 0.0);
        }
    }

    #[test]
    fn light_orbits_at_configured_radius_and_height() {
        let mut light = LightRig::new();
        light.update(1.25);
        let position = light.position();
        assert!((position.y - ORBIT_HEIGHT).abs() < 1e-6);
        let horizontal = Vec2::new(position.x, position.z);
        assert!((horizontal.length() - ORBIT_RADIUS).abs() < 1e-5);
        assert!((position.x - ORBIT_RADIUS * 1.25_f32.sin()).abs() < 1e-5);
        assert!((position.z - ORBIT_RADIUS * 1.25_f32.cos()).abs() < 1e-5);
    }

    #[test]
    fn animation_time_wraps_after_full_orbit() {
        let mut light = LightRig::new();
        light.update(4.0);
        light.update(3.0);
        let expected = 7.0 - std::f32::consts::TAU;
        assert!((light.animation_time() - expected).abs() < 1e-5);
    }

    #[test]
    fn paused_light_stays_put() {
        let mut light = LightRig::new();
        light.update(0.5);
        let frozen = light.position();
        light.toggle_paused();
        light.update(2.0);
        assert_eq!(light.position(), frozen);
        assert!((light.animation_time() - 0.5).abs() < 1e-6);
    }
}
