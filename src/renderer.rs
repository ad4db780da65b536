use crate::camera::Camera;
use crate::components::Primitive;
use crate::mesh::{self, Vertex};
use crate::scene::DrawItem;
use glam::Vec3;
use glow::*;
use std::collections::HashMap;
use std::mem;
use std::sync::Arc;
use thiserror::Error;

const VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aNormal;

uniform mat4 uViewProjection;
uniform mat4 uModel;

out vec3 vNormal;

void main() {
    vNormal = mat3(transpose(inverse(uModel))) * aNormal;
    gl_Position = uViewProjection * uModel * vec4(aPos, 1.0);
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
in vec3 vNormal;
out vec4 FragColor;

uniform vec3 uColor;
uniform vec3 uLightDir;

void main() {
    vec3 n = normalize(vNormal);
    float diffuse = max(dot(n, -uLightDir), 0.0);
    FragColor = vec4(uColor * (0.35 + 0.65 * diffuse), 1.0);
}
"#;

/// Key light, pointing down and away from the viewer
const LIGHT_DIR: Vec3 = Vec3::new(-0.4, -0.8, -0.45);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to compile shader: {0}")]
    Shader(String),

    #[error("Failed to link program: {0}")]
    Program(String),

    #[error("Failed to create GL resource: {0}")]
    Resource(String),

    #[error("Missing uniform {0}")]
    Uniform(&'static str),
}

/// GPU copy of one primitive's unit mesh
struct MeshBuffers {
    vao: NativeVertexArray,
    vbo: NativeBuffer,
    vertex_count: i32,
}

pub struct Renderer {
    gl: Arc<glow::Context>,
    program: NativeProgram,
    view_projection_loc: NativeUniformLocation,
    model_loc: NativeUniformLocation,
    color_loc: NativeUniformLocation,
    light_dir_loc: NativeUniformLocation,
    meshes: HashMap<Primitive, MeshBuffers>,
    clear_color: Vec3,
}

impl Renderer {
    pub fn new(gl: Arc<glow::Context>, clear_color: Vec3) -> Result<Self, RenderError> {
        unsafe {
            let vertex_shader = compile_shader(&gl, VERTEX_SHADER, VERTEX_SHADER_SRC)?;
            let fragment_shader = compile_shader(&gl, FRAGMENT_SHADER, FRAGMENT_SHADER_SRC)?;

            let program = gl.create_program().map_err(RenderError::Resource)?;
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                return Err(RenderError::Program(gl.get_program_info_log(program)));
            }

            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);

            let uniform = |name: &'static str| {
                gl.get_uniform_location(program, name)
                    .ok_or(RenderError::Uniform(name))
            };
            let view_projection_loc = uniform("uViewProjection")?;
            let model_loc = uniform("uModel")?;
            let color_loc = uniform("uColor")?;
            let light_dir_loc = uniform("uLightDir")?;

            let mut meshes = HashMap::new();
            for primitive in Primitive::ALL {
                meshes.insert(primitive, upload_mesh(&gl, &mesh::build(primitive))?);
            }

            Ok(Self {
                gl,
                program,
                view_projection_loc,
                model_loc,
                color_loc,
                light_dir_loc,
                meshes,
                clear_color,
            })
        }
    }

    /// Clear the frame and draw every item
    pub fn render(&self, camera: &Camera, items: &[DrawItem]) {
        puffin::profile_function!();

        unsafe {
            // egui leaves depth testing off after it paints
            self.gl.enable(DEPTH_TEST);
            self.gl.depth_func(LESS);
            self.gl.viewport(
                0,
                0,
                camera.viewport_width as i32,
                camera.viewport_height as i32,
            );
            self.gl
                .clear_color(self.clear_color.x, self.clear_color.y, self.clear_color.z, 1.0);
            self.gl.clear(COLOR_BUFFER_BIT | DEPTH_BUFFER_BIT);

            self.gl.use_program(Some(self.program));
            self.gl.uniform_matrix_4_f32_slice(
                Some(&self.view_projection_loc),
                false,
                &camera.view_projection().to_cols_array(),
            );
            let light = LIGHT_DIR.normalize();
            self.gl
                .uniform_3_f32(Some(&self.light_dir_loc), light.x, light.y, light.z);

            for item in items {
                let Some(mesh) = self.meshes.get(&item.primitive) else {
                    continue;
                };
                self.gl.uniform_matrix_4_f32_slice(
                    Some(&self.model_loc),
                    false,
                    &item.model.to_cols_array(),
                );
                self.gl
                    .uniform_3_f32(Some(&self.color_loc), item.color.x, item.color.y, item.color.z);
                self.gl.bind_vertex_array(Some(mesh.vao));
                self.gl.draw_arrays(TRIANGLES, 0, mesh.vertex_count);
            }

            self.gl.bind_vertex_array(None);
            self.gl.use_program(None);
            self.gl.disable(DEPTH_TEST);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
            for mesh in self.meshes.values() {
                self.gl.delete_vertex_array(mesh.vao);
                self.gl.delete_buffer(mesh.vbo);
            }
        }
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    kind: u32,
    source: &str,
) -> Result<NativeShader, RenderError> {
    let shader = gl.create_shader(kind).map_err(RenderError::Resource)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        return Err(RenderError::Shader(gl.get_shader_info_log(shader)));
    }
    Ok(shader)
}

unsafe fn upload_mesh(gl: &glow::Context, vertices: &[Vertex]) -> Result<MeshBuffers, RenderError> {
    let vao = gl.create_vertex_array().map_err(RenderError::Resource)?;
    gl.bind_vertex_array(Some(vao));

    let vbo = gl.create_buffer().map_err(RenderError::Resource)?;
    gl.bind_buffer(ARRAY_BUFFER, Some(vbo));
    gl.buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(vertices), STATIC_DRAW);

    let stride = mem::size_of::<Vertex>() as i32;
    // Position (3 floats)
    gl.enable_vertex_attrib_array(0);
    gl.vertex_attrib_pointer_f32(0, 3, FLOAT, false, stride, 0);
    // Normal (3 floats)
    gl.enable_vertex_attrib_array(1);
    gl.vertex_attrib_pointer_f32(1, 3, FLOAT, false, stride, 12);

    gl.bind_vertex_array(None);
    gl.bind_buffer(ARRAY_BUFFER, None);

    Ok(MeshBuffers {
        vao,
        vbo,
        vertex_count: vertices.len() as i32,
    })
}

fn as_u8_slice<T>(data: &[T]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            data.as_ptr() as *const u8,
            data.len() * mem::size_of::<T>(),
        )
    }
}
