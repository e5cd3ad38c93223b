//! Immediate-mode drawing of a [`Primitive`] with a uniform color.
//! Every call allocates its own vertex array and buffer and releases them before returning.

use anyhow::anyhow;
use glow::HasContext;

use crate::primitive::Primitive;

const VS_SRC: &str = r#"
layout (location = 0) in vec3 xyzIn;

void main() {
    gl_Position = vec4(xyzIn, 1.0);
}
"#;

const FS_SRC: &str = r#"
precision mediump float;
uniform vec4 color;
out vec4 FragColor;

void main() {
    FragColor = color;
}
"#;

/// VAO + VBO pair that lives for a single draw call
struct TransientVertexArray<'a> {
    gl: &'a glow::Context,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
}

impl<'a> TransientVertexArray<'a> {
    fn new(gl: &'a glow::Context, vtx2xyz: &[f32], loc_xyz: u32) -> anyhow::Result<Self> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("cannot create vertex array: {e}"))?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(anyhow!("cannot create buffer: {e}"));
                }
            };
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vtx2xyz),
                glow::STATIC_DRAW,
            );
            gl.vertex_attrib_pointer_f32(
                loc_xyz,
                3,
                glow::FLOAT,
                false,
                3 * std::mem::size_of::<f32>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(loc_xyz);
            Ok(Self { gl, vao, vbo })
        }
    }
}

impl Drop for TransientVertexArray<'_> {
    fn drop(&mut self) {
        unsafe {
            self.gl.bind_vertex_array(None);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}

pub struct Drawer {
    program: Option<glow::Program>,
    loc_color: Option<glow::UniformLocation>,
    loc_xyz: u32,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawer {
    pub fn new() -> Self {
        Drawer {
            program: None,
            loc_color: None,
            loc_xyz: 0,
        }
    }

    pub fn compile_shader(&mut self, gl: &glow::Context) -> anyhow::Result<()> {
        let program = crate::compile_shaders(gl, crate::shader_version(), VS_SRC, FS_SRC)?;
        unsafe {
            let Some(loc_xyz) = gl.get_attrib_location(program, "xyzIn") else {
                gl.delete_program(program);
                return Err(anyhow!("attribute `xyzIn` not found in program"));
            };
            self.loc_color = gl.get_uniform_location(program, "color");
            if self.loc_color.is_none() {
                log::warn!("uniform `color` not found, primitives will draw in the default color");
            }
            self.loc_xyz = loc_xyz;
        }
        self.program = Some(program);
        log::info!("primitive shader ready");
        Ok(())
    }

    pub fn set_color(&self, gl: &glow::Context, rgb: &[f32; 3]) {
        unsafe {
            gl.use_program(self.program);
            gl.uniform_4_f32(self.loc_color.as_ref(), rgb[0], rgb[1], rgb[2], 1.0);
        }
    }

    pub fn set_viewport(&self, gl: &glow::Context, x: i32, y: i32, width: i32, height: i32) {
        unsafe {
            gl.viewport(x, y, width, height);
        }
    }

    pub fn clear(&self, gl: &glow::Context, rgb: &[f32; 3]) {
        unsafe {
            gl.clear_color(rgb[0], rgb[1], rgb[2], 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Upload `primitive`, draw it with `rgb` and `width`, then release the buffers.
    ///
    /// `width` is ignored for triangle fans. Without a compiled program this does nothing.
    pub fn draw(
        &self,
        gl: &glow::Context,
        primitive: &Primitive,
        rgb: &[f32; 3],
        width: f32,
    ) -> anyhow::Result<()> {
        if self.program.is_none() || primitive.num_vtx() == 0 {
            return Ok(());
        }
        let _vertex_array = TransientVertexArray::new(gl, &primitive.vtx2xyz, self.loc_xyz)?;
        unsafe {
            if primitive.mode.is_stroked() {
                gl.line_width(width);
            }
        }
        self.set_color(gl, rgb);
        unsafe {
            gl.draw_arrays(primitive.mode.gl_mode(), 0, primitive.num_vtx() as i32);
        }
        Ok(())
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(program) = self.program.take() {
            unsafe {
                gl.delete_program(program);
            }
        }
        self.loc_color = None;
    }
}
