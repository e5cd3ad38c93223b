pub mod bike;
pub mod config;
pub mod drawer_primitive;
pub mod logging;
pub mod primitive;
pub mod scene_state;

use anyhow::anyhow;

/// `#version` line prepended to every shader source
pub fn shader_version() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "#version 300 es"
    } else {
        "#version 330"
    }
}

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex shader",
        glow::FRAGMENT_SHADER => "fragment shader",
        _ => "shader",
    }
}

/// Compile and link a vertex/fragment pair.
///
/// The per-stage shader objects are detached and deleted before returning,
/// whether linking succeeded or not. On failure the program object is deleted too
/// and the info log is both logged and carried in the error.
pub fn compile_shaders(
    gl: &glow::Context,
    shader_version: &str,
    vertex_shader_source: &str,
    fragment_shader_source: &str,
) -> anyhow::Result<glow::Program> {
    use glow::HasContext;
    unsafe {
        let program = gl
            .create_program()
            .map_err(|e| anyhow!("cannot create program: {e}"))?;
        let shader_sources = [
            (glow::VERTEX_SHADER, vertex_shader_source),
            (glow::FRAGMENT_SHADER, fragment_shader_source),
        ];

        let mut shaders = Vec::with_capacity(shader_sources.len());
        let mut failure = None;
        for (shader_type, shader_source) in shader_sources {
            let shader = match gl.create_shader(shader_type) {
                Ok(shader) => shader,
                Err(e) => {
                    failure = Some(anyhow!("cannot create {}: {e}", stage_name(shader_type)));
                    break;
                }
            };
            gl.shader_source(shader, &format!("{shader_version}\n{shader_source}"));
            gl.compile_shader(shader);
            gl.attach_shader(program, shader);
            shaders.push(shader);
            if !gl.get_shader_compile_status(shader) {
                let info_log = gl.get_shader_info_log(shader);
                log::error!("failed to compile {}: {info_log}", stage_name(shader_type));
                failure = Some(anyhow!(
                    "failed to compile {}: {info_log}",
                    stage_name(shader_type)
                ));
                break;
            }
        }

        if failure.is_none() {
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                let info_log = gl.get_program_info_log(program);
                log::error!("failed to link program: {info_log}");
                failure = Some(anyhow!("failed to link program: {info_log}"));
            }
        }

        for shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        if let Some(err) = failure {
            gl.delete_program(program);
            return Err(err);
        }
        log::debug!("linked program {program:?}");
        Ok(program)
    }
}
