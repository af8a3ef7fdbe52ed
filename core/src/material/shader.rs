//! Shader variants and their GLSL sources
//!
//! Three variants cover every material in the scene:
//! - Phong: per-fragment Blinn-Phong lighting, the default
//! - Ring: concentric bands radiating from the model origin (sun halo)
//! - RotatingTexture: Phong-lit texture whose UVs spin over time (sun disc)
//!
//! Sources target WebGL 1 / GLSL ES 1.00. Hosts compile them once per
//! variant and select by tag.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

/// Shader program a material is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderVariant {
    Phong,
    Ring,
    RotatingTexture,
}

/// Vertex and fragment source for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

impl ShaderVariant {
    pub const ALL: [ShaderVariant; 3] = [
        ShaderVariant::Phong,
        ShaderVariant::Ring,
        ShaderVariant::RotatingTexture,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShaderVariant::Phong => "phong",
            ShaderVariant::Ring => "ring",
            ShaderVariant::RotatingTexture => "rotating_texture",
        }
    }

    /// Whether the variant samples a texture
    pub const fn uses_texture(self) -> bool {
        matches!(self, ShaderVariant::RotatingTexture)
    }

    /// Whether the variant reads scene lights
    pub const fn uses_lights(self) -> bool {
        !matches!(self, ShaderVariant::Ring)
    }
}

impl fmt::Display for ShaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShaderVariant {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShaderVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError {
                kind: "shader variant",
                value: s.to_string(),
                expected: "phong, ring, rotating_texture",
            })
    }
}

/// Look up the sources for a variant
pub const fn shader_source(variant: ShaderVariant) -> ShaderSource {
    match variant {
        ShaderVariant::Phong => ShaderSource {
            vertex: PHONG_VERTEX,
            fragment: PHONG_FRAGMENT,
        },
        ShaderVariant::Ring => ShaderSource {
            vertex: RING_VERTEX,
            fragment: RING_FRAGMENT,
        },
        ShaderVariant::RotatingTexture => ShaderSource {
            vertex: TEXTURED_VERTEX,
            fragment: ROTATING_TEXTURE_FRAGMENT,
        },
    }
}

macro_rules! lighting_prelude {
    () => {
        r#"precision mediump float;
const int N_LIGHTS = 2;
uniform float ambient, diffusivity, specularity, smoothness;
uniform vec4 light_positions_or_vectors[N_LIGHTS], light_colors[N_LIGHTS];
uniform float light_attenuation_factors[N_LIGHTS];
uniform vec4 shape_color;
uniform vec3 squared_scale, camera_center;
varying vec3 N, vertex_worldspace;

vec3 phong_model_lights(vec3 N, vec3 vertex_worldspace) {
    vec3 E = normalize(camera_center - vertex_worldspace);
    vec3 result = vec3(0.0);
    for (int i = 0; i < N_LIGHTS; i++) {
        vec3 surface_to_light = light_positions_or_vectors[i].xyz
            - light_positions_or_vectors[i].w * vertex_worldspace;
        float dist = length(surface_to_light);
        vec3 L = normalize(surface_to_light);
        vec3 H = normalize(L + E);
        float diffuse = max(dot(N, L), 0.0);
        float specular = pow(max(dot(N, H), 0.0), smoothness);
        float attenuation = 1.0 / (1.0 + light_attenuation_factors[i] * dist * dist);
        vec3 contribution = shape_color.xyz * light_colors[i].xyz * diffusivity * diffuse
            + light_colors[i].xyz * specularity * specular;
        result += attenuation * contribution;
    }
    return result;
}
"#
    };
}

const PHONG_VERTEX: &str = concat!(
    lighting_prelude!(),
    r#"
attribute vec3 position, normal;
uniform mat4 model_transform;
uniform mat4 projection_camera_model_transform;

void main() {
    gl_Position = projection_camera_model_transform * vec4(position, 1.0);
    N = normalize(mat3(model_transform) * normal / squared_scale);
    vertex_worldspace = (model_transform * vec4(position, 1.0)).xyz;
}
"#
);

const PHONG_FRAGMENT: &str = concat!(
    lighting_prelude!(),
    r#"
void main() {
    gl_FragColor = vec4(shape_color.xyz * ambient, shape_color.w);
    gl_FragColor.xyz += phong_model_lights(normalize(N), vertex_worldspace);
}
"#
);

const TEXTURED_VERTEX: &str = concat!(
    lighting_prelude!(),
    r#"
varying vec2 f_tex_coord;
attribute vec3 position, normal;
attribute vec2 texture_coord;
uniform mat4 model_transform;
uniform mat4 projection_camera_model_transform;

void main() {
    gl_Position = projection_camera_model_transform * vec4(position, 1.0);
    N = normalize(mat3(model_transform) * normal / squared_scale);
    vertex_worldspace = (model_transform * vec4(position, 1.0)).xyz;
    f_tex_coord = texture_coord;
}
"#
);

const ROTATING_TEXTURE_FRAGMENT: &str = concat!(
    lighting_prelude!(),
    r#"
varying vec2 f_tex_coord;
uniform sampler2D texture;
uniform float animation_time;

void main() {
    // One revolution every four seconds, about the texture centre.
    float angle = 0.5 * 3.14159265 * mod(animation_time, 4.0);
    mat2 spin = mat2(cos(angle), sin(angle), -sin(angle), cos(angle));
    vec2 uv = spin * (f_tex_coord - vec2(0.5)) + vec2(0.5);
    vec4 tex_color = texture2D(texture, uv);
    if (tex_color.w < 0.01) discard;
    gl_FragColor = vec4((tex_color.xyz + shape_color.xyz) * ambient, shape_color.w * tex_color.w);
    gl_FragColor.xyz += phong_model_lights(normalize(N), vertex_worldspace);
}
"#
);

const RING_VERTEX: &str = r#"precision mediump float;
varying vec4 point_position;
varying vec4 center;
attribute vec3 position;
uniform mat4 model_transform;
uniform mat4 projection_camera_model_transform;

void main() {
    point_position = model_transform * vec4(position, 1.0);
    center = model_transform * vec4(0.0, 0.0, 0.0, 1.0);
    gl_Position = projection_camera_model_transform * vec4(position, 1.0);
}
"#;

const RING_FRAGMENT: &str = r#"precision mediump float;
varying vec4 point_position;
varying vec4 center;
uniform vec4 shape_color;

void main() {
    float bands = sin(19.0 * distance(point_position.xyz, center.xyz));
    gl_FragColor = bands * shape_color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_both_stages() {
        for variant in ShaderVariant::ALL {
            let source = shader_source(variant);
            assert!(source.vertex.contains("void main()"), "{variant} vertex");
            assert!(source.fragment.contains("void main()"), "{variant} fragment");
            assert!(source.vertex.contains("gl_Position"));
            assert!(source.fragment.contains("gl_FragColor"));
        }
    }

    #[test]
    fn test_lighting_only_where_declared() {
        for variant in ShaderVariant::ALL {
            let fragment = shader_source(variant).fragment;
            assert_eq!(
                fragment.contains("phong_model_lights("),
                variant.uses_lights(),
                "{variant}"
            );
        }
    }

    #[test]
    fn test_texture_sampling_only_where_declared() {
        for variant in ShaderVariant::ALL {
            let fragment = shader_source(variant).fragment;
            assert_eq!(fragment.contains("texture2D"), variant.uses_texture());
        }
    }

    #[test]
    fn test_parse_variant_names() {
        assert_eq!("phong".parse::<ShaderVariant>(), Ok(ShaderVariant::Phong));
        assert_eq!("RING".parse::<ShaderVariant>(), Ok(ShaderVariant::Ring));
        assert_eq!(
            "rotating_texture".parse::<ShaderVariant>(),
            Ok(ShaderVariant::RotatingTexture)
        );
        let err = "gouraud".parse::<ShaderVariant>().unwrap_err();
        assert_eq!(err.value, "gouraud");
    }
}
