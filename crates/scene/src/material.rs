//! Surface and light colour properties.

use std::collections::BTreeMap;

use hypyr_math::Vec3;

/// Named scalar handed to the shading backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

/// Fixed-function style material colours.
///
/// For light nodes the same colours describe the emitted light.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub ambient_rgb: Vec3,
    pub diffuse_rgb: Vec3,
    pub specular_rgb: Vec3,
    pub shininess: f64,
    parameters: BTreeMap<String, ParamValue>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient_rgb: 0.1 * Vec3::ones(),
            diffuse_rgb: 0.6 * Vec3::ones(),
            specular_rgb: 0.3 * Vec3::ones(),
            shininess: 1.0,
            parameters: BTreeMap::new(),
        }
    }
}

impl Material {
    pub fn set_param(&mut self, name: impl Into<String>, value: ParamValue) {
        self.parameters.insert(name.into(), value);
    }

    pub fn param(&self, name: &str) -> Option<ParamValue> {
        self.parameters.get(name).copied()
    }

    /// Parameters in name order.
    pub fn params(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colours() {
        let m = Material::default();
        assert_eq!(m.ambient_rgb, Vec3::splat(0.1));
        assert_eq!(m.diffuse_rgb, Vec3::splat(0.6));
        assert_eq!(m.specular_rgb, Vec3::splat(0.3));
        assert_eq!(m.shininess, 1.0);
        assert_eq!(m.params().count(), 0);
    }

    #[test]
    fn test_params_sorted_by_name() {
        let mut m = Material::default();
        m.set_param("tex[1]", ParamValue::Int(1));
        m.set_param("exposure", ParamValue::Float(0.5));
        m.set_param("tex[0]", ParamValue::Int(0));

        let names: Vec<&str> = m.params().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["exposure", "tex[0]", "tex[1]"]);
        assert_eq!(m.param("exposure"), Some(ParamValue::Float(0.5)));
        assert_eq!(m.param("missing"), None);
    }
}
