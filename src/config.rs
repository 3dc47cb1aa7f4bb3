//! Configuration file parser for projection runs

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::Anglef32;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {

    /// Number of evenly spaced angles in `[theta_start, theta_end)`
    #[serde(default = "mandatory")]
    pub num_angles: usize,

    /// First projection angle in degrees
    #[serde(default = "default_theta_start")]
    pub theta_start: Anglef32,

    /// End of the half-open angle interval in degrees
    #[serde(default = "default_theta_end")]
    pub theta_end: Anglef32,

    /// Side length of the generated Shepp-Logan phantom, used when no
    /// input image is given
    #[serde(default = "default_phantom_side")]
    pub phantom_side: usize,

    /// Raw f32 image to project instead of the synthetic phantom
    #[serde(default)]
    pub input_file: Option<PathBuf>,

    /// Dimensions (rows, columns) of `input_file`
    #[serde(default)]
    pub input_shape: Option<(usize, usize)>,

    /// Where to write the raw f32 sinogram
    #[serde(default = "mandatory")]
    pub out_file: PathBuf,
}

fn default_theta_start()  -> Anglef32 {   0.0 }
fn default_theta_end()    -> Anglef32 { 180.0 }
fn default_phantom_side() -> usize    { 400 }

pub fn read_config_file(path: PathBuf) -> Config {
    let config: String = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Couldn't read config file `{path:?}`: {e}"));
    toml::from_str(&config)
        .unwrap_or_else(|e| panic!("Couldn't parse config file `{path:?}`: {e}"))
}

// Hack to allow mandatory fields to be missing during testing.
#[cfg(not(test))]
fn mandatory<T>() -> T { panic!("MISSING MANDATORY FIELD. TODO: which one?") }
#[cfg(test)]
fn mandatory<T: Default>() -> T { T::default() }

#[cfg(test)]
mod tests {
    use super::*;

    //  ---  Parse string as TOML  -------------------------
    fn parse<'d, D: Deserialize<'d>>(input: &'d str) -> D {
        toml::from_str(input).unwrap()
    }

    #[test]
    fn full_config() {
        let config: Config = parse(r#"
            num_angles   = 180
            theta_start  = 0.0
            theta_end    = 180.0
            phantom_side = 256
            out_file     = "data/out/sino.raw"
        "#);
        assert_eq!(config.num_angles, 180);
        assert_eq!(config.theta_end, 180.0);
        assert_eq!(config.phantom_side, 256);
        assert_eq!(config.out_file, PathBuf::from("data/out/sino.raw"));
        assert!(config.input_file.is_none());
    }

    #[test]
    fn defaults_cover_the_full_half_turn() {
        let config: Config = parse(r#"num_angles = 90"#);
        assert_eq!(config.theta_start, 0.0);
        assert_eq!(config.theta_end, 180.0);
        assert_eq!(config.phantom_side, 400);
    }

    #[test]
    fn input_image_instead_of_phantom() {
        let config: Config = parse(r#"
            num_angles  = 10
            input_file  = "head.raw"
            input_shape = [400, 400]
        "#);
        assert_eq!(config.input_file, Some(PathBuf::from("head.raw")));
        assert_eq!(config.input_shape, Some((400, 400)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"
            num_angles = 10
            num_engels = 20
        "#);
        assert!(result.is_err());
    }
}
