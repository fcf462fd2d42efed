/* ********************************************************************** **
**  This file is part of polyreg.                                         **
**                                                                        **
**  polyreg is free software: you can redistribute it and/or modify it    **
**  under the terms of the GNU General Public License as published by the **
**  Free Software Foundation, either version 3 of the License, or (at     **
**  your option) any later version.                                       **
**                                                                        **
**      http://www.gnu.org/licenses/                                      **
**                                                                        **
** Do note that, while the whole of polyreg is licensed under the GPL,    **
** many parts of it are licensed under more permissive terms.             **
** ********************************************************************** */

//! Settings file.
//!
//! ```yaml
//! degree: 3          # degree of the fitted polynomial
//! max-degree: 10     # largest degree that will be accepted
//! curve-samples: 500 # points in the sampled curve written by --save-curve
//! ```
//!
//! Every key is optional.

use crate::FailResult;

use ::polyreg_fit::Degree;
use ::std::path::Path;

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default = "self::defaults::settings::degree")]
    pub degree: u32,

    #[serde(default = "self::defaults::settings::max_degree")]
    pub max_degree: u32,

    #[serde(default = "self::defaults::settings::curve_samples")]
    pub curve_samples: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            degree: defaults::settings::degree(),
            max_degree: defaults::settings::max_degree(),
            curve_samples: defaults::settings::curve_samples(),
        }
    }
}

mod defaults {
    pub(crate) mod settings {
        pub(crate) fn degree() -> u32 { 2 }
        pub(crate) fn max_degree() -> u32 { 10 }
        pub(crate) fn curve_samples() -> usize { 500 }
    }
}

impl Settings {
    /// Parses YAML, warning about any keys that were not used.
    pub fn from_yaml_str(s: &str) -> FailResult<Self>
    {
        // an empty document is null, not an empty mapping
        if s.trim().is_empty() {
            return Ok(Settings::default());
        }

        let value: ::serde_yaml::Value = ::serde_yaml::from_str(s)?;
        let settings: Settings = match ::serde_ignored::deserialize(
            value,
            |path| warn!("Unused config item (possible typo?): {}", path),
        ) {
            Ok(settings) => settings,
            // errors through a Value lose their location; parse again for a better one
            Err(_) => ::serde_yaml::from_str(s)?,
        };
        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> FailResult<Self>
    {
        let path = path.as_ref();
        let text = crate::fsx::read_to_string(path)?;
        Settings::from_yaml_str(&text)
            .map_err(|e| format_err!("in config file '{}': {}", path.display(), e))
    }

    /// Checks settings that can't be expressed in the types.
    pub fn validate(&self) -> FailResult<()>
    {
        if self.max_degree < 1 {
            bail!("max-degree must be at least 1 (got {})", self.max_degree);
        }
        if self.degree < 1 || self.degree > self.max_degree {
            bail!("degree must be between 1 and {} (got {})", self.max_degree, self.degree);
        }
        if self.curve_samples < 2 {
            bail!("curve-samples must be at least 2 (got {})", self.curve_samples);
        }
        Ok(())
    }

    pub fn degree(&self) -> FailResult<Degree>
    { Ok(Degree::new(i64::from(self.degree))?) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        assert_eq!(Settings::from_yaml_str("").unwrap(), Settings::default());
        assert_eq!(Settings::from_yaml_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn kebab_case_keys() {
        let settings = Settings::from_yaml_str("degree: 4\nmax-degree: 6\ncurve-samples: 50\n").unwrap();
        assert_eq!(settings, Settings { degree: 4, max_degree: 6, curve_samples: 50 });
        settings.validate().unwrap();
        assert_eq!(settings.degree().unwrap().get(), 4);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let settings = Settings::from_yaml_str("degree: 3\ndegre: 5\n").unwrap();
        assert_eq!(settings.degree, 3);
    }

    #[test]
    fn type_errors_are_reported() {
        assert!(Settings::from_yaml_str("degree: three\n").is_err());
        assert!(Settings::from_yaml_str("degree: -1\n").is_err());
    }

    #[test]
    fn load_names_the_file() {
        let dir = ::tempdir::TempDir::new("polyreg-config").unwrap();
        let path = dir.path().join("settings.yaml");
        crate::fsx::write(&path, "max-degree: 4\n").unwrap();
        assert_eq!(Settings::load(&path).unwrap().max_degree, 4);

        crate::fsx::write(&path, "degree: [1]\n").unwrap();
        let msg = Settings::load(&path).unwrap_err().to_string();
        assert!(msg.starts_with("in config file '"), "{}", msg);
        assert!(msg.contains("settings.yaml"), "{}", msg);
    }

    #[test]
    fn validation() {
        let ok = Settings::default();
        ok.validate().unwrap();

        let bad = |settings: Settings| settings.validate().unwrap_err().to_string();
        assert_eq!(
            bad(Settings { degree: 11, ..Settings::default() }),
            "degree must be between 1 and 10 (got 11)",
        );
        assert_eq!(
            bad(Settings { degree: 0, ..Settings::default() }),
            "degree must be between 1 and 10 (got 0)",
        );
        assert_eq!(
            bad(Settings { curve_samples: 1, ..Settings::default() }),
            "curve-samples must be at least 2 (got 1)",
        );
    }
}
