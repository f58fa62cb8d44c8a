use anyhow::Context;
use huntcore::prelude::{FilterThresholds, Variant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Full configuration for one hunt invocation. No process-wide state: the
/// driver builds one of these and hands it down.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HuntConfig {
    pub variant: Variant,
    pub galactic_cut: Option<f64>,
    pub hurst_min: f64,
    pub corr_min: f64,
    pub corr_fallback: Option<f64>,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("output")
}

impl HuntConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading hunt config {}", path_ref.display()))?;
        let config: HuntConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing hunt config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        variant: Variant,
        galactic_cut: Option<f64>,
        hurst_min: f64,
        corr_min: f64,
        corr_fallback: Option<f64>,
        out_dir: PathBuf,
    ) -> Self {
        Self {
            variant,
            galactic_cut,
            hurst_min,
            corr_min,
            corr_fallback,
            out_dir,
        }
    }

    pub fn to_thresholds(&self) -> FilterThresholds {
        FilterThresholds {
            galactic_cut: self.galactic_cut,
            hurst_min: self.hurst_min,
            corr_min: self.corr_min,
            corr_fallback: self.corr_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_thresholds() {
        let cfg = HuntConfig::from_args(
            Variant::Strict,
            Some(20.0),
            0.8,
            0.2,
            None,
            PathBuf::from("out"),
        );
        let thresholds = cfg.to_thresholds();
        assert_eq!(thresholds.galactic_cut, Some(20.0));
        assert!(thresholds.validate_for(Variant::Strict).is_ok());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"variant: elite\ngalactic_cut: null\nhurst_min: 0.8\ncorr_min: 0.25\ncorr_fallback: 0.15\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = HuntConfig::load(&path).unwrap();
        assert_eq!(cfg.variant, Variant::Elite);
        assert_eq!(cfg.corr_fallback, Some(0.15));
        assert_eq!(cfg.out_dir, PathBuf::from("output"));
    }
}
