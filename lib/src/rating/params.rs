use crate::util::*;
use std::path::Path;

/// Weights and normalization constants of the trumpf rating.
#[derive(Clone, Debug, PartialEq)]
pub struct STrumpfStaerkeParams {
    pub f_weight_quality: f64,
    pub f_weight_unbeatable: f64,
    /// Indexed by `[b_schweinchen][b_bock]`.
    pub aaf_normalization: [[f64; 2]; 2],
    pub f_normalization_schlag: f64,
    pub f_weight_unbeatable_schlag: f64,
    pub f_cap: f64,
}

impl Default for STrumpfStaerkeParams {
    fn default() -> Self {
        STrumpfStaerkeParams {
            f_weight_quality: 1.,
            f_weight_unbeatable: 4.,
            aaf_normalization: [
                /*no schweinchen*/[/*no bock*/2.02, /*bock*/3.13],
                /*schweinchen*/[/*no bock*/2.47, /*bock*/3.15],
            ],
            f_normalization_schlag: 0.25,
            f_weight_unbeatable_schlag: 4.,
            f_cap: 100.,
        }
    }
}

impl STrumpfStaerkeParams {
    pub fn normalization(&self, b_bock: bool, b_schweinchen: bool) -> f64 {
        self.aaf_normalization[usize::from(b_schweinchen)][usize::from(b_bock)]
    }

    pub fn from_string(str_toml: &str) -> Result<STrumpfStaerkeParams, Error> {
        let tomltbl = str_toml.parse::<toml::Value>()?;
        let paramsdefault = STrumpfStaerkeParams::default();
        let read_number = |otomlval: Option<&toml::Value>, str_path: &str, str_key: &str, f_default: f64| -> Result<f64, Error> {
            match otomlval.and_then(|tomlval| tomlval.get(str_key)) {
                None => {
                    info!("STrumpfStaerkeParams: Did not find {}{}. Falling back to {}.", str_path, str_key, f_default);
                    Ok(f_default)
                },
                Some(&toml::Value::Float(f)) => Ok(f),
                Some(&toml::Value::Integer(n)) => Ok(n.as_num::<f64>()),
                Some(tomlval) => bail!("Invalid value for {}{}: {}. Must be a number.", str_path, str_key, tomlval),
            }
        };
        let read_positive = |otomlval: Option<&toml::Value>, str_path: &str, str_key: &str, f_default: f64| -> Result<f64, Error> {
            let f = read_number(otomlval, str_path, str_key, f_default)?;
            if 0. < f {
                Ok(f)
            } else {
                bail!("Invalid value for {}{}: {}. Must be positive.", str_path, str_key, f)
            }
        };
        let otomlval_normal = tomltbl.get("normal");
        let otomlval_normalization = otomlval_normal.and_then(|tomlval| tomlval.get("normalization"));
        let otomlval_schlag = tomltbl.get("schlag");
        let aaf_default = paramsdefault.aaf_normalization;
        Ok(STrumpfStaerkeParams {
            f_weight_quality: read_number(otomlval_normal, "normal.", "quality-weight", paramsdefault.f_weight_quality)?,
            f_weight_unbeatable: read_number(otomlval_normal, "normal.", "unbeatable-weight", paramsdefault.f_weight_unbeatable)?,
            aaf_normalization: [
                [
                    read_positive(otomlval_normalization, "normal.normalization.", "plain", aaf_default[0][0])?,
                    read_positive(otomlval_normalization, "normal.normalization.", "bock", aaf_default[0][1])?,
                ],
                [
                    read_positive(otomlval_normalization, "normal.normalization.", "schweinchen", aaf_default[1][0])?,
                    read_positive(otomlval_normalization, "normal.normalization.", "bock-schweinchen", aaf_default[1][1])?,
                ],
            ],
            f_normalization_schlag: read_positive(otomlval_schlag, "schlag.", "normalization", paramsdefault.f_normalization_schlag)?,
            f_weight_unbeatable_schlag: read_number(otomlval_schlag, "schlag.", "unbeatable-weight", paramsdefault.f_weight_unbeatable_schlag)?,
            f_cap: read_positive(Some(&tomltbl), "", "cap", paramsdefault.f_cap)?,
        })
    }

    pub fn from_file(path: &Path) -> Result<STrumpfStaerkeParams, Error> {
        Self::from_string(&std::fs::read_to_string(path)?)
    }
}

#[test]
fn test_params_default() {
    let params = STrumpfStaerkeParams::default();
    assert_eq!(params.normalization(/*b_bock*/false, /*b_schweinchen*/false), 2.02);
    assert_eq!(params.normalization(/*b_bock*/false, /*b_schweinchen*/true), 2.47);
    assert_eq!(params.normalization(/*b_bock*/true, /*b_schweinchen*/false), 3.13);
    assert_eq!(params.normalization(/*b_bock*/true, /*b_schweinchen*/true), 3.15);
    assert_eq!(STrumpfStaerkeParams::from_string("").ok(), Some(params));
}

#[test]
fn test_params_from_string() {
    let params = STrumpfStaerkeParams::from_string(r#"
        cap = 120
        [normal]
        quality-weight = 2
        normalization = { plain = 2.5, bock-schweinchen = 4 }
        [schlag]
        unbeatable-weight = 3.5
    "#).unwrap();
    assert_eq!(params.f_cap, 120.);
    assert_eq!(params.f_weight_quality, 2.);
    assert_eq!(params.f_weight_unbeatable, 4.);
    assert_eq!(params.aaf_normalization, [[2.5, 3.13], [2.47, 4.]]);
    assert_eq!(params.f_normalization_schlag, 0.25);
    assert_eq!(params.f_weight_unbeatable_schlag, 3.5);
}

#[test]
fn test_params_invalid() {
    assert!(STrumpfStaerkeParams::from_string("cap = ").is_err());
    assert!(STrumpfStaerkeParams::from_string("cap = \"high\"").is_err());
    assert!(STrumpfStaerkeParams::from_string("[schlag]\nnormalization = 0").is_err());
    assert!(STrumpfStaerkeParams::from_string("[normal.normalization]\nbock = -3.13").is_err());
}
