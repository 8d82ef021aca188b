// crates/cv_config/src/transport.rs

//! TransportConfig - 输运属性配置（全 f64）
//!
//! 对应求解器的输运属性字典：相变模型选择、饱和压力、
//! 三相的密度与运动粘度，以及按 `<模型名>Coeffs` 分块的模型系数表。
//!
//! # JSON 示例
//!
//! ```json
//! {
//!   "phase_change_model": "SchnerrSauer",
//!   "p_sat": 2300.0,
//!   "phases": { "rho1": 1000.0, "rho2": 0.02, "rho3": 1.2 },
//!   "coeffs": {
//!     "SchnerrSauerCoeffs": { "n": 1.6e13, "dNuc": 2.0e-6, "Cc": 1.0, "Cv": 1.0 }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use cv_foundation::error::{CvError, CvResult};

/// 模型系数子块：键名到 f64 值的映射
pub type CoeffBlock = HashMap<String, f64>;

/// 输运属性配置
///
/// 包含相变模型运行所需的全部配置参数。
/// 五个必需的模型系数（n、dNuc、Cc、Cv 在子块中，pSat 在顶层）
/// 缺失时报致命错误，其余字段提供默认值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// 相变模型名称（工厂选择键）
    #[serde(default = "default_model")]
    pub phase_change_model: String,

    /// 饱和压力 [Pa]（必需，由上层模型读取）
    pub p_sat: f64,

    /// 三相物性参数
    #[serde(default)]
    pub phases: PhasesConfig,

    /// 按 `<模型名>Coeffs` 分块的模型系数表
    #[serde(default)]
    pub coeffs: HashMap<String, CoeffBlock>,
}

fn default_model() -> String {
    "SchnerrSauer".to_string()
}

impl Default for TransportConfig {
    fn default() -> Self {
        let mut block = CoeffBlock::new();
        block.insert("n".to_string(), 1.6e13);
        block.insert("dNuc".to_string(), 2.0e-6);
        block.insert("Cc".to_string(), 1.0);
        block.insert("Cv".to_string(), 1.0);

        let mut coeffs = HashMap::new();
        coeffs.insert("SchnerrSauerCoeffs".to_string(), block);

        Self {
            phase_change_model: default_model(),
            p_sat: 2300.0,
            phases: PhasesConfig::default(),
            coeffs,
        }
    }
}

impl TransportConfig {
    /// 从 JSON 字符串解析
    pub fn from_json_str(s: &str) -> CvResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| CvError::config(format!("解析失败: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载
    pub fn load_from_path(path: impl AsRef<Path>) -> CvResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// 序列化为 JSON 字符串
    pub fn to_json_string(&self) -> CvResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CvError::config(format!("序列化失败: {e}")))
    }

    /// 获取指定模型的系数子块（`<模型名>Coeffs`）
    ///
    /// 子块缺失返回 `None`，由后续必需键查找报出具体错误。
    pub fn coeff_block(&self, model: &str) -> Option<&CoeffBlock> {
        self.coeffs.get(&format!("{model}Coeffs"))
    }

    /// 查找指定模型的必需系数
    ///
    /// 子块或键缺失时返回 [`CvError::MissingCoeff`]，报出键名与模型名。
    pub fn required(&self, model: &str, key: &str) -> CvResult<f64> {
        self.coeff_block(model)
            .and_then(|block| block.get(key))
            .copied()
            .ok_or_else(|| CvError::missing_coeff(key, model))
    }

    /// 校验配置合法性
    pub fn validate(&self) -> CvResult<()> {
        if self.p_sat <= 0.0 {
            return Err(CvError::invalid_config(
                "p_sat",
                self.p_sat.to_string(),
                "饱和压力必须为正",
            ));
        }
        self.phases.validate()
    }
}

/// 三相物性参数配置
///
/// 相 1 为液相（水）、相 2 为蒸汽相、相 3 为不可凝气相（空气）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhasesConfig {
    /// 液相密度 [kg/m³]
    #[serde(default = "default_rho1")]
    pub rho1: f64,

    /// 蒸汽相密度 [kg/m³]
    #[serde(default = "default_rho2")]
    pub rho2: f64,

    /// 空气相密度 [kg/m³]
    #[serde(default = "default_rho3")]
    pub rho3: f64,

    /// 液相运动粘度 [m²/s]
    #[serde(default = "default_nu1")]
    pub nu1: f64,

    /// 蒸汽相运动粘度 [m²/s]
    #[serde(default = "default_nu2")]
    pub nu2: f64,

    /// 空气相运动粘度 [m²/s]
    #[serde(default = "default_nu3")]
    pub nu3: f64,
}

fn default_rho1() -> f64 {
    1000.0
}
fn default_rho2() -> f64 {
    0.02
}
fn default_rho3() -> f64 {
    1.2
}
fn default_nu1() -> f64 {
    1.0e-6
}
fn default_nu2() -> f64 {
    4.3e-4
}
fn default_nu3() -> f64 {
    1.48e-5
}

impl Default for PhasesConfig {
    fn default() -> Self {
        Self {
            rho1: default_rho1(),
            rho2: default_rho2(),
            rho3: default_rho3(),
            nu1: default_nu1(),
            nu2: default_nu2(),
            nu3: default_nu3(),
        }
    }
}

impl PhasesConfig {
    /// 校验物性参数合法性
    pub fn validate(&self) -> CvResult<()> {
        for (key, value) in [
            ("rho1", self.rho1),
            ("rho2", self.rho2),
            ("rho3", self.rho3),
        ] {
            if value <= 0.0 {
                return Err(CvError::invalid_config(
                    key,
                    value.to_string(),
                    "密度必须为正",
                ));
            }
        }
        for (key, value) in [("nu1", self.nu1), ("nu2", self.nu2), ("nu3", self.nu3)] {
            if value < 0.0 {
                return Err(CvError::invalid_config(
                    key,
                    value.to_string(),
                    "粘度不能为负",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TransportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.phase_change_model, "SchnerrSauer");
    }

    #[test]
    fn test_required_coeff_lookup() {
        let config = TransportConfig::default();
        let n = config.required("SchnerrSauer", "n").unwrap();
        assert_eq!(n, 1.6e13);
    }

    #[test]
    fn test_missing_coeff_reports_key_and_model() {
        let mut config = TransportConfig::default();
        config
            .coeffs
            .get_mut("SchnerrSauerCoeffs")
            .unwrap()
            .remove("dNuc");

        let err = config.required("SchnerrSauer", "dNuc").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("dNuc"), "错误信息应包含键名: {msg}");
        assert!(msg.contains("SchnerrSauer"), "错误信息应包含模型名: {msg}");
    }

    #[test]
    fn test_missing_block_reports_missing_coeff() {
        let mut config = TransportConfig::default();
        config.coeffs.clear();
        assert!(config.required("SchnerrSauer", "n").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = TransportConfig::default();
        let json = config.to_json_string().unwrap();
        let parsed = TransportConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed.p_sat, config.p_sat);
        assert_eq!(
            parsed.required("SchnerrSauer", "Cc").unwrap(),
            config.required("SchnerrSauer", "Cc").unwrap()
        );
    }

    #[test]
    fn test_missing_p_sat_fails_parse() {
        // p_sat 为必需字段，缺失时解析失败
        let json = r#"{ "phase_change_model": "SchnerrSauer" }"#;
        assert!(TransportConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_density() {
        let mut config = TransportConfig::default();
        config.phases.rho2 = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_psat() {
        let json = r#"{ "p_sat": 0.0 }"#;
        assert!(TransportConfig::from_json_str(json).is_err());
    }
}
