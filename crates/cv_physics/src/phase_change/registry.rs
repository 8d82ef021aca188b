// crates/cv_physics/src/phase_change/registry.rs

//! 相变模型注册中心
//!
//! 按字符串名称选择并构造相变模型。注册表是显式传递的值，
//! 不使用全局可变单例；未注册的名称报致命错误并列出全部可选项。

use std::collections::HashMap;

use crate::phase_change::schnerr_sauer::{self, SchnerrSauer};
use crate::phase_change::traits::PhaseChangeModel;
use cv_config::TransportConfig;
use cv_foundation::error::{CvError, CvResult};

/// 模型工厂函数：从配置构造一个模型实例
pub type ModelFactory = fn(&TransportConfig) -> CvResult<Box<dyn PhaseChangeModel>>;

/// 相变模型注册中心
pub struct PhaseChangeRegistry {
    /// 名称到工厂函数的映射
    factories: HashMap<String, ModelFactory>,
}

impl PhaseChangeRegistry {
    /// 创建空注册中心
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// 创建并注册全部内置模型
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(schnerr_sauer::MODEL_NAME, |config| {
            Ok(Box::new(SchnerrSauer::from_config(config)?))
        });
        registry
    }

    /// 注册模型工厂
    pub fn register(&mut self, name: impl Into<String>, factory: ModelFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// 已注册的模型名称（排序后）
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// 按名称构造模型
    ///
    /// 未注册的名称返回 [`CvError::UnknownModel`]，错误信息列出全部可选项。
    pub fn create(
        &self,
        name: &str,
        config: &TransportConfig,
    ) -> CvResult<Box<dyn PhaseChangeModel>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CvError::unknown_model(name, self.names()))?;
        log::info!("选择相变模型: {name}");
        factory(config)
    }
}

impl Default for PhaseChangeRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_schnerr_sauer() {
        let registry = PhaseChangeRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["SchnerrSauer".to_string()]);
    }

    #[test]
    fn test_create_known_model() {
        let registry = PhaseChangeRegistry::with_builtin();
        let config = TransportConfig::default();
        let model = registry.create("SchnerrSauer", &config).unwrap();
        assert_eq!(model.name(), "SchnerrSauer");
    }

    #[test]
    fn test_unknown_model_lists_alternatives() {
        let registry = PhaseChangeRegistry::with_builtin();
        let config = TransportConfig::default();
        let err = registry.create("Kunz", &config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Kunz"));
        assert!(msg.contains("SchnerrSauer"), "错误信息应列出可选项: {msg}");
    }

    #[test]
    fn test_create_propagates_missing_coeff() {
        let registry = PhaseChangeRegistry::with_builtin();
        let mut config = TransportConfig::default();
        config.coeffs.clear();
        let err = registry.create("SchnerrSauer", &config).unwrap_err();
        assert!(matches!(err, CvError::MissingCoeff { .. }));
    }
}
