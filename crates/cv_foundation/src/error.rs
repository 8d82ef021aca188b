// crates/cv_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `CvError` 枚举和 `CvResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，物理相关错误在 cv_physics 中扩展
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **失败语义**: 配置与模型选择错误是致命的，立即向上传播；
//!    数值退化（接近零的分母等）由 [`crate::float`] 中的守卫吸收，永不报错
//!
//! # 示例
//!
//! ```
//! use cv_foundation::error::{CvError, CvResult};
//!
//! fn read_coeff() -> CvResult<f64> {
//!     Err(CvError::missing_coeff("n", "SchnerrSauer"))
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type CvResult<T> = Result<T, CvError>;

/// CaviHydro 错误类型
///
/// 核心错误类型，用于整个项目。数值计算中的退化情形不产生错误，
/// 由局部守卫常量吸收。
#[derive(Error, Debug)]
pub enum CvError {
    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        #[source]
        /// 可选的底层 IO 错误
        source: Option<std::io::Error>,
    },

    /// 配置错误
    #[error("配置错误: {message}")]
    Config {
        /// 具体错误信息
        message: String,
    },

    /// 缺少必需的模型系数
    #[error("缺少必需的模型系数: {model}Coeffs.{key}")]
    MissingCoeff {
        /// 系数键名
        key: String,
        /// 模型名称
        model: String,
    },

    /// 配置值无效
    #[error("配置值无效: {key}={value}, 原因: {reason}")]
    InvalidConfig {
        /// 配置键名
        key: String,
        /// 配置值
        value: String,
        /// 无效原因说明
        reason: String,
    },

    /// 未注册的相变模型
    #[error("未知的相变模型: {name}, 可选项: {available:?}")]
    UnknownModel {
        /// 请求的模型名
        name: String,
        /// 已注册的模型列表
        available: Vec<String>,
    },

    /// 数组大小不匹配
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: &'static str,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl CvError {
    /// 从IO错误创建
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 缺少模型系数
    pub fn missing_coeff(key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::MissingCoeff {
            key: key.into(),
            model: model.into(),
        }
    }

    /// 配置值无效
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 未知的相变模型
    pub fn unknown_model(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::UnknownModel {
            name: name.into(),
            available,
        }
    }

    /// 数组大小不匹配
    pub fn size_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl CvError {
    /// 检查数组大小是否匹配
    #[inline]
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> CvResult<()> {
        if expected != actual {
            Err(Self::size_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }
}

// ========================================================================
// 标准库错误转换
// ========================================================================

impl From<std::io::Error> for CvError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

// ========================================================================
// 测试
// ========================================================================
