// crates/cv_config/src/lib.rs

//! CaviHydro Config Layer
//!
//! 配置层，提供输运属性与相变模型系数的加载与校验。
//! 本层完全无泛型，所有数值使用 f64 以便 JSON 序列化。
//!
//! # 模块概览
//!
//! - [`transport`]: TransportConfig 输运属性配置（相变模型选择、饱和压力、
//!   各相密度/粘度、按模型名分块的系数表）
//!
//! # 层级架构
//!
//! ```text
//! Layer 3: cv_physics  ─> 通过 TransportConfig 构建/重载相变模型
//! Layer 2: cv_config   ─> TransportConfig, PhasesConfig (本层)
//! Layer 1: cv_foundation
//! ```
//!
//! # 设计原则
//!
//! 1. **无泛型**: 本层所有类型都不包含泛型参数
//! 2. **必需键显式报错**: 五个模型系数缺失时报出键名与模型名
//! 3. **原子重载**: 配置整体解析成功后才替换旧值

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod transport;

// 重导出核心类型
pub use transport::{CoeffBlock, PhasesConfig, TransportConfig};
