// crates/cv_foundation/src/lib.rs

//! CaviHydro Foundation Layer
//!
//! 零重依赖基础层，提供整个项目的基础抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//! - [`float`]: 数值守卫常量与阶跃/钳位辅助函数
//!
//! # 设计原则
//!
//! 1. **零重依赖**: 仅依赖 thiserror
//! 2. **数值健壮**: 所有除法与开方的守卫常量集中定义在本层
//! 3. **零开销抽象**: release 模式下最小化运行时开销

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod float;

// 重导出常用类型
pub use error::{CvError, CvResult};
pub use float::{clamp_unit, neg, pos, pos0, ALPHA_FLOOR, ROOT_VSMALL, SMALL};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{CvError, CvResult};
    pub use crate::float::{clamp_unit, neg, pos, pos0, ALPHA_FLOOR, ROOT_VSMALL, SMALL};
}
