// crates/cv_physics/src/phase_change/mod.rs

//! 相变闭合模型
//!
//! 提供液相与合并汽/气相之间的质量传递源项计算：
//! - [`traits`]: 速率对、求值上下文与模型统一接口
//! - [`schnerr_sauer`]: 三相合并 Schnerr–Sauer 模型（核心公式）
//! - [`registry`]: 按名称选择模型的显式注册中心
//! - [`volumetric`]: 体积速率适配与生命周期宿主

pub mod registry;
pub mod schnerr_sauer;
pub mod traits;
pub mod volumetric;

pub use registry::PhaseChangeRegistry;
pub use schnerr_sauer::{EvalConfig, SchnerrSauer, SchnerrSauerCoeffs};
pub use traits::{PhaseChangeContext, PhaseChangeModel, RatePair};
pub use volumetric::PhaseChangeMixture;
