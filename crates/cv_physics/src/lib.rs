// crates/cv_physics/src/lib.rs

//! 相变闭合物理模块
//!
//! 提供不可压三相（液/汽/气）混合物的空化-凝结闭合模型，包括：
//! - 三相混合物属性 (mixture) - 相分数场、各相密度/粘度、混合物导出场
//! - 相变模型抽象 (phase_change::traits) - 速率对、求值上下文、模型 trait
//! - Schnerr–Sauer 合并模型 (phase_change::schnerr_sauer) - 核心闭合公式
//! - 模型注册中心 (phase_change::registry) - 按名称选择模型
//! - 体积速率适配 (phase_change::volumetric) - 按相密度重标的 vDot 接口
//!
//! # 数据流
//!
//! 每个时间步由外部求解器调用 `correct()`；下游方程组装按需拉取
//! `vdot_alphal()` / `vdot_p()`，每次拉取从当前压力与相分数场重新计算
//! 核化模型 → 压力速率系数 → 质量传递速率 → 体积速率，步内无缓存。
//!
//! # 执行模型
//!
//! 所有求值都是无跨单元依赖的逐单元扫描，单元数超过阈值时
//! 使用 rayon 并行，每个输出单元恰好写一次，输入只读。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mixture;
pub mod phase_change;

// 重导出常用类型
pub use mixture::ThreePhaseMixture;
pub use phase_change::{
    EvalConfig, PhaseChangeContext, PhaseChangeMixture, PhaseChangeModel, PhaseChangeRegistry,
    RatePair, SchnerrSauer, SchnerrSauerCoeffs,
};
