// crates/cv_physics/src/phase_change/traits.rs

//! 相变模型 Trait 定义
//!
//! 定义相变模型的核心接口和数据结构。
//!
//! 压力场作为显式参数传入求值调用，而不是从全局场注册表按名查找；
//! 饱和压力通过 [`PhaseChangeContext`] 注入。

use crate::mixture::ThreePhaseMixture;
use cv_config::TransportConfig;
use cv_foundation::error::CvResult;

/// 质量/体积传递速率对
///
/// 凝结分支与汽化分支总是同时物化为两个完整的场，
/// 逐单元的符号门控保证每个单元至多一个分支数值非零。
#[derive(Debug, Clone, PartialEq)]
pub struct RatePair {
    /// 凝结分支（p > pm 时激活）
    pub condensation: Vec<f64>,
    /// 汽化分支（p < pm 时激活）
    pub vaporization: Vec<f64>,
}

impl RatePair {
    /// 创建零速率对
    pub fn zeros(n_cells: usize) -> Self {
        Self {
            condensation: vec![0.0; n_cells],
            vaporization: vec![0.0; n_cells],
        }
    }

    /// 从两个分支场构造
    pub fn new(condensation: Vec<f64>, vaporization: Vec<f64>) -> Self {
        debug_assert_eq!(condensation.len(), vaporization.len());
        Self {
            condensation,
            vaporization,
        }
    }

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.condensation.len()
    }

    /// 两个分支是否全为有限值
    pub fn is_valid(&self) -> bool {
        self.condensation.iter().all(|x| x.is_finite())
            && self.vaporization.iter().all(|x| x.is_finite())
    }

    /// 对两个分支逐单元应用同一缩放场
    pub fn scale_by(&self, coeff: &[f64]) -> Self {
        debug_assert_eq!(coeff.len(), self.n_cells());
        Self {
            condensation: self
                .condensation
                .iter()
                .zip(coeff)
                .map(|(m, c)| m * c)
                .collect(),
            vaporization: self
                .vaporization
                .iter()
                .zip(coeff)
                .map(|(m, c)| m * c)
                .collect(),
        }
    }

    /// 对两个分支应用同一常数缩放
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            condensation: self.condensation.iter().map(|m| m * factor).collect(),
            vaporization: self.vaporization.iter().map(|m| m * factor).collect(),
        }
    }
}

/// 相变求值上下文
///
/// 包含模型求值所需的外部参数。
#[derive(Debug, Clone, Copy)]
pub struct PhaseChangeContext {
    /// 饱和压力 [Pa]
    pub p_sat: f64,
}

impl PhaseChangeContext {
    /// 创建新的求值上下文
    pub fn new(p_sat: f64) -> Self {
        Self { p_sat }
    }
}

/// 相变模型 Trait
///
/// 定义质量传递速率计算的统一接口。实现必须是纯求值：
/// 不修改混合物与压力输入，重复调用结果逐位相同。
pub trait PhaseChangeModel: Send + Sync + std::fmt::Debug {
    /// 模型名称（工厂选择键）
    fn name(&self) -> &'static str;

    /// 体积分数输运方程用的质量传递速率对
    ///
    /// 凝结分支在 p ≤ pm 处精确为零，汽化分支在 p ≥ pm 处精确为零。
    fn mdot_alphal(
        &self,
        mixture: &ThreePhaseMixture,
        p: &[f64],
        ctx: &PhaseChangeContext,
    ) -> CvResult<RatePair>;

    /// 压力方程用的质量传递速率对（隐式系数形式）
    ///
    /// 返回 (p − pm) 的系数而非乘积，门控使用 pos0/neg 阶跃，
    /// 与 `mdot_alphal` 在同一 pm/Rb/densityfrac 状态下求值。
    fn mdot_p(
        &self,
        mixture: &ThreePhaseMixture,
        p: &[f64],
        ctx: &PhaseChangeContext,
    ) -> CvResult<RatePair>;

    /// 每时间步的修正钩子
    ///
    /// 速率场由下游按需拉取，默认无模型局部工作。
    fn correct(&mut self, _mixture: &ThreePhaseMixture) {}

    /// 从配置重载模型系数，返回重载是否成功
    ///
    /// 实现必须原子地替换全部系数：先全部解析成功，再一次性赋值。
    fn read(&mut self, config: &TransportConfig) -> CvResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_pair_zeros() {
        let pair = RatePair::zeros(5);
        assert_eq!(pair.n_cells(), 5);
        assert!(pair.is_valid());
        assert!(pair.condensation.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_rate_pair_scale_by_field() {
        let pair = RatePair::new(vec![1.0, 2.0], vec![-1.0, -2.0]);
        let scaled = pair.scale_by(&[0.5, 2.0]);
        assert_eq!(scaled.condensation, vec![0.5, 4.0]);
        assert_eq!(scaled.vaporization, vec![-0.5, -4.0]);
    }

    #[test]
    fn test_rate_pair_scale_constant() {
        let pair = RatePair::new(vec![1.0, 2.0], vec![3.0, 4.0]);
        let scaled = pair.scale(-2.0);
        assert_eq!(scaled.condensation, vec![-2.0, -4.0]);
        assert_eq!(scaled.vaporization, vec![-6.0, -8.0]);
    }

    #[test]
    fn test_rate_pair_validity() {
        let pair = RatePair::new(vec![1.0, f64::NAN], vec![0.0, 0.0]);
        assert!(!pair.is_valid());
    }
}
