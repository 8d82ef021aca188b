// crates/cv_physics/src/phase_change/volumetric.rs

//! 体积速率适配与生命周期宿主
//!
//! `PhaseChangeMixture` 以组合方式持有三相混合物与相变模型，
//! 把质量传递速率按相密度重标为体积速率，供输运方程与压力方程消费：
//!
//! ```text
//! vDotAlphal = (−1/ρ₁ + α₁(1/ρ₁ − 1/ρ₂)) · mDotAlphal   (逐单元系数)
//! vDotAlphav = (1/ρ₂) · mDotAlphal                        (接口对称性保留)
//! vDotP      = (1/ρ₂ − 1/ρ₁) · mDotP                      (常数系数)
//! ```
//!
//! 生命周期：`correct()` 每时间步由外部求解器调用一次，
//! 速率场由下游方程组装按需拉取；`read()` 重载配置。

use crate::mixture::ThreePhaseMixture;
use crate::phase_change::registry::PhaseChangeRegistry;
use crate::phase_change::traits::{PhaseChangeContext, PhaseChangeModel, RatePair};
use cv_config::TransportConfig;
use cv_foundation::error::CvResult;

/// 带相变的三相混合物
///
/// 对深层基类链的组合式替代：显式持有混合物与模型两个组件，
/// `correct()`/`read()` 显式委托。
pub struct PhaseChangeMixture {
    /// 三相混合物组件
    mixture: ThreePhaseMixture,
    /// 相变模型组件
    model: Box<dyn PhaseChangeModel>,
    /// 饱和压力 [Pa]（由本层从配置读取）
    p_sat: f64,
}

impl PhaseChangeMixture {
    /// 按配置中的模型名称从注册表构造，并执行一次初始修正
    pub fn new(
        n_cells: usize,
        config: &TransportConfig,
        registry: &PhaseChangeRegistry,
    ) -> CvResult<Self> {
        config.validate()?;
        let model = registry.create(&config.phase_change_model, config)?;
        let mut this = Self {
            mixture: ThreePhaseMixture::new(n_cells, config),
            model,
            p_sat: config.p_sat,
        };
        this.correct();
        Ok(this)
    }

    /// 混合物组件
    pub fn mixture(&self) -> &ThreePhaseMixture {
        &self.mixture
    }

    /// 混合物组件（可变，供外部求解器写入相分数）
    pub fn mixture_mut(&mut self) -> &mut ThreePhaseMixture {
        &mut self.mixture
    }

    /// 当前模型名称
    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// 饱和压力
    #[inline]
    pub fn p_sat(&self) -> f64 {
        self.p_sat
    }

    fn ctx(&self) -> PhaseChangeContext {
        PhaseChangeContext::new(self.p_sat)
    }

    /// 液相体积分数输运方程用的体积速率对
    pub fn vdot_alphal(&self, p: &[f64]) -> CvResult<RatePair> {
        let mdot = self.model.mdot_alphal(&self.mixture, p, &self.ctx())?;

        let rho1 = self.mixture.rho1();
        let rho2 = self.mixture.rho2();
        // 系数通过未钳位的 α₁ 逐单元变化
        let coeff: Vec<f64> = self
            .mixture
            .alpha1
            .iter()
            .map(|a1| -1.0 / rho1 + a1 * (1.0 / rho1 - 1.0 / rho2))
            .collect();

        Ok(mdot.scale_by(&coeff))
    }

    /// 汽相体积分数方程用的体积速率对
    ///
    /// 主求解路径未使用，为接口对称性保留。
    pub fn vdot_alphav(&self, p: &[f64]) -> CvResult<RatePair> {
        let mdot = self.model.mdot_alphal(&self.mixture, p, &self.ctx())?;
        Ok(mdot.scale(1.0 / self.mixture.rho2()))
    }

    /// 压力/通量修正方程用的体积速率对
    pub fn vdot_p(&self, p: &[f64]) -> CvResult<RatePair> {
        let mdot = self.model.mdot_p(&self.mixture, p, &self.ctx())?;
        let coeff = 1.0 / self.mixture.rho2() - 1.0 / self.mixture.rho1();
        Ok(mdot.scale(coeff))
    }

    /// 每时间步修正：先混合物（导出场），再模型
    pub fn correct(&mut self) {
        self.mixture.correct();
        self.model.correct(&self.mixture);
    }

    /// 从配置重载：混合物物性、模型系数与饱和压力
    ///
    /// 返回重载是否成功；任一环节失败时立即传播，已更新的组件
    /// 各自保证了原子替换。
    pub fn read(&mut self, config: &TransportConfig) -> CvResult<bool> {
        config.validate()?;
        let ok = self.mixture.read(config)? && self.model.read(config)?;
        self.p_sat = config.p_sat;
        Ok(ok)
    }
}
