// crates/cv_physics/src/mixture.rs

//! 不可压三相混合物属性
//!
//! 本模块提供相变闭合所需的混合物状态管理：
//! - ThreePhaseMixture: 三个相分数场 (α₁ 液、α₂ 汽、α₃ 气) 与各相物性
//! - 混合物密度/粘度导出场，由 `correct()` 重算
//!
//! # 布局设计
//!
//! 采用 SoA (Structure of Arrays) 布局以优化缓存性能：
//! ```text
//! alpha1: [α₁_0, α₁_1, α₁_2, ...]
//! alpha2: [α₂_0, α₂_1, α₂_2, ...]
//! alpha3: [α₃_0, α₃_1, α₃_2, ...]
//! ```
//!
//! # 不变量
//!
//! α₁+α₂+α₃ = 1 由外部求解器维护，本模块假定但不强制；
//! 每个使用点对自己的拷贝独立钳位到 [0,1]，不做全局重归一化。
//! 相分数场由外部求解器写入，本模块只在 `set_fractions` 中复制，
//! 求值路径上从不修改。

use cv_config::TransportConfig;
use cv_foundation::error::{CvError, CvResult};
use cv_foundation::float::clamp_unit;

/// 不可压三相混合物
///
/// 相 1 为液相、相 2 为蒸汽相、相 3 为不可凝气相（空气）。
/// 各相密度与粘度视为空间均匀的常数。
#[derive(Debug, Clone)]
pub struct ThreePhaseMixture {
    /// 单元数量
    n_cells: usize,

    /// 液相体积分数
    pub alpha1: Vec<f64>,
    /// 蒸汽相体积分数
    pub alpha2: Vec<f64>,
    /// 空气相体积分数
    pub alpha3: Vec<f64>,

    /// 液相密度 [kg/m³]
    rho1: f64,
    /// 蒸汽相密度 [kg/m³]
    rho2: f64,
    /// 空气相密度 [kg/m³]
    rho3: f64,

    /// 液相运动粘度 [m²/s]
    nu1: f64,
    /// 蒸汽相运动粘度 [m²/s]
    nu2: f64,
    /// 空气相运动粘度 [m²/s]
    nu3: f64,

    /// 混合物密度导出场 [kg/m³]（`correct()` 重算）
    pub rho_mix: Vec<f64>,
    /// 混合物运动粘度导出场 [m²/s]（`correct()` 重算）
    pub nu_mix: Vec<f64>,
}

impl ThreePhaseMixture {
    /// 从配置创建混合物，初始为纯液相
    pub fn new(n_cells: usize, config: &TransportConfig) -> Self {
        let phases = &config.phases;
        Self {
            n_cells,
            alpha1: vec![1.0; n_cells],
            alpha2: vec![0.0; n_cells],
            alpha3: vec![0.0; n_cells],
            rho1: phases.rho1,
            rho2: phases.rho2,
            rho3: phases.rho3,
            nu1: phases.nu1,
            nu2: phases.nu2,
            nu3: phases.nu3,
            rho_mix: vec![phases.rho1; n_cells],
            nu_mix: vec![phases.nu1; n_cells],
        }
    }

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// 液相密度
    #[inline]
    pub fn rho1(&self) -> f64 {
        self.rho1
    }

    /// 蒸汽相密度
    #[inline]
    pub fn rho2(&self) -> f64 {
        self.rho2
    }

    /// 空气相密度
    #[inline]
    pub fn rho3(&self) -> f64 {
        self.rho3
    }

    /// 液相运动粘度
    #[inline]
    pub fn nu1(&self) -> f64 {
        self.nu1
    }

    /// 蒸汽相运动粘度
    #[inline]
    pub fn nu2(&self) -> f64 {
        self.nu2
    }

    /// 空气相运动粘度
    #[inline]
    pub fn nu3(&self) -> f64 {
        self.nu3
    }

    /// 从外部求解器写入相分数场（复制，尺寸检查）
    pub fn set_fractions(
        &mut self,
        alpha1: &[f64],
        alpha2: &[f64],
        alpha3: &[f64],
    ) -> CvResult<()> {
        CvError::check_size("alpha1", self.n_cells, alpha1.len())?;
        CvError::check_size("alpha2", self.n_cells, alpha2.len())?;
        CvError::check_size("alpha3", self.n_cells, alpha3.len())?;
        self.alpha1.copy_from_slice(alpha1);
        self.alpha2.copy_from_slice(alpha2);
        self.alpha3.copy_from_slice(alpha3);
        Ok(())
    }

    /// 重算混合物导出场
    ///
    /// 密度按钳位后的相分数加权；粘度按质量加权后除以混合物密度，
    /// 密度下限取蒸汽相密度，防止退化单元出现近零混合密度。
    pub fn correct(&mut self) {
        for i in 0..self.n_cells {
            let a1 = clamp_unit(self.alpha1[i]);
            let a2 = clamp_unit(self.alpha2[i]);
            let a3 = clamp_unit(self.alpha3[i]);

            let rho = (a1 * self.rho1 + a2 * self.rho2 + a3 * self.rho3).max(self.rho2);
            let mu = a1 * self.rho1 * self.nu1 + a2 * self.rho2 * self.nu2
                + a3 * self.rho3 * self.nu3;

            self.rho_mix[i] = rho;
            self.nu_mix[i] = mu / rho;
        }
    }

    /// 从配置重载各相物性，返回重载是否成功
    pub fn read(&mut self, config: &TransportConfig) -> CvResult<bool> {
        config.phases.validate()?;
        let phases = &config.phases;
        self.rho1 = phases.rho1;
        self.rho2 = phases.rho2;
        self.rho3 = phases.rho3;
        self.nu1 = phases.nu1;
        self.nu2 = phases.nu2;
        self.nu3 = phases.nu3;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TransportConfig {
        TransportConfig::default()
    }

    #[test]
    fn test_new_is_pure_liquid() {
        let mixture = ThreePhaseMixture::new(4, &test_config());
        assert_eq!(mixture.n_cells(), 4);
        assert!(mixture.alpha1.iter().all(|&a| a == 1.0));
        assert!(mixture.alpha2.iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_set_fractions_size_mismatch() {
        let mut mixture = ThreePhaseMixture::new(4, &test_config());
        let err = mixture.set_fractions(&[0.5; 3], &[0.3; 4], &[0.2; 4]);
        assert!(err.is_err(), "尺寸不匹配应报错");
    }

    #[test]
    fn test_correct_recomputes_mixture_density() {
        let mut mixture = ThreePhaseMixture::new(2, &test_config());
        mixture
            .set_fractions(&[0.5, 1.0], &[0.3, 0.0], &[0.2, 0.0])
            .unwrap();
        mixture.correct();

        let expected = 0.5 * mixture.rho1() + 0.3 * mixture.rho2() + 0.2 * mixture.rho3();
        assert!((mixture.rho_mix[0] - expected).abs() < 1e-10);
        assert!((mixture.rho_mix[1] - mixture.rho1()).abs() < 1e-10);
    }

    #[test]
    fn test_correct_floors_density_at_vapor() {
        let mut mixture = ThreePhaseMixture::new(1, &test_config());
        // 退化单元：三相分数全为零
        mixture.set_fractions(&[0.0], &[0.0], &[0.0]).unwrap();
        mixture.correct();
        assert!(
            mixture.rho_mix[0] >= mixture.rho2(),
            "混合密度下限应为蒸汽密度"
        );
        assert!(mixture.nu_mix[0].is_finite());
    }

    #[test]
    fn test_correct_clamps_out_of_range_fractions() {
        let mut mixture = ThreePhaseMixture::new(1, &test_config());
        // 浮点误差可能使相分数略超出 [0,1]
        mixture.set_fractions(&[1.05], &[-0.03], &[0.0]).unwrap();
        mixture.correct();
        assert!((mixture.rho_mix[0] - mixture.rho1()).abs() < 1e-10);
    }

    #[test]
    fn test_read_reloads_phase_properties() {
        let mut mixture = ThreePhaseMixture::new(1, &test_config());
        let mut config = test_config();
        config.phases.rho1 = 998.2;
        assert!(mixture.read(&config).unwrap());
        assert_eq!(mixture.rho1(), 998.2);
    }

    #[test]
    fn test_read_rejects_invalid_properties() {
        let mut mixture = ThreePhaseMixture::new(1, &test_config());
        let mut config = test_config();
        config.phases.rho3 = 0.0;
        assert!(mixture.read(&config).is_err());
    }
}
