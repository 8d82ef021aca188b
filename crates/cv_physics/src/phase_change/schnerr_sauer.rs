// crates/cv_physics/src/phase_change/schnerr_sauer.rs

//! 三相合并 Schnerr–Sauer 空化模型
//!
//! 在经典 Schnerr–Sauer 空化/凝结闭合的基础上扩展到三相：
//! 蒸汽相 (α₂) 与不可凝气相 (α₃) 合并为有效汽/气相，
//! 通过合并饱和压力 pm 反映不可凝气体的压缩效应。
//!
//! # 闭合公式
//!
//! 核化点体积分数与气泡半径：
//! ```text
//! Vnuc = n·π·dNuc³/6,  alphaNuc = Vnuc/(1+Vnuc)
//! Rb(α₁) = [ (3/(4πn)) · max((1+alphaNuc−α₁)/max(α₁,1e-3), ROOT_VSMALL) ]^(1/3)
//! ```
//!
//! 合并饱和压力（仅在远离纯液且蒸汽占优处启用）：
//! ```text
//! pg2   = max(p − pv, 0)
//! ratio = max(α₃/(α₂+SMALL), SMALL)
//! pm    = mergeC·(pv + pg2·ratio^1.4) + (1−mergeC)·pv
//! mergeC = [α₁<0.99]·[α₂>α₃]
//! ```
//!
//! 压力速率系数（Rayleigh–Plesset 型，p≈pm 奇点用 0.01·pm 正则化）：
//! ```text
//! pCoeff = ρ₁ρ₂/(ρ+α₃(ρ₁−ρ₃)) · sqrt(2/(3ρ₁)) · sqrt(1/(|p−pm|+0.01·pm))
//! ```
//!
//! # 默认系数（文献标准值）
//!
//! | 系数 | 值 | 含义 |
//! |------|-----|------|
//! | n    | 1.6e13 | 核化点密度 [1/m³] |
//! | dNuc | 2.0e-6 | 核化点直径 [m] |
//! | Cc   | 1.0 | 凝结系数 [-] |
//! | Cv   | 1.0 | 汽化系数 [-] |

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::mixture::ThreePhaseMixture;
use crate::phase_change::traits::{PhaseChangeContext, PhaseChangeModel, RatePair};
use cv_config::TransportConfig;
use cv_foundation::error::{CvError, CvResult};
use cv_foundation::float::{clamp_unit, neg, pos, pos0, ALPHA_FLOOR, ROOT_VSMALL, SMALL};

/// 模型名称（工厂选择键，系数子块为 `SchnerrSauerCoeffs`）
pub const MODEL_NAME: &str = "SchnerrSauer";

/// 理想气体绝热指数，不可凝气体压缩效应的固定指数
const GAMMA: f64 = 1.4;

/// 求值扫描配置
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// 是否启用并行计算
    pub parallel: bool,
    /// 并行阈值（单元数超过此值时使用并行）
    pub parallel_threshold: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 1000,
        }
    }
}

/// Schnerr–Sauer 模型系数
///
/// 五个标量常数中的四个；压力基准 p0 恒为零，单独保存在模型上。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SchnerrSauerCoeffs {
    /// 核化点密度 [1/m³]
    pub n: f64,
    /// 核化点直径 [m]
    pub d_nuc: f64,
    /// 凝结系数 [-]
    pub cc: f64,
    /// 汽化系数 [-]
    pub cv: f64,
}

impl Default for SchnerrSauerCoeffs {
    fn default() -> Self {
        Self {
            n: 1.6e13,
            d_nuc: 2.0e-6,
            cc: 1.0,
            cv: 1.0,
        }
    }
}

impl SchnerrSauerCoeffs {
    /// 从配置的 `SchnerrSauerCoeffs` 子块读取四个必需系数
    ///
    /// 任一键缺失报 [`CvError::MissingCoeff`]；非法值报 [`CvError::InvalidConfig`]。
    pub fn from_config(config: &TransportConfig) -> CvResult<Self> {
        let coeffs = Self {
            n: config.required(MODEL_NAME, "n")?,
            d_nuc: config.required(MODEL_NAME, "dNuc")?,
            cc: config.required(MODEL_NAME, "Cc")?,
            cv: config.required(MODEL_NAME, "Cv")?,
        };
        coeffs.validate()?;
        Ok(coeffs)
    }

    /// 校验系数合法性
    pub fn validate(&self) -> CvResult<()> {
        if self.n <= 0.0 {
            return Err(CvError::invalid_config(
                "n",
                self.n.to_string(),
                "核化点密度必须为正",
            ));
        }
        if self.d_nuc <= 0.0 {
            return Err(CvError::invalid_config(
                "dNuc",
                self.d_nuc.to_string(),
                "核化点直径必须为正",
            ));
        }
        if self.cc < 0.0 || self.cv < 0.0 {
            return Err(CvError::invalid_config(
                "Cc/Cv",
                format!("{}/{}", self.cc, self.cv),
                "凝结/汽化系数不能为负",
            ));
        }
        Ok(())
    }
}

/// 单元闭合状态
///
/// pm/Rb/densityfrac/pCoeff 每个单元每次求值只计算一次，
/// 由凝结与汽化两个分支共享。
#[derive(Debug, Clone, Copy)]
struct CellClosure {
    /// 合并饱和压力 [Pa]
    pm: f64,
    /// 气泡半径 [m]
    rb: f64,
    /// 密度比 (ρ+α₃(ρ₂−ρ₃))/(ρ+α₃(ρ₁−ρ₃))
    density_frac: f64,
    /// 压力速率系数
    p_coeff: f64,
}

/// 三相合并 Schnerr–Sauer 模型
#[derive(Debug, Clone)]
pub struct SchnerrSauer {
    /// 模型系数
    coeffs: SchnerrSauerCoeffs,
    /// 零值压力基准 [Pa]
    p0: f64,
    /// 扫描配置
    eval: EvalConfig,
}

impl SchnerrSauer {
    /// 使用指定系数创建模型
    pub fn new(coeffs: SchnerrSauerCoeffs) -> Self {
        Self {
            coeffs,
            p0: 0.0,
            eval: EvalConfig::default(),
        }
    }

    /// 从配置创建模型
    pub fn from_config(config: &TransportConfig) -> CvResult<Self> {
        Ok(Self::new(SchnerrSauerCoeffs::from_config(config)?))
    }

    /// 设置扫描配置
    pub fn with_eval_config(mut self, eval: EvalConfig) -> Self {
        self.eval = eval;
        self
    }

    /// 当前系数
    pub fn coeffs(&self) -> &SchnerrSauerCoeffs {
        &self.coeffs
    }

    /// 初始核化点体积分数 alphaNuc = Vnuc/(1+Vnuc)
    ///
    /// 对任意正的 n、dNuc 结果落在 (0,1)。
    #[inline]
    pub fn alpha_nuc(&self) -> f64 {
        let v_nuc = self.coeffs.n * PI * self.coeffs.d_nuc.powi(3) / 6.0;
        v_nuc / (1.0 + v_nuc)
    }

    /// 液相中核化气泡的半径
    ///
    /// 输入为已钳位到 [0,1] 的液相分数。分母的 1e-3 钳位防止
    /// α₁→0 时半径爆炸；被开方数的正下界防止浮点误差
    /// 使 α₁ 超过 1+alphaNuc 时出现零或负的立方根参数。
    #[inline]
    pub fn bubble_radius(&self, limited_alpha1: f64) -> f64 {
        let radicand = ((1.0 + self.alpha_nuc() - limited_alpha1)
            / limited_alpha1.max(ALPHA_FLOOR))
        .max(ROOT_VSMALL);
        ((3.0 / (4.0 * PI * self.coeffs.n)) * radicand).powf(1.0 / 3.0)
    }

    /// 单元闭合状态：pm、Rb、密度比与 pCoeff 一次算出
    #[inline]
    fn cell_closure(
        &self,
        mixture: &ThreePhaseMixture,
        alpha1: f64,
        alpha2: f64,
        alpha3: f64,
        p: f64,
        pv: f64,
    ) -> CellClosure {
        let a1 = clamp_unit(alpha1);
        let a2 = clamp_unit(alpha2);
        let a3 = clamp_unit(alpha3);

        let rho1 = mixture.rho1();
        let rho2 = mixture.rho2();
        let rho3 = mixture.rho3();

        // 蒸汽相与空气相的合并饱和压力
        let pg2 = (p - pv).max(0.0);
        let ratio = (a3 / (a2 + SMALL)).max(SMALL);
        let pm_merged = pv + pg2 * ratio.powf(GAMMA);

        // 合并门控：远离纯液单元，且蒸汽占优于空气
        let merge_c = pos(0.99 - a1).min(pos(a2 - a3));
        let pm = merge_c * pm_merged + (1.0 - merge_c) * pv;

        // 混合物密度，下限为蒸汽密度
        let rho = (a1 * rho1 + a2 * rho2 + a3 * rho3).max(rho2);
        let density_frac = (rho + a3 * (rho2 - rho3)) / (rho + a3 * (rho1 - rho3));

        let p_coeff = (rho1 * rho2 / (rho + a3 * (rho1 - rho3)))
            * (2.0 / (3.0 * rho1)).sqrt()
            * (1.0 / ((p - pm).abs() + 0.01 * pm)).sqrt();

        CellClosure {
            pm,
            rb: self.bubble_radius(a1),
            density_frac,
            p_coeff,
        }
    }

    /// 逐单元扫描，输出两个分支场
    ///
    /// 单元间无依赖，超过阈值时用 rayon 并行，每个输出单元恰好写一次。
    fn sweep<F>(&self, n_cells: usize, kernel: F) -> (Vec<f64>, Vec<f64>)
    where
        F: Fn(usize) -> (f64, f64) + Sync,
    {
        if self.eval.parallel && n_cells >= self.eval.parallel_threshold {
            (0..n_cells).into_par_iter().map(&kernel).unzip()
        } else {
            let mut condensation = Vec::with_capacity(n_cells);
            let mut vaporization = Vec::with_capacity(n_cells);
            for i in 0..n_cells {
                let (c, v) = kernel(i);
                condensation.push(c);
                vaporization.push(v);
            }
            (condensation, vaporization)
        }
    }

    /// 压力速率系数场（诊断用）
    pub fn p_coeff_field(
        &self,
        mixture: &ThreePhaseMixture,
        p: &[f64],
        ctx: &PhaseChangeContext,
    ) -> CvResult<Vec<f64>> {
        CvError::check_size("p", mixture.n_cells(), p.len())?;
        let pv = ctx.p_sat;
        let (field, _) = self.sweep(mixture.n_cells(), |i| {
            let closure = self.cell_closure(
                mixture,
                mixture.alpha1[i],
                mixture.alpha2[i],
                mixture.alpha3[i],
                p[i],
                pv,
            );
            (closure.p_coeff, 0.0)
        });
        Ok(field)
    }
}

impl PhaseChangeModel for SchnerrSauer {
    fn name(&self) -> &'static str {
        MODEL_NAME
    }

    fn mdot_alphal(
        &self,
        mixture: &ThreePhaseMixture,
        p: &[f64],
        ctx: &PhaseChangeContext,
    ) -> CvResult<RatePair> {
        CvError::check_size("p", mixture.n_cells(), p.len())?;

        let pv = ctx.p_sat;
        let n = self.coeffs.n;
        let cc = self.coeffs.cc;
        let cv = self.coeffs.cv;
        let p0 = self.p0;

        let (condensation, vaporization) = self.sweep(mixture.n_cells(), |i| {
            let closure = self.cell_closure(
                mixture,
                mixture.alpha1[i],
                mixture.alpha2[i],
                mixture.alpha3[i],
                p[i],
                pv,
            );
            let rb = closure.rb;
            let dp = p[i] - closure.pm;
            let shape = (4.0 / 3.0) * n * PI * closure.density_frac;

            // max/min 对零基准的钳位实现逐单元互斥门控
            let cond =
                -cc * (3.0 * closure.p_coeff * dp.max(p0)) / (rb + rb.powi(4) * shape);
            let vap = -cv * (4.0 * n * PI * rb * rb * closure.p_coeff * dp.min(p0))
                / (1.0 + rb.powi(3) * shape);
            (cond, vap)
        });

        Ok(RatePair::new(condensation, vaporization))
    }

    fn mdot_p(
        &self,
        mixture: &ThreePhaseMixture,
        p: &[f64],
        ctx: &PhaseChangeContext,
    ) -> CvResult<RatePair> {
        CvError::check_size("p", mixture.n_cells(), p.len())?;

        let pv = ctx.p_sat;
        let n = self.coeffs.n;
        let cc = self.coeffs.cc;
        let cv = self.coeffs.cv;

        let (condensation, vaporization) = self.sweep(mixture.n_cells(), |i| {
            let closure = self.cell_closure(
                mixture,
                mixture.alpha1[i],
                mixture.alpha2[i],
                mixture.alpha3[i],
                p[i],
                pv,
            );
            let rb = closure.rb;
            let dp = p[i] - closure.pm;
            let shape = (4.0 / 3.0) * n * PI * closure.density_frac;

            // 压力方程需要 (p − pm) 的系数而非乘积，门控改用 pos0/neg 阶跃
            let a1 = clamp_unit(mixture.alpha1[i]);
            let a13 = clamp_unit(a1 + clamp_unit(mixture.alpha3[i]));

            let cond = -cc * (1.0 - a13) * (3.0 / (rb + rb.powi(4) * shape))
                * pos0(dp)
                * closure.p_coeff;
            let vap = cv * a1 * (4.0 * n * PI * rb * rb / (1.0 + rb.powi(3) * shape))
                * neg(dp)
                * closure.p_coeff;
            (cond, vap)
        });

        Ok(RatePair::new(condensation, vaporization))
    }

    fn read(&mut self, config: &TransportConfig) -> CvResult<bool> {
        // 先整体解析，再一次性替换，避免部分更新窗口
        let coeffs = SchnerrSauerCoeffs::from_config(config)?;
        self.coeffs = coeffs;
        self.p0 = 0.0;
        Ok(true)
    }
}
