// crates/cv_foundation/src/float.rs

//! 数值守卫常量与阶跃/钳位辅助函数
//!
//! 相变闭合公式中所有的除法与开方都依赖本模块的守卫常量，
//! 保证退化单元（相分数为零、压力等于饱和压力等）产生有限值而非错误。
//!
//! # 约定
//!
//! 阶跃函数返回 0/1 值，便于通过乘法实现逐单元门控，
//! 通过 `min` 实现逻辑与：
//!
//! ```text
//! pos(x)  = 1 当 x > 0，否则 0
//! pos0(x) = 1 当 x ≥ 0，否则 0
//! neg(x)  = 1 当 x < 0，否则 0
//! ```

// ============================================================================
// 数值常量
// ============================================================================

/// 小正数守卫，防止相分数比值的除零
pub const SMALL: f64 = 1e-15;

/// 极小值的平方根量级，气泡半径立方根被开方数的正下界
pub const ROOT_VSMALL: f64 = 1e-150;

/// 气泡半径分母中液相分数的钳位下界
///
/// 液相分数趋于零时防止半径爆炸。
pub const ALPHA_FLOOR: f64 = 1e-3;

// ============================================================================
// 阶跃与钳位函数
// ============================================================================

/// 严格正阶跃: x > 0 时为 1，否则为 0
#[inline]
pub fn pos(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// 非负阶跃: x ≥ 0 时为 1，否则为 0
#[inline]
pub fn pos0(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// 严格负阶跃: x < 0 时为 1，否则为 0
#[inline]
pub fn neg(x: f64) -> f64 {
    if x < 0.0 {
        1.0
    } else {
        0.0
    }
}

/// 钳位到单位区间 [0, 1]
///
/// 相分数在每个使用点独立钳位，不做全局重归一化。
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_functions_at_zero() {
        // 边界约定: pos 在 0 处为 0，pos0 在 0 处为 1，neg 在 0 处为 0
        assert_eq!(pos(0.0), 0.0);
        assert_eq!(pos0(0.0), 1.0);
        assert_eq!(neg(0.0), 0.0);
    }

    #[test]
    fn test_step_functions_signs() {
        assert_eq!(pos(1e-300), 1.0);
        assert_eq!(pos(-1e-300), 0.0);
        assert_eq!(pos0(-1e-300), 0.0);
        assert_eq!(neg(-1e-300), 1.0);
        assert_eq!(neg(1e-300), 0.0);
    }

    #[test]
    fn test_logical_and_via_min() {
        // 两个 0/1 场通过 min 实现逻辑与
        assert_eq!(pos(1.0).min(pos(2.0)), 1.0);
        assert_eq!(pos(1.0).min(pos(-2.0)), 0.0);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.1), 0.0);
        assert_eq!(clamp_unit(0.5), 0.5);
        assert_eq!(clamp_unit(1.3), 1.0);
    }

    #[test]
    fn test_guards_are_positive() {
        assert!(SMALL > 0.0);
        assert!(ROOT_VSMALL > 0.0);
        assert!(ALPHA_FLOOR > 0.0);
    }
}
