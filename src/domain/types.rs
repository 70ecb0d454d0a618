// ==========================================
// 包配置器 - 领域类型定义
// ==========================================
// 红线: 折扣与增值税只能取声明值域内的值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 增值税率 (MwSt)
// ==========================================
// 值域: {0, 7, 19}，0 表示不计税
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VatRate {
    Zero,    // 0%
    Reduced, // 7%
    #[default]
    Standard, // 19%
}

impl VatRate {
    /// 所有可选税率（界面下拉顺序）
    pub const ALL: [VatRate; 3] = [VatRate::Zero, VatRate::Reduced, VatRate::Standard];

    pub fn percent(self) -> u8 {
        match self {
            VatRate::Zero => 0,
            VatRate::Reduced => 7,
            VatRate::Standard => 19,
        }
    }

    /// 是否计税（税率非 0）
    pub fn is_applied(self) -> bool {
        self != VatRate::Zero
    }
}

impl TryFrom<u8> for VatRate {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VatRate::Zero),
            7 => Ok(VatRate::Reduced),
            19 => Ok(VatRate::Standard),
            other => Err(format!("Mehrwertsteuersatz {}% nicht erlaubt (nur 0, 7 oder 19)", other)),
        }
    }
}

impl From<VatRate> for u8 {
    fn from(rate: VatRate) -> Self {
        rate.percent()
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.percent())
    }
}

// ==========================================
// 折扣百分比 (Rabatt)
// ==========================================
// 值域: [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountPct(f64);

impl DiscountPct {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() || value < Self::MIN || value > Self::MAX {
            return Err(format!(
                "Rabatt {} liegt außerhalb von [{}, {}]",
                value,
                Self::MIN,
                Self::MAX
            ));
        }
        // -0.0 归一为 0.0
        Ok(Self(value + 0.0))
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_applied(self) -> bool {
        self.0 > 0.0
    }
}

impl TryFrom<f64> for DiscountPct {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        DiscountPct::new(value)
    }
}

impl From<DiscountPct> for f64 {
    fn from(pct: DiscountPct) -> Self {
        pct.0
    }
}
