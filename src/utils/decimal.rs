use bigdecimal::{BigDecimal, ToPrimitive};
use std::str::FromStr;

/// ativos.valor 列为 NUMERIC(15,2)
pub const VALOR_SCALE: i64 = 2;

/// 将请求中的 f64 金额转换为 NUMERIC 列使用的 BigDecimal
///
/// 经由最短十进制字符串转换，避免 0.1 之类的值带上二进制误差。
/// 非有限值返回 None。
pub fn to_bigdecimal(v: f64) -> Option<BigDecimal> {
    if !v.is_finite() {
        return None;
    }
    BigDecimal::from_str(&v.to_string()).ok()
}

/// 小数位不超过列精度，入库时不会被数据库四舍五入
pub fn fits_valor_scale(v: f64) -> bool {
    match to_bigdecimal(v) {
        Some(d) => d.with_scale(VALOR_SCALE) == d,
        None => false,
    }
}

/// 将数据库中的金额转换回 JSON 数字，无法表示为有限 f64 时返回 None
pub fn to_f64(v: &BigDecimal) -> Option<f64> {
    let converted = v.to_f64().filter(|f| f.is_finite());
    if converted.is_none() {
        tracing::warn!(valor = %v, "NUMERIC value does not fit in f64");
    }
    converted
}
