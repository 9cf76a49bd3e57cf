//! 汉字数字解析模块
//!
//! 将汉字数字文本解析为精确整数
//!
//! 从右向左逐字符扫描：大单位（萬、億、兆）开启一个新的加法节，
//! 节内单位（十、百、千）仅在当前节内相乘。支持的字符集见 [`crate::symbol`]

use crate::error::{HanpinError, HanpinResult};
use crate::symbol::{self, SymbolClass};

/// IEEE 754 双精度浮点能精确表示的最大整数（2^53 - 1）
///
/// 超过该值的结果无法无损地与浮点表示互转，按溢出处理
pub const SAFE_INTEGER_MAX: u64 = 9_007_199_254_740_991;

/// 单个数位的来源记录
///
/// 解析时为每个数位字符生成一条记录，按原文从左到右排列，
/// 供拼音生成器区分 "二" 与 "两"，无需回头重扫原文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitHint {
    /// 数位值（0-9）
    pub digit: u8,
    /// 原文字符
    pub glyph: char,
    /// 数位权重的十进制指数（如 "两千" 中的 2 → 3）
    pub exponent: u32,
}

/// 解析结果：数值与数位来源记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHanzi {
    pub value: i64,
    pub digits: Vec<DigitHint>,
}

/// 汉字数字解析器
pub struct HanziNumberParser;

impl HanziNumberParser {
    /// 将汉字数字字符串解析为整数
    ///
    /// # 参数
    /// - `text`: 汉字数字文本（例如："一千二百三十四"）
    ///
    /// # 返回
    /// - `Ok(i64)`: 解析出的数值
    /// - `Err`: 空输入、未知字符、非法结构或数值溢出
    ///
    /// # 示例
    /// ```
    /// # use hanpin_core::hanzi::HanziNumberParser;
    /// let value = HanziNumberParser::parse("一千二百三十四").unwrap();
    /// assert_eq!(value, 1234);
    /// ```
    pub fn parse(text: &str) -> HanpinResult<i64> {
        Ok(Self::parse_with_hints(text)?.value)
    }

    /// 解析并返回每个数位的来源记录
    pub fn parse_with_hints(text: &str) -> HanpinResult<ParsedHanzi> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(HanpinError::EmptyInput);
        }

        let mut chars: Vec<char> = trimmed.chars().collect();

        // 以单位开头时补隐含的 "一"（"十二" → "一十二"）
        if symbol::is_unit_symbol(chars[0]) {
            chars.insert(0, '一');
        }

        // 中间乘积可能超出 i64，全程使用 i128 保证精确
        let mut result: i128 = 0;
        let mut current: i128 = 0;
        let mut unit: i128 = 1;
        let mut section_unit: i128 = 1;
        let mut last_was_large_unit = false;
        let mut digits: Vec<DigitHint> = Vec::new();

        for &ch in chars.iter().rev() {
            let value = symbol::symbol_value(ch)
                .ok_or(HanpinError::InvalidCharacter(ch))? as i128;

            match symbol::classify(value as u64) {
                SymbolClass::LargeUnit => {
                    // 两个大单位之间没有数字是非法结构（如 "萬億"）
                    if last_was_large_unit {
                        return Err(HanpinError::MalformedStructure(format!(
                            "consecutive large units at '{}'",
                            ch
                        )));
                    }
                    if current != 0 {
                        result += current * section_unit;
                        current = 0;
                    }
                    section_unit = value;
                    unit = 1;
                    last_was_large_unit = true;
                }
                SymbolClass::SmallUnit => {
                    if current != 0 {
                        result += current * section_unit;
                        current = 0;
                    }
                    unit = value;
                    last_was_large_unit = false;
                }
                SymbolClass::Digit => {
                    current += value * unit;
                    last_was_large_unit = false;
                    // 廿/卅 加权的数位不是 10 的幂，没有对应的十进制数位
                    if let Some(exponent) = decimal_exponent(unit * section_unit) {
                        digits.push(DigitHint {
                            digit: value as u8,
                            glyph: ch,
                            exponent,
                        });
                    }
                }
            }
        }

        // 最左端剩余的 current 归入结果
        if current != 0 {
            result += current * section_unit;
        }

        // 全零结果只在输入恰为单个零字时合法
        if result == 0 && !matches!(trimmed, "零" | "〇") {
            return Err(HanpinError::MalformedStructure(
                "number reduces to zero without being the zero glyph".to_string(),
            ));
        }

        if result > SAFE_INTEGER_MAX as i128 {
            tracing::debug!("汉字数字超出安全整数范围: {} -> {}", trimmed, result);
            return Err(HanpinError::MagnitudeOverflow {
                value: result,
                limit: SAFE_INTEGER_MAX,
            });
        }

        // 扫描顺序为从右向左，恢复原文顺序
        digits.reverse();

        Ok(ParsedHanzi {
            value: result as i64,
            digits,
        })
    }

    /// 检查文本是否全部由汉字数字符号组成
    ///
    /// 只做字符集检查，不验证结构是否良构（"萬億" 也返回 true）
    pub fn is_hanzi_number(text: &str) -> bool {
        let trimmed = text.trim();
        !trimmed.is_empty() && trimmed.chars().all(|ch| symbol::symbol_value(ch).is_some())
    }
}

/// 权重的十进制指数；非 10 的幂返回 None
fn decimal_exponent(weight: i128) -> Option<u32> {
    let mut rest = weight;
    let mut exponent = 0;
    while rest % 10 == 0 {
        rest /= 10;
        exponent += 1;
    }
    (rest == 1).then_some(exponent)
}
