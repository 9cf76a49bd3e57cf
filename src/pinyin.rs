//! 拼音生成模块
//!
//! 将整数转换为带声调的拼音读法，空格、连写与隔音符号遵循 GB/T 16159-2012：
//!
//! - 6.1.5.2 十一到九十九之间的整数，连写（shíyī、sānshísān、jiǔshíjiǔ）
//! - 6.1.5.3 "百、千、万、亿"与前面的个位数连写；"万、亿"与前面十位以上的
//!   数分写（shí yì líng qīwàn èrqiān sānbǎi wǔshíliù）

use crate::error::{HanpinError, HanpinResult};
use crate::hanzi::{DigitHint, HanziNumberParser};
use crate::symbol;

/// 拼音方向支持的最大数值（13 位，对应 亿/万/个 三段分组）
pub const PINYIN_MAX: u64 = 9_999_999_999_999;

/// 拼音生成器
pub struct PinyinGenerator;

impl PinyinGenerator {
    /// 将整数转换为拼音
    ///
    /// # 参数
    /// - `n`: 待转换整数，绝对值不超过 [`PINYIN_MAX`]
    /// - `source_hanzi`: 原始汉字文本，用于区分 "二"/"两"；`None` 时一律读 èr
    ///
    /// # 返回
    /// - `Ok(String)`: 空格分隔的拼音读法
    /// - `Err`: 数值超出范围
    ///
    /// # 示例
    /// ```
    /// # use hanpin_core::pinyin::PinyinGenerator;
    /// let text = PinyinGenerator::generate(507, None).unwrap();
    /// assert_eq!(text, "wǔbǎi líng qī");
    /// ```
    pub fn generate(n: i64, source_hanzi: Option<&str>) -> HanpinResult<String> {
        // 原文解析失败不影响生成，只是退回默认的 èr 读法
        let digits = source_hanzi
            .and_then(|text| HanziNumberParser::parse_with_hints(text).ok())
            .map(|parsed| parsed.digits)
            .unwrap_or_default();
        Self::generate_with_hints(n, &digits)
    }

    /// 使用解析阶段产出的数位记录生成拼音
    pub fn generate_with_hints(n: i64, digits: &[DigitHint]) -> HanpinResult<String> {
        let magnitude = n.unsigned_abs();
        if magnitude > PINYIN_MAX {
            return Err(HanpinError::MagnitudeOverflow {
                value: n as i128,
                limit: PINYIN_MAX,
            });
        }
        if n == 0 {
            return Ok(symbol::LING.to_string());
        }

        // 按 亿/万/个 三段分解；13 位数的亿段最多五位
        let billions = magnitude / 100_000_000;
        let ten_thousands = magnitude % 100_000_000 / 10_000;
        let thousands = magnitude % 10_000;

        let mut syllables: Vec<String> = Vec::new();

        if billions > 0 {
            let group = Self::convert_group(billions, 8, digits);
            syllables.extend(Self::attach_group_unit(group, billions, symbol::YI));
        }
        if ten_thousands > 0 {
            // 亿段之后千万位为零时补一个 líng（如 "十亿零七万"）
            if billions > 0 && ten_thousands < 1000 {
                syllables.push(symbol::LING.to_string());
            }
            let group = Self::convert_group(ten_thousands, 4, digits);
            syllables.extend(Self::attach_group_unit(group, ten_thousands, symbol::WAN));
            if thousands > 0 && thousands < 1000 {
                syllables.push(symbol::LING.to_string());
            }
        } else if billions > 0 && thousands > 0 {
            syllables.push(symbol::LING.to_string());
        }
        if thousands > 0 {
            syllables.extend(Self::convert_group(thousands, 0, digits));
        }

        let output = syllables.join(" ");

        // 负数前缀 fù，后接元音开头音节时以隔音符号相连
        if n < 0 {
            if symbol::starts_with_vowel(&output) {
                return Ok(format!("{}'{}", symbol::FU, output));
            }
            return Ok(format!("{} {}", symbol::FU, output));
        }
        Ok(output)
    }

    /// 段单位（万/亿）的连写或分写
    ///
    /// 段值为个位数（1-9）时单位并入末音节，十位以上时单位独立成词
    fn attach_group_unit(mut group: Vec<String>, group_value: u64, unit: &str) -> Vec<String> {
        if group_value >= 10 {
            group.push(unit.to_string());
        } else if let Some(last) = group.last_mut() {
            last.push_str(unit);
        }
        group
    }

    /// 转换一个 1-99999 的段为音节序列
    ///
    /// `base_exponent` 为该段在整个数中的十进制指数（亿段 8、万段 4、个段 0）
    fn convert_group(group: u64, base_exponent: u32, digits: &[DigitHint]) -> Vec<String> {
        const SCALES: [(u64, u32); 5] = [(10_000, 4), (1_000, 3), (100, 2), (10, 1), (1, 0)];

        let mut syllables: Vec<String> = Vec::new();
        let mut remaining = group;
        let mut has_nonzero = false;
        let mut in_zero_run = false;

        for (scale, exponent) in SCALES {
            let digit = remaining / scale;
            if digit > 0 {
                if scale == 10 {
                    // 十位与个位连写；"一十" 省略 yī
                    let mut part = String::from(symbol::SHI);
                    if digit > 1 {
                        part = format!(
                            "{}{}",
                            Self::digit_syllable(digit, base_exponent + 1, digits),
                            symbol::SHI
                        );
                    }
                    let ones = remaining % 10;
                    if ones > 0 {
                        let syllable = Self::digit_syllable(ones, base_exponent, digits);
                        if symbol::starts_with_vowel(syllable) {
                            part.push('\'');
                        }
                        part.push_str(syllable);
                    }
                    syllables.push(part);
                    has_nonzero = true;
                    in_zero_run = false;
                    remaining = 0;
                    continue;
                }
                if scale == 1 {
                    syllables.push(Self::digit_syllable(digit, base_exponent, digits).to_string());
                } else {
                    let unit = match scale {
                        10_000 => symbol::WAN,
                        1_000 => symbol::QIAN,
                        _ => symbol::BAI,
                    };
                    syllables.push(format!(
                        "{}{}",
                        Self::digit_syllable(digit, base_exponent + exponent, digits),
                        unit
                    ));
                }
                has_nonzero = true;
                in_zero_run = false;
            } else if has_nonzero && !in_zero_run && remaining % scale > 0 {
                // 段内夹零：连续多个零只读一个 líng
                syllables.push(symbol::LING.to_string());
                in_zero_run = true;
            }
            remaining -= digit * scale;
        }

        syllables
    }

    /// 数位音节；原文在该数位写作 "两" 时读 liǎng
    fn digit_syllable(digit: u64, exponent: u32, digits: &[DigitHint]) -> &'static str {
        if digit == 2
            && digits
                .iter()
                .any(|hint| hint.glyph == '两' && hint.exponent == exponent)
        {
            return symbol::LIANG;
        }
        symbol::digit_pinyin(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(PinyinGenerator::generate(0, None).unwrap(), "líng");
    }

    #[test]
    fn test_single_group() {
        assert_eq!(PinyinGenerator::generate(8, None).unwrap(), "bā");
        assert_eq!(PinyinGenerator::generate(58, None).unwrap(), "wǔshíbā");
        assert_eq!(PinyinGenerator::generate(658, None).unwrap(), "liùbǎi wǔshíbā");
        assert_eq!(
            PinyinGenerator::generate(5658, None).unwrap(),
            "wǔqiān liùbǎi wǔshíbā"
        );
    }

    #[test]
    fn test_apostrophe_before_vowel() {
        assert_eq!(PinyinGenerator::generate(12, None).unwrap(), "shí'èr");
        assert_eq!(PinyinGenerator::generate(22, None).unwrap(), "èrshí'èr");
        assert_eq!(
            PinyinGenerator::generate(1_200_000_000, None).unwrap(),
            "shí'èr yì"
        );
    }

    #[test]
    fn test_internal_zero_collapses() {
        assert_eq!(PinyinGenerator::generate(507, None).unwrap(), "wǔbǎi líng qī");
        assert_eq!(
            PinyinGenerator::generate(5007, None).unwrap(),
            "wǔqiān líng qī"
        );
    }

    #[test]
    fn test_group_unit_placement() {
        // 个位数段：单位连写
        assert_eq!(PinyinGenerator::generate(10_000, None).unwrap(), "yīwàn");
        assert_eq!(PinyinGenerator::generate(80_000, None).unwrap(), "bāwàn");
        assert_eq!(
            PinyinGenerator::generate(800_000_000, None).unwrap(),
            "bāyì"
        );
        // 十位以上段：单位分写
        assert_eq!(PinyinGenerator::generate(100_000, None).unwrap(), "shí wàn");
        assert_eq!(
            PinyinGenerator::generate(1_000_000, None).unwrap(),
            "yībǎi wàn"
        );
        assert_eq!(
            PinyinGenerator::generate(1_000_000_000, None).unwrap(),
            "shí yì"
        );
    }

    #[test]
    fn test_zero_between_segments() {
        assert_eq!(
            PinyinGenerator::generate(10_006, None).unwrap(),
            "yīwàn líng liù"
        );
        assert_eq!(
            PinyinGenerator::generate(40_507, None).unwrap(),
            "sìwàn líng wǔbǎi líng qī"
        );
        assert_eq!(
            PinyinGenerator::generate(1_000_072_356, None).unwrap(),
            "shí yì líng qīwàn èrqiān sānbǎi wǔshíliù"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(PinyinGenerator::generate(-8, None).unwrap(), "fù bā");
        assert_eq!(PinyinGenerator::generate(-2, None).unwrap(), "fù'èr");
        assert_eq!(PinyinGenerator::generate(-12, None).unwrap(), "fù shí'èr");
    }

    #[test]
    fn test_magnitude_ceiling() {
        assert!(PinyinGenerator::generate(9_999_999_999_999, None).is_ok());
        assert!(matches!(
            PinyinGenerator::generate(10_000_000_000_000, None),
            Err(HanpinError::MagnitudeOverflow { .. })
        ));
        assert!(matches!(
            PinyinGenerator::generate(-10_000_000_000_000, None),
            Err(HanpinError::MagnitudeOverflow { .. })
        ));
    }

    #[test]
    fn test_liang_from_source() {
        assert_eq!(
            PinyinGenerator::generate(200, Some("两百")).unwrap(),
            "liǎngbǎi"
        );
        assert_eq!(PinyinGenerator::generate(200, Some("二百")).unwrap(), "èrbǎi");
        assert_eq!(PinyinGenerator::generate(200, None).unwrap(), "èrbǎi");
        assert_eq!(
            PinyinGenerator::generate(20_000, Some("两万")).unwrap(),
            "liǎngwàn"
        );
        // 原文无法解析时退回默认读法
        assert_eq!(
            PinyinGenerator::generate(200, Some("not hanzi")).unwrap(),
            "èrbǎi"
        );
    }

    #[test]
    fn test_liang_per_position() {
        // 同一数中 "两" 与 "二" 按各自数位区分
        let parsed = HanziNumberParser::parse_with_hints("两千两百二十二").unwrap();
        assert_eq!(
            PinyinGenerator::generate_with_hints(parsed.value, &parsed.digits).unwrap(),
            "liǎngqiān liǎngbǎi èrshí'èr"
        );
    }

    #[test]
    fn test_thirteen_digit_example() {
        assert_eq!(
            PinyinGenerator::generate(4_728_361_509_842, None).unwrap(),
            "sìwàn qīqiān èrbǎi bāshísān yì liùqiān yībǎi wǔshí wàn jiǔqiān bābǎi sìshí'èr"
        );
    }
}
