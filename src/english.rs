//! 英文数字生成模块
//!
//! 将整数渲染为英文读法（base-1000 分块）
//!
//! 支持 zero ~ 999 trillion，负数加 minus 前缀

use crate::error::{HanpinError, HanpinResult};

/// 英文方向支持的最大数值（999 trillion）
pub const ENGLISH_MAX: u64 = 999_999_999_999_999;

const UNITS: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

/// 英文数字生成器
pub struct EnglishGenerator;

impl EnglishGenerator {
    /// 将整数转换为英文读法
    ///
    /// # 返回
    /// - `Ok(String)`: 英文读法（全零块省略，两位数用连字符）
    /// - `Err`: 数值超出 [`ENGLISH_MAX`]
    ///
    /// # 示例
    /// ```
    /// # use hanpin_core::english::EnglishGenerator;
    /// assert_eq!(EnglishGenerator::generate(21).unwrap(), "twenty-one");
    /// ```
    pub fn generate(n: i64) -> HanpinResult<String> {
        if n == 0 {
            return Ok("zero".to_string());
        }

        let mut remaining = n.unsigned_abs();
        if remaining > ENGLISH_MAX {
            return Err(HanpinError::MagnitudeOverflow {
                value: n as i128,
                limit: ENGLISH_MAX,
            });
        }

        let mut chunks: Vec<String> = Vec::new();
        let mut scale_index = 0;
        while remaining > 0 {
            let chunk = (remaining % 1_000) as usize;
            if chunk > 0 {
                let words = Self::chunk_words(chunk);
                chunks.push(if scale_index > 0 {
                    format!("{} {}", words, SCALES[scale_index])
                } else {
                    words
                });
            }
            remaining /= 1_000;
            scale_index += 1;
        }
        chunks.reverse();

        let output = chunks.join(" ");
        if n < 0 {
            return Ok(format!("minus {}", output));
        }
        Ok(output)
    }

    /// 渲染一个 1-999 的块
    fn chunk_words(chunk: usize) -> String {
        if chunk >= 100 {
            let rest = chunk % 100;
            if rest > 0 {
                format!("{} hundred {}", UNITS[chunk / 100], Self::chunk_words(rest))
            } else {
                format!("{} hundred", UNITS[chunk / 100])
            }
        } else if chunk >= 20 {
            let unit = chunk % 10;
            if unit > 0 {
                format!("{}-{}", TENS[chunk / 10], UNITS[unit])
            } else {
                TENS[chunk / 10].to_string()
            }
        } else if chunk >= 10 {
            TEENS[chunk - 10].to_string()
        } else {
            UNITS[chunk].to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(EnglishGenerator::generate(0).unwrap(), "zero");
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(EnglishGenerator::generate(1).unwrap(), "one");
        assert_eq!(EnglishGenerator::generate(9).unwrap(), "nine");
    }

    #[test]
    fn test_teens() {
        assert_eq!(EnglishGenerator::generate(10).unwrap(), "ten");
        assert_eq!(EnglishGenerator::generate(13).unwrap(), "thirteen");
        assert_eq!(EnglishGenerator::generate(19).unwrap(), "nineteen");
    }

    #[test]
    fn test_tens_with_hyphen() {
        assert_eq!(EnglishGenerator::generate(20).unwrap(), "twenty");
        assert_eq!(EnglishGenerator::generate(21).unwrap(), "twenty-one");
        assert_eq!(EnglishGenerator::generate(99).unwrap(), "ninety-nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(EnglishGenerator::generate(100).unwrap(), "one hundred");
        assert_eq!(
            EnglishGenerator::generate(123).unwrap(),
            "one hundred twenty-three"
        );
        assert_eq!(
            EnglishGenerator::generate(999).unwrap(),
            "nine hundred ninety-nine"
        );
    }

    #[test]
    fn test_scales() {
        assert_eq!(EnglishGenerator::generate(1_000).unwrap(), "one thousand");
        assert_eq!(
            EnglishGenerator::generate(1_234_567).unwrap(),
            "one million two hundred thirty-four thousand five hundred sixty-seven"
        );
        assert_eq!(
            EnglishGenerator::generate(1_000_000_000_000).unwrap(),
            "one trillion"
        );
    }

    #[test]
    fn test_zero_chunks_omitted() {
        assert_eq!(
            EnglishGenerator::generate(1_000_001).unwrap(),
            "one million one"
        );
        assert_eq!(
            EnglishGenerator::generate(1_000_000_001).unwrap(),
            "one billion one"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(EnglishGenerator::generate(-8).unwrap(), "minus eight");
        assert_eq!(
            EnglishGenerator::generate(-123_456).unwrap(),
            "minus one hundred twenty-three thousand four hundred fifty-six"
        );
    }

    #[test]
    fn test_magnitude_ceiling() {
        assert!(EnglishGenerator::generate(999_999_999_999_999).is_ok());
        assert!(matches!(
            EnglishGenerator::generate(1_000_000_000_000_000),
            Err(HanpinError::MagnitudeOverflow { .. })
        ));
    }
}
