//! hanpin-core
//!
//! 汉字数字、整数与拼音读法之间的双向转换核心
//!
//! - 汉字 → 整数：从右向左扫描的乘加状态机，精确解析到 2^53 - 1
//! - 整数 → 拼音：按 GB/T 16159-2012 处理连写、分写与隔音符号，
//!   可选地根据原文区分 "二" 与 "两"
//! - 整数 → 英文：base-1000 分块渲染（辅助功能）
//!
//! 所有转换都是无副作用的纯函数，符号表为编译期常量，可在任意多个
//! 线程上并发调用而无需同步。

#![warn(rust_2018_idioms)]

pub mod english;
pub mod error;
pub mod hanzi;
pub mod pinyin;
pub mod symbol;

// 导出核心类型
pub use english::EnglishGenerator;
pub use error::{HanpinError, HanpinResult};
pub use hanzi::{DigitHint, HanziNumberParser, ParsedHanzi};
pub use pinyin::PinyinGenerator;

/// 汉字数字 → 整数
pub fn hanzi_to_number(text: &str) -> HanpinResult<i64> {
    HanziNumberParser::parse(text)
}

/// 检查文本是否全部由汉字数字符号组成（不验证结构）
pub fn is_hanzi_number(text: &str) -> bool {
    HanziNumberParser::is_hanzi_number(text)
}

/// 整数 → 拼音；`source_hanzi` 用于区分 "二"/"两"
pub fn number_to_pinyin(n: i64, source_hanzi: Option<&str>) -> HanpinResult<String> {
    PinyinGenerator::generate(n, source_hanzi)
}

/// 汉字数字 → 拼音
///
/// 组合解析与生成：只解析一次，数位来源记录直接供生成器使用
pub fn hanzi_to_pinyin(text: &str) -> HanpinResult<String> {
    let parsed = HanziNumberParser::parse_with_hints(text)?;
    tracing::debug!("汉字数字解析: {} -> {}", text, parsed.value);
    PinyinGenerator::generate_with_hints(parsed.value, &parsed.digits)
}

/// 整数 → 英文
pub fn number_to_english(n: i64) -> HanpinResult<String> {
    EnglishGenerator::generate(n)
}

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): HANPIN_LOG 控制级别
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("HANPIN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
