// crates/core/src/language/builtin.rs
//! 組み込みの言語記述子

use std::sync::LazyLock;

use super::{LanguageDescriptor, LanguageTable};

static BUILTIN: LazyLock<LanguageTable> = LazyLock::new(|| LanguageTable {
    descriptors: builtin_descriptors(),
});

/// プロセス全体で共有される組み込みテーブル
pub fn builtin_table() -> &'static LanguageTable {
    &BUILTIN
}

/// python / sql / javascript の記述子
pub fn builtin_descriptors() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor::new("python", "python", "py", "#")
            .with_block("'''", "'''")
            .with_block(r#"""""#, r#"""""#)
            .with_block("r'''", "'''")
            .with_block(r#"r""""#, r#"""""#),
        LanguageDescriptor::new("sql", "sql", "sql", "--").with_block("/*", "*/"),
        LanguageDescriptor::new("javascript", "js", "js", "//").with_block("/*", "*/"),
    ]
}
