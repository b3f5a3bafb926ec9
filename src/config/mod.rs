//! 配置管理
//!
//! 配置加载顺序：`config.toml` → `config.<APP_ENV>.toml` → `VURDERING_*` 环境变量。

mod r#impl;
mod structs;

pub use structs::*;
