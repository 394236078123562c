use std::env;
use std::path::Path;

use log::warn;

const FALLBACK_PROMPT: &str = "$ ";

/// 以当前工作目录作为提示符，无法获取时退回到 `$ `
pub fn prompt_text() -> String {
    match env::current_dir() {
        Ok(dir) => prompt_for(&dir),
        Err(e) => {
            warn!("techsh: PROMPT: env current_dir error: {}", e);
            FALLBACK_PROMPT.to_string()
        }
    }
}

// 非 UTF-8 的路径按有损方式显示，不退回到 `$ `
fn prompt_for(dir: &Path) -> String {
    format!("{}$ ", dir.to_string_lossy())
}
