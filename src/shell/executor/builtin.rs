use log::{debug, warn};
use nix::unistd::chdir;

use crate::shell::parser::Command;

use super::executor::{describe, Outcome};

// 处理内建命令，非内建命令返回 None
pub fn handle_builtin(command: &Command) -> Option<Outcome> {
    match command.program.as_deref()? {
        "cd" => Some(builtin_cd(command)),
        _ => None,
    }
}

const CD_MISSING_ARGUMENT: &str = "cd: missing argument";

fn builtin_cd(command: &Command) -> Outcome {
    if let Err(message) = change_dir(command) {
        eprintln!("{}", message);
    }
    Outcome::Builtin
}

// 成功时切换工作目录，失败时返回要打印的诊断信息
fn change_dir(command: &Command) -> Result<(), String> {
    let Some(path) = command.arguments.get(1) else {
        warn!("cd 缺少参数");
        return Err(CD_MISSING_ARGUMENT.to_string());
    };

    chdir(path.as_str()).map_err(|e| {
        warn!("切换工作目录失败: {} {}", path, e);
        describe(e)
    })?;
    debug!("切换工作目录: {}", path);
    Ok(())
}
