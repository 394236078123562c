use log::warn;
use nix::sys::signal::{signal, SigHandler, Signal};

const INTERACTIVE_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGQUIT];

/// 忽略 Ctrl-C / Ctrl-\，避免前台子进程被中断时 shell 自身也退出
pub fn ignore_interactive_signals() {
    for sig in INTERACTIVE_SIGNALS {
        if let Err(e) = unsafe { signal(sig, SigHandler::SigIgn) } {
            warn!("无法忽略信号 {}: {}", sig, e);
        }
    }
}

/// 子进程中 exec 之前调用：被忽略的信号会跨 exec 继承，需要恢复默认处理
pub fn restore_default_signals() {
    for sig in INTERACTIVE_SIGNALS {
        let _ = unsafe { signal(sig, SigHandler::SigDfl) };
    }
}
