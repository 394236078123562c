use log::{debug, error};
use nix::errno::Errno;
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{close, dup2, execvp, fork, write, ForkResult, Pid};
use std::ffi::{CStr, CString};
use std::io;
use std::os::fd::RawFd;

use crate::shell::parser::Command;
use crate::shell::signals;

use super::builtin;

/// 一条命令执行后的结果，仅用于日志和测试，不会影响 shell 自身的退出码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Builtin,
    Exited(i32),
    Signaled(i32),
    SpawnFailed,
    WaitFailed,
}

/// fork 之前准备好的子进程参数，子进程中不再做任何转换
struct ChildPlan {
    argv: Vec<CString>,
    stdin: Option<CString>,
    stdout: Option<CString>,
}

impl ChildPlan {
    fn from_command(command: &Command) -> Result<Self, Errno> {
        let to_cstring = |s: &str| CString::new(s).map_err(|_| Errno::EINVAL);
        let argv: Vec<CString> = command
            .arguments
            .iter()
            .map(|arg| to_cstring(arg.as_str()))
            .collect::<Result<_, _>>()?;
        if argv.is_empty() {
            return Err(Errno::EINVAL);
        }
        Ok(Self {
            argv,
            stdin: command.input_redirect.as_deref().map(to_cstring).transpose()?,
            stdout: command.output_redirect.as_deref().map(to_cstring).transpose()?,
        })
    }
}

#[derive(Default)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&mut self, command: &Command) -> Outcome {
        if command.is_empty() {
            return Outcome::Skipped;
        }

        // 处理内建命令
        if let Some(outcome) = builtin::handle_builtin(command) {
            debug!("执行内建命令: {:?}", command);
            return outcome;
        }

        // 执行外部命令
        debug!("执行外部命令: {:?}", command);
        let plan = match ChildPlan::from_command(command) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("{}", describe(e));
                return Outcome::SpawnFailed;
            }
        };

        match unsafe { fork() } {
            Ok(ForkResult::Child) => run_child(&plan),
            Ok(ForkResult::Parent { child }) => {
                debug!("子进程已创建: {}", child);
                wait_child(child)
            }
            Err(e) => {
                error!("fork 失败: {}", e);
                eprintln!("Fork failed: {}", describe(e));
                Outcome::SpawnFailed
            }
        }
    }
}

pub(crate) fn describe(err: Errno) -> String {
    format!("Error {} ({})", err as i32, err.desc())
}

fn wait_child(child: Pid) -> Outcome {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, code)) => {
                debug!("子进程 {} 退出, 状态码: {}", child, code);
                return Outcome::Exited(code);
            }
            Ok(WaitStatus::Signaled(_, sig, _)) => {
                debug!("子进程 {} 被信号终止: {}", child, sig);
                return Outcome::Signaled(sig as i32);
            }
            Ok(status) => debug!("忽略子进程状态: {:?}", status),
            Err(Errno::EINTR) => continue,
            Err(e) => {
                error!("等待子进程 {} 失败: {}", child, e);
                eprintln!("{}", describe(e));
                return Outcome::WaitFailed;
            }
        }
    }
}

// 以下函数只在 fork 出的子进程中运行：不写日志，失败时直接 _exit
fn run_child(plan: &ChildPlan) -> ! {
    signals::restore_default_signals();

    if let Some(path) = &plan.stdin {
        if let Err(e) = redirect(path, OFlag::O_RDONLY, Mode::empty(), libc::STDIN_FILENO) {
            child_fail(e);
        }
    }

    if let Some(path) = &plan.stdout {
        let flags = OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC;
        let mode = Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH;
        if let Err(e) = redirect(path, flags, mode, libc::STDOUT_FILENO) {
            child_fail(e);
        }
    }

    match execvp(&plan.argv[0], &plan.argv) {
        Ok(never) => match never {},
        Err(e) => child_fail(e),
    }
}

fn redirect(path: &CStr, flags: OFlag, mode: Mode, target: RawFd) -> nix::Result<()> {
    let fd = open(path, flags, mode)?;
    dup2(fd, target)?;
    close(fd)
}

fn child_fail(err: Errno) -> ! {
    let message = format!("{}\n", describe(err));
    // 直接 write(2)，不经过 std 的 stderr 锁；format! 仍会在子进程中分配内存
    let _ = write(io::stderr(), message.as_bytes());
    unsafe { libc::_exit(1) }
}
