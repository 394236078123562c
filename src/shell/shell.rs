use log::{debug, error};

use crate::shell::executor::Executor;
use crate::shell::parser::parse;
use crate::shell::readline::LineSource;
use crate::shell::signals;
use crate::utils::prompt::prompt_text;
use crate::utils::theme::Theme;

/// 循环结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Exit,
    Eof,
}

pub struct Shell<S: LineSource> {
    theme: Theme,
    source: S,
    executor: Executor,
}

impl<S: LineSource> Shell<S> {
    pub fn new(theme: Theme, source: S) -> Self {
        Self {
            theme,
            source,
            executor: Executor::new(),
        }
    }

    pub fn run(&mut self) -> LoopExit {
        debug!("初始化 techsh...");

        // 前台子进程运行期间 Ctrl-C 只作用于子进程
        signals::ignore_interactive_signals();

        let reason = self.run_loop();
        debug!("退出 techsh: {:?}", reason);
        reason
    }

    fn run_loop(&mut self) -> LoopExit {
        loop {
            let prompt = (self.theme.prompt_style)(prompt_text());

            let line = match self.source.read_line(&prompt) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    println!();
                    return LoopExit::Eof;
                }
                Err(err) => {
                    error!("读取输入失败: {}", err);
                    eprintln!("{}", (self.theme.error_style)(format!("techsh: {}", err)));
                    continue;
                }
            };

            let command = parse(&line);
            let Some(program) = command.program.as_deref() else {
                continue;
            };
            // 只检查命令名，后面的参数和重定向都被忽略
            if program == "exit" {
                return LoopExit::Exit;
            }

            let outcome = self.executor.execute(&command);
            debug!("命令执行结束: {:?}", outcome);
        }
    }

    #[cfg(test)]
    fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::readline::scripted::ScriptedSource;
    use crate::shell::readline::ReadlineError;
    use std::fs;
    use std::io;

    fn shell(lines: &[&str]) -> Shell<ScriptedSource> {
        Shell::new(Theme::plain(), ScriptedSource::new(lines))
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_exit_stops_before_spawning() {
        let scratch = tempfile::tempdir().unwrap();
        let skipped = scratch.path().join("skipped.txt");
        let after = scratch.path().join("after.txt");
        let exit_line = format!("exit now > {}", skipped.display());
        let next_line = format!("echo late > {}", after.display());

        let mut shell = shell(&[exit_line.as_str(), next_line.as_str()]);
        assert_eq!(shell.run_loop(), LoopExit::Exit);

        assert!(!skipped.exists());
        assert!(!after.exists());
        assert_eq!(shell.source().lines.len(), 1);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let mut shell = shell(&["", "   ", "> nowhere"]);
        assert_eq!(shell.run_loop(), LoopExit::Eof);
        assert_eq!(shell.source().prompts.len(), 4);
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_commands_run_one_at_a_time() {
        let scratch = tempfile::tempdir().unwrap();
        let first = scratch.path().join("first.txt");
        let second = scratch.path().join("second.txt");
        let lines = [
            format!("sh -c \"sleep 0.2; echo one\" > {}", first.display()),
            format!("cat < {} > {}", first.display(), second.display()),
            "exit".to_string(),
        ];
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

        let mut shell = shell(&lines);
        assert_eq!(shell.run_loop(), LoopExit::Exit);

        assert_eq!(fs::read_to_string(&second).unwrap(), "one\n");
    }

    #[test]
    fn test_failures_do_not_stop_loop() {
        let mut shell = shell(&[
            "cd",
            "techsh-no-such-program-xyz",
            "cat < /techsh/no/such/file",
            "exit",
        ]);
        assert_eq!(shell.run_loop(), LoopExit::Exit);
        assert_eq!(shell.source().prompts.len(), 4);
    }

    /// 第一次读取失败，之后按预设行继续
    struct FailingOnceSource {
        failed: bool,
        inner: ScriptedSource,
    }

    impl LineSource for FailingOnceSource {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
            if !self.failed {
                self.failed = true;
                return Err(ReadlineError::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "invalid utf-8",
                )));
            }
            self.inner.read_line(prompt)
        }
    }

    #[test]
    fn test_read_error_does_not_stop_loop() {
        let source = FailingOnceSource {
            failed: false,
            inner: ScriptedSource::new(&["exit"]),
        };
        let mut shell = Shell::new(Theme::plain(), source);

        assert_eq!(shell.run_loop(), LoopExit::Exit);
        assert!(shell.source().failed);
        assert!(shell.source().inner.lines.is_empty());
    }

    #[test]
    fn test_prompt_ends_with_dollar() {
        let mut shell = shell(&[]);
        let _ = shell.run_loop();
        assert!(shell.source().prompts[0].ends_with("$ "));
    }
}
