use crate::utils::config::Config;
use log::debug;
pub use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use rustyline::Config as RLConfig;

/// 每次调用提供一行输入（不含换行符），`Ok(None)` 表示输入结束
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError>;
}

pub struct ReadlineManager {
    editor: Editor<(), DefaultHistory>,
}

impl ReadlineManager {
    pub fn new(config: &Config) -> Result<Self, ReadlineError> {
        let rl_config = RLConfig::builder()
            .auto_add_history(false)
            .edit_mode(config.edit_mode())
            .build();

        let editor = Editor::with_config(rl_config)?;
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineManager {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            // Ctrl-C 丢弃当前输入，重新显示提示符
            Err(ReadlineError::Interrupted) => {
                debug!("接收到中断信号...");
                Ok(Some(String::new()))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// 按顺序返回预设的输入行，用完后视为输入结束
    pub struct ScriptedSource {
        pub lines: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedSource {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineSource for ScriptedSource {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front())
        }
    }
}
