use log::debug;

use super::ast::Command;
use super::lexer::{Lexer, RedirectOp, Token};

pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Parser {
            tokens: Lexer::new(input).tokenize().into_iter(),
        }
    }

    /// 将 token 序列归约为 `Command`，不会失败：
    /// 同方向的重定向后者覆盖前者，末尾没有目标的重定向符号直接丢弃
    pub fn parse(mut self) -> Command {
        let mut command = Command::default();

        while let Some(token) = self.tokens.next() {
            match token {
                Token::Redirect(op) => {
                    let Some(target) = self.next_word() else {
                        debug!("丢弃末尾的重定向符号: {:?}", op);
                        continue;
                    };
                    match op {
                        RedirectOp::Input => command.input_redirect = Some(target),
                        RedirectOp::Output => command.output_redirect = Some(target),
                    }
                }
                Token::Word(word) => {
                    if command.program.is_none() {
                        command.program = Some(word.clone());
                    }
                    command.arguments.push(word);
                }
            }
        }

        if command.program.is_none() {
            return Command::default();
        }
        command
    }

    // 重定向符号后的 token 一律作为目标，即使它本身也是符号（`a > > b` 输出到名为 `>` 的文件）
    fn next_word(&mut self) -> Option<String> {
        self.tokens.next().map(|token| match token {
            Token::Word(word) => word,
            Token::Redirect(RedirectOp::Input) => "<".to_string(),
            Token::Redirect(RedirectOp::Output) => ">".to_string(),
        })
    }
}
