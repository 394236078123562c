use std::str::Chars;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Word(String),
    Redirect(RedirectOp),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RedirectOp {
    Input,  // <
    Output, // >
}

/// 将一行输入切分为单词和重定向符号
///
/// 从左到右单次扫描：`\` 使下一个字符按字面量处理，`"` 切换引号状态（本身不输出），
/// 引号外的空格/制表符结束当前单词，引号外的 `<` / `>` 总是独立的符号。
/// 未闭合的引号或末尾的 `\` 不算错误，已收集的内容作为最后一个单词。
pub struct Lexer<'a> {
    input: Chars<'a>,
    word: String,
    in_quotes: bool,
    escape_next: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.chars(),
            word: String::new(),
            in_quotes: false,
            escape_next: false,
        }
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(c) = self.input.next() {
            if self.escape_next {
                self.word.push(c);
                self.escape_next = false;
                continue;
            }

            match c {
                '\\' => self.escape_next = true,
                '"' => self.in_quotes = !self.in_quotes,
                ' ' | '\t' if !self.in_quotes => self.flush_word(&mut tokens),
                '<' if !self.in_quotes => {
                    self.flush_word(&mut tokens);
                    tokens.push(Token::Redirect(RedirectOp::Input));
                }
                '>' if !self.in_quotes => {
                    self.flush_word(&mut tokens);
                    tokens.push(Token::Redirect(RedirectOp::Output));
                }
                c => self.word.push(c),
            }
        }

        self.flush_word(&mut tokens);
        tokens
    }

    fn flush_word(&mut self, tokens: &mut Vec<Token>) {
        if !self.word.is_empty() {
            tokens.push(Token::Word(std::mem::take(&mut self.word)));
        }
    }
}
