/// 一行输入解析后的命令
///
/// `arguments[0]` 总是等于 `program`，重定向符号及其目标不会出现在 `arguments` 中
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    pub program: Option<String>,
    pub arguments: Vec<String>,
    pub input_redirect: Option<String>,
    pub output_redirect: Option<String>,
}

impl Command {
    pub fn is_empty(&self) -> bool {
        self.program.is_none()
    }
}
