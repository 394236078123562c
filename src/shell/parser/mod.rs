pub mod ast;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;

pub use ast::Command;
pub use parser::Parser;

pub fn parse(line: &str) -> Command {
    Parser::new(line).parse()
}
