use dotenv::dotenv;
use rustyline::EditMode;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub name: String,
    pub theme: String,
    pub editor_mode: String,
    pub logger_level: String,
    pub logger_dir: PathBuf,
}

impl Config {
    fn get_config_dir() -> PathBuf {
        if let Ok(home) = env::var("HOME") {
            PathBuf::from(home).join(".config/techsh")
        } else {
            PathBuf::from("/tmp/techsh")
        }
    }

    fn default() -> Self {
        let config_dir = Self::get_config_dir();
        Config {
            name: String::from(env!("CARGO_CRATE_NAME")),
            theme: String::from("default"),
            editor_mode: String::from("emacs"),
            logger_level: String::from("warn"),
            logger_dir: config_dir.join("logs"),
        }
    }

    pub fn new() -> Self {
        // 优先加载环境变量
        if cfg!(debug_assertions) {
            dotenv::from_filename(".env.development").ok();
        } else {
            dotenv().ok();
        }

        // 默认配置
        let mut config = Config::default();

        // 从环境变量加载配置
        if let Ok(theme) = env::var("TECHSH_THEME") {
            config.theme = theme;
        }

        if let Ok(editor) = env::var("TECHSH_EDITOR") {
            config.editor_mode = editor;
        }

        if let Ok(level) = env::var("TECHSH_LOG_LEVEL") {
            config.logger_level = level;
        }

        if let Ok(dir) = env::var("TECHSH_LOG_DIR") {
            config.logger_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn edit_mode(&self) -> EditMode {
        match self.editor_mode.to_lowercase().as_str() {
            "vi" => EditMode::Vi,
            _ => EditMode::Emacs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.name, "techsh");
        assert_eq!(config.theme, "default");
        assert_eq!(config.logger_level, "warn");
        assert!(config.logger_dir.ends_with("logs"));
        assert_eq!(config.edit_mode(), EditMode::Emacs);
    }

    #[test]
    fn test_edit_mode_is_case_insensitive() {
        let mut config = Config::default();
        config.editor_mode = "VI".to_string();
        assert_eq!(config.edit_mode(), EditMode::Vi);
        config.editor_mode = "anything".to_string();
        assert_eq!(config.edit_mode(), EditMode::Emacs);
    }
}
