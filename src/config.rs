use std::env;

// -- 应用配置结构体
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
}

impl Config {
    // -- 从环境变量加载配置
    pub fn from_env() -> Self {
        // -- 未设置时默认使用当前目录下的 SQLite 文件，mode=rwc 表示不存在则创建
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:users.db?mode=rwc".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("SERVER_PORT must be a valid number");

        Self {
            database_url,
            server_port,
        }
    }
}
