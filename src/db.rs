use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

use async_trait::async_trait;

use crate::models::User;

// -- 创建数据库连接池
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    // -- 配置连接池选项
    // -- 注意：sqlite::memory: 下每个连接是独立的数据库，
    // -- 连接数必须为 1 才能让所有请求看到同一份数据
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    // -- 运行简单查询来测试连接
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

// -- 确保 users 表存在；幂等，启动时调用
pub async fn init_db(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT    NOT NULL,
            age  INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// -- 数据库客户端，持有连接池
#[derive(Debug, Clone)]
pub struct DBClient {
    pool: SqlitePool,
}

impl DBClient {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// -- 用户表的全部数据访问操作
#[async_trait]
pub trait UserExt {
    // -- 按 id 升序返回全部用户
    async fn get_users(&self) -> Result<Vec<User>, sqlx::Error>;

    // -- 按 id 查询单个用户，不存在时返回 None
    async fn get_user(&self, user_id: i64) -> Result<Option<User>, sqlx::Error>;

    // -- 插入新用户并返回生成的完整记录
    async fn save_user(&self, name: &str, age: i64) -> Result<User, sqlx::Error>;

    // -- 整体覆盖指定用户的全部字段，不存在时返回 None
    async fn update_user(&self, user_id: i64, name: &str, age: i64)
        -> Result<Option<User>, sqlx::Error>;

    // -- 删除指定用户，返回实际删除的行数（0 或 1）
    async fn delete_user(&self, user_id: i64) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, age FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, age FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save_user(&self, name: &str, age: i64) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, age) VALUES (?, ?) RETURNING id, name, age",
        )
        .bind(name)
        .bind(age)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_user(
        &self,
        user_id: i64,
        name: &str,
        age: i64,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, age = ? WHERE id = ? RETURNING id, name, age",
        )
        .bind(name)
        .bind(age)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_user(&self, user_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
