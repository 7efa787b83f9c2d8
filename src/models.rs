use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// -- 用户实体，对应 users 表的一行
// -- id 由数据库自增生成，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}
