use std::env;

use dotenvy::dotenv;

use users_api::{
    config::Config,
    db::{self, DBClient, UserExt},
};

// -- 示例用户数据，姓名和年龄都取自常见测试数据
const SAMPLE_USERS: &[(&str, i64)] = &[
    ("Alice Johnson", 28),
    ("Bob Smith", 35),
    ("Charlie Brown", 22),
    ("Diana Prince", 30),
    ("Edward Wilson", 45),
    ("Fiona Davis", 26),
    ("George Miller", 33),
    ("Hannah Taylor", 29),
    ("Ian Anderson", 41),
    ("Julia Roberts", 37),
];

// -- 向数据库填充示例用户，便于本地调试和演示
// --
// -- 用法：
// --   create_sample_users                 创建默认数量（5 个）
// --   create_sample_users --count 10      指定创建数量
// --   create_sample_users --clear         先清空 users 表再创建
#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env();

    // -- 解析命令行参数
    let mut count: usize = 5;
    let mut clear = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => {
                count = args
                    .next()
                    .and_then(|value| value.parse().ok())
                    .expect("--count requires a number");
            }
            "--clear" => clear = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    let pool = match db::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = db::init_db(&pool).await {
        eprintln!("🔥 Failed to initialize the database schema: {:?}", err);
        std::process::exit(1);
    }

    // -- 按需清空已有数据
    if clear {
        let deleted = sqlx::query("DELETE FROM users")
            .execute(&pool)
            .await
            .expect("failed to clear users table")
            .rows_affected();
        println!("Deleted {} existing users", deleted);
    }

    let db_client = DBClient::new(pool);

    let existing = db_client
        .get_users()
        .await
        .expect("failed to list existing users");
    let existing_names: Vec<&str> = existing.iter().map(|user| user.name.as_str()).collect();

    let mut created = 0;
    for &(name, age) in SAMPLE_USERS.iter().take(count) {
        // -- 同名用户已存在时跳过，保证命令可以重复执行
        if existing_names.contains(&name) {
            println!("User \"{}\" already exists, skipping", name);
            continue;
        }

        let user = db_client
            .save_user(name, age)
            .await
            .expect("failed to create sample user");
        created += 1;
        println!("Created user: {} (age {})", user.name, user.age);
    }

    // -- 超出内置示例数据时补充生成占位用户
    if count > SAMPLE_USERS.len() {
        for i in SAMPLE_USERS.len()..count {
            let name = format!("Sample User {}", i + 1);
            let age = 20 + (i as i64 % 30);

            if existing_names.iter().any(|existing| *existing == name) {
                println!("User \"{}\" already exists, skipping", name);
                continue;
            }

            let user = db_client
                .save_user(&name, age)
                .await
                .expect("failed to create sample user");
            created += 1;
            println!("Created user: {} (age {})", user.name, user.age);
        }
    }

    let total = db_client
        .get_users()
        .await
        .expect("failed to count users")
        .len();

    if created > 0 {
        println!("Successfully created {} sample users!", created);
        println!("Total users in database: {}", total);
    } else {
        println!("No new users were created");
    }
}
