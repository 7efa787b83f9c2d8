use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;

use users_api::{
    config::Config,
    db::{self, DBClient},
    routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() {
    // -- 加载环境变量
    dotenv().ok();

    // -- 初始化日志
    tracing_subscriber::fmt::init();

    // -- 加载配置
    let config = Config::from_env();

    // -- 创建数据库连接池
    let pool = match db::create_pool(&config.database_url).await {
        Ok(pool) => {
            println!("✅Connection to the database is successful!");
            pool
        }
        Err(err) => {
            println!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    // -- 确保表结构就绪
    if let Err(err) = db::init_db(&pool).await {
        println!("🔥 Failed to initialize the database schema: {:?}", err);
        std::process::exit(1);
    }

    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    let db_client = DBClient::new(pool);
    let app_state = AppState {
        env: config.clone(),
        db_client,
    };

    let app = create_router(Arc::new(app_state)).layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.server_port))
        .await
        .unwrap();

    tracing::info!("Server running on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}
