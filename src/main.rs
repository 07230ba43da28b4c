use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 配置需要先于日志系统初始化
    bannerd::config::init_config();
    let config = bannerd::config::get_config();

    // guard 必须存活到进程结束，保证非阻塞日志落盘
    let _log_guard = bannerd::system::logging::init_logging(&config);

    bannerd::runtime::server::run_server().await
}
