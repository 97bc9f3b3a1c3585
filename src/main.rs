use std::env;
use std::path::PathBuf;

use anyhow::Context;
use storefront::app::{self, AppState};
use storefront::infrastructure::{load_config, Config, Logger};
use tokio::net::TcpListener;
use tracing::{info, warn};

enum Command {
    Serve,
    Export(PathBuf),
}

fn parse_command() -> Option<Command> {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("serve") => Some(Command::Serve),
        Some("export") => Some(Command::Export(
            args.get(2)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist/index.html")),
        )),
        Some(_) => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(command) = parse_command() else {
        print_usage();
        return Ok(());
    };

    let (config, source) = load_config().context("加载配置失败")?;
    Logger::init(&config.logging.level);

    match &source {
        Some(path) => info!(path = %path.display(), "从配置文件加载"),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let catalog = app::load_catalog(&config).context("加载商品目录失败")?;
    if catalog.is_empty() {
        warn!("商品目录为空，店面将不显示任何商品");
    } else {
        info!(products = catalog.len(), "商品目录已加载");
    }

    let state = AppState::new(&config, catalog).context("初始化模板失败")?;

    match command {
        Command::Serve => serve(state, &config).await,
        Command::Export(path) => {
            state
                .export_storefront(&path)
                .with_context(|| format!("导出到 {} 失败", path.display()))?;
            Ok(())
        }
    }
}

async fn serve(state: AppState, config: &Config) -> anyhow::Result<()> {
    let addr = config.http.socket_addr();
    let router = app::router(state, config.http.timeout_seconds);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 店面运行在 http://{}", addr);
    info!("   GET  /                 - 店面页面");
    info!("   GET  /grid             - 商品网格片段");
    info!("   GET  /api/products     - 商品列表 (?category=)");
    info!("   GET  /api/products/:id - 单个商品");
    info!("   GET  /api/categories   - 分类列表");
    info!("   GET  /health           - 健康检查");

    axum::serve(listener, router).await.context("服务器运行失败")?;
    Ok(())
}

fn print_usage() {
    println!("用法: storefront [命令]");
    println!();
    println!("可用的命令:");
    println!("  serve          - 启动 HTTP 店面（默认）");
    println!("  export [路径]  - 导出静态页面，默认 dist/index.html");
    println!();
    println!("环境变量:");
    println!("  STOREFRONT_CONFIG  - 配置文件路径");
    println!("  STOREFRONT_PORT    - 覆盖 HTTP 端口");
    println!("  RUST_LOG           - 覆盖日志级别");
}
