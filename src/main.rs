//! 채팅 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 서비스 레지스트리를 조립합니다.
//! MongoDB와 캐시(Redis 또는 메모리)를 연결한 뒤 채팅 사용자 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::{dotenv};
use env_logger::Env;
use log::{error, info, warn};
use chat_user_service::caching::{memory::MemoryCache, redis::RedisClient, CacheStore};
use chat_user_service::config::{CacheBackend, CacheConfig, Environment, IdentityConfig, ServerConfig};
use chat_user_service::core::registry::ServiceRegistry;
use chat_user_service::db::Database;
use chat_user_service::routes::configure_all_routes;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = load_env_file(&profile);
    init_logging();
    log_env_file(&profile, &env_file);

    let environment = Environment::current();
    info!("🚀 채팅 사용자 서비스 시작중... (환경: {:?})", environment);

    let (database, cache) = initialize_data_stores().await?;

    let registry = ServiceRegistry::initialize(database, cache).await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(registry)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: web::Data<ServiceRegistry>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/raven/users", bind_address);

    let identity_header = IdentityConfig::header_name();
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🔑 신원 헤더: {}", identity_header);
    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors(&identity_header);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(registry.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// `RUST_LOG`도 이 파일에서 읽을 수 있으므로 로깅 초기화보다 먼저 호출되며,
/// 결과는 [`log_env_file`]로 로깅 초기화 이후에 출력합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드 (없어도 무시)
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file(profile: &str) -> Result<&'static str, (&'static str, dotenv::Error)> {
    match profile {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod").map_err(|e| (".env.prod", e)),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev").map_err(|e| (".env.dev", e)),
        _ => {
            dotenv().ok();
            Ok(".env")
        }
    }
}

fn log_env_file(profile: &str, result: &Result<&'static str, (&'static str, dotenv::Error)>) {
    info!("Current profile: {}", profile);

    match result {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err((file, e)) => error!("{} 파일 로드 실패: {}", file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨입니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=chat_user_service::caching=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB와 캐시 백엔드를 초기화합니다
///
/// `CACHE_BACKEND=memory`이면 Redis 없이 프로세스 메모리 캐시를 사용합니다.
/// 연결 실패는 `io::Error`로 변환되어 시작을 중단시킵니다.
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<dyn CacheStore>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    info!("✅ MongoDB 연결 성공");

    let cache: Arc<dyn CacheStore> = match CacheConfig::backend() {
        CacheBackend::Redis => {
            let redis_url = CacheConfig::redis_url();
            let client = RedisClient::new(&redis_url)
                .await
                .map_err(|e| io::Error::other(format!("Redis 연결 실패: {}", e)))?;
            Arc::new(client)
        }
        CacheBackend::Memory => {
            if Environment::current().is_production() {
                warn!("⚠️ 운영 환경에서 메모리 캐시를 사용합니다. 사용자 목록 캐시 삭제가 다른 프로세스에 반영되지 않습니다");
            }
            info!("🧠 메모리 캐시 사용 (프로세스 간 공유되지 않음)");
            Arc::new(MemoryCache::new())
        }
    };

    Ok((Arc::new(database), cache))
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
///
/// # Allowed Headers
///
/// `Accept`, `Content-Type`과 신원 헤더(`IDENTITY_HEADER`)
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors("X-Authenticated-User");
/// App::new().wrap(cors)
/// ```
fn configure_cors(identity_header: &str) -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .allowed_header(identity_header)

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// 환경변수에서 다음 설정을 읽어옵니다:
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// # Returns
///
/// * `RateLimitConfig` - 로드된 Rate Limiting 설정
///
/// # Examples
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
///
/// # .env.prod (운영 환경)  
/// RATE_LIMIT_PER_SECOND=500
/// RATE_LIMIT_BURST_SIZE=1000
/// ```
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
