use chrono::Utc;
use chrono_tz::America::Sao_Paulo;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "carteira-backend.log";

/// 前端与运营都在巴西，日志时间使用圣保罗本地时间
#[derive(Clone, Copy)]
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Utc::now().with_timezone(&Sao_Paulo).format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// 安装全局 subscriber
///
/// 写文件时返回的 guard 必须在进程退出前一直持有，否则缓冲中的日志会丢失。
pub fn init_logging(cfg: &LoggingConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&cfg.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_timer(LocalTime)
        .with_target(true)
        .with_line_number(true);

    let (file_layer, guard) = match &cfg.file_dir {
        Some(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));
            let layer = fmt::layer()
                .with_timer(LocalTime)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = &cfg.file_dir {
        tracing::info!(log_dir = %dir, "file logging enabled");
    }
    guard
}
