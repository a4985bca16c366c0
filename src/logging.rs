//! ログ初期化
//!
//! 進捗表示は標準出力、診断ログ（tracing）は標準エラー出力に出す。

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` があればそれを優先し、無ければ verbose に応じて INFO/DEBUG
pub fn init(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
        .add_directive("hyper=info".parse().expect("valid directive"))
        .add_directive("reqwest=info".parse().expect("valid directive"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
