use tracing::info;

/// The example extension's payload.
pub fn world() {
    info!("Hello World!");
}
