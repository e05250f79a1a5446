pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("debug,arbor_ui=trace")
        .init();
}
