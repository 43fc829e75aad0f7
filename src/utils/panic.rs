use std::panic::{self, PanicInfo};

/// Routes panic messages through `tracing` so they end up next to the rest of
/// the logs instead of on bare stderr.
pub fn set_hook() {
    panic::set_hook(Box::new(log_panic));
}

fn log_panic(info: &PanicInfo<'_>) {
    let payload = info.payload();
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Box<dyn Any>"
    };

    match info.location() {
        Some(location) => error!(
            file = location.file(),
            line = location.line(),
            "panicked: {message}"
        ),
        None => error!("panicked: {message}"),
    }
}
