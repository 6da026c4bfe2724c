use web_sys::console;
use shared::Error;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking yes/no prompt. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn log(message: &str) {
    console::log_1(&message.into());
}

pub fn log_error(message: &str) {
    console::error_1(&message.into());
}

/// Validation and vote-cap errors get a dialog, the rest only the console.
pub fn report(context: &str, error: &Error) {
    if error.is_user_facing() {
        alert(&error.message);
    } else {
        log_error(&format!("{}: {}", context, error));
    }
}
