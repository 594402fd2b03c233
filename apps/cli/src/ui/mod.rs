use indicatif::MultiProgress;
use std::sync::OnceLock;

pub mod dashboard;
pub mod presenter;
pub mod theme;

pub use theme::{Icon, Theme};

static MULTI_PROGRESS: OnceLock<MultiProgress> = OnceLock::new();

pub fn multi_progress() -> &'static MultiProgress {
    MULTI_PROGRESS.get_or_init(MultiProgress::new)
}

/// Print above any live progress line. A hidden draw target (piped
/// output) swallows lines, so fall back to plain printing there.
fn emit(msg: &str, to_stderr: bool) {
    let progress = multi_progress();
    if !progress.is_hidden() && progress.println(msg).is_ok() {
        return;
    }
    if to_stderr {
        eprintln!("{}", msg);
    } else {
        println!("{}", msg);
    }
}

pub fn info(message: impl AsRef<str>) {
    let msg = format!("{} {}", Theme::primary(Icon::Info), message.as_ref());
    emit(&msg, false);
}

pub fn success(message: impl AsRef<str>) {
    let msg = format!("{} {}", Theme::success(Icon::Check), message.as_ref());
    emit(&msg, false);
}

pub fn warn(message: impl AsRef<str>) {
    let msg = format!("{} {}", Theme::warning(Icon::Warning), message.as_ref());
    emit(&msg, true);
}

pub fn error(message: impl AsRef<str>) {
    let msg = format!("{} {}", Theme::error(Icon::Cross), message.as_ref());
    emit(&msg, true);
}

pub fn println(message: impl AsRef<str>) {
    emit(message.as_ref(), false);
}
