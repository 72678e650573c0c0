use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawTarget {
    Stderr,
    Hidden,
}

impl From<DrawTarget> for ProgressDrawTarget {
    fn from(value: DrawTarget) -> Self {
        match value {
            DrawTarget::Stderr => ProgressDrawTarget::stderr(),
            DrawTarget::Hidden => ProgressDrawTarget::hidden(),
        }
    }
}

/// record counter spinner
pub fn get_spin_pb(msg: String, draw_target: DrawTarget) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, draw_target.into());
    if draw_target != DrawTarget::Hidden {
        pb.enable_steady_tick(Duration::from_millis(200));
    }
    pb.set_style(
        ProgressStyle::with_template("{msg} {spinner} [{elapsed_precise}] {human_pos} records")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg);
    pb
}
