use crate::models::Video;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

// B below 1 KiB, then one decimal of KB or MB
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

pub fn format_duration(seconds: u64) -> String {
    format!("{}s", seconds)
}

pub fn format_fps(fps: u32) -> String {
    format!("{} FPS", fps)
}

pub fn selector_label(video: &Video) -> String {
    format!("{} ({}s)", video.title, video.duration_seconds)
}
