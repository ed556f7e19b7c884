//! Formatting utilities

/// Format seconds as `MM:SS`, or `H:MM:SS` past the hour
pub fn clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// "1 minute" / "25 minutes"
pub fn minutes(count: u32) -> String {
    if count == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", count)
    }
}
