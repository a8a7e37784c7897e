use crate::model::Countdown;

/// `"Nd HH:MM:SS"` when at least a day remains, otherwise `"HH:MM:SS"`.
pub fn format_countdown(time_left: &Countdown) -> String {
    let clock = format!(
        "{:02}:{:02}:{:02}",
        time_left.hours, time_left.minutes, time_left.seconds
    );
    if time_left.days > 0 {
        format!("{}d {clock}", time_left.days)
    } else {
        clock
    }
}
