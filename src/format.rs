use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn percent(value: f32) -> String {
    format!("{value:.2}%")
}

pub fn disk_cell(read_mb: f64, write_mb: f64) -> String {
    format!("R {read_mb:.2} MB / W {write_mb:.2} MB")
}

pub fn net_cell(recv_mbit: f64, sent_mbit: f64) -> String {
    format!("R {recv_mbit:.2} Mb / S {sent_mbit:.2} Mb")
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_unicode("bash", 10), "bash");
    }

    #[test]
    fn truncate_long_string_gets_ellipsis() {
        let out = truncate_unicode("averyverylongprocessname", 8);
        assert!(out.ends_with('\u{2026}'));
        assert!(out.width() <= 8);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        // Each CJK char is 2 columns wide.
        let out = truncate_unicode("进程监视器进程监视器", 6);
        assert!(out.width() <= 6);
    }

    #[test]
    fn io_cells_use_two_decimals() {
        assert_eq!(disk_cell(2.0, 1.0), "R 2.00 MB / W 1.00 MB");
        assert_eq!(net_cell(0.5, 8.0), "R 0.50 Mb / S 8.00 Mb");
        assert_eq!(percent(3.14159), "3.14%");
    }

    #[test]
    fn running_flag_renders_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
