//! Integration tests for human-readable byte counts

use entrykit::{bytes_to_string, format_size};

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;
const PB: f64 = TB * 1024.0;

#[test]
fn test_bytes() {
    assert_eq!(bytes_to_string(0.0), "0 bytes");
    assert_eq!(bytes_to_string(10.0), "10 bytes");
    assert_eq!(bytes_to_string(KB - 1.0), "1,023 bytes");
    assert_eq!(bytes_to_string(KB), "1 KB");
}

#[test]
fn test_kilobytes_round_up() {
    assert_eq!(bytes_to_string(2.0 * KB), "2 KB");
    assert_eq!(bytes_to_string(2.0 * KB + 1.0), "3 KB");
    assert_eq!(bytes_to_string(MB - KB), "1,023 KB");
    assert_eq!(bytes_to_string(MB - KB + 1.0), "1,024 KB");
    assert_eq!(bytes_to_string(MB - 1.0), "1,024 KB");
    assert_eq!(bytes_to_string(MB), "1 MB");
}

#[test]
fn test_megabytes() {
    assert_eq!(bytes_to_string(2.55 * MB - 1.0), "2.5 MB");
    assert_eq!(bytes_to_string(2.55 * MB), "2.6 MB");
    assert_eq!(bytes_to_string(GB - 0.05 * MB - 1.0), "1,023.9 MB");
    assert_eq!(bytes_to_string(GB - 0.05 * MB), "1,024 MB");
    assert_eq!(bytes_to_string(GB - 1.0), "1,024 MB");
    assert_eq!(bytes_to_string(GB), "1 GB");
}

#[test]
fn test_gigabytes() {
    assert_eq!(bytes_to_string(2.55 * GB - 1.0), "2.5 GB");
    assert_eq!(bytes_to_string(2.55 * GB), "2.6 GB");
    assert_eq!(bytes_to_string(TB - 0.05 * GB - 1.0), "1,023.9 GB");
    assert_eq!(bytes_to_string(TB - 0.05 * GB), "1,024 GB");
    assert_eq!(bytes_to_string(TB - 1.0), "1,024 GB");
    assert_eq!(bytes_to_string(TB), "1 TB");
}

#[test]
fn test_terabytes() {
    assert_eq!(bytes_to_string(2.55 * TB - 1.0), "2.5 TB");
    assert_eq!(bytes_to_string(2.55 * TB), "2.6 TB");
    assert_eq!(bytes_to_string(PB - 0.05 * TB - 1.0), "1,023.9 TB");
    assert_eq!(bytes_to_string(PB - 0.05 * TB), "1,024 TB");
    assert_eq!(bytes_to_string(PB - 1.0), "1,024 TB");
    assert_eq!(bytes_to_string(PB), "1 PB");
}

#[test]
fn test_petabytes_are_open_ended() {
    assert_eq!(bytes_to_string(2048.0 * PB), "2,048 PB");
}

#[test]
fn test_integral_sizes() {
    assert_eq!(format_size(0), "0 bytes");
    assert_eq!(format_size(1023), "1,023 bytes");
    assert_eq!(format_size(1 << 30), "1 GB");
}
