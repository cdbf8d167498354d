// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use abiprobe::catalogue;
use abiprobe::report;
use abiprobe::Entry;
use abiprobe::ProbeValue;

// Report order, one label per line: markers as printed, probes by the C
// expression they describe.
const CATALOGUE: &[&str] = &[
    "---",
    "(char *)p",
    "int",
    "long",
    "long long",
    "size_t",
    "pid_t",
    "off_t",
    "uid_t",
    "mode_t",
    "nlink_t",
    "ino_t",
    "dev_t",
    "blksize_t",
    "blkcnt_t",
    "time_t",
    "struct timespec",
    "struct timeval",
    "struct stat",
    "S_IFMT",
    "S_IFSOCK",
    "S_IFLNK",
    "S_IFREG",
    "S_IFBLK",
    "S_IFDIR",
    "S_IFCHR",
    "S_IFIFO",
    "PATH_MAX",
    "struct dirent",
    "struct termios",
    "~(BRKINT | ICRNL | INPCK | ISTRIP | IXON)",
    "~(OPOST)",
    "CS8",
    "~(ECHO | ICANON | IEXTEN | ISIG)",
    "VMIN",
    "VTIME",
    "TCSAFLUSH",
    "(char*)&(tos.c_line) - (char*)&tos",
    "(char*)&(tos.c_cc) - (char*)&tos",
    "(char*)&(tos.c_cc[VTIME]) - (char*)&tos",
    "tos.c_cc",
    "TCGETS",
    "TCSETS",
    "struct pollfd",
    "O_RDONLY",
    "O_WRONLY",
    "O_RDWR",
    "O_CREAT",
    "O_DIRECTORY",
    "O_TRUNC",
    "O_APPEND",
    "O_CLOEXEC",
    "020000000",
    "020200000",
    "O_EXCL",
    "O_NONBLOCK",
    "F_GETFD",
    "F_SETFD",
    "F_GETFL",
    "F_SETFL",
    "---dm-ioctl",
    "DM_VERSION_MAJOR",
    "DM_VERSION_MINOR",
    "DM_VERSION",
    "DM_DEV_CREATE",
    "DM_DEV_SUSPEND",
    "DM_DEV_REMOVE",
    "DM_DEV_STATUS",
    "DM_TABLE_LOAD",
    "DM_TABLE_STATUS",
    "DM_LIST_DEVICES",
    "struct dm_ioctl",
    "struct dm_target_spec",
    "dmi.name",
    "dmi.uuid",
    "struct dm_target_spec",
    "BLKGETSIZE64",
    "DM_MAX_TYPE_NAME",
    "(char*)&(dmi.name) - (char*)&dmi",
    "---linux/loop.h",
    "struct loop_info64",
    "li.lo_device",
    "li.lo_inode",
    "LO_NAME_SIZE",
    "LO_KEY_SIZE",
    "struct sockaddr",
    "struct sockaddr_un",
    "struct sockaddr_storage",
    "AF_UNIX",
    "AF_LOCAL",
    "AF_INET",
    "AF_INET6",
    "SOCK_STREAM",
    "SOCK_DGRAM",
    "SOCK_SEQPACKET",
    "SOCK_NONBLOCK",
    "SOCK_CLOEXEC",
    "SOL_SOCKET",
    "SO_KEEPALIVE",
    "SO_REUSEADDR",
    "MSG_DONTWAIT",
    "pfdl",
    "POLLIN",
    "POLLOUT",
    "POLLHUP",
    "POLLRDHUP",
    "POLLERR",
    "POLLNVAL",
    "FIONBIO",
    "WNOHANG",
    "FBIOGET_VSCREENINFO",
    "FBIOGET_FSCREENINFO",
    "FBIOGETCMAP",
    "FB_VISUAL_TRUECOLOR",
    "FB_VISUAL_DIRECTCOLOR",
    "FB_VISUAL_PSEUDOCOLOR",
    "FB_VISUAL_STATIC_PSEUDOCOLOR",
    "struct fb_fix_screeninfo",
    "struct fb_var_screeninfo",
    "struct fb_cmap",
    "struct fb_bitfield",
    "(char*)&vinfo.red - (char*)&vinfo",
    "(char*)&vinfo.red.length - (char*)&vinfo",
    "(char*)&vinfo.green.length - (char*)&vinfo",
    "(char*)&vinfo.blue.length - (char*)&vinfo",
    "(char*)&finfo.smem_len - (char*)&finfo",
    "(char*)&finfo.line_length - (char*)&finfo",
    "IFNAMSIZ",
    "SIOCGIFADDR",
    "SIOCSIFADDR",
    "struct ifreq",
    "ifr.ifr_addr",
    "ifr.ifr_map",
    "(char*)&ifr.ifr_ifindex - (char*)&ifr",
    "CLOCK_REALTIME",
    "CLOCK_MONOTONIC",
    "CLOCK_MONOTONIC_RAW",
];

fn entry_labels(entries: &[Entry]) -> Vec<&'static str> {
    entries
        .iter()
        .map(|e| match e {
            Entry::Marker(m) => *m,
            Entry::Probe(p) => p.label,
        })
        .collect()
}

#[test]
fn report_follows_catalogue_order() {
    let labels = entry_labels(&catalogue::collect());
    assert_eq!(labels.len(), CATALOGUE.len());
    for (i, (got, want)) in labels.iter().zip(CATALOGUE).enumerate() {
        assert_eq!(got, want, "line {} of the report", i + 1);
    }
}

#[test]
fn report_lines_carry_catalogue_labels() {
    let report = text_report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), CATALOGUE.len());
    for (line, label) in lines.iter().zip(CATALOGUE) {
        if label.starts_with("---") {
            assert_eq!(line, label);
        } else {
            let (lhs, _) = line.rsplit_once(" = ").unwrap();
            assert_eq!(lhs.strip_prefix("sizeof ").unwrap_or(lhs), *label);
        }
    }
}

fn text_report() -> String {
    let mut buf = vec![];
    report::render_text(&catalogue::collect(), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn report_is_deterministic() {
    assert_eq!(text_report(), text_report());
}

#[test]
fn report_has_three_markers_in_order() {
    let report = text_report();
    let markers: Vec<&str> = report.lines().filter(|l| l.starts_with("---")).collect();
    assert_eq!(markers, vec!["---", "---dm-ioctl", "---linux/loop.h"]);
    assert_eq!(report.lines().next(), Some("---"));
}

#[test]
fn report_has_platform_basics() {
    let report = text_report();
    let lines: Vec<&str> = report.lines().collect();

    assert!(lines.contains(&"sizeof int = 4"));
    #[cfg(target_pointer_width = "64")]
    assert!(lines.contains(&"sizeof (char *)p = 8"));
    #[cfg(target_pointer_width = "32")]
    assert!(lines.contains(&"sizeof (char *)p = 4"));

    let o_rdonly = format!("O_RDONLY = 0x{:08x}", libc::O_RDONLY as u32);
    assert!(lines.contains(&o_rdonly.as_str()));
}

#[test]
fn report_sizes_match_size_of() {
    let entries = catalogue::collect();
    let size = |label: &str| {
        entries
            .iter()
            .find_map(|e| match e {
                Entry::Probe(p) if p.label == label => Some(p.value),
                _ => None,
            })
            .unwrap()
    };

    assert_eq!(
        size("struct stat"),
        ProbeValue::Size(std::mem::size_of::<libc::stat>())
    );
    assert_eq!(
        size("struct termios"),
        ProbeValue::Size(std::mem::size_of::<libc::termios>())
    );
    assert_eq!(
        size("struct ifreq"),
        ProbeValue::Size(std::mem::size_of::<libc::ifreq>())
    );
    assert_eq!(
        size("struct dm_ioctl"),
        ProbeValue::Size(std::mem::size_of::<abiprobe::kernel_intf::dm_ioctl>())
    );
}

#[test]
fn every_line_is_marker_or_assignment() {
    for line in text_report().lines() {
        if line.starts_with("---") {
            continue;
        }
        let (_, value) = line.rsplit_once(" = ").unwrap();
        let ok = match value.strip_prefix("0x") {
            Some(hex) => {
                (hex.len() == 8 || hex.len() == 16) && u64::from_str_radix(hex, 16).is_ok()
            }
            None => value.parse::<i64>().is_ok(),
        };
        assert!(ok, "malformed line: {}", line);
    }
}

#[test]
fn json_report_matches_text_report() {
    let entries = catalogue::collect();
    let mut buf = vec![];
    report::render_json(&entries, &mut buf).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    let sections = v.as_array().unwrap();
    assert_eq!(sections.len(), 3);

    let labels: Vec<&str> = sections
        .iter()
        .flat_map(|s| s["probes"].as_array().unwrap())
        .map(|p| p["label"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = entries
        .iter()
        .filter_map(|e| match e {
            Entry::Probe(p) => Some(p.label),
            Entry::Marker(_) => None,
        })
        .collect();
    assert_eq!(labels, expected);
}
