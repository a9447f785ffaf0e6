#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimecard")
}

pub const STANDARD_CONFIG: &str = r#"
default_start_time: "09:00"
default_end_time: "18:00"
default_break_minutes: "60"
presets:
  - name: standard
    start_time: "09:00"
    end_time: "18:00"
    break_minutes: 60
  - name: night
    start_time: "22:00"
    end_time: "07:00"
    break_minutes: 60
    end_next_day: true
  - name: short
    start_time: "10:00"
    end_time: "15:00"
    break_minutes: 45
    contract: C-1
"#;

/// Isolated config / database / calendar files for one test.
pub struct TestEnv {
    pub config: PathBuf,
    pub db: PathBuf,
    pub calendar: PathBuf,
}

impl TestEnv {
    /// Create unique paths inside the system temp dir and remove leftovers
    pub fn new(name: &str, config_yaml: &str) -> Self {
        let dir = env::temp_dir().join(format!("rtimecard_test_{name}"));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).expect("create test dir");

        let config = dir.join("rtimecard.conf");
        fs::write(&config, config_yaml).expect("write config");

        Self {
            config,
            db: dir.join("rtimecard.sqlite"),
            calendar: dir.join("calendar.json"),
        }
    }

    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut c = rtc();
        c.arg("--config")
            .arg(&self.config)
            .arg("--db")
            .arg(&self.db)
            .arg("--calendar")
            .arg(&self.calendar)
            .args(args);
        c
    }

    pub fn calendar_json(&self) -> serde_json::Value {
        let raw = fs::read_to_string(&self.calendar).expect("read calendar");
        serde_json::from_str(&raw).expect("parse calendar")
    }

    /// Row of the stored calendar file, by day number.
    pub fn row(&self, day: u64) -> serde_json::Value {
        self.calendar_json()["rows"]
            .as_array()
            .expect("rows")
            .iter()
            .find(|r| r["day"].as_u64() == Some(day))
            .cloned()
            .expect("row for day")
    }
}
