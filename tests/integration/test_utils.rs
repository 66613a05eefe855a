use rollsignal::config::ConfigOverrides;
use rollsignal::core::runner::JobArgs;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Scratch workspace holding the input, config, output and log files of a run.
pub struct TestJob {
    pub dir: TempDir,
    pub args: JobArgs,
}

impl TestJob {
    pub fn new(csv: &str, config_yaml: Option<&str>) -> Self {
        let dir = tempdir().expect("create temp dir");
        let input = dir.path().join("data.csv");
        fs::write(&input, csv).expect("write input");

        let config = config_yaml.map(|yaml| {
            let path = dir.path().join("config.yaml");
            fs::write(&path, yaml).expect("write config");
            path
        });

        let args = JobArgs {
            input,
            config,
            output: dir.path().join("metrics.json"),
            log_file: dir.path().join("run.log"),
            overrides: ConfigOverrides::default(),
        };
        Self { dir, args }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn output_json(&self) -> Value {
        let contents = fs::read_to_string(&self.args.output).expect("read metrics output");
        serde_json::from_str(&contents).expect("parse metrics output")
    }
}

pub fn close_csv(values: &[f64]) -> String {
    let mut csv = String::from("timestamp,close\n");
    for (i, v) in values.iter().enumerate() {
        csv.push_str(&format!("{},{}\n", i, v));
    }
    csv
}
