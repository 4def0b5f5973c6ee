use std::{
    cell::Cell,
    io,
    time::{Duration, Instant},
};

use bark_bench::{
    Error, Strategy,
    harness::{BenchResult, ConsoleReporter, HarnessConfig, Reporter, Stats, Suite, SuiteResult},
};

fn quick() -> HarnessConfig {
    HarnessConfig {
        iterations: 10,
        min_samples: 3,
        min_sample_time: Duration::from_micros(200),
        max_time: Duration::ZERO,
    }
}

#[test]
fn end_to_end() {
    let mut reporter = ConsoleReporter::new(Vec::new());
    let results = Suite::with_strategies(quick(), Strategy::ALL)
        .run(&mut reporter)
        .unwrap();
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let lines = output.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), Strategy::ALL.len() + 1);
    for (line, strategy) in lines.iter().zip(Strategy::ALL) {
        assert!(line.starts_with(&format!("{} x ", strategy.label())), "{line}");
        assert!(line.contains(" ops/sec \u{b1}"), "{line}");
        assert!(line.ends_with("runs sampled)"), "{line}");
    }

    let fastest = lines
        .iter()
        .filter_map(|line| line.strip_prefix("Fastest is "))
        .collect::<Vec<_>>();
    assert_eq!(fastest.len(), 1);
    let matching = Strategy::ALL
        .iter()
        .filter(|s| s.label() == fastest[0])
        .count();
    assert_eq!(matching, 1);
    assert_eq!(results.fastest().unwrap().label, fastest[0]);

    assert_eq!(results.results.len(), Strategy::ALL.len());
    for result in &results.results {
        assert!(result.samples() >= 3);
        assert!(result.count >= 1);
        assert!(result.hz() > 0.0);
        assert!(result.stats.rme >= 0.0);
    }
}

#[test]
fn custom_benchmarks_run_in_order() {
    let calls = Cell::new(Vec::new());
    let calls_ref = &calls;
    let record = |label: &'static str| {
        move || {
            let calls = calls_ref;
            let mut v = calls.take();
            if v.last() != Some(&label) {
                v.push(label);
            }
            calls.set(v);
        }
    };
    let results = Suite::new(quick())
        .add("first", record("first"))
        .add("second", record("second"))
        .run(ConsoleReporter::new(io::sink()))
        .unwrap();
    assert_eq!(calls.take(), ["first", "second"]);
    let labels = results.results.iter().map(|r| r.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, ["first", "second"]);
}

#[derive(Default)]
struct Recorder {
    cycles: Vec<String>,
    completed: usize,
}

impl Reporter for Recorder {
    fn on_cycle(&mut self, result: &BenchResult) -> io::Result<()> {
        self.cycles.push(result.label.clone());
        Ok(())
    }

    fn on_complete(&mut self, _results: &SuiteResult) -> io::Result<()> {
        self.completed += 1;
        Ok(())
    }
}

#[test]
fn reporter_events() {
    let mut recorder = Recorder::default();
    Suite::with_strategies(quick(), [Strategy::Direct, Strategy::Bound])
        .run(&mut recorder)
        .unwrap();
    assert_eq!(recorder.cycles, [Strategy::Direct.label(), Strategy::Bound.label()]);
    assert_eq!(recorder.completed, 1);
}

struct Failing;

impl Reporter for Failing {
    fn on_cycle(&mut self, _result: &BenchResult) -> io::Result<()> {
        Err(io::Error::other("closed"))
    }

    fn on_complete(&mut self, _results: &SuiteResult) -> io::Result<()> {
        unreachable!()
    }
}

#[test]
fn reporter_error_aborts() {
    let ran_second = Cell::new(false);
    let err = Suite::new(quick())
        .add("first", || {})
        .add("second", || ran_second.set(true))
        .run(Failing)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!ran_second.get());
}

#[test]
fn empty_suite() {
    let err = Suite::new(quick())
        .run(ConsoleReporter::new(io::sink()))
        .unwrap_err();
    assert!(matches!(err, Error::EmptySuite));
}

#[test]
fn invalid_config() {
    let cases = [
        (HarnessConfig { iterations: 0, ..quick() }, "iterations"),
        (HarnessConfig { min_samples: 0, ..quick() }, "min_samples"),
        (
            HarnessConfig {
                min_sample_time: Duration::ZERO,
                ..quick()
            },
            "min_sample_time",
        ),
    ];
    for (config, expected) in cases {
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { field, .. }) if field == expected
        ));
        let err = Suite::with_strategies(config, [Strategy::Direct])
            .run(ConsoleReporter::new(io::sink()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
    assert!(HarnessConfig::default().validate().is_ok());
    assert_eq!(HarnessConfig::default().iterations, 1000);
}

#[test]
fn single_sample_line() {
    let config = HarnessConfig {
        min_samples: 1,
        ..quick()
    };
    let mut reporter = ConsoleReporter::new(Vec::new());
    Suite::new(config).add("once", || {}).run(&mut reporter).unwrap();
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(output.contains("\u{b1}0.00% (1 run sampled)"), "{output}");
    assert!(output.ends_with("Fastest is once\n"), "{output}");
}

fn result(label: &str, periods: &[f64]) -> BenchResult {
    BenchResult {
        label: label.to_owned(),
        count: 1,
        periods: periods.to_vec(),
        stats: Stats::from_periods(periods).unwrap(),
    }
}

#[test]
fn fastest_tie_goes_to_earliest() {
    let results = SuiteResult {
        results: vec![
            result("slow", &[1.0, 1.0]),
            result("first", &[0.5, 0.5]),
            result("second", &[0.5, 0.5]),
        ],
    };
    assert_eq!(results.results[1].hz(), results.results[2].hz());
    assert_eq!(results.fastest().unwrap().label, "first");

    let mut reporter = ConsoleReporter::new(Vec::new());
    reporter.on_complete(&results).unwrap();
    assert_eq!(String::from_utf8(reporter.into_inner()).unwrap(), "Fastest is first\n");

    let empty = SuiteResult { results: vec![] };
    assert!(empty.fastest().is_none());
}

#[test]
fn sampling_honours_time_limits() {
    let config = HarnessConfig {
        iterations: 10,
        min_samples: 2,
        min_sample_time: Duration::from_millis(5),
        max_time: Duration::from_millis(100),
    };
    let mut suite = Suite::with_strategies(config.clone(), [Strategy::Mixed]);
    assert_eq!(suite.config(), &config);

    let started = Instant::now();
    let results = suite.run(ConsoleReporter::new(io::sink())).unwrap();
    assert!(started.elapsed() >= config.max_time);

    let result = &results.results[0];
    assert!(result.samples() >= 2);
    // calibration guarantees the first `count` ops took `min_sample_time`; later samples may run
    // a bit faster once warm
    let per_sample = result.stats.mean * result.count as f64;
    assert!(
        per_sample >= config.min_sample_time.as_secs_f64() / 2.0,
        "{per_sample}s per sample"
    );
    let sampled = result.periods.iter().sum::<f64>() * result.count as f64;
    assert!(sampled >= config.max_time.as_secs_f64() / 2.0, "{sampled}s sampled");
}
