use sysprobe::checks::{filter_cases, render_listing, run_suite, suite, Outcome, RunMode};
use sysprobe::settings::Settings;

#[test]
fn whole_suite_passes_in_parallel() {
    let mut settings = Settings::default();
    settings.process.sleep_secs = 1;
    let report = run_suite(&suite(), &settings, RunMode::Parallel);
    for r in &report.results {
        assert_eq!(r.outcome, Outcome::Passed, "{} did not pass", r.name);
    }
    assert_eq!(report.passed(), 9);
    assert!(report.all_passed());
}

#[test]
fn broken_tool_only_affects_its_own_case() {
    let mut settings = Settings::default();
    settings.tools.grep = "sysprobe-missing-grep".into();
    let cases = filter_cases(suite(), "log_analysis[ERROR");
    let report = run_suite(&cases, &settings, RunMode::Serial);
    assert_eq!(report.results.len(), 1);
    match &report.results[0].outcome {
        Outcome::Errored { message } => assert!(message.contains("sysprobe-missing-grep"), "{}", message),
        other => panic!("expected an execution error, got {:?}", other),
    }

    let others = filter_cases(suite(), "file_");
    let report = run_suite(&others, &settings, RunMode::Serial);
    assert_eq!(report.passed(), 2);
}

#[test]
fn listing_snapshot() {
    insta::assert_snapshot!(render_listing(&suite()), @r"
    file_operations          create, write and read back a file
    process_management       spawn a delay process and observe its lifecycle
    log_analysis[INFO-2]     grep -c INFO over the sample log prints 2
    log_analysis[ERROR-1]    grep -c ERROR over the sample log prints 1
    log_analysis[WARNING-0]  grep -c WARNING over the sample log prints 0
    file_permissions         chmod 600 and read the mode back
    system_info              kernel release and disk usage are reported
    bash_script_execution    generate, mark executable and run a shell script
    ");
}
