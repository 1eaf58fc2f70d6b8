//! End-to-end tests driving the processor against real child processes.

use std::io::Write;

use logcat_attach::prelude::*;
use logcat_attach::{ATTACHMENT_CONTENT_TYPE, ATTACHMENT_FILENAME, TRUNCATION_MARKER};
use logcat_attach_telemetry::setup_test_logging;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ErrorEvent {
    message: String,
    fatal: bool,
}

fn event() -> ErrorEvent {
    ErrorEvent {
        message: "NullPointerException".to_string(),
        fatal: true,
    }
}

fn shell(script: &str) -> LogcatProcessor {
    LogcatProcessor::with_config(
        CollectorConfig::new()
            .with_program("sh")
            .with_args(["-c", script]),
    )
}

#[test]
fn test_three_lines_become_one_attachment() {
    setup_test_logging();
    let processor = shell("printf 'a\\nb\\nc\\n'");
    let mut hint = Hint::new();

    let processed = processor.process(event(), &mut hint);

    assert_eq!(processed, Some(event()));
    let attachments = hint.take_attachments();
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0].filename(), ATTACHMENT_FILENAME);
    assert_eq!(attachments[0].content_type(), ATTACHMENT_CONTENT_TYPE);
    assert_eq!(attachments[0].bytes(), "a\nb\nc\n".as_bytes());
}

#[test]
fn test_silent_reader_adds_no_attachment() {
    setup_test_logging();
    let processor = shell("exit 0");
    let mut hint = Hint::new();

    assert_eq!(processor.process(event(), &mut hint), Some(event()));
    assert!(hint.attachments().is_empty());
}

#[test]
fn test_failing_reader_keeps_its_output() {
    setup_test_logging();
    let processor = shell("printf 'E/crash: boom\\n'; exit 3");
    let mut hint = Hint::new();

    assert_eq!(processor.process(event(), &mut hint), Some(event()));
    assert_eq!(hint.attachments()[0].bytes(), b"E/crash: boom\n");
}

#[test]
fn test_missing_reader_passes_event_through() {
    setup_test_logging();
    let processor = LogcatProcessor::with_config(
        CollectorConfig::new().with_program("/nonexistent/bin/logcat"),
    );
    let mut hint = Hint::new();

    assert_eq!(processor.process(event(), &mut hint), Some(event()));
    assert!(hint.attachments().is_empty());
}

#[test]
fn test_oversized_line_attaches_marker_only() {
    setup_test_logging();
    let processor = shell("head -c 3000000 /dev/zero | tr '\\0' x; echo");
    let mut hint = Hint::new();

    processor.process(event(), &mut hint);

    let expected = format!("{TRUNCATION_MARKER}\n");
    assert_eq!(hint.attachments()[0].bytes(), expected.as_bytes());
}

#[test]
fn test_endless_reader_is_cut_at_byte_bound() {
    setup_test_logging();
    let processor = LogcatProcessor::with_config(
        CollectorConfig::new()
            .with_program("yes")
            .with_args(["W/ActivityManager: slow operation"])
            .with_max_bytes(1024),
    );
    let mut hint = Hint::new();

    processor.process(event(), &mut hint);

    let text = String::from_utf8(hint.take_attachments().remove(0).into_bytes()).unwrap();
    let marker = format!("{TRUNCATION_MARKER}\n");
    assert!(text.ends_with(&marker));
    assert!(text.len() <= 1024 + marker.len());
    assert!(
        text.lines()
            .take_while(|line| *line != TRUNCATION_MARKER)
            .all(|line| line == "W/ActivityManager: slow operation")
    );
}

#[test]
fn test_default_arguments_reach_the_reader() {
    setup_test_logging();
    // `echo` prints its arguments back, standing in for logcat.
    let processor = LogcatProcessor::with_config(CollectorConfig::new().with_program("echo"));
    let mut hint = Hint::new();

    processor.process(event(), &mut hint);

    assert_eq!(hint.attachments()[0].bytes(), b"-d -t 1000 *:W\n");
}

#[test]
fn test_log_dump_from_file() {
    setup_test_logging();
    let mut dump = tempfile::NamedTempFile::new().unwrap();
    let lines: Vec<String> = (0..1200)
        .map(|i| format!("10-19 12:00:{:02}.000  1234  1234 W Choreographer: skipped {i} frames", i % 60))
        .collect();
    for line in &lines {
        writeln!(dump, "{line}").unwrap();
    }
    dump.flush().unwrap();

    let processor = LogcatProcessor::with_config(
        CollectorConfig::new()
            .with_program("cat")
            .with_args([dump.path().to_string_lossy().into_owned()]),
    );
    let mut hint = Hint::new();
    processor.process(event(), &mut hint);

    let expected: String = lines.iter().take(1000).map(|l| format!("{l}\n")).collect();
    assert_eq!(hint.attachments()[0].bytes(), expected.as_bytes());
}

#[test]
fn test_concurrent_events_get_independent_attachments() {
    setup_test_logging();
    let processor = shell("printf 'W/one\\nW/two\\n'");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let processor = &processor;
                scope.spawn(move || {
                    let mut hint = Hint::new();
                    let ev = ErrorEvent {
                        message: format!("event {i}"),
                        fatal: false,
                    };
                    let processed = processor.process(ev.clone(), &mut hint);
                    assert_eq!(processed, Some(ev));
                    hint.take_attachments()
                })
            })
            .collect();

        for handle in handles {
            let attachments = handle.join().unwrap();
            assert_eq!(attachments.len(), 1);
            assert_eq!(attachments[0].bytes(), b"W/one\nW/two\n");
        }
    });
}

#[test]
fn test_chain_with_logcat_and_filter() {
    setup_test_logging();
    let chain = ProcessorChain::<ErrorEvent>::new()
        .with("logcat", shell("printf 'E/app: failure\\n'"))
        .with("fatal-only", |event: ErrorEvent, _hint: &mut Hint| {
            event.fatal.then_some(event)
        });

    let mut hint = Hint::new();
    assert_eq!(chain.run(event(), &mut hint), Some(event()));
    assert_eq!(hint.attachments().len(), 1);

    let mut hint = Hint::new();
    let non_fatal = ErrorEvent {
        fatal: false,
        ..event()
    };
    assert_eq!(chain.run(non_fatal, &mut hint), None);
    // Logcat ran before the filter dropped the event.
    assert_eq!(hint.attachments().len(), 1);
}
