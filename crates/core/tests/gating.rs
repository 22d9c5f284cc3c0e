use hourgate_core::builtin::{BODMA, CODMA, PRODMA};
use hourgate_core::{
    Clock, ErrorKind, FixedHourClock, HourWindow, HourWindowPolicy, Moment, ParamSpec, ToolDefinition,
    ToolError, ToolRegistry, ToolSurface, VisibilityPolicy,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn surface_at(hour: u32) -> ToolSurface {
    let clock = FixedHourClock::new(hour).expect("valid hour");
    ToolSurface::builtin(Arc::new(clock)).expect("builtin registry")
}

fn listed_names(surface: &ToolSurface, at: Moment) -> Vec<String> {
    surface
        .listing()
        .list_at(at)
        .iter()
        .map(|tool| tool.name().to_string())
        .collect()
}

fn operands(a: f64, b: f64) -> hourgate_core::JsonObject {
    json!({ "a": a, "b": b }).as_object().cloned().unwrap()
}

/// Replays a fixed sequence of moments, one per `now()` call.
struct ScriptedClock {
    moments: Vec<Moment>,
    next: AtomicUsize,
}

impl ScriptedClock {
    fn new(moments: Vec<Moment>) -> Self {
        Self {
            moments,
            next: AtomicUsize::new(0),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> Moment {
        let idx = self.next.fetch_add(1, Ordering::SeqCst);
        self.moments[idx.min(self.moments.len() - 1)]
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

/// Records every name it is asked about, and gates nothing.
#[derive(Default)]
struct RecordingPolicy {
    asked: Mutex<Vec<String>>,
}

impl VisibilityPolicy for RecordingPolicy {
    fn is_visible(&self, name: &str, _at: Moment) -> bool {
        self.asked.lock().unwrap().push(name.to_string());
        true
    }
}

#[test]
fn listing_follows_the_prodma_window() {
    let surface = surface_at(8);
    assert_eq!(
        listed_names(&surface, Moment::at_hour(8).unwrap()),
        vec![BODMA, CODMA]
    );
    assert_eq!(
        listed_names(&surface, Moment::at_hour(11).unwrap()),
        vec![BODMA, CODMA, PRODMA]
    );

    for hour in 0..24 {
        let names = listed_names(&surface, Moment::at_hour(hour).unwrap());
        assert!(names.contains(&BODMA.to_string()), "bodma missing at {hour}");
        assert!(names.contains(&CODMA.to_string()), "codma missing at {hour}");
        assert_eq!(
            names.contains(&PRODMA.to_string()),
            (10..22).contains(&hour),
            "prodma visibility at {hour}"
        );
    }
}

#[test]
fn list_samples_the_injected_clock() {
    let (at, tools) = surface_at(8).listing().list();
    assert_eq!(at.hour(), 8);
    assert_eq!(tools.len(), 2);

    let (at, tools) = surface_at(11).listing().list();
    assert_eq!(at.hour(), 11);
    assert_eq!(tools.len(), 3);
}

#[test]
fn repeated_listings_are_identical() {
    let surface = surface_at(12);
    let render = |tools: Vec<Arc<ToolDefinition>>| {
        tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect::<Vec<_>>()
    };
    let first = serde_json::to_string(&render(surface.listing().list().1)).unwrap();
    let second = serde_json::to_string(&render(surface.listing().list().1)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_registry_lists_nothing() {
    let surface = ToolSurface::new(
        ToolRegistry::new(),
        Arc::new(HourWindowPolicy::new()),
        Arc::new(FixedHourClock::new(12).unwrap()),
    );
    assert!(surface.listing().list().1.is_empty());
}

#[test]
fn worked_examples_inside_the_window() {
    let dispatcher = surface_at(11).dispatcher().clone();
    let bodma = dispatcher.invoke(BODMA, Some(&operands(2.0, 3.0))).unwrap();
    assert!((bodma - 1.333_333_333_3).abs() < 1e-9);
    assert_eq!(dispatcher.invoke(CODMA, Some(&operands(2.0, 3.0))).unwrap(), 0.75);
    assert_eq!(dispatcher.invoke(PRODMA, Some(&operands(2.0, 3.0))).unwrap(), 72.0);
}

#[test]
fn gated_call_is_rejected_outside_the_window() {
    let err = surface_at(8)
        .dispatcher()
        .invoke(PRODMA, Some(&operands(2.0, 3.0)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ToolUnavailable);
    assert_eq!(
        err.to_string(),
        "prodma is only available 10:00-22:00 (current hour: 8)"
    );
}

#[test]
fn stale_listing_does_not_bypass_the_call_guard() {
    let clock = ScriptedClock::new(vec![
        Moment::from_hms(21, 59, 59).unwrap(),
        Moment::from_hms(22, 0, 0).unwrap(),
    ]);
    let surface = ToolSurface::builtin(Arc::new(clock)).unwrap();

    let (_, listed) = surface.listing().list();
    assert!(listed.iter().any(|tool| tool.name() == PRODMA));

    let err = surface
        .dispatcher()
        .invoke(PRODMA, Some(&operands(2.0, 3.0)))
        .unwrap_err();
    assert!(matches!(err, ToolError::ToolUnavailable { hour: 22, .. }));
}

#[test]
fn unknown_tool_wins_regardless_of_hour() {
    for hour in [0, 8, 11, 23] {
        let err = surface_at(hour)
            .dispatcher()
            .invoke("quadma", Some(&operands(1.0, 1.0)))
            .unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("quadma".into()));
    }
}

#[test]
fn visibility_is_checked_before_arguments() {
    let err = surface_at(23)
        .dispatcher()
        .invoke(PRODMA, None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ToolUnavailable);

    let err = surface_at(11)
        .dispatcher()
        .invoke(PRODMA, None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArguments);
}

#[test]
fn schema_mismatches_are_invalid_arguments() {
    let dispatcher = surface_at(11).dispatcher().clone();
    for args in [
        json!({ "a": 2 }),
        json!({ "a": "two", "b": 3 }),
        json!({ "a": true, "b": 3 }),
        json!({ "a": [2], "b": 3 }),
    ] {
        let err = dispatcher
            .invoke(BODMA, args.as_object())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArguments, "args: {args}");
    }
}

#[test]
fn math_failures_keep_their_kind() {
    let dispatcher = surface_at(11).dispatcher().clone();
    let err = dispatcher.invoke(BODMA, Some(&operands(0.0, 3.0))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);

    let err = dispatcher.invoke(PRODMA, Some(&operands(0.0, -1.0))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MathDomain);
}

#[test]
fn listing_and_dispatch_consult_the_same_policy() {
    let policy = Arc::new(RecordingPolicy::default());
    let mut registry = ToolRegistry::new();
    registry
        .register(ToolDefinition::new(
            "echo",
            "returns x",
            vec![ParamSpec::number("x")],
            |args| Ok(args.number("x")?),
        ))
        .unwrap();
    let surface = ToolSurface::new(
        registry,
        policy.clone(),
        Arc::new(FixedHourClock::new(3).unwrap()),
    );

    surface.listing().list();
    let value = surface
        .dispatcher()
        .invoke("echo", json!({ "x": 4.5 }).as_object())
        .unwrap();
    assert_eq!(value, 4.5);
    assert_eq!(*policy.asked.lock().unwrap(), vec!["echo", "echo"]);
}

#[test]
fn custom_windows_gate_custom_tools() {
    let mut registry = ToolRegistry::new();
    registry
        .register(ToolDefinition::new("night", "after hours", Vec::new(), |_| Ok(1.0)))
        .unwrap();
    let policy = HourWindowPolicy::new().with_window("night", HourWindow::new(22, 6).unwrap());
    let surface = ToolSurface::new(
        registry,
        Arc::new(policy),
        Arc::new(FixedHourClock::new(2).unwrap()),
    );

    assert_eq!(surface.dispatcher().invoke("night", None).unwrap(), 1.0);
    assert!(surface.listing().list_at(Moment::at_hour(12).unwrap()).is_empty());
}

/// One round of listing and calling every builtin tool, interleaved.
fn exercise(surface: &ToolSurface) -> Vec<(Vec<String>, Result<f64, ToolError>)> {
    [BODMA, CODMA, PRODMA]
        .into_iter()
        .map(|name| {
            let (_, listed) = surface.listing().list();
            let names = listed.iter().map(|tool| tool.name().to_string()).collect();
            let outcome = surface
                .dispatcher()
                .invoke(name, Some(&operands(2.0, 3.0)));
            (names, outcome)
        })
        .collect()
}

#[test]
fn concurrent_listing_and_dispatch_match_sequential_results() {
    let surfaces = [surface_at(8), surface_at(11)];
    let expected: Vec<_> = surfaces.iter().map(exercise).collect();
    assert_eq!(expected[0][2].1.as_ref().unwrap_err().kind(), ErrorKind::ToolUnavailable);
    assert_eq!(expected[1][2].1, Ok(72.0));

    let observed: Vec<Vec<_>> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let surface = &surfaces[worker % 2];
                scope.spawn(move || (0..50).map(|_| exercise(surface)).collect::<Vec<_>>())
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker thread panicked"))
            .collect()
    });

    for (worker, rounds) in observed.iter().enumerate() {
        for round in rounds {
            assert_eq!(round, &expected[worker % 2], "worker {worker}");
        }
    }
}
