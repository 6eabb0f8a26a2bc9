use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use modifier_chain::builder::{always_continue, from_fn, terminal, when};
use modifier_chain::{ChainConfig, ChainError, Flow, FnModifier, Modifier, ModifierChain};

/// Subject that records which nodes touched it.
#[derive(Debug, Default)]
struct Journal {
    visits: Vec<usize>,
    total: i64,
}

/// Node that logs its id and counts its own invocations.
struct Recorder {
    id: usize,
    calls: Arc<AtomicUsize>,
}

impl Modifier<Journal> for Recorder {
    fn modify(&self, subject: &mut Journal) -> Flow {
        self.calls.fetch_add(1, Ordering::SeqCst);
        subject.visits.push(self.id);
        subject.total += self.id as i64;
        Flow::Continue
    }
}

fn recorders(n: usize) -> (Vec<Recorder>, Vec<Arc<AtomicUsize>>) {
    let counters: Vec<_> = (0..n).map(|_| Arc::new(AtomicUsize::new(0))).collect();
    let recorders = counters
        .iter()
        .enumerate()
        .map(|(id, calls)| Recorder {
            id,
            calls: Arc::clone(calls),
        })
        .collect();
    (recorders, counters)
}

#[test]
fn every_node_runs_once_in_attachment_order() {
    for n in [1, 2, 5, 17] {
        let (nodes, counters) = recorders(n);
        let mut chain = ModifierChain::new(Journal::default());
        for node in nodes {
            chain.add(node);
        }

        let outcome = chain.handle().unwrap();

        assert_eq!(outcome.applied, n);
        assert!(!outcome.was_halted());
        assert_eq!(chain.subject().visits, (0..n).collect::<Vec<_>>());
        for calls in &counters {
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }
}

#[test]
fn terminal_at_position_k_truncates() {
    let n = 6;
    for k in 0..n {
        let (nodes, counters) = recorders(n);
        let mut chain = ModifierChain::new(Journal::default());
        for (idx, node) in nodes.into_iter().enumerate() {
            if idx == k {
                chain.add_boxed(terminal());
            }
            chain.add(node);
        }

        let outcome = chain.handle().unwrap();

        assert_eq!(chain.subject().visits, (0..k).collect::<Vec<_>>());
        assert_eq!(outcome.applied, k + 1);
        assert_eq!(outcome.halted_by.as_deref(), Some("Terminal"));
        for (idx, calls) in counters.iter().enumerate() {
            let expected = usize::from(idx < k);
            assert_eq!(calls.load(Ordering::SeqCst), expected, "node {idx}");
        }
    }
}

#[test]
fn adding_missing_node_does_not_change_length() {
    let (nodes, _) = recorders(3);
    let mut chain = ModifierChain::new(Journal::default());
    for node in nodes {
        chain.add(node);
    }

    let err = chain.try_add(None).unwrap_err();
    assert_eq!(err, ChainError::InvalidChain);
    assert_eq!(chain.len(), 3);

    chain.handle().unwrap();
    assert_eq!(chain.subject().visits, vec![0, 1, 2]);
}

#[test]
fn second_handle_applies_effects_again() {
    let (nodes, counters) = recorders(3);
    let mut chain = ModifierChain::new(Journal::default());
    for node in nodes {
        chain.add(node);
    }

    chain.handle().unwrap();
    chain.handle().unwrap();

    assert_eq!(chain.subject().visits, vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(chain.subject().total, 6);
    assert!(counters.iter().all(|c| c.load(Ordering::SeqCst) == 2));
}

#[test]
fn guarded_chain_refuses_second_handle() {
    let (nodes, _) = recorders(2);
    let config = ChainConfig::new().with_guard_reentry(true);
    let mut chain = ModifierChain::with_config(Journal::default(), config);
    for node in nodes {
        chain.add(node);
    }

    chain.handle().unwrap();
    let err = chain.handle().unwrap_err();

    assert_eq!(err, ChainError::ReentrantHandle { runs: 1 });
    assert_eq!(err.error_code(), "reentrant_handle");
    assert_eq!(chain.subject().visits, vec![0, 1]);
}

#[test]
fn empty_chain_leaves_subject_unchanged() {
    let mut chain = ModifierChain::new(Journal {
        visits: vec![9],
        total: 9,
    });

    let outcome = chain.handle().unwrap();

    assert_eq!(outcome.applied, 0);
    let journal = chain.into_subject();
    assert_eq!(journal.visits, vec![9]);
    assert_eq!(journal.total, 9);
}

#[test]
fn later_nodes_observe_earlier_effects() {
    let mut chain = ModifierChain::new(Journal::default());
    chain
        .add_boxed(from_fn("seed", |j: &mut Journal| {
            j.total = 10;
            Flow::Continue
        }))
        .add_boxed(when(
            |j: &Journal| j.total >= 10,
            from_fn("bonus", |j: &mut Journal| {
                j.total += 5;
                Flow::Continue
            }),
        ))
        .add_boxed(always_continue(from_fn("stop", |j: &mut Journal| {
            j.total *= 2;
            Flow::Halt
        })))
        .add_boxed(from_fn("tail", |j: &mut Journal| {
            j.visits.push(99);
            Flow::Continue
        }));

    let outcome = chain.handle().unwrap();

    assert_eq!(chain.subject().total, 30);
    assert_eq!(chain.subject().visits, vec![99]);
    assert_eq!(outcome.applied, 4);
    assert_eq!(chain.names(), vec!["seed", "bonus", "stop", "tail"]);
}

#[test]
fn long_chain_built_through_add_runs_and_drops() {
    let n = 50_000;
    let mut chain = ModifierChain::new(0_u64);
    for _ in 0..n {
        chain.add(FnModifier::new("inc", |v: &mut u64| {
            *v += 1;
            Flow::Continue
        }));
    }
    assert_eq!(chain.len(), n);

    let outcome = chain.handle().unwrap();

    assert_eq!(outcome.applied, n);
    assert_eq!(*chain.subject(), n as u64);
}

/// Shared buffer that a fmt subscriber writes into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_captured(config: ChainConfig) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let (nodes, _) = recorders(3);
    let mut chain = ModifierChain::with_config(Journal::default(), config);
    for node in nodes {
        chain.add(node);
    }

    let outcome = tracing::subscriber::with_default(subscriber, || chain.handle()).unwrap();
    assert_eq!(outcome.applied, 3);
    captured.text()
}

#[test]
fn trace_nodes_emits_one_event_per_applied_node() {
    let traced = run_captured(ChainConfig::new().with_trace_nodes(true));
    assert_eq!(traced.matches("modifier applied").count(), 3);
    assert!(traced.contains("Recorder"));
    assert!(traced.contains("chain handled"));

    let quiet = run_captured(ChainConfig::new());
    assert_eq!(quiet.matches("modifier applied").count(), 0);
    assert!(quiet.contains("chain handled"));
}
