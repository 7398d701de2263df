// Host-side tests for copy-button injection and label timing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod target {
        include!("../src/core/target.rs");
    }
    pub mod markup {
        include!("../src/core/markup.rs");
    }
    pub mod copy {
        include!("../src/core/copy.rs");
    }
}

use crate::core::config::SiteConfig;
use crate::core::copy::*;
use crate::core::markup::extract_copy_text;
use crate::core::target::{CodeBlock, ResetTimer};
use std::cell::{Cell, RefCell};

#[derive(Clone, Debug, PartialEq)]
struct MockChild {
    class: String,
    label: String,
}

struct MockBlock {
    tag: &'static str,
    markup: Option<&'static str>,
    children: RefCell<Vec<MockChild>>,
}

impl MockBlock {
    fn new(tag: &'static str, markup: Option<&'static str>) -> Self {
        Self {
            tag,
            markup,
            children: RefCell::new(Vec::new()),
        }
    }

    fn buttons(&self) -> usize {
        self.children
            .borrow()
            .iter()
            .filter(|c| c.class == "copy-button")
            .count()
    }
}

impl<'a> CodeBlock for &'a MockBlock {
    type Button = usize;

    fn tag_name(&self) -> String {
        self.tag.to_string()
    }

    fn has_copy_button(&self, class_name: &str) -> bool {
        self.children.borrow().iter().any(|c| c.class == class_name)
    }

    fn source_markup(&self, _config: &SiteConfig) -> Option<String> {
        self.markup.map(str::to_string)
    }

    fn append_copy_button(&self, class_name: &str, label: &str) -> Option<usize> {
        let mut children = self.children.borrow_mut();
        children.push(MockChild {
            class: class_name.to_string(),
            label: label.to_string(),
        });
        Some(children.len() - 1)
    }
}

const CODE: Option<&str> = Some("<span>foo</span>bar");

#[test]
fn only_pre_blocks_get_buttons() {
    let cfg = SiteConfig::default();
    let blocks = vec![
        MockBlock::new("PRE", CODE),
        MockBlock::new("DIV", CODE),
        MockBlock::new("pre", CODE),
        MockBlock::new("CODE", CODE),
        MockBlock::new("PRE", CODE),
    ];
    let injected = inject_copy_buttons(blocks.iter(), &cfg);
    assert_eq!(injected.len(), 3);

    let counts: Vec<usize> = blocks.iter().map(|b| b.buttons()).collect();
    assert_eq!(counts, vec![1, 0, 1, 0, 1]);
    for (block, idx) in injected {
        let children = block.children.borrow();
        let child = &children[idx];
        assert_eq!(child.label, "COPY");
        assert_eq!(child.class, "copy-button");
    }
}

#[test]
fn second_pass_adds_nothing() {
    let cfg = SiteConfig::default();
    let blocks = vec![MockBlock::new("PRE", CODE), MockBlock::new("PRE", CODE)];
    assert_eq!(inject_copy_buttons(blocks.iter(), &cfg).len(), 2);
    assert_eq!(inject_copy_buttons(blocks.iter(), &cfg).len(), 0);
    assert!(blocks.iter().all(|b| b.buttons() == 1));
}

#[test]
fn empty_or_sourceless_blocks_are_skipped() {
    let cfg = SiteConfig::default();
    let blocks = vec![
        MockBlock::new("PRE", None),
        MockBlock::new("PRE", Some("")),
        MockBlock::new("PRE", Some("<span> </span>")),
        MockBlock::new("PRE", CODE),
    ];
    let injected = inject_copy_buttons(blocks.iter(), &cfg);
    assert_eq!(injected.len(), 1);
    assert_eq!(blocks[3].buttons(), 1);
}

#[test]
fn clicked_text_has_tags_stripped() {
    let cfg = SiteConfig::default();
    let block = MockBlock::new("PRE", CODE);
    let markup = (&block).source_markup(&cfg).unwrap();
    assert_eq!(extract_copy_text(&markup).as_deref(), Some("foobar"));
}

#[test]
fn labels_follow_status() {
    let cfg = SiteConfig::default();
    assert_eq!(CopyStatus::Idle.label(&cfg), "COPY");
    assert_eq!(CopyStatus::Copied.label(&cfg), "COPIED");
    assert_eq!(CopyStatus::Failed.label(&cfg), "FAILED");
}

// Minimal single-threaded timer queue standing in for setTimeout/clearTimeout.
#[derive(Default)]
struct FakeTimers {
    now_ms: Cell<i32>,
    next_handle: Cell<i32>,
    pending: RefCell<Vec<(i32, i32)>>, // (handle, due_ms)
    refuse: Cell<bool>,
}

impl ResetTimer for FakeTimers {
    type Handle = i32;

    fn clear(&self, handle: i32) {
        self.pending.borrow_mut().retain(|(h, _)| *h != handle);
    }

    fn schedule(&self, delay_ms: i32) -> Option<i32> {
        if self.refuse.get() {
            return None;
        }
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        self.pending
            .borrow_mut()
            .push((handle, self.now_ms.get() + delay_ms));
        Some(handle)
    }
}

impl FakeTimers {
    fn advance(&self, ms: i32) -> Vec<i32> {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);
        let (due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .take()
            .into_iter()
            .partition(|(_, t)| *t <= now);
        *self.pending.borrow_mut() = rest;
        due.into_iter().map(|(h, _)| h).collect()
    }

    fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}

fn run_due(button: &mut CopyButton<i32>, timers: &FakeTimers, ms: i32) {
    for _ in timers.advance(ms) {
        button.reset();
    }
}

#[test]
fn label_reverts_after_reset_delay() {
    let cfg = SiteConfig::default();
    let timers = FakeTimers::default();
    let mut button = CopyButton::new();
    let mut labels = vec![button.status().label(&cfg)];

    labels.push(button.complete(true, &timers, &cfg).label(&cfg));

    run_due(&mut button, &timers, 1499);
    assert_eq!(button.status(), CopyStatus::Copied);

    run_due(&mut button, &timers, 1);
    labels.push(button.status().label(&cfg));

    assert_eq!(labels, vec!["COPY", "COPIED", "COPY"]);
    assert!(!button.has_pending_reset());
    assert!(timers.pending_len() == 0);
}

#[test]
fn rapid_clicks_keep_a_single_timer() {
    let cfg = SiteConfig::default();
    let timers = FakeTimers::default();
    let mut button = CopyButton::new();

    for _ in 0..5 {
        button.complete(true, &timers, &cfg);
        run_due(&mut button, &timers, 500);
    }
    assert_eq!(timers.pending_len(), 1);
    assert_eq!(button.status(), CopyStatus::Copied);

    // The last click restarts the delay.
    run_due(&mut button, &timers, 999);
    assert_eq!(button.status(), CopyStatus::Copied);
    run_due(&mut button, &timers, 1);
    assert_eq!(button.status(), CopyStatus::Idle);
    assert!(timers.pending_len() == 0);
}

#[test]
fn failed_write_shows_failure_then_reverts() {
    let cfg = SiteConfig::default();
    let timers = FakeTimers::default();
    let mut button = CopyButton::new();

    let status = button.complete(false, &timers, &cfg);
    assert_eq!(status.label(&cfg), "FAILED");

    run_due(&mut button, &timers, cfg.label_reset_ms);
    assert_eq!(button.status().label(&cfg), "COPY");
}

#[test]
fn finish_hands_back_the_pending_handle() {
    let mut button: CopyButton<i32> = CopyButton::new();
    assert_eq!(button.finish(true), None);
    button.arm_reset(7);
    assert!(button.has_pending_reset());
    assert_eq!(button.finish(true), Some(7));
    assert!(!button.has_pending_reset());
}

#[test]
fn unschedulable_reset_leaves_nothing_pending() {
    let cfg = SiteConfig::default();
    let timers = FakeTimers::default();
    let mut button = CopyButton::new();

    button.complete(true, &timers, &cfg);
    timers.refuse.set(true);
    // The earlier timer is still cleared even though no new one is armed.
    assert_eq!(button.complete(true, &timers, &cfg), CopyStatus::Copied);
    assert!(!button.has_pending_reset());
    assert_eq!(timers.pending_len(), 0);
}
