//! End-to-end matching scenarios against the public API, using scripted
//! process trees in place of the OS.

use refpaste::process::{ProcessEnumerator, ProcessRecord};
use refpaste::terminal::{DeliveryError, TargetPattern, TerminalMatcher, TerminalSession};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct ScriptedTree {
    children: HashMap<u32, Vec<ProcessRecord>>,
    calls: Mutex<Vec<u32>>,
}

impl ScriptedTree {
    fn child(mut self, parent: u32, pid: u32, command_line: &str) -> Self {
        self.children.entry(parent).or_default().push(ProcessRecord {
            pid,
            command_line: command_line.to_string(),
        });
        self
    }

    fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessEnumerator for ScriptedTree {
    async fn child_processes(&self, parent_pid: u32) -> Vec<ProcessRecord> {
        self.calls.lock().unwrap().push(parent_pid);
        self.children.get(&parent_pid).cloned().unwrap_or_default()
    }
}

struct FakeTerminal {
    name: &'static str,
    pid: Option<u32>,
    broken: bool,
    typed: Mutex<String>,
    focused: Mutex<bool>,
}

impl FakeTerminal {
    fn new(name: &'static str, pid: Option<u32>) -> Self {
        Self {
            name,
            pid,
            broken: false,
            typed: Mutex::new(String::new()),
            focused: Mutex::new(false),
        }
    }
}

impl TerminalSession for FakeTerminal {
    async fn root_pid(&self) -> Option<u32> {
        self.pid
    }

    async fn send_text(&self, text: &str, execute: bool) -> refpaste::terminal::Result<()> {
        if self.broken {
            return Err(DeliveryError::SessionGone(self.name.to_string()));
        }
        let mut typed = self.typed.lock().unwrap();
        typed.push_str(text);
        if execute {
            typed.push('\n');
        }
        Ok(())
    }

    async fn show(&self) -> refpaste::terminal::Result<()> {
        *self.focused.lock().unwrap() = true;
        Ok(())
    }
}

fn targets(names: &[&str]) -> Vec<TargetPattern> {
    TargetPattern::parse_all(names).unwrap()
}

#[tokio::test]
async fn test_agent_under_shell_is_found_in_first_terminal() {
    let tree = ScriptedTree::default()
        .child(1234, 2000, "bash")
        .child(2000, 2100, "kiro-cli")
        .child(5678, 3000, "kiro-cli");
    let matcher = TerminalMatcher::new(tree);
    let terminals = vec![
        FakeTerminal::new("T1", Some(1234)),
        FakeTerminal::new("T2", Some(5678)),
    ];

    let found = matcher
        .find_matching_terminal(&terminals, &targets(&["kiro-cli"]))
        .await
        .unwrap();

    assert_eq!(found.name, "T1");
    assert!(!matcher.enumerator().calls().contains(&5678));
}

#[tokio::test]
async fn test_full_command_line_is_matched_not_just_name() {
    let tree = ScriptedTree::default()
        .child(10, 11, "node /home/me/.npm/bin/claude --continue")
        .child(20, 21, "node server.js");
    let matcher = TerminalMatcher::new(tree);
    let terminals = vec![
        FakeTerminal::new("web", Some(20)),
        FakeTerminal::new("agent", Some(10)),
    ];

    let found = matcher
        .find_matching_terminal(&terminals, &targets(&["claude"]))
        .await
        .unwrap();
    assert_eq!(found.name, "agent");
}

#[tokio::test]
async fn test_prefix_and_suffix_tokens_do_not_match() {
    let tree = ScriptedTree::default()
        .child(1, 2, "github-copilot --stdio")
        .child(1, 3, "mygit log");
    let matcher = TerminalMatcher::new(tree);
    let terminals = vec![FakeTerminal::new("T", Some(1))];

    assert!(matcher
        .find_matching_terminal(&terminals, &targets(&["git"]))
        .await
        .is_none());
}

#[tokio::test]
async fn test_exhausts_first_branch_before_shallower_sibling() {
    let tree = ScriptedTree::default()
        .child(1, 10, "bash")
        .child(1, 20, "zsh")
        .child(10, 11, "cargo watch")
        .child(11, 12, "rustc")
        .child(11, 13, "rustc")
        .child(20, 21, "kiro-cli chat");
    let matcher = TerminalMatcher::new(tree);
    let terminals = vec![FakeTerminal::new("T", Some(1))];

    assert!(matcher
        .find_matching_terminal(&terminals, &targets(&["kiro-cli"]))
        .await
        .is_some());
    // Root, then all of bash's bounded subtree, only then zsh
    assert_eq!(matcher.enumerator().calls(), vec![1, 10, 11, 20]);
}

#[tokio::test]
async fn test_pidless_terminals_are_never_enumerated() {
    let matcher = TerminalMatcher::new(ScriptedTree::default());
    let terminals = vec![FakeTerminal::new("a", None), FakeTerminal::new("b", None)];

    assert!(matcher
        .find_matching_terminal(&terminals, &targets(&["kiro-cli"]))
        .await
        .is_none());
    assert!(matcher.enumerator().calls().is_empty());
}

#[tokio::test]
async fn test_find_then_deliver() {
    let tree = ScriptedTree::default().child(1234, 2000, "kiro-cli");
    let matcher = TerminalMatcher::new(tree);
    let terminals = vec![FakeTerminal::new("T1", Some(1234))];

    let terminal = matcher
        .find_matching_terminal(&terminals, &targets(&["kiro-cli"]))
        .await
        .unwrap();
    assert!(matcher.deliver(terminal, "src/lib.rs:10-20 ").await);

    assert_eq!(*terminal.typed.lock().unwrap(), "src/lib.rs:10-20 ");
    assert!(*terminal.focused.lock().unwrap());
}

#[tokio::test]
async fn test_deliver_to_broken_terminal_reports_false() {
    let matcher = TerminalMatcher::new(ScriptedTree::default());
    let terminal = FakeTerminal {
        broken: true,
        ..FakeTerminal::new("gone", Some(1))
    };

    assert!(!matcher.deliver(&terminal, "text").await);
    assert!(!*terminal.focused.lock().unwrap());
}
