// Shared helpers for the integration tests.

#![allow(dead_code)]

use kdbx_core::document::Node;
use kdbx_core::keys::{CompositeKey, PasswordKey};

/// Route library `tracing` output through the test harness (`RUST_LOG=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn password(pw: &str) -> CompositeKey {
    CompositeKey::new().with(PasswordKey::new(pw))
}

/// Small database-shaped tree with a `Meta` node and two protected values.
pub fn sample_document() -> Node {
    Node::new("KeePassFile")
        .with_child(
            Node::new("Meta")
                .with_child(Node::new("Generator").with_text("kdbx-core"))
                .with_child(Node::new("DatabaseName").with_text("Personal")),
        )
        .with_child(
            Node::new("Root").with_child(
                Node::new("Group")
                    .with_child(Node::new("Name").with_text("General"))
                    .with_child(
                        Node::new("Entry")
                            .with_attribute("UUID", "3q2+7w==")
                            .with_child(Node::new("Title").with_text("mail"))
                            .with_child(Node::new("Password").with_protected("hunter2"))
                            .with_child(Node::new("Notes").with_protected("pin: 1234 ✓")),
                    ),
            ),
        )
}
