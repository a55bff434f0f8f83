// ## File: `src/document/pack.rs`

//! document/pack.rs
//! Pack/unpack between `Node` and `PackedNode`.
//!
//! Design notes:
//! - Both walks are pre-order (node text before children, children in order),
//!   so writer and reader consume the inner keystream at identical offsets.
//! - Plain values and structure are copied byte for byte.
//! - `Meta/HeaderHash` is owned by the container: it is dropped from the tree
//!   before packing and written into the packed form afterwards.

use std::borrow::Cow;

use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::protected::ProtectedBuffer;
use crate::crypto::salsa20::Salsa20;
use crate::document::types::{DocumentError, Node, PackedNode, Text};
use crate::utils::{from_base64, to_base64};

pub const META_NODE: &str = "Meta";
pub const HEADER_HASH_NODE: &str = "HeaderHash";

/// Pack a tree, ciphering protected values with `stream`.
pub fn pack(node: &Node, stream: &mut Salsa20) -> PackedNode {
    let (text, protected) = match &node.text {
        None => (None, false),
        Some(Text::Plain(s)) => (Some(s.clone()), false),
        Some(Text::Protected(buf)) => {
            let mut bytes = buf.reveal();
            stream.apply_keystream(&mut bytes);
            (Some(to_base64(&bytes)), true)
        }
    };

    PackedNode {
        name: node.name.clone(),
        attributes: node.attributes.clone(),
        text,
        protected,
        children: node.children.iter().map(|c| pack(c, stream)).collect(),
    }
}

/// Inverse of [`pack`]; must see the same stream state the packer started with.
pub fn unpack(node: PackedNode, stream: &mut Salsa20) -> Result<Node, DocumentError> {
    let text = match (node.text, node.protected) {
        (None, false) => None,
        (None, true) => return Err(DocumentError::ProtectedWithoutText { node: node.name }),
        (Some(s), false) => Some(Text::Plain(s)),
        (Some(s), true) => {
            let mut bytes = Zeroizing::new(
                from_base64(&s).map_err(|_| DocumentError::ProtectedEncoding {
                    node: node.name.clone(),
                })?,
            );
            stream.apply_keystream(&mut bytes);
            Some(Text::Protected(ProtectedBuffer::new(&bytes)))
        }
    };

    let children = node
        .children
        .into_iter()
        .map(|c| unpack(c, stream))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Node { name: node.name, attributes: node.attributes, text, children })
}

/// `root` without any `Meta/HeaderHash`; borrowed when there is none to drop.
pub fn without_header_hash(root: &Node) -> Cow<'_, Node> {
    let has_hash = root
        .child(META_NODE)
        .is_some_and(|meta| meta.child(HEADER_HASH_NODE).is_some());
    if !has_hash {
        return Cow::Borrowed(root);
    }

    debug!("dropping caller-supplied Meta/HeaderHash before packing");
    let mut owned = root.clone();
    if let Some(meta) = owned.child_mut(META_NODE) {
        meta.children.retain(|c| c.name != HEADER_HASH_NODE);
    }
    Cow::Owned(owned)
}

/// Store `hash_b64` under `Meta/HeaderHash`. No-op (returns false) without a `Meta` child.
pub fn set_header_hash(root: &mut PackedNode, hash_b64: &str) -> bool {
    let Some(meta) = root.child_mut(META_NODE) else {
        debug!("document has no Meta node; header hash not embedded");
        return false;
    };
    match meta.child_mut(HEADER_HASH_NODE) {
        Some(h) => {
            h.text = Some(hash_b64.to_owned());
            h.protected = false;
        }
        None => meta.children.push(PackedNode {
            name: HEADER_HASH_NODE.to_owned(),
            text: Some(hash_b64.to_owned()),
            ..PackedNode::default()
        }),
    }
    true
}

/// Remove `Meta/HeaderHash` and return its text, if any.
pub fn take_header_hash(root: &mut PackedNode) -> Option<String> {
    let meta = root.child_mut(META_NODE)?;
    let pos = meta.children.iter().position(|c| c.name == HEADER_HASH_NODE)?;
    meta.children.remove(pos).text
}
