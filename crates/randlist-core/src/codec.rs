//! Line codec: position-based encoding of a [`RandList`] and its inverse.
//!
//! Node identity (an arena handle) cannot be persisted, so the encoder maps
//! each node to its position along the chain and writes auxiliary links as
//! positions. The format is newline-delimited, in fixed order:
//!
//! 1. one payload line per node, in chain order;
//! 2. the sentinel line `-1`;
//! 3. one reference line per node, in the same order: a position, or `-1`
//!    for an absent link.
//!
//! A payload that is itself the literal `-1` is misread as the sentinel -
//! a format limitation, not handled specially.
//!
//! The decoder only honors a reference whose target position is strictly
//! below the referencing node's own position; forward and self references
//! are silently dropped. The encoder records them faithfully, so the first
//! round trip can lose links and every later round trip is stable. This
//! asymmetry is kept for compatibility with existing encodings.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::CodecError;
use crate::list::RandList;
use crate::node::NodeId;

/// Boundary between the payload and reference sections.
const SENTINEL: &str = "-1";

/// Encode a list into the line format.
///
/// Two walks over the chain: the first assigns positions and writes the
/// payload section, the second resolves auxiliary links through the
/// transient position table and writes the reference section. An empty list
/// encodes to exactly one sentinel line.
pub fn encode<W: Write>(list: &RandList, sink: &mut W) -> Result<(), CodecError> {
    let mut positions: HashMap<NodeId, usize> = HashMap::with_capacity(list.len());
    for (position, id) in list.node_ids().enumerate() {
        positions.insert(id, position);
        writeln!(sink, "{}", list.node(id).payload)?;
    }

    writeln!(sink, "{SENTINEL}")?;

    for id in list.node_ids() {
        match list.node(id).rand.and_then(|target| positions.get(&target)) {
            Some(position) => writeln!(sink, "{position}")?,
            None => writeln!(sink, "{SENTINEL}")?,
        }
    }
    Ok(())
}

/// Decode the line format into a newly built list.
///
/// Payload lines are appended until the sentinel or end of input, building
/// the chain and the transient position table. Reference lines are then
/// consumed in lockstep with a walk over the new chain; lines past the end
/// of the chain are ignored. The decoded count is the number of payload
/// lines consumed.
pub fn decode<R: BufRead>(source: R) -> Result<RandList, CodecError> {
    let mut lines = source.lines();

    let mut list = RandList::new();
    let mut by_position: Vec<NodeId> = Vec::new();
    for line in lines.by_ref() {
        let line = line?;
        if line == SENTINEL {
            break;
        }
        by_position.push(list.push_back(line));
    }

    let mut cursor = list.head();
    let mut position = 0usize;
    for line in lines {
        let Some(id) = cursor else { break };
        let line = line?;
        if let Some(target) = parse_reference(&line, position)? {
            // Only backward references resolve; the target node is already
            // known to the position table.
            if target < position {
                list.link_rand(id, by_position[target]);
            }
        }
        cursor = list.next(id);
        position += 1;
    }

    Ok(list)
}

/// Parse one reference line into an optional target position.
///
/// Any negative integer means "no reference"; a non-integer line is a
/// malformed encoding.
fn parse_reference(line: &str, position: usize) -> Result<Option<usize>, CodecError> {
    match line.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(Some(value as usize)),
        Ok(_) => Ok(None),
        Err(_) => Err(CodecError::MalformedReference {
            position,
            content: line.to_string(),
        }),
    }
}
