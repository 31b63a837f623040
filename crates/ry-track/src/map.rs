//! In-memory track map and its builder.
//!
//! # Data layout
//!
//! Node→segment adjacency uses **Compressed Sparse Row (CSR)** format.  Given
//! a `NodeId n`, its connected segments occupy the slice:
//!
//! ```text
//! node_segs[ node_seg_start[n] .. node_seg_start[n+1] ]
//! ```
//!
//! Segment arrays (`seg_a`, `seg_b`, `seg_len_m`) are indexed by `SegmentId`.
//! Switch state lives in a side table keyed by `NodeId` — most nodes are
//! plain joints and carry no per-node state at all.

use rustc_hash::FxHashMap;

use ry_core::{NodeId, RailError, RailResult, SegmentId};

use crate::error::{TrackError, TrackResult};
use crate::graph::{SwitchDecode, TrackGraph};
use crate::location::SegmentEnd;

/// Fouling distance assumed for switches the builder was not told about.
const DEFAULT_FOULING_M: f32 = 6.0;

// ── Switch side table ─────────────────────────────────────────────────────────

#[derive(Debug)]
struct SwitchState {
    decode: SwitchDecode,
    thrown: bool,
    locked: bool,
    fouling_m: f32,
}

// ── TrackMap ──────────────────────────────────────────────────────────────────

/// Immutable topology plus mutable switch state.
///
/// Do not construct directly; use [`TrackMapBuilder`].
pub struct TrackMap {
    /// CSR row pointer.  Segments of node `n` are at
    /// `node_segs[node_seg_start[n] .. node_seg_start[n+1]]`.
    node_seg_start: Vec<u32>,
    node_segs: Vec<SegmentId>,

    seg_a: Vec<NodeId>,
    seg_b: Vec<NodeId>,
    seg_len_m: Vec<f32>,

    switches: FxHashMap<NodeId, SwitchState>,
}

impl TrackMap {
    pub fn node_count(&self) -> usize {
        self.node_seg_start.len() - 1
    }

    pub fn segment_count(&self) -> usize {
        self.seg_len_m.len()
    }

    fn check_segment(&self, seg: SegmentId) -> RailResult<()> {
        if seg.index() < self.seg_len_m.len() {
            Ok(())
        } else {
            Err(RailError::SegmentNotFound(seg))
        }
    }
}

impl TrackGraph for TrackMap {
    fn segment_length(&self, seg: SegmentId) -> RailResult<f32> {
        self.check_segment(seg)?;
        Ok(self.seg_len_m[seg.index()])
    }

    fn node_at(&self, seg: SegmentId, end: SegmentEnd) -> RailResult<NodeId> {
        self.check_segment(seg)?;
        Ok(match end {
            SegmentEnd::A => self.seg_a[seg.index()],
            SegmentEnd::B => self.seg_b[seg.index()],
        })
    }

    fn segments_at(&self, node: NodeId) -> &[SegmentId] {
        if node.index() + 1 >= self.node_seg_start.len() {
            return &[];
        }
        let start = self.node_seg_start[node.index()] as usize;
        let end = self.node_seg_start[node.index() + 1] as usize;
        &self.node_segs[start..end]
    }

    fn is_switch(&self, node: NodeId) -> bool {
        self.switches.contains_key(&node)
    }

    fn decode_switch(&self, node: NodeId) -> RailResult<SwitchDecode> {
        self.switches
            .get(&node)
            .map(|s| s.decode)
            .ok_or(RailError::NotASwitch(node))
    }

    fn is_thrown(&self, node: NodeId) -> RailResult<bool> {
        self.switches
            .get(&node)
            .map(|s| s.thrown)
            .ok_or(RailError::NotASwitch(node))
    }

    fn set_thrown(&mut self, node: NodeId, thrown: bool) -> RailResult<()> {
        let state = self
            .switches
            .get_mut(&node)
            .ok_or(RailError::NotASwitch(node))?;
        state.thrown = thrown;
        Ok(())
    }

    fn is_locked(&self, node: NodeId) -> bool {
        self.switches.get(&node).is_some_and(|s| s.locked)
    }

    fn fouling_distance(&self, node: NodeId) -> f32 {
        self.switches
            .get(&node)
            .map_or(DEFAULT_FOULING_M, |s| s.fouling_m)
    }
}

impl TrackMap {
    /// Lock or unlock a switch's external interlock.
    ///
    /// Not part of [`TrackGraph`] — only the interlocking side of the host
    /// flips this, never the scheduler.
    pub fn set_locked(&mut self, node: NodeId, locked: bool) -> RailResult<()> {
        let state = self
            .switches
            .get_mut(&node)
            .ok_or(RailError::NotASwitch(node))?;
        state.locked = locked;
        Ok(())
    }
}

// ── TrackMapBuilder ───────────────────────────────────────────────────────────

/// Construct a [`TrackMap`] incrementally, then call [`build`](Self::build).
///
/// Nodes and segments may be added in any order; switches are declared after
/// their three legs exist.  `build()` sorts segments into the CSR adjacency
/// and validates every switch declaration.
///
/// # Example
///
/// ```
/// use ry_track::{TrackGraph, TrackMapBuilder};
///
/// let mut b = TrackMapBuilder::new();
/// let n0 = b.add_node();
/// let n1 = b.add_node();
/// let s = b.add_segment(n0, n1, 50.0);
/// let map = b.build().unwrap();
/// assert_eq!(map.segment_length(s).unwrap(), 50.0);
/// assert!(map.is_dead_end(n1));
/// ```
pub struct TrackMapBuilder {
    node_count: usize,
    raw_segments: Vec<RawSegment>,
    switches: FxHashMap<NodeId, SwitchState>,
}

struct RawSegment {
    a: NodeId,
    b: NodeId,
    length_m: f32,
}

impl TrackMapBuilder {
    pub fn new() -> Self {
        Self {
            node_count: 0,
            raw_segments: Vec::new(),
            switches: FxHashMap::default(),
        }
    }

    /// Add a track node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// Add a segment of `length_m` metres between two nodes.
    pub fn add_segment(&mut self, a: NodeId, b: NodeId, length_m: f32) -> SegmentId {
        let id = SegmentId(self.raw_segments.len() as u32);
        self.raw_segments.push(RawSegment { a, b, length_m });
        id
    }

    /// Declare `node` to be a switch with the given entrance and exits.
    ///
    /// The throw state starts at normal (not thrown) and unlocked.
    pub fn make_switch(
        &mut self,
        node: NodeId,
        enter: SegmentId,
        normal: SegmentId,
        reverse: SegmentId,
    ) {
        self.switches.insert(
            node,
            SwitchState {
                decode: SwitchDecode { enter, normal, reverse },
                thrown: false,
                locked: false,
                fouling_m: DEFAULT_FOULING_M,
            },
        );
    }

    /// Mark a declared switch as locked by an external interlock.
    pub fn lock_switch(&mut self, node: NodeId) {
        if let Some(s) = self.switches.get_mut(&node) {
            s.locked = true;
        }
    }

    /// Override the fouling distance of a declared switch.
    pub fn set_fouling_distance(&mut self, node: NodeId, fouling_m: f32) {
        if let Some(s) = self.switches.get_mut(&node) {
            s.fouling_m = fouling_m;
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn segment_count(&self) -> usize {
        self.raw_segments.len()
    }

    /// Consume the builder and produce a validated [`TrackMap`].
    ///
    /// Fails if a segment references an unknown node, or if a switch's three
    /// legs are not exactly the segments connected to its node.
    pub fn build(self) -> TrackResult<TrackMap> {
        let node_count = self.node_count;

        for (i, seg) in self.raw_segments.iter().enumerate() {
            if seg.a.index() >= node_count {
                return Err(TrackError::Rail(RailError::NodeNotFound(seg.a)));
            }
            if seg.b.index() >= node_count {
                return Err(TrackError::Rail(RailError::NodeNotFound(seg.b)));
            }
            debug_assert!(seg.length_m > 0.0, "segment {i} has non-positive length");
        }

        // CSR: count, prefix-sum, fill.
        let mut node_seg_start = vec![0u32; node_count + 1];
        for seg in &self.raw_segments {
            node_seg_start[seg.a.index() + 1] += 1;
            node_seg_start[seg.b.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_seg_start[i] += node_seg_start[i - 1];
        }
        let mut cursor: Vec<u32> = node_seg_start[..node_count].to_vec();
        let mut node_segs = vec![SegmentId::INVALID; node_seg_start[node_count] as usize];
        for (i, seg) in self.raw_segments.iter().enumerate() {
            for node in [seg.a, seg.b] {
                node_segs[cursor[node.index()] as usize] = SegmentId(i as u32);
                cursor[node.index()] += 1;
            }
        }

        let map = TrackMap {
            node_seg_start,
            node_segs,
            seg_a: self.raw_segments.iter().map(|s| s.a).collect(),
            seg_b: self.raw_segments.iter().map(|s| s.b).collect(),
            seg_len_m: self.raw_segments.iter().map(|s| s.length_m).collect(),
            switches: self.switches,
        };

        // Validate switch declarations against the adjacency.
        for (&node, state) in &map.switches {
            let legs = map.segments_at(node);
            if legs.len() != 3 {
                return Err(TrackError::MalformedSwitch {
                    node,
                    segments: legs.len(),
                });
            }
            for leg in [state.decode.enter, state.decode.normal, state.decode.reverse] {
                if !legs.contains(&leg) {
                    return Err(TrackError::DisconnectedSwitchLeg { node, seg: leg });
                }
            }
        }

        Ok(map)
    }
}

impl Default for TrackMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
