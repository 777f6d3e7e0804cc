//! Static hero scene description
//!
//! The pipeline nodes, the two collaborator cursors, and the single
//! parameter set the animations are tuned with. Anchors are in the hero
//! panel's local coordinate space.

/// A labeled pipeline stage with a fixed anchor and an expandable detail
/// list. Only `highlighted` state changes at runtime, and that lives in the
/// DOM, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSpec {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name resolved by the markup.
    pub icon: &'static str,
    pub x: f64,
    pub y: f64,
    pub details: [&'static str; 4],
}

/// A simulated collaborator position marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

pub const NODES: [NodeSpec; 3] = [
    NodeSpec {
        id: "data",
        label: "Data Sources",
        icon: "database",
        x: 150.0,
        y: 120.0,
        details: [
            "Vector Database",
            "Document Store",
            "Knowledge Graph",
            "Real-time Streams",
        ],
    },
    NodeSpec {
        id: "rag",
        label: "RAG Pipeline",
        icon: "zap",
        x: 400.0,
        y: 80.0,
        details: [
            "Retrieval System",
            "Context Ranking",
            "Query Processing",
            "Embedding Search",
        ],
    },
    NodeSpec {
        id: "inference",
        label: "AI Inference",
        icon: "brain",
        x: 650.0,
        y: 120.0,
        details: [
            "Language Model",
            "Response Generation",
            "Quality Scoring",
            "Output Validation",
        ],
    },
];

pub const CURSORS: [CursorSpec; 2] = [
    CursorSpec {
        id: "alex",
        name: "Alex",
        color: "#FF6B6B",
    },
    CursorSpec {
        id: "sarah",
        name: "Sarah",
        color: "#4ECDC4",
    },
];

/// Where each cursor rests before the choreography's first tick.
pub const CURSOR_STARTS: [(f64, f64); 2] = [(200.0, 150.0), (600.0, 150.0)];

/// Tuning for the whole hero animation. One parameterized set; the shipped
/// values are `Default`.
#[derive(Debug, Clone, Copy)]
pub struct HeroParams {
    /// Outer choreography period: lead-cursor move + node highlight.
    pub outer_period_ms: f64,
    /// Offset of the trailing cursor's move inside each outer period.
    pub inner_delay_ms: f64,
    /// How long a node stays highlighted after the lead cursor arrives.
    pub highlight_ms: f64,
    /// Per-axis jitter amplitude applied to every cursor target.
    pub jitter: f64,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    /// Alpha of the full-surface fade overlay painted each trail frame.
    pub fade_alpha: f64,
}

impl Default for HeroParams {
    fn default() -> Self {
        Self {
            outer_period_ms: 3000.0,
            inner_delay_ms: 1000.0,
            highlight_ms: 1500.0,
            jitter: 20.0,
            spring_stiffness: 200.0,
            spring_damping: 25.0,
            fade_alpha: 0.05,
        }
    }
}

/// Target list for the lead cursor: the node anchors in pipeline order.
pub fn lead_targets() -> [(f64, f64); 3] {
    [
        (NODES[0].x, NODES[0].y),
        (NODES[1].x, NODES[1].y),
        (NODES[2].x, NODES[2].y),
    ]
}

/// Target list for the trailing cursor: the same anchors, phase-shifted so
/// the two markers never chase the same node.
pub fn trail_targets() -> [(f64, f64); 3] {
    [
        (NODES[2].x, NODES[2].y),
        (NODES[0].x, NODES[0].y),
        (NODES[1].x, NODES[1].y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_lists_are_offset_rotations() {
        let lead = lead_targets();
        let trail = trail_targets();
        assert_eq!(trail[0], lead[2]);
        assert_eq!(trail[1], lead[0]);
        assert_eq!(trail[2], lead[1]);
    }

    #[test]
    fn test_node_ids_unique() {
        assert_ne!(NODES[0].id, NODES[1].id);
        assert_ne!(NODES[1].id, NODES[2].id);
        assert_ne!(NODES[0].id, NODES[2].id);
    }
}
